pub mod lawyers;
