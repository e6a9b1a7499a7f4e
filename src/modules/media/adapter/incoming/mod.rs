pub mod multipart_fields;

pub use multipart_fields::{text_field, upload_field};
