pub mod complaint_repository;

pub use complaint_repository::{
    ComplaintRepository, ComplaintRepositoryError, ComplaintResult, ComplaintWithLawyer,
    CreateComplaintData, PatchComplaintData,
};
