pub mod media_uploader;

pub use media_uploader::{MediaFolder, MediaUploader, UploadError, UploadFile, UploadedMedia};
