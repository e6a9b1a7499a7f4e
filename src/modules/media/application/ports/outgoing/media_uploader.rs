use async_trait::async_trait;
use std::fmt;

//
// ──────────────────────────────────────────────────────────
// Input / output
// ──────────────────────────────────────────────────────────
//

/// A file received from a multipart form, held in memory.
#[derive(Clone)]
pub struct UploadFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: Option<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

// Bytes are elided from logs
impl fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFolder {
    LawyerIdProof,
    LawyerPhoto,
    ComplaintFiles,
}

impl MediaFolder {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaFolder::LawyerIdProof => "lawyers/id_proof",
            MediaFolder::LawyerPhoto => "lawyers/photo",
            MediaFolder::ComplaintFiles => "complaints",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    pub secure_url: String,
    pub public_id: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("File is empty")]
    EmptyFile,

    #[error("File is too large: {size} bytes (limit {limit})")]
    TooLarge { size: usize, limit: usize },

    #[error("Media storage is not configured: {0}")]
    Configuration(String),

    #[error("Media storage unreachable: {0}")]
    Transport(String),

    #[error("Media storage rejected the upload: {0}")]
    Rejected(String),

    #[error("Unexpected media storage response: {0}")]
    InvalidResponse(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Stores the file and returns its durable https URL.
    async fn upload(
        &self,
        file: UploadFile,
        folder: MediaFolder,
    ) -> Result<UploadedMedia, UploadError>;
}
