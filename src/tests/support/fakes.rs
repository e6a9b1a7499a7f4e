//! In-memory collaborators shared by service tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};
use crate::media::application::ports::outgoing::media_uploader::{
    MediaFolder, MediaUploader, UploadError, UploadFile, UploadedMedia,
};

/// Hashes by prefixing, so tests can assert on stored values.
pub struct FakeHasher;

#[async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

pub struct FailingHasher;

#[async_trait]
impl PasswordHasher for FailingHasher {
    async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
        Err(HashError::HashFailed)
    }

    async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
        Err(HashError::VerifyFailed)
    }
}

pub fn fake_hasher() -> Arc<dyn PasswordHasher + Send + Sync> {
    Arc::new(FakeHasher)
}

/// Records every upload; fails for the folders listed in `failing`.
#[derive(Default)]
pub struct FakeUploader {
    failing: Vec<MediaFolder>,
    uploads: Mutex<Vec<MediaFolder>>,
}

impl FakeUploader {
    pub fn failing_for(folder: MediaFolder) -> Self {
        Self {
            failing: vec![folder],
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn uploads(&self) -> Vec<MediaFolder> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaUploader for FakeUploader {
    async fn upload(
        &self,
        file: UploadFile,
        folder: MediaFolder,
    ) -> Result<UploadedMedia, UploadError> {
        self.uploads.lock().unwrap().push(folder);

        if self.failing.contains(&folder) {
            return Err(UploadError::Transport("connection reset".to_string()));
        }

        let name = file.file_name.unwrap_or_else(|| "file".to_string());
        Ok(UploadedMedia {
            secure_url: format!("https://cdn.test/{}/{}", folder.as_str(), name),
            public_id: format!("{}/{}", folder.as_str(), name),
        })
    }
}

pub fn upload_file(name: &str) -> UploadFile {
    UploadFile::new(
        Some(name.to_string()),
        Some("image/png".to_string()),
        vec![0x89, 0x50, 0x4e, 0x47],
    )
}
