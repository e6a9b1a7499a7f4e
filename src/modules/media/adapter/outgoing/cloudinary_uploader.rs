use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::media::application::ports::outgoing::media_uploader::{
    MediaFolder, MediaUploader, UploadError, UploadFile, UploadedMedia,
};

/// Upper bound for a single uploaded file.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl CloudinaryConfig {
    /// Reads `CLOUDINARY_CLOUD_NAME`, `CLOUDINARY_API_KEY` and `CLOUDINARY_API_SECRET`.
    pub fn from_env() -> Result<Self, UploadError> {
        fn required(key: &str) -> Result<String, UploadError> {
            std::env::var(key)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| UploadError::Configuration(format!("{key} is not set")))
        }

        Ok(Self {
            cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
            api_key: required("CLOUDINARY_API_KEY")?,
            api_secret: required("CLOUDINARY_API_SECRET")?,
        })
    }
}

/// Cloudinary signature: sorted `key=value` pairs joined by `&`, secret appended, sha256 hex.
fn sign_params(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let digest = Sha256::digest(format!("{to_sign}{api_secret}").as_bytes());
    format!("{:x}", digest)
}

/// Everything the HTTP client needs to post one signed upload.
#[derive(Debug, Clone)]
struct SignedUploadRequest {
    cloud_name: String,
    api_key: String,
    folder: String,
    public_id: String,
    timestamp: i64,
    signature: String,
    file: UploadFile,
}

#[derive(Deserialize)]
struct UploadSuccessBody {
    secure_url: String,
    public_id: String,
}

#[derive(Deserialize)]
struct UploadErrorBody {
    error: UploadErrorDetail,
}

#[derive(Deserialize)]
struct UploadErrorDetail {
    message: String,
}

fn map_response(status: u16, body: &str) -> Result<UploadedMedia, UploadError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<UploadErrorBody>(body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| format!("HTTP {status}"));
        return Err(UploadError::Rejected(message));
    }

    let parsed: UploadSuccessBody =
        serde_json::from_str(body).map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

    if !parsed.secure_url.starts_with("https://") {
        return Err(UploadError::InvalidResponse(format!(
            "insecure url returned: {}",
            parsed.secure_url
        )));
    }

    Ok(UploadedMedia {
        secure_url: parsed.secure_url,
        public_id: parsed.public_id,
    })
}

/// Internal seam so the adapter can be tested without the network.
#[async_trait]
trait CloudinaryClient: Send + Sync {
    /// Returns the HTTP status and raw body.
    async fn send_upload(&self, request: SignedUploadRequest) -> Result<(u16, String), String>;
}

struct RealCloudinaryClient {
    http: reqwest::Client,
}

impl RealCloudinaryClient {
    fn new() -> Result<Self, String> {
        let http = reqwest::Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self { http })
    }
}

#[async_trait]
impl CloudinaryClient for RealCloudinaryClient {
    async fn send_upload(&self, request: SignedUploadRequest) -> Result<(u16, String), String> {
        use reqwest::multipart::{Form, Part};

        let url = format!(
            "https://api.cloudinary.com/v1_1/{}/auto/upload",
            request.cloud_name
        );

        let file_name = request
            .file
            .file_name
            .clone()
            .unwrap_or_else(|| request.public_id.clone());

        let mut part = Part::bytes(request.file.bytes).file_name(file_name);
        if let Some(content_type) = request.file.content_type.as_deref() {
            part = part.mime_str(content_type).map_err(|e| e.to_string())?;
        }

        let form = Form::new()
            .part("file", part)
            .text("api_key", request.api_key)
            .text("timestamp", request.timestamp.to_string())
            .text("folder", request.folder)
            .text("public_id", request.public_id)
            .text("signature", request.signature)
            .text("signature_algorithm", "sha256");

        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.to_string())?;

        Ok((status, body))
    }
}

#[cfg(test)]
struct ArcCloudinaryClient(Arc<dyn CloudinaryClient>);

#[cfg(test)]
#[async_trait]
impl CloudinaryClient for ArcCloudinaryClient {
    async fn send_upload(&self, request: SignedUploadRequest) -> Result<(u16, String), String> {
        self.0.send_upload(request).await
    }
}

/// Production adapter for the `MediaUploader` port.
#[derive(Clone)]
pub struct CloudinaryUploader {
    config: Option<CloudinaryConfig>,
    client: Arc<OnceCell<Box<dyn CloudinaryClient>>>,
    max_upload_bytes: usize,
}

impl CloudinaryUploader {
    pub fn new(config: CloudinaryConfig, max_upload_bytes: usize) -> Self {
        Self {
            config: Some(config),
            client: Arc::new(OnceCell::new()),
            max_upload_bytes,
        }
    }

    /// Missing credentials do not stop the server; each upload then fails with
    /// `UploadError::Configuration`.
    pub fn from_env() -> Self {
        let max_upload_bytes = std::env::var("MEDIA_MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        let config = match CloudinaryConfig::from_env() {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(error = %e, "Cloudinary is not configured; uploads will fail");
                None
            }
        };

        Self {
            config,
            client: Arc::new(OnceCell::new()),
            max_upload_bytes,
        }
    }

    async fn get_client(&self) -> Result<&dyn CloudinaryClient, UploadError> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealCloudinaryClient::new().map_err(UploadError::Transport)?;
                Ok::<_, UploadError>(Box::new(real_client) as Box<dyn CloudinaryClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_client(
        config: Option<CloudinaryConfig>,
        client: Arc<dyn CloudinaryClient>,
        max_upload_bytes: usize,
    ) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcCloudinaryClient(client)) as Box<dyn CloudinaryClient>);

        Self {
            config,
            client: Arc::new(once),
            max_upload_bytes,
        }
    }
}

#[async_trait]
impl MediaUploader for CloudinaryUploader {
    async fn upload(
        &self,
        file: UploadFile,
        folder: MediaFolder,
    ) -> Result<UploadedMedia, UploadError> {
        if file.is_empty() {
            return Err(UploadError::EmptyFile);
        }

        if file.len() > self.max_upload_bytes {
            return Err(UploadError::TooLarge {
                size: file.len(),
                limit: self.max_upload_bytes,
            });
        }

        let config = self.config.as_ref().ok_or_else(|| {
            UploadError::Configuration("Cloudinary credentials are not set".to_string())
        })?;

        let timestamp = Utc::now().timestamp();
        let public_id = Uuid::new_v4().to_string();
        let folder_name = folder.as_str().to_string();

        let signature = sign_params(
            &[
                ("folder", folder_name.clone()),
                ("public_id", public_id.clone()),
                ("timestamp", timestamp.to_string()),
            ],
            &config.api_secret,
        );

        let request = SignedUploadRequest {
            cloud_name: config.cloud_name.clone(),
            api_key: config.api_key.clone(),
            folder: folder_name,
            public_id,
            timestamp,
            signature,
            file,
        };

        let client = self.get_client().await?;
        let (status, body) = client
            .send_upload(request)
            .await
            .map_err(UploadError::Transport)?;

        let uploaded = map_response(status, &body)?;
        tracing::debug!(folder = folder.as_str(), public_id = %uploaded.public_id, "Media uploaded");

        Ok(uploaded)
    }
}
