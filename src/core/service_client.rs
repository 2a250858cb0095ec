// src/core/service_client.rs
//! HTTP client for the salary analysis API

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tracing::{debug, error, info};

use crate::core::config_manager::ServiceConfig;
use crate::types::{
    BenchmarkDetails, JobAnalysis, MessageRequest, MessageResponse, SalaryRange, SessionResponse,
    UploadResponse,
};
use crate::utils::upload_content_type;

const UPLOAD_ENDPOINT: &str = "/api/jobs/upload";
const JOBS_ENDPOINT: &str = "/api/jobs";
const CALCULATE_ENDPOINT: &str = "/api/analysis/calculate";
const BENCHMARK_DETAILS_ENDPOINT: &str = "/api/benchmarks/details";
const CHAT_SESSION_ENDPOINT: &str = "/api/chat/session";
const CHAT_MESSAGE_ENDPOINT: &str = "/api/chat/message";

/// A job description picked for upload
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow::anyhow!("Invalid file name: {}", path.display()))?
            .to_string();

        Ok(Self { file_name, bytes })
    }
}

/// The backend operations the chat widget and dashboard depend on
#[async_trait]
pub trait SalaryApi: Send + Sync {
    async fn upload_job(&self, file: UploadFile) -> Result<UploadResponse>;
    async fn get_job(&self, job_id: &str) -> Result<JobAnalysis>;
    async fn calculate_salary(&self, job_id: &str) -> Result<SalaryRange>;
    async fn benchmark_details(&self, job_id: &str) -> Result<BenchmarkDetails>;
    async fn create_session(&self, job_id: &str) -> Result<SessionResponse>;
    async fn send_message(&self, session_id: &str, content: &str) -> Result<MessageResponse>;
}

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Generic GET request
    pub async fn get<R>(&self, endpoint: &str) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        Self::parse_response(response, &url).await
    }

    /// Generic POST request; `payload` of `None` sends an empty body
    pub async fn post<T, R>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        payload: Option<&T>,
    ) -> Result<R>
    where
        T: serde::Serialize + ?Sized,
        R: serde::de::DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("POST {}", url);

        let mut request = self.client.post(&url).query(query);
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        Self::parse_response(response, &url).await
    }

    async fn parse_response<R>(response: reqwest::Response, url: &str) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            response
                .json::<R>()
                .await
                .with_context(|| format!("Failed to parse JSON response from {}", url))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Salary API error {} from {}: {}", status, url, error_text);
            anyhow::bail!("HTTP {} error: {}", status, error_text)
        }
    }
}

#[async_trait]
impl SalaryApi for ServiceClient {
    async fn upload_job(&self, file: UploadFile) -> Result<UploadResponse> {
        let url = self.url(UPLOAD_ENDPOINT);
        let content_type = upload_content_type(&file.file_name);

        let form = Form::new().part(
            "file",
            Part::bytes(file.bytes)
                .file_name(file.file_name.clone())
                .mime_str(content_type)
                .context("Failed to create multipart")?,
        );

        info!("Uploading job description {} to {}", file.file_name, url);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("HTTP request failed")?;

        Self::parse_response(response, &url).await
    }

    async fn get_job(&self, job_id: &str) -> Result<JobAnalysis> {
        self.get(&format!("{}/{}", JOBS_ENDPOINT, job_id)).await
    }

    async fn calculate_salary(&self, job_id: &str) -> Result<SalaryRange> {
        self.post::<(), _>(&format!("{}/{}", CALCULATE_ENDPOINT, job_id), &[], None)
            .await
    }

    async fn benchmark_details(&self, job_id: &str) -> Result<BenchmarkDetails> {
        self.get(&format!("{}/{}", BENCHMARK_DETAILS_ENDPOINT, job_id))
            .await
    }

    async fn create_session(&self, job_id: &str) -> Result<SessionResponse> {
        self.post::<(), _>(CHAT_SESSION_ENDPOINT, &[("job_id", job_id)], None)
            .await
    }

    async fn send_message(&self, session_id: &str, content: &str) -> Result<MessageResponse> {
        let payload = MessageRequest {
            content: content.to_string(),
        };
        self.post(
            CHAT_MESSAGE_ENDPOINT,
            &[("session_id", session_id)],
            Some(&payload),
        )
        .await
    }
}
