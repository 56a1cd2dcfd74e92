// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Backend API client.
//!
//! This module issues the two requests the wizard depends on: creating a
//! project (multipart upload of the video plus metadata) and submitting the
//! serialized placement plan for processing. The bearer credential comes
//! from an injected [`TokenStore`] so tests can substitute it.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::{multipart, Client, RequestBuilder};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::io::serialization::{encode_entries, PlanEntry};

/// Upper bound on the project-creation request; the processing request is
/// long-running and carries no timeout.
const CREATE_PROJECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors surfaced by the backend API client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("project creation failed: {reason}")]
    ProjectCreation { reason: String },

    #[error("video processing failed: {reason}")]
    Processing { reason: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("could not read video file: {0}")]
    Io(#[from] io::Error),

    #[error("could not encode placement plan: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Source of the bearer credential attached to backend requests.
///
/// Token acquisition and expiry are outside this client; a missing token
/// simply sends the request unauthenticated and lets the server reject it
/// like any other failure.
pub trait TokenStore: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Token store backed by an environment variable.
pub struct EnvTokenStore {
    var: String,
}

impl EnvTokenStore {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl TokenStore for EnvTokenStore {
    fn bearer_token(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|t| !t.is_empty())
    }
}

/// Payload for the project-creation request.
#[derive(Debug, Clone)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: String,
    pub video_path: PathBuf,
}

/// Server acknowledgement of a created project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedProject {
    /// Server-side identifier for the uploaded video
    pub filename: String,
}

/// Opaque result body returned by the processing endpoint.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub body: serde_json::Value,
}

/// The two sequential backend operations the wizard performs.
pub trait SubmissionApi: Send + Sync {
    /// Create the project and upload the video; yields the server filename.
    fn create_project(&self, request: &CreateProjectRequest) -> Result<CreatedProject, ApiError>;

    /// Submit the serialized plan for the previously uploaded video.
    fn process_video(
        &self,
        video_filename: &str,
        entries: &[PlanEntry],
    ) -> Result<ProcessOutcome, ApiError>;
}

/// HTTP implementation of [`SubmissionApi`].
pub struct HttpApi {
    base_url: String,
    client: Client,
    tokens: Arc<dyn TokenStore>,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        // No client-wide timeout; the create-project request sets its own.
        let client = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            tokens,
        })
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

impl SubmissionApi for HttpApi {
    fn create_project(&self, request: &CreateProjectRequest) -> Result<CreatedProject, ApiError> {
        let url = format!("{}/projects", self.base_url);
        let form = multipart::Form::new()
            .text("name", request.name.clone())
            .text("description", request.description.clone())
            .file("file", &request.video_path)?;

        log::info!("POST {} (name: {:?})", url, request.name);
        let response = self
            .authorize(self.client.post(&url))
            .timeout(CREATE_PROJECT_TIMEOUT)
            .multipart(form)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let reason = failure_reason(status, response.text().ok());
            log::error!("Project creation failed: {}", reason);
            return Err(ApiError::ProjectCreation { reason });
        }

        let created: CreatedProject = response.json()?;
        log::info!("Project created, server filename {}", created.filename);
        Ok(created)
    }

    fn process_video(
        &self,
        video_filename: &str,
        entries: &[PlanEntry],
    ) -> Result<ProcessOutcome, ApiError> {
        let url = format!("{}/process_video", self.base_url);
        let form = multipart::Form::new()
            .text("video_filename", video_filename.to_string())
            .text("timestamps", encode_entries(entries)?);

        log::info!("POST {} ({} timestamps)", url, entries.len());
        let response = self.authorize(self.client.post(&url)).multipart(form).send()?;

        let status = response.status();
        if !status.is_success() {
            let reason = failure_reason(status, response.text().ok());
            log::error!("Video processing failed: {}", reason);
            return Err(ApiError::Processing { reason });
        }

        let body = response.json()?;
        Ok(ProcessOutcome { body })
    }
}

/// Failure message shown to the user: the status line plus the response
/// body when the server provided one.
fn failure_reason(status: StatusCode, body: Option<String>) -> String {
    match body {
        Some(body) if !body.trim().is_empty() => format!("HTTP {}: {}", status.as_u16(), body.trim()),
        _ => format!("HTTP {}", status.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reason_includes_body_when_present() {
        assert_eq!(
            failure_reason(StatusCode::INTERNAL_SERVER_ERROR, Some("boom".to_string())),
            "HTTP 500: boom"
        );
        assert_eq!(
            failure_reason(StatusCode::BAD_GATEWAY, Some("  ".to_string())),
            "HTTP 502"
        );
        assert_eq!(failure_reason(StatusCode::UNAUTHORIZED, None), "HTTP 401");
    }

    #[test]
    fn test_env_token_store_ignores_empty_values() {
        let var = "SPOTMARK_TEST_TOKEN_EMPTY";
        std::env::remove_var(var);
        let store = EnvTokenStore::new(var);
        assert_eq!(store.bearer_token(), None);

        std::env::set_var(var, "");
        assert_eq!(store.bearer_token(), None);

        std::env::set_var(var, "secret");
        assert_eq!(store.bearer_token(), Some("secret".to_string()));
        std::env::remove_var(var);
    }
}
