//! Polling of asynchronous upload and download jobs.
//!
//! Uploads report `pending` / `processing` until they reach `succeeded` or
//! `failed`. Downloads answer `303 See Other` with the content URL once ready.

use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::error::GatewayError;
use crate::http::{check_response, location};
use crate::jsonapi::{self, JobAttributes, Object};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    SourceUpload,
    TranslationUpload,
    TranslationDownload,
}

impl JobKind {
    pub const fn path(self) -> &'static str {
        match self {
            Self::SourceUpload => "resource_strings_async_uploads",
            Self::TranslationUpload => "resource_translations_async_uploads",
            Self::TranslationDownload => "resource_translations_async_downloads",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SourceUpload => "source upload",
            Self::TranslationUpload => "translation upload",
            Self::TranslationDownload => "translation download",
        }
    }
}

/// Start a job and return its id.
pub async fn start(session: &Session, kind: JobKind, body: &Value) -> Result<String, GatewayError> {
    let resp = session
        .request(Method::POST, kind.path())
        .json(body)
        .send()
        .await?;
    let resp = check_response(resp).await?;
    let doc = jsonapi::parse::<Object<JobAttributes>>(&resp.text().await?)?;
    tracing::debug!(job = kind.label(), id = %doc.data.id, "job started");
    Ok(doc.data.id)
}

/// Poll an upload job until it succeeds.
pub async fn wait_for_upload(
    session: &Session,
    kind: JobKind,
    id: &str,
) -> Result<(), GatewayError> {
    let attempts = session.config().poll_attempts;
    for _ in 0..attempts {
        let attributes = poll_status(session, kind, id).await?;
        match attributes.status.as_str() {
            "succeeded" => return Ok(()),
            "failed" => return Err(job_failed(kind, id, &attributes)),
            _ => tokio::time::sleep(session.poll_interval()).await,
        }
    }
    Err(GatewayError::JobTimedOut {
        job: kind.label(),
        id: id.to_string(),
        attempts,
    })
}

/// Poll a download job until it redirects to the content URL.
pub async fn wait_for_download(session: &Session, id: &str) -> Result<String, GatewayError> {
    let kind = JobKind::TranslationDownload;
    let attempts = session.config().poll_attempts;
    for _ in 0..attempts {
        let resp = session
            .request(Method::GET, &format!("{}/{id}", kind.path()))
            .send()
            .await?;
        let resp = check_response(resp).await?;

        if resp.status() == StatusCode::SEE_OTHER {
            return location(&resp).ok_or_else(|| {
                GatewayError::Parse(format!(
                    "{} job {id} redirected without Location",
                    kind.label()
                ))
            });
        }

        let doc = jsonapi::parse::<Object<JobAttributes>>(&resp.text().await?)?;
        if doc.data.attributes.status == "failed" {
            return Err(job_failed(kind, id, &doc.data.attributes));
        }
        tokio::time::sleep(session.poll_interval()).await;
    }
    Err(GatewayError::JobTimedOut {
        job: kind.label(),
        id: id.to_string(),
        attempts,
    })
}

async fn poll_status(
    session: &Session,
    kind: JobKind,
    id: &str,
) -> Result<JobAttributes, GatewayError> {
    let resp = session
        .request(Method::GET, &format!("{}/{id}", kind.path()))
        .send()
        .await?;
    let resp = check_response(resp).await?;
    Ok(jsonapi::parse::<Object<JobAttributes>>(&resp.text().await?)?
        .data
        .attributes)
}

fn job_failed(kind: JobKind, id: &str, attributes: &JobAttributes) -> GatewayError {
    let message = attributes
        .errors
        .iter()
        .map(|e| match &e.code {
            Some(code) => format!("{code}: {}", e.detail),
            None => e.detail.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ");
    GatewayError::JobFailed {
        job: kind.label(),
        id: id.to_string(),
        message: if message.is_empty() {
            "no details reported".to_string()
        } else {
            message
        },
    }
}
