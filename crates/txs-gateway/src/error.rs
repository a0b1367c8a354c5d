//! Gateway error types.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use txs_core::CoreError;

/// Remote entity kinds, used to qualify not-found and conflict errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Organization,
    Project,
    Resource,
    Language,
    Team,
    TeamMembership,
}

impl Entity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::Project => "project",
            Self::Resource => "resource",
            Self::Language => "language",
            Self::Team => "team",
            Self::TeamMembership => "team membership",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when talking to the remote translation service.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The addressed entity does not exist remotely.
    #[error("{entity} not found: {slug}")]
    NotFound { entity: Entity, slug: String },

    /// A creation call hit an entity that already exists.
    #[error("{entity} already exists: {slug}")]
    AlreadyExists { entity: Entity, slug: String },

    /// Credentials were missing or rejected.
    #[error("authentication failed: {0}")]
    Unauthorized(String),

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse a service response.
    #[error("parse error: {0}")]
    Parse(String),

    /// An asynchronous upload or download job reported failure.
    #[error("{job} job {id} failed: {message}")]
    JobFailed {
        job: &'static str,
        id: String,
        message: String,
    },

    /// An asynchronous job was still running after the configured polls.
    #[error("{job} job {id} still pending after {attempts} polls")]
    JobTimedOut {
        job: &'static str,
        id: String,
        attempts: u32,
    },

    /// Reading a source file or writing a translation failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The caller supplied arguments the operation cannot work with.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl GatewayError {
    /// True for [`GatewayError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for [`GatewayError::AlreadyExists`].
    #[must_use]
    pub const fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Qualify a bare 404/409 API error with the entity it concerns.
    #[must_use]
    pub fn for_entity(self, entity: Entity, slug: &str) -> Self {
        match self {
            Self::Api { status: 404, .. } => Self::NotFound {
                entity,
                slug: slug.to_string(),
            },
            Self::Api { status: 409, .. } => Self::AlreadyExists {
                entity,
                slug: slug.to_string(),
            },
            other => other,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
