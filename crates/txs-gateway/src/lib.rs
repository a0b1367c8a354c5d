//! # txs-gateway
//!
//! Boundary between the sync engine and the remote translation service.
//!
//! - [`Gateway`]: the operation set the sync engine needs, content-level
//! - [`GatewayFileExt`]: file-level facade over any gateway (read sources,
//!   write downloaded translations)
//! - [`Client`]: JSON:API implementation over HTTP, logging in lazily through
//!   a shared [`Session`]

mod client;
mod error;
mod files;
mod http;
mod jobs;
pub mod jsonapi;
mod session;

pub use client::Client;
pub use error::{Entity, GatewayError};
pub use files::GatewayFileExt;
pub use session::Session;

use async_trait::async_trait;
use txs_core::{Language, NewProject, Project, Resource};

/// Operations on projects, resources and languages of one organization.
///
/// Creation calls are idempotent: hitting an existing entity resolves to it
/// instead of failing. Lookups of absent entities fail with
/// [`GatewayError::NotFound`] so callers can create and retry.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Fetch a project, `None` if it does not exist.
    async fn get_project(&self, project_slug: &str) -> Result<Option<Project>, GatewayError>;

    async fn project_exists(&self, project_slug: &str) -> Result<bool, GatewayError> {
        Ok(self.get_project(project_slug).await?.is_some())
    }

    /// Create a project, or return the existing one with the same slug.
    async fn create_project(&self, project: &NewProject) -> Result<Project, GatewayError>;

    async fn delete_project(&self, project_slug: &str) -> Result<(), GatewayError>;

    async fn list_resources(&self, project_slug: &str) -> Result<Vec<Resource>, GatewayError>;

    /// Create a resource and upload `content` as its initial source.
    async fn create_resource(
        &self,
        project_slug: &str,
        resource_slug: &str,
        name: &str,
        content: &[u8],
    ) -> Result<Resource, GatewayError>;

    /// Replace the source content of an existing resource.
    async fn update_source_translation(
        &self,
        project_slug: &str,
        resource_slug: &str,
        content: &[u8],
    ) -> Result<(), GatewayError>;

    /// Upload translated content for one language of a resource.
    async fn create_translation(
        &self,
        project_slug: &str,
        resource_slug: &str,
        language_code: &str,
        content: &[u8],
    ) -> Result<(), GatewayError>;

    async fn delete_resource(
        &self,
        project_slug: &str,
        resource_slug: &str,
    ) -> Result<(), GatewayError>;

    /// URL from which the (resource, language) translation can be fetched.
    async fn translation_download_url(
        &self,
        project_slug: &str,
        resource_slug: &str,
        language_code: &str,
    ) -> Result<String, GatewayError>;

    /// Plain content fetch of a download URL.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, GatewayError>;

    async fn list_languages(&self, project_slug: &str) -> Result<Vec<Language>, GatewayError>;

    /// Attach a language to a project and assign its coordinators.
    async fn create_language(
        &self,
        project_slug: &str,
        language_code: &str,
        coordinators: &[String],
    ) -> Result<(), GatewayError>;

    /// Usernames coordinating `language_code` in the project's team. Empty
    /// when the project has no team.
    async fn list_coordinators(
        &self,
        project_slug: &str,
        language_code: &str,
    ) -> Result<Vec<String>, GatewayError>;

    /// Delete a translation team of the organization.
    async fn delete_team(&self, team_slug: &str) -> Result<(), GatewayError>;

    /// Verify connectivity and credentials.
    async fn ping(&self) -> Result<(), GatewayError>;
}
