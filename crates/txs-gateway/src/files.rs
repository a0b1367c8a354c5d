//! File-level facade over a [`Gateway`].
//!
//! Reads local sources and writes downloaded translations; the content
//! itself is never inspected.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use txs_core::Resource;
use txs_core::slug::{slug_from_path, slugify};

use crate::Gateway;
use crate::error::GatewayError;

#[async_trait]
pub trait GatewayFileExt: Gateway {
    /// Create a resource from a local file.
    ///
    /// The slug is `slug` if given, else the slugified `name`, else the
    /// slugified file stem. The display name defaults to the slug.
    async fn create_resource_from_file(
        &self,
        project_slug: &str,
        path: &Path,
        slug: Option<&str>,
        name: Option<&str>,
    ) -> Result<Resource, GatewayError> {
        let slug = match (slug, name) {
            (Some(slug), _) => slug.to_string(),
            (None, Some(name)) => slugify(name)?,
            (None, None) => slug_from_path(path)?,
        };
        let name = name.unwrap_or(slug.as_str()).to_string();
        let content = read_source(path).await?;
        self.create_resource(project_slug, &slug, &name, &content)
            .await
    }

    async fn update_source_translation_from_file(
        &self,
        project_slug: &str,
        resource_slug: &str,
        path: &Path,
    ) -> Result<(), GatewayError> {
        let content = read_source(path).await?;
        self.update_source_translation(project_slug, resource_slug, &content)
            .await
    }

    /// Download one translation and write it to `output_path`, creating
    /// parent directories. Returns the written path.
    async fn get_translation(
        &self,
        project_slug: &str,
        resource_slug: &str,
        language_code: &str,
        output_path: &Path,
    ) -> Result<PathBuf, GatewayError> {
        let url = self
            .translation_download_url(project_slug, resource_slug, language_code)
            .await?;
        let content = self.fetch(&url).await?;

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| GatewayError::io(parent, e))?;
        }
        tokio::fs::write(output_path, &content)
            .await
            .map_err(|e| GatewayError::io(output_path, e))?;
        tracing::debug!(
            resource = %resource_slug,
            language = %language_code,
            path = %output_path.display(),
            bytes = content.len(),
            "translation written"
        );
        Ok(output_path.to_path_buf())
    }
}

impl<G: Gateway + ?Sized> GatewayFileExt for G {}

async fn read_source(path: &Path) -> Result<Vec<u8>, GatewayError> {
    tokio::fs::read(path)
        .await
        .map_err(|e| GatewayError::io(path, e))
}
