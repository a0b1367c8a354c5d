//! Push and pull reconciliation against a [`Gateway`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use serde::Serialize;
use txs_config::SyncConfig;
use txs_core::{PullUnit, PushUnit};
use txs_gateway::{Gateway, GatewayFileExt};

use crate::error::SyncError;
use crate::runner::{Concurrently, Unit};

/// Outcome of a push.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PushReport {
    /// Resources created from their local file, in creation order.
    pub created: Vec<String>,
    /// Existing resources whose source was re-uploaded, in completion order.
    pub updated: Vec<String>,
}

/// Outcome of a pull.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullReport {
    /// Written translation files, in completion order.
    pub files: Vec<PathBuf>,
}

pub struct SyncEngine<G: ?Sized> {
    gateway: Arc<G>,
    workers: usize,
    unit_timeout: Option<Duration>,
}

impl<G: Gateway + ?Sized + 'static> SyncEngine<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self::from_config(gateway, &SyncConfig::default())
    }

    pub fn from_config(gateway: Arc<G>, config: &SyncConfig) -> Self {
        Self {
            gateway,
            workers: config.workers,
            unit_timeout: config.unit_timeout(),
        }
    }

    pub const fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    fn batch<T: Send + 'static>(&self) -> Concurrently<T> {
        Concurrently::new(self.workers).with_timeout(self.unit_timeout)
    }

    /// Make every `(resource_slugs[i], local_paths[i])` pair exist remotely
    /// with the local content.
    ///
    /// Missing resources are created one at a time from their file; existing
    /// ones are re-uploaded concurrently. A newly created resource is not
    /// uploaded a second time.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::LengthMismatch`], [`SyncError::MissingIdentifier`]
    /// or [`SyncError::DuplicateResource`] before any remote call, otherwise
    /// the first gateway failure observed.
    pub async fn push(
        &self,
        project_slug: &str,
        resource_slugs: &[String],
        local_paths: &[PathBuf],
    ) -> Result<PushReport, SyncError> {
        if resource_slugs.len() != local_paths.len() {
            return Err(SyncError::LengthMismatch {
                resources: resource_slugs.len(),
                paths: local_paths.len(),
            });
        }
        if project_slug.is_empty() {
            return Err(SyncError::MissingIdentifier("project slug"));
        }
        if resource_slugs.iter().any(String::is_empty) {
            return Err(SyncError::MissingIdentifier("resource slug"));
        }
        let mut seen = HashSet::with_capacity(resource_slugs.len());
        if let Some(duplicate) = resource_slugs.iter().find(|slug| !seen.insert(slug.as_str())) {
            return Err(SyncError::DuplicateResource(duplicate.clone()));
        }

        let remote: HashSet<String> = self
            .gateway
            .list_resources(project_slug)
            .await?
            .into_iter()
            .map(|r| r.slug)
            .collect();

        let (existing, missing): (Vec<PushUnit>, Vec<PushUnit>) = resource_slugs
            .iter()
            .zip(local_paths)
            .map(|(slug, path)| PushUnit {
                project_slug: project_slug.to_string(),
                resource_slug: slug.clone(),
                path: path.clone(),
            })
            .partition(|unit| remote.contains(&unit.resource_slug));
        tracing::debug!(
            project = %project_slug,
            missing = missing.len(),
            existing = existing.len(),
            "push plan"
        );

        let mut report = PushReport::default();
        for unit in missing {
            self.gateway
                .create_resource_from_file(
                    &unit.project_slug,
                    &unit.path,
                    Some(&unit.resource_slug),
                    None,
                )
                .await?;
            tracing::info!(resource = %unit.resource_slug, "created");
            report.created.push(unit.resource_slug);
        }

        let gateway = Arc::clone(&self.gateway);
        report.updated = self
            .batch()
            .with_fn(
                move |unit: PushUnit| {
                    let gateway = Arc::clone(&gateway);
                    async move {
                        gateway
                            .update_source_translation_from_file(
                                &unit.project_slug,
                                &unit.resource_slug,
                                &unit.path,
                            )
                            .await?;
                        Ok::<_, SyncError>(unit.resource_slug)
                    }
                },
                existing,
            )
            .run()
            .await?;

        tracing::info!(
            project = %project_slug,
            created = report.created.len(),
            updated = report.updated.len(),
            "push complete"
        );
        Ok(report)
    }

    /// Download every (resource, language) translation into `output_dir`
    /// as `{resource}_{language}`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MissingIdentifier`] for an empty project slug,
    /// resource slug or language code before any remote call, otherwise the
    /// first unit failure observed.
    pub async fn pull(
        &self,
        project_slug: &str,
        resource_slugs: &[String],
        language_codes: &[String],
        output_dir: &Path,
    ) -> Result<PullReport, SyncError> {
        if project_slug.is_empty() {
            return Err(SyncError::MissingIdentifier("project slug"));
        }
        if resource_slugs.iter().any(String::is_empty) {
            return Err(SyncError::MissingIdentifier("resource slug"));
        }
        if language_codes.iter().any(String::is_empty) {
            return Err(SyncError::MissingIdentifier("language code"));
        }

        let units =
            PullUnit::cross_product(project_slug, resource_slugs, language_codes, output_dir);
        tracing::debug!(
            project = %project_slug,
            resources = resource_slugs.len(),
            languages = language_codes.len(),
            units = units.len(),
            "pull plan"
        );

        let partials: Vec<Unit<PathBuf>> = units
            .into_iter()
            .map(|unit| {
                let gateway = Arc::clone(&self.gateway);
                async move {
                    gateway
                        .get_translation(
                            &unit.project_slug,
                            &unit.resource_slug,
                            &unit.language_code,
                            &unit.output_path,
                        )
                        .await
                        .map_err(SyncError::from)
                }
                .boxed()
            })
            .collect();

        let files = self.batch().with_partials(partials).run().await?;
        tracing::info!(project = %project_slug, files = files.len(), "pull complete");
        Ok(PullReport { files })
    }
}
