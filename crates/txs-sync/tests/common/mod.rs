//! Recording in-memory gateway.

#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use txs_core::{Language, NewProject, Project, Resource};
use txs_gateway::{Entity, Gateway, GatewayError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListResources(String),
    Create { slug: String, content: Vec<u8> },
    Update { slug: String, content: Vec<u8> },
    DownloadUrl { resource: String, language: String },
    Fetch(String),
}

#[derive(Default)]
pub struct MockGateway {
    calls: Mutex<Vec<Call>>,
    resources: Mutex<BTreeSet<String>>,
    languages: BTreeSet<String>,
    translations: HashMap<(String, String), Vec<u8>>,
    delays: HashMap<String, Duration>,
}

impl MockGateway {
    pub fn with_resources(slugs: &[&str]) -> Self {
        Self {
            resources: Mutex::new(slugs.iter().map(ToString::to_string).collect()),
            ..Self::default()
        }
    }

    pub fn language(mut self, code: &str) -> Self {
        self.languages.insert(code.to_string());
        self
    }

    pub fn translation(mut self, resource: &str, language: &str, content: &str) -> Self {
        self.languages.insert(language.to_string());
        self.translations.insert(
            (resource.to_string(), language.to_string()),
            content.as_bytes().to_vec(),
        );
        self
    }

    /// Delay downloads of `resource` by `delay`.
    pub fn slow(mut self, resource: &str, delay: Duration) -> Self {
        self.delays.insert(resource.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn creates(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Create { slug, .. } => Some(slug),
                _ => None,
            })
            .collect()
    }

    pub fn updates(&self) -> Vec<(String, Vec<u8>)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Update { slug, content } => Some((slug, content)),
                _ => None,
            })
            .collect()
    }

    pub fn downloads(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::DownloadUrl { .. }))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn has_resource(&self, slug: &str) -> bool {
        self.resources.lock().unwrap().contains(slug)
    }
}

fn project(slug: &str) -> Project {
    Project {
        id: format!("o:test:p:{slug}"),
        slug: slug.to_string(),
        name: slug.to_string(),
        source_language: "en".into(),
        private: false,
        repository_url: None,
        team_id: None,
    }
}

fn not_found(entity: Entity, slug: &str) -> GatewayError {
    GatewayError::NotFound {
        entity,
        slug: slug.to_string(),
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn get_project(&self, project_slug: &str) -> Result<Option<Project>, GatewayError> {
        Ok(Some(project(project_slug)))
    }

    async fn create_project(&self, new: &NewProject) -> Result<Project, GatewayError> {
        Ok(project(&new.slug))
    }

    async fn delete_project(&self, _project_slug: &str) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn list_resources(&self, project_slug: &str) -> Result<Vec<Resource>, GatewayError> {
        self.record(Call::ListResources(project_slug.to_string()));
        Ok(self
            .resources
            .lock()
            .unwrap()
            .iter()
            .map(|slug| Resource {
                id: format!("o:test:p:{project_slug}:r:{slug}"),
                slug: slug.clone(),
                name: slug.clone(),
                i18n_format: "PO".into(),
            })
            .collect())
    }

    async fn create_resource(
        &self,
        project_slug: &str,
        resource_slug: &str,
        name: &str,
        content: &[u8],
    ) -> Result<Resource, GatewayError> {
        self.record(Call::Create {
            slug: resource_slug.to_string(),
            content: content.to_vec(),
        });
        self.resources
            .lock()
            .unwrap()
            .insert(resource_slug.to_string());
        Ok(Resource {
            id: format!("o:test:p:{project_slug}:r:{resource_slug}"),
            slug: resource_slug.to_string(),
            name: name.to_string(),
            i18n_format: "PO".into(),
        })
    }

    async fn update_source_translation(
        &self,
        _project_slug: &str,
        resource_slug: &str,
        content: &[u8],
    ) -> Result<(), GatewayError> {
        if !self.has_resource(resource_slug) {
            return Err(not_found(Entity::Resource, resource_slug));
        }
        self.record(Call::Update {
            slug: resource_slug.to_string(),
            content: content.to_vec(),
        });
        Ok(())
    }

    async fn create_translation(
        &self,
        _project_slug: &str,
        _resource_slug: &str,
        _language_code: &str,
        _content: &[u8],
    ) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn delete_resource(
        &self,
        _project_slug: &str,
        resource_slug: &str,
    ) -> Result<(), GatewayError> {
        self.resources.lock().unwrap().remove(resource_slug);
        Ok(())
    }

    async fn translation_download_url(
        &self,
        _project_slug: &str,
        resource_slug: &str,
        language_code: &str,
    ) -> Result<String, GatewayError> {
        self.record(Call::DownloadUrl {
            resource: resource_slug.to_string(),
            language: language_code.to_string(),
        });
        if let Some(delay) = self.delays.get(resource_slug) {
            tokio::time::sleep(*delay).await;
        }
        if !self.has_resource(resource_slug) {
            return Err(not_found(Entity::Resource, resource_slug));
        }
        if !self.languages.contains(language_code) {
            return Err(not_found(Entity::Language, language_code));
        }
        Ok(format!("mock://{resource_slug}/{language_code}"))
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, GatewayError> {
        self.record(Call::Fetch(url.to_string()));
        let key = url
            .strip_prefix("mock://")
            .and_then(|rest| rest.split_once('/'))
            .map(|(r, l)| (r.to_string(), l.to_string()))
            .ok_or_else(|| GatewayError::InvalidArgument(url.to_string()))?;
        Ok(self.translations.get(&key).cloned().unwrap_or_default())
    }

    async fn list_languages(&self, _project_slug: &str) -> Result<Vec<Language>, GatewayError> {
        Ok(self
            .languages
            .iter()
            .map(|code| Language {
                code: code.clone(),
                name: None,
            })
            .collect())
    }

    async fn create_language(
        &self,
        _project_slug: &str,
        _language_code: &str,
        _coordinators: &[String],
    ) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn list_coordinators(
        &self,
        _project_slug: &str,
        _language_code: &str,
    ) -> Result<Vec<String>, GatewayError> {
        Ok(Vec::new())
    }

    async fn delete_team(&self, _team_slug: &str) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn ping(&self) -> Result<(), GatewayError> {
        Ok(())
    }
}
