//! HTTP implementation of [`Gateway`].
//!
//! Every operation starts with an explicit login guard, so the first call on
//! a fresh [`Session`] logs in and later calls reuse the resolved organization.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use txs_config::ApiConfig;
use txs_core::{Language, NewProject, Project, Resource};

use crate::Gateway;
use crate::error::{Entity, GatewayError};
use crate::http::check_response;
use crate::jobs::{self, JobKind};
use crate::jsonapi::{
    self, LanguageAttributes, Object, ProjectAttributes, ResourceAttributes,
    TeamMembershipAttributes, language_id, relationship,
};
use crate::session::Session;

pub struct Client {
    session: Session,
}

impl Client {
    /// Build a client; no request is sent until the first operation.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Http`] if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, GatewayError> {
        Ok(Self {
            session: Session::new(config)?,
        })
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    async fn get_resource(
        &self,
        project_slug: &str,
        resource_slug: &str,
    ) -> Result<Resource, GatewayError> {
        let id = self.session.resource_id(project_slug, resource_slug);
        let resp = self
            .session
            .request(Method::GET, &format!("resources/{id}"))
            .send()
            .await?;
        let resp = check_response(resp)
            .await
            .map_err(|e| e.for_entity(Entity::Resource, resource_slug))?;
        let doc = jsonapi::parse::<Object<ResourceAttributes>>(&resp.text().await?)?;
        Ok(doc.data.into())
    }

    async fn require_project(&self, project_slug: &str) -> Result<Project, GatewayError> {
        self.get_project(project_slug)
            .await?
            .ok_or_else(|| GatewayError::NotFound {
                entity: Entity::Project,
                slug: project_slug.to_string(),
            })
    }

    async fn require_language(&self, language_code: &str) -> Result<(), GatewayError> {
        let resp = self
            .session
            .request(Method::GET, &format!("languages/{}", language_id(language_code)))
            .send()
            .await?;
        check_response(resp)
            .await
            .map_err(|e| e.for_entity(Entity::Language, language_code))?;
        Ok(())
    }

    /// Collect every page of a list endpoint.
    async fn list_all<A: DeserializeOwned + Send>(
        &self,
        first_url: String,
        entity: Entity,
        slug: &str,
    ) -> Result<Vec<Object<A>>, GatewayError> {
        let mut items = Vec::new();
        let mut next = Some(first_url);
        while let Some(url) = next {
            let resp = self.session.request_url(Method::GET, &url).send().await?;
            let resp = check_response(resp)
                .await
                .map_err(|e| e.for_entity(entity, slug))?;
            let doc = jsonapi::parse::<Vec<Object<A>>>(&resp.text().await?)?;
            items.extend(doc.data);
            next = doc.links.next;
        }
        Ok(items)
    }

    async fn upload(
        &self,
        kind: JobKind,
        resource_id: &str,
        language_code: Option<&str>,
        content: &[u8],
    ) -> Result<(), GatewayError> {
        let mut relationships = json!({ "resource": relationship("resources", resource_id) });
        if let Some(code) = language_code {
            relationships["language"] = relationship("languages", &language_id(code));
        }
        let body = json!({
            "data": {
                "type": kind.path(),
                "attributes": {
                    "content": BASE64.encode(content),
                    "content_encoding": "base64",
                },
                "relationships": relationships,
            }
        });
        let job_id = jobs::start(&self.session, kind, &body).await?;
        jobs::wait_for_upload(&self.session, kind, &job_id).await
    }
}

#[async_trait]
impl Gateway for Client {
    async fn get_project(&self, project_slug: &str) -> Result<Option<Project>, GatewayError> {
        self.session.login().await?;
        let id = self.session.project_id(project_slug);
        let resp = self
            .session
            .request(Method::GET, &format!("projects/{id}"))
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = check_response(resp).await?;
        let doc = jsonapi::parse::<Object<ProjectAttributes>>(&resp.text().await?)?;
        Ok(Some(doc.data.into()))
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, GatewayError> {
        let organization = self.session.login().await?;
        let name = project.display_name();
        let body = json!({
            "data": {
                "type": "projects",
                "attributes": {
                    "name": name,
                    "slug": project.slug,
                    "description": name,
                    "private": project.private,
                    "repository_url": project.repository_url,
                },
                "relationships": {
                    "organization": relationship("organizations", &organization.id),
                    "source_language": relationship(
                        "languages",
                        &language_id(&project.source_language)
                    ),
                },
            }
        });

        let resp = self
            .session
            .request(Method::POST, "projects")
            .json(&body)
            .send()
            .await?;
        match check_response(resp).await {
            Ok(resp) => {
                let doc = jsonapi::parse::<Object<ProjectAttributes>>(&resp.text().await?)?;
                tracing::info!(project = %project.slug, "project created");
                Ok(doc.data.into())
            }
            Err(error) => match error.for_entity(Entity::Project, &project.slug) {
                GatewayError::AlreadyExists { .. } => {
                    tracing::warn!(project = %project.slug, "project already exists; reusing it");
                    self.get_project(&project.slug)
                        .await?
                        .ok_or_else(|| GatewayError::NotFound {
                            entity: Entity::Project,
                            slug: project.slug.clone(),
                        })
                }
                other => Err(other),
            },
        }
    }

    async fn delete_project(&self, project_slug: &str) -> Result<(), GatewayError> {
        self.session.login().await?;
        let id = self.session.project_id(project_slug);
        let resp = self
            .session
            .request(Method::DELETE, &format!("projects/{id}"))
            .send()
            .await?;
        check_response(resp)
            .await
            .map_err(|e| e.for_entity(Entity::Project, project_slug))?;
        Ok(())
    }

    async fn list_resources(&self, project_slug: &str) -> Result<Vec<Resource>, GatewayError> {
        self.session.login().await?;
        let url = format!(
            "{}?filter[project]={}",
            self.session.url("resources"),
            urlencoding::encode(&self.session.project_id(project_slug))
        );
        let objects = self
            .list_all::<ResourceAttributes>(url, Entity::Project, project_slug)
            .await?;
        Ok(objects.into_iter().map(Resource::from).collect())
    }

    async fn create_resource(
        &self,
        project_slug: &str,
        resource_slug: &str,
        name: &str,
        content: &[u8],
    ) -> Result<Resource, GatewayError> {
        self.session.login().await?;
        let body = json!({
            "data": {
                "type": "resources",
                "attributes": { "name": name, "slug": resource_slug },
                "relationships": {
                    "project": relationship("projects", &self.session.project_id(project_slug)),
                    "i18n_format": relationship("i18n_formats", self.session.i18n_type()),
                },
            }
        });

        let resp = self
            .session
            .request(Method::POST, "resources")
            .json(&body)
            .send()
            .await?;
        let resource = match check_response(resp).await {
            Ok(resp) => {
                let doc = jsonapi::parse::<Object<ResourceAttributes>>(&resp.text().await?)?;
                Resource::from(doc.data)
            }
            Err(error) => match error.for_entity(Entity::Resource, resource_slug) {
                GatewayError::AlreadyExists { .. } => {
                    tracing::warn!(
                        resource = %resource_slug,
                        "resource already exists; reusing it"
                    );
                    self.get_resource(project_slug, resource_slug).await?
                }
                GatewayError::NotFound { .. } => {
                    return Err(GatewayError::NotFound {
                        entity: Entity::Project,
                        slug: project_slug.to_string(),
                    });
                }
                other => return Err(other),
            },
        };

        self.upload(JobKind::SourceUpload, &resource.id, None, content)
            .await?;
        tracing::info!(project = %project_slug, resource = %resource_slug, "resource created");
        Ok(resource)
    }

    async fn update_source_translation(
        &self,
        project_slug: &str,
        resource_slug: &str,
        content: &[u8],
    ) -> Result<(), GatewayError> {
        self.session.login().await?;
        let resource = self.get_resource(project_slug, resource_slug).await?;
        self.upload(JobKind::SourceUpload, &resource.id, None, content)
            .await?;
        tracing::debug!(
            project = %project_slug,
            resource = %resource_slug,
            bytes = content.len(),
            "source updated"
        );
        Ok(())
    }

    async fn create_translation(
        &self,
        project_slug: &str,
        resource_slug: &str,
        language_code: &str,
        content: &[u8],
    ) -> Result<(), GatewayError> {
        self.session.login().await?;
        let resource = self.get_resource(project_slug, resource_slug).await?;
        self.require_language(language_code).await?;
        self.upload(
            JobKind::TranslationUpload,
            &resource.id,
            Some(language_code),
            content,
        )
        .await
    }

    async fn delete_resource(
        &self,
        project_slug: &str,
        resource_slug: &str,
    ) -> Result<(), GatewayError> {
        self.session.login().await?;
        let id = self.session.resource_id(project_slug, resource_slug);
        let resp = self
            .session
            .request(Method::DELETE, &format!("resources/{id}"))
            .send()
            .await?;
        check_response(resp)
            .await
            .map_err(|e| e.for_entity(Entity::Resource, resource_slug))?;
        Ok(())
    }

    async fn translation_download_url(
        &self,
        project_slug: &str,
        resource_slug: &str,
        language_code: &str,
    ) -> Result<String, GatewayError> {
        self.session.login().await?;
        let resource = self.get_resource(project_slug, resource_slug).await?;
        self.require_language(language_code).await?;

        let kind = JobKind::TranslationDownload;
        let body = json!({
            "data": {
                "type": kind.path(),
                "attributes": {
                    "content_encoding": "text",
                    "file_type": "default",
                    "mode": "default",
                },
                "relationships": {
                    "resource": relationship("resources", &resource.id),
                    "language": relationship("languages", &language_id(language_code)),
                },
            }
        });
        let job_id = jobs::start(&self.session, kind, &body).await?;
        jobs::wait_for_download(&self.session, &job_id).await
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, GatewayError> {
        let resp = check_response(self.session.download(url).send().await?).await?;
        Ok(resp.bytes().await?.to_vec())
    }

    async fn list_languages(&self, project_slug: &str) -> Result<Vec<Language>, GatewayError> {
        self.session.login().await?;
        let url = self.session.url(&format!(
            "projects/{}/languages",
            self.session.project_id(project_slug)
        ));
        let objects = self
            .list_all::<LanguageAttributes>(url, Entity::Project, project_slug)
            .await?;
        Ok(objects.into_iter().map(Language::from).collect())
    }

    async fn create_language(
        &self,
        project_slug: &str,
        language_code: &str,
        coordinators: &[String],
    ) -> Result<(), GatewayError> {
        self.session.login().await?;
        let project = self.require_project(project_slug).await?;

        let body = json!({ "data": [{ "type": "languages", "id": language_id(language_code) }] });
        let resp = self
            .session
            .request(
                Method::POST,
                &format!("projects/{}/relationships/languages", project.id),
            )
            .json(&body)
            .send()
            .await?;
        match check_response(resp).await {
            Ok(_) => {
                tracing::info!(
                    project = %project_slug,
                    language = %language_code,
                    "language attached"
                );
            }
            Err(error) => match error.for_entity(Entity::Language, language_code) {
                GatewayError::AlreadyExists { .. } => {
                    tracing::debug!(language = %language_code, "language already attached");
                }
                other => return Err(other),
            },
        }

        if coordinators.is_empty() {
            return Ok(());
        }
        let team_id = project.team_id.ok_or_else(|| {
            GatewayError::InvalidArgument(format!(
                "project '{project_slug}' has no team; coordinators cannot be assigned"
            ))
        })?;

        for username in coordinators {
            let body = json!({
                "data": {
                    "type": "team_memberships",
                    "attributes": { "role": "coordinator" },
                    "relationships": {
                        "team": relationship("teams", &team_id),
                        "language": relationship("languages", &language_id(language_code)),
                        "user": relationship("users", &format!("u:{username}")),
                    },
                }
            });
            let resp = self
                .session
                .request(Method::POST, "team_memberships")
                .json(&body)
                .send()
                .await?;
            match check_response(resp).await {
                Ok(_) => {}
                Err(error) => match error.for_entity(Entity::TeamMembership, username) {
                    GatewayError::AlreadyExists { .. } => {
                        tracing::debug!(coordinator = %username, "coordinator already assigned");
                    }
                    other => return Err(other),
                },
            }
        }
        Ok(())
    }

    async fn list_coordinators(
        &self,
        project_slug: &str,
        language_code: &str,
    ) -> Result<Vec<String>, GatewayError> {
        let organization_id = self.session.login().await?.id.clone();
        let project = self.require_project(project_slug).await?;
        let Some(team_id) = project.team_id else {
            tracing::debug!(project = %project_slug, "project has no team");
            return Ok(Vec::new());
        };

        let url = format!(
            "{}?filter[organization]={}&filter[team]={}&filter[language]={}&filter[role]=coordinator",
            self.session.url("team_memberships"),
            urlencoding::encode(&organization_id),
            urlencoding::encode(&team_id),
            urlencoding::encode(&language_id(language_code)),
        );
        let memberships = self
            .list_all::<TeamMembershipAttributes>(url, Entity::Language, language_code)
            .await?;
        Ok(memberships
            .iter()
            .filter(|membership| membership.is_coordinator())
            .filter_map(Object::username)
            .collect())
    }

    async fn delete_team(&self, team_slug: &str) -> Result<(), GatewayError> {
        self.session.login().await?;
        let id = self.session.team_id(team_slug);
        let resp = self
            .session
            .request(Method::DELETE, &format!("teams/{id}"))
            .send()
            .await?;
        check_response(resp)
            .await
            .map_err(|e| e.for_entity(Entity::Team, team_slug))?;
        tracing::info!(team = %team_slug, "team deleted");
        Ok(())
    }

    async fn ping(&self) -> Result<(), GatewayError> {
        let organization = self.session.login().await?;
        let resp = self
            .session
            .request(Method::GET, &format!("organizations/{}", organization.id))
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}
