//! JSON:API wire types and identifier helpers.
//!
//! Remote identifiers are composed from slugs: `o:{org}`, `o:{org}:p:{project}`,
//! `o:{org}:p:{project}:r:{resource}`, `o:{org}:t:{team}`, `l:{language}`,
//! `u:{user}`.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use txs_core::{Language, Organization, Project, Resource};

use crate::error::GatewayError;

#[must_use]
pub fn project_id(organization_slug: &str, project_slug: &str) -> String {
    format!("o:{organization_slug}:p:{project_slug}")
}

#[must_use]
pub fn resource_id(organization_slug: &str, project_slug: &str, resource_slug: &str) -> String {
    format!("{}:r:{resource_slug}", project_id(organization_slug, project_slug))
}

#[must_use]
pub fn team_id(organization_slug: &str, team_slug: &str) -> String {
    format!("o:{organization_slug}:t:{team_slug}")
}

#[must_use]
pub fn language_id(code: &str) -> String {
    format!("l:{code}")
}

/// `{"data": {"type": kind, "id": id}}`
#[must_use]
pub fn relationship(kind: &str, id: &str) -> Value {
    json!({ "data": { "type": kind, "id": id } })
}

#[derive(Debug, Deserialize)]
pub struct Document<T> {
    pub data: T,
    #[serde(default)]
    pub links: Links,
}

#[derive(Debug, Default, Deserialize)]
pub struct Links {
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Object<A> {
    pub id: String,
    pub attributes: A,
    #[serde(default)]
    pub relationships: Value,
}

impl<A> Object<A> {
    /// Identifier of a to-one relationship, if present.
    fn related_id(&self, name: &str) -> Option<String> {
        self.relationships
            .get(name)?
            .get("data")?
            .get("id")?
            .as_str()
            .map(ToString::to_string)
    }
}

#[derive(Debug, Deserialize)]
pub struct OrganizationAttributes {
    pub slug: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ProjectAttributes {
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub repository_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResourceAttributes {
    pub slug: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LanguageAttributes {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TeamMembershipAttributes {
    pub role: String,
}

impl Object<TeamMembershipAttributes> {
    #[must_use]
    pub fn is_coordinator(&self) -> bool {
        self.attributes.role == "coordinator"
    }

    /// Username of the member, from its `u:{user}` relationship.
    #[must_use]
    pub fn username(&self) -> Option<String> {
        self.related_id("user")
            .map(|id| id.strip_prefix("u:").unwrap_or(&id).to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct JobAttributes {
    pub status: String,
    #[serde(default)]
    pub errors: Vec<JobErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct JobErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub detail: String,
}

/// Parse a response body into a JSON:API document.
///
/// # Errors
///
/// Returns [`GatewayError::Parse`] when the body does not match `T`.
pub fn parse<T: DeserializeOwned>(body: &str) -> Result<Document<T>, GatewayError> {
    serde_json::from_str(body).map_err(|e| GatewayError::Parse(e.to_string()))
}

impl From<Object<OrganizationAttributes>> for Organization {
    fn from(obj: Object<OrganizationAttributes>) -> Self {
        Self {
            id: obj.id,
            slug: obj.attributes.slug,
            name: obj.attributes.name,
        }
    }
}

impl From<Object<ProjectAttributes>> for Project {
    fn from(obj: Object<ProjectAttributes>) -> Self {
        let source_language = obj
            .related_id("source_language")
            .map(|id| id.trim_start_matches("l:").to_string())
            .unwrap_or_default();
        let team_id = obj.related_id("team");
        Self {
            id: obj.id,
            slug: obj.attributes.slug,
            name: obj.attributes.name,
            source_language,
            private: obj.attributes.private,
            repository_url: obj.attributes.repository_url,
            team_id,
        }
    }
}

impl From<Object<ResourceAttributes>> for Resource {
    fn from(obj: Object<ResourceAttributes>) -> Self {
        let i18n_format = obj.related_id("i18n_format").unwrap_or_default();
        Self {
            id: obj.id,
            slug: obj.attributes.slug,
            name: obj.attributes.name,
            i18n_format,
        }
    }
}

impl From<Object<LanguageAttributes>> for Language {
    fn from(obj: Object<LanguageAttributes>) -> Self {
        Self {
            code: obj.attributes.code,
            name: obj.attributes.name,
        }
    }
}
