use serde::{Deserialize, Serialize};

/// Default source language for newly created projects.
pub const DEFAULT_SOURCE_LANGUAGE: &str = "en_GB";

/// Top-level tenant grouping projects on the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Remote identifier (e.g., `o:acme`).
    pub id: String,
    pub slug: String,
    pub name: String,
}

/// A localizable project, unique by slug within an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Remote identifier (e.g., `o:acme:p:docs`).
    pub id: String,
    pub slug: String,
    pub name: String,
    pub source_language: String,
    pub private: bool,
    pub repository_url: Option<String>,
    /// Translation team attached to the project, if the remote exposes one.
    pub team_id: Option<String>,
}

/// Attributes for creating a project remotely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub slug: String,
    /// Display name; the slug is used when absent.
    pub name: Option<String>,
    pub source_language: String,
    pub private: bool,
    /// Required by the remote service for public projects.
    pub repository_url: Option<String>,
}

impl NewProject {
    /// A public project with the default source language.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: None,
            source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
            private: false,
            repository_url: None,
        }
    }

    /// Name sent to the remote: the explicit name or the slug.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.slug)
    }
}

/// A single source content artifact within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Remote identifier (e.g., `o:acme:p:docs:r:index`).
    pub id: String,
    pub slug: String,
    pub name: String,
    /// Content format tag (e.g., `PO`, `QT`, `GITHUBMARKDOWN`).
    pub i18n_format: String,
}

/// A language attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Language code as used by the remote (e.g., `fr_CH`).
    pub code: String,
    pub name: Option<String>,
}
