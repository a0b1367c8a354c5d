//! Authenticated session with deferred login.
//!
//! A [`Session`] is constructed once per process and shared read-only by
//! every concurrent unit of work. Login resolves the configured organization
//! on first use and is never repeated; concurrent first callers wait on the
//! same initialization.

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use tokio::sync::OnceCell;
use txs_config::ApiConfig;
use txs_core::Organization;

use crate::error::{Entity, GatewayError};
use crate::http::check_response;
use crate::jsonapi::{self, Object, OrganizationAttributes};

const JSON_API: &str = "application/vnd.api+json";

pub struct Session {
    config: ApiConfig,
    /// API calls. Redirects are surfaced, not followed.
    http: reqwest::Client,
    /// Plain content fetches of download URLs.
    downloads: reqwest::Client,
    organization: OnceCell<Organization>,
}

impl Session {
    /// Build a session without contacting the service.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Http`] if an HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, GatewayError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let user_agent = concat!("txsync/", env!("CARGO_PKG_VERSION"));
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        let downloads = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            config,
            http,
            downloads,
            organization: OnceCell::new(),
        })
    }

    pub fn is_logged_in(&self) -> bool {
        self.organization.initialized()
    }

    /// Log in if not done yet and return the resolved organization.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Unauthorized`] when no token is configured or
    /// the token is rejected, and [`GatewayError::NotFound`] when the
    /// organization slug does not resolve.
    pub async fn login(&self) -> Result<&Organization, GatewayError> {
        self.organization
            .get_or_try_init(|| self.resolve_organization())
            .await
    }

    async fn resolve_organization(&self) -> Result<Organization, GatewayError> {
        if self.config.token.is_empty() {
            return Err(GatewayError::Unauthorized("no API token configured".into()));
        }
        let slug = &self.config.organization;
        tracing::debug!(organization = %slug, host = %self.config.host, "logging in");

        let url = format!(
            "{}?filter[slug]={}",
            self.url("organizations"),
            urlencoding::encode(slug)
        );
        let resp = check_response(self.request_url(Method::GET, &url).send().await?).await?;
        let doc = jsonapi::parse::<Vec<Object<OrganizationAttributes>>>(&resp.text().await?)?;

        let organization = doc
            .data
            .into_iter()
            .map(Organization::from)
            .find(|org| org.slug == *slug)
            .ok_or_else(|| GatewayError::NotFound {
                entity: Entity::Organization,
                slug: slug.clone(),
            })?;
        tracing::info!(organization = %organization.id, "logged in");
        Ok(organization)
    }

    pub fn organization_slug(&self) -> &str {
        &self.config.organization
    }

    /// Default content-format tag for new resources.
    pub fn i18n_type(&self) -> &str {
        &self.config.i18n_type
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.config.poll_interval_ms)
    }

    pub(crate) fn project_id(&self, project_slug: &str) -> String {
        jsonapi::project_id(&self.config.organization, project_slug)
    }

    pub(crate) fn resource_id(&self, project_slug: &str, resource_slug: &str) -> String {
        jsonapi::resource_id(&self.config.organization, project_slug, resource_slug)
    }

    pub(crate) fn team_id(&self, team_slug: &str) -> String {
        jsonapi::team_id(&self.config.organization, team_slug)
    }

    /// Absolute URL for an API path.
    pub(crate) fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.host.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Authenticated request to an API path.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request_url(method, &self.url(path))
    }

    /// Authenticated request to an absolute URL (pagination links).
    pub(crate) fn request_url(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.config.token)
            .header(reqwest::header::ACCEPT, JSON_API)
            .header(reqwest::header::CONTENT_TYPE, JSON_API)
    }

    /// Unauthenticated GET of a download URL, following redirects.
    pub(crate) fn download(&self, url: &str) -> RequestBuilder {
        self.downloads.get(url)
    }
}
