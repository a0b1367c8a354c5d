//! Scripted fake of the remote service, served by `tiny_http` on a random port.

#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use txs_config::ApiConfig;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub authorization: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }

    pub fn is(&self, method: &str, path: &str) -> bool {
        self.method == method && self.path() == path
    }
}

pub struct Reply {
    pub status: u16,
    pub body: String,
    pub location: Option<String>,
}

impl Reply {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            location: None,
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::json(200, body)
    }

    pub fn status(status: u16) -> Self {
        Self::json(status, "{\"errors\":[]}")
    }

    pub fn see_other(location: impl Into<String>) -> Self {
        Self {
            status: 303,
            body: String::new(),
            location: Some(location.into()),
        }
    }
}

pub struct FakeRemote {
    pub base: String,
    server: Arc<tiny_http::Server>,
    requests: Arc<Mutex<Vec<Recorded>>>,
    handle: Option<JoinHandle<()>>,
}

impl FakeRemote {
    /// Serve requests with `route`, which sees each recorded request and the
    /// server base URL.
    pub fn start<F>(mut route: F) -> Self
    where
        F: FnMut(&Recorded, &str) -> Reply + Send + 'static,
    {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").unwrap());
        let port = server.server_addr().to_ip().unwrap().port();
        let base = format!("http://127.0.0.1:{port}");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            let base = base.clone();
            std::thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);
                    let recorded = Recorded {
                        method: request.method().to_string(),
                        url: request.url().to_string(),
                        authorization: request
                            .headers()
                            .iter()
                            .find(|h| h.field.equiv("Authorization"))
                            .map(|h| h.value.to_string()),
                        body,
                    };
                    let reply = route(&recorded, &base);
                    requests.lock().unwrap().push(recorded);

                    let mut response =
                        tiny_http::Response::from_string(reply.body).with_status_code(reply.status);
                    if let Some(location) = reply.location {
                        response = response.with_header(
                            tiny_http::Header::from_bytes("Location", location).unwrap(),
                        );
                    }
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            base,
            server,
            requests,
            handle: Some(handle),
        }
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig {
            token: "secret".into(),
            host: self.base.clone(),
            organization: "acme".into(),
            poll_interval_ms: 1,
            poll_attempts: 5,
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests().iter().filter(|r| r.is(method, path)).count()
    }
}

impl Drop for FakeRemote {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

pub const ORGANIZATIONS: &str = r#"{
    "data": [
        { "id": "o:acme", "type": "organizations", "attributes": { "slug": "acme", "name": "Acme" } }
    ]
}"#;

pub const PROJECT: &str = r#"{
    "data": {
        "id": "o:acme:p:docs",
        "type": "projects",
        "attributes": { "slug": "docs", "name": "Docs", "private": false },
        "relationships": {
            "source_language": { "data": { "type": "languages", "id": "l:en" } },
            "team": { "data": { "type": "teams", "id": "o:acme:t:crew" } }
        }
    }
}"#;

pub fn resource(slug: &str) -> String {
    format!(
        r#"{{ "data": {{ "id": "o:acme:p:docs:r:{slug}", "type": "resources", "attributes": {{ "slug": "{slug}", "name": "{slug}" }} }} }}"#
    )
}

pub fn job(id: &str, status: &str) -> String {
    format!(
        r#"{{ "data": {{ "id": "{id}", "type": "jobs", "attributes": {{ "status": "{status}" }} }} }}"#
    )
}
