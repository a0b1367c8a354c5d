//! `.tx/config` generator for MkDocs documentation trees.
//!
//! Every `documentation/**/*.{source_lang}.md` file whose YAML front matter
//! declares `tx_slug` becomes one resource section:
//!
//! ```text
//! [o:{organization}:p:{project}:r:{tx_slug}]
//! file_filter = documentation/guide/intro.<lang>.md
//! source_file = documentation/guide/intro.en.md
//! source_lang = en
//! type = GITHUBMARKDOWN
//! ```

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use globset::Glob;
use ignore::WalkBuilder;
use serde::Deserialize;

use crate::error::PluginError;
use crate::{ConfigPlugin, PluginOutput};

const DOCS_DIR: &str = "documentation";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MkdocsSettings {
    pub organization: String,
    pub project: String,
    pub source_lang: String,
    pub i18n_type: String,
    pub host: String,
}

impl Default for MkdocsSettings {
    fn default() -> Self {
        Self {
            organization: "opengisch".into(),
            project: "qfield-documentation".into(),
            source_lang: "en".into(),
            i18n_type: "GITHUBMARKDOWN".into(),
            host: "https://www.transifex.com".into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct MkdocsPlugin {
    settings: MkdocsSettings,
}

impl MkdocsPlugin {
    pub const fn new(settings: MkdocsSettings) -> Self {
        Self { settings }
    }

    pub const fn settings(&self) -> &MkdocsSettings {
        &self.settings
    }

    /// Source files under `root/documentation`, as sorted root-relative paths.
    fn source_files(&self, root: &Path) -> Result<Vec<PathBuf>, PluginError> {
        let docs = root.join(DOCS_DIR);
        if !docs.is_dir() {
            return Ok(Vec::new());
        }
        let matcher = Glob::new(&format!("**/*.{}.md", self.settings.source_lang))?
            .compile_matcher();

        let mut files = Vec::new();
        for entry in WalkBuilder::new(&docs).standard_filters(false).build() {
            let entry = entry?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap_or_else(|_| entry.path())
                .to_path_buf();
            if matcher.is_match(&relative) {
                files.push(relative);
            }
        }
        files.sort();
        Ok(files)
    }

    fn section(&self, relative: &Path, tx_slug: &str) -> String {
        let source_file = forward_slashes(relative);
        let suffix = format!(".{}.md", self.settings.source_lang);
        let stem = source_file.strip_suffix(&suffix).unwrap_or(&source_file);

        let mut out = String::new();
        let s = &self.settings;
        let _ = writeln!(out, "[o:{}:p:{}:r:{tx_slug}]", s.organization, s.project);
        let _ = writeln!(out, "file_filter = {stem}.<lang>.md");
        let _ = writeln!(out, "source_file = {source_file}");
        let _ = writeln!(out, "source_lang = {}", s.source_lang);
        let _ = writeln!(out, "type = {}", s.i18n_type);
        out.push('\n');
        out
    }
}

impl ConfigPlugin for MkdocsPlugin {
    fn name(&self) -> &'static str {
        "mkdocs"
    }

    fn description(&self) -> &'static str {
        "Write .tx/config from MkDocs pages declaring tx_slug in their front matter"
    }

    fn generate(&self, root: &Path) -> Result<PluginOutput, PluginError> {
        tracing::info!(root = %root.display(), "generating translation config");

        let mut config = format!("[main]\nhost = {}\n\n", self.settings.host);
        let mut resources = 0;
        for relative in self.source_files(root)? {
            let path = root.join(&relative);
            let text = std::fs::read_to_string(&path).map_err(|e| PluginError::io(&path, e))?;
            let Some(tx_slug) = tx_slug(&text).map_err(|source| PluginError::FrontMatter {
                path: path.clone(),
                source,
            })?
            else {
                continue;
            };
            tracing::debug!(file = %relative.display(), %tx_slug, "resource found");
            config.push_str(&self.section(&relative, &tx_slug));
            resources += 1;
        }

        let dir = root.join(".tx");
        std::fs::create_dir_all(&dir).map_err(|e| PluginError::io(&dir, e))?;
        let path = dir.join("config");
        std::fs::write(&path, config).map_err(|e| PluginError::io(&path, e))?;

        tracing::info!(resources, path = %path.display(), "translation config written");
        Ok(PluginOutput { path, resources })
    }
}

#[derive(Debug, Default, Deserialize)]
struct FrontMatter {
    #[serde(default)]
    tx_slug: Option<String>,
}

/// `tx_slug` from a leading `---` delimited YAML block, if any.
fn tx_slug(text: &str) -> Result<Option<String>, serde_yaml::Error> {
    let Some(body) = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
    else {
        return Ok(None);
    };
    let Some(end) = body.find("\n---") else {
        return Ok(None);
    };
    let yaml = &body[..end];
    if yaml.trim().is_empty() {
        return Ok(None);
    }
    let front: Option<FrontMatter> = serde_yaml::from_str(yaml)?;
    Ok(front
        .and_then(|f| f.tx_slug)
        .filter(|slug| !slug.trim().is_empty()))
}

fn forward_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
