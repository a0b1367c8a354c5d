//! Ephemeral units of work built per push or pull invocation.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::slug::translation_file_name;

/// One push: upload `path` as the source content of `resource_slug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushUnit {
    pub project_slug: String,
    pub resource_slug: String,
    pub path: PathBuf,
}

/// One pull: download the `language_code` translation of `resource_slug`
/// into `output_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullUnit {
    pub project_slug: String,
    pub resource_slug: String,
    pub language_code: String,
    pub output_path: PathBuf,
}

impl PullUnit {
    /// Build a pull unit whose output file lives in `output_dir`.
    #[must_use]
    pub fn new(
        project_slug: &str,
        resource_slug: &str,
        language_code: &str,
        output_dir: &Path,
    ) -> Self {
        Self {
            project_slug: project_slug.to_string(),
            resource_slug: resource_slug.to_string(),
            language_code: language_code.to_string(),
            output_path: output_dir.join(translation_file_name(resource_slug, language_code)),
        }
    }

    /// Expand resources × languages, languages in the outer loop.
    #[must_use]
    pub fn cross_product(
        project_slug: &str,
        resource_slugs: &[String],
        language_codes: &[String],
        output_dir: &Path,
    ) -> Vec<Self> {
        language_codes
            .iter()
            .flat_map(|language| {
                resource_slugs
                    .iter()
                    .map(move |resource| Self::new(project_slug, resource, language, output_dir))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn cross_product_orders_languages_outer() {
        let units = PullUnit::cross_product(
            "demo",
            &strings(&["a", "b"]),
            &strings(&["fr", "de"]),
            Path::new("/tmp/out"),
        );

        let order: Vec<(&str, &str)> = units
            .iter()
            .map(|u| (u.language_code.as_str(), u.resource_slug.as_str()))
            .collect();
        assert_eq!(order, vec![("fr", "a"), ("fr", "b"), ("de", "a"), ("de", "b")]);
    }

    #[test]
    fn cross_product_paths_are_unique() {
        let units = PullUnit::cross_product(
            "demo",
            &strings(&["a", "b", "c"]),
            &strings(&["fr", "de", "it"]),
            Path::new("out"),
        );
        let paths: HashSet<_> = units.iter().map(|u| u.output_path.clone()).collect();
        assert_eq!(units.len(), 9);
        assert_eq!(paths.len(), 9);
    }

    #[test]
    fn cross_product_with_no_languages_is_empty() {
        let units = PullUnit::cross_product("demo", &strings(&["a"]), &[], Path::new("out"));
        assert!(units.is_empty());
    }

    #[test]
    fn pull_unit_output_path() {
        let unit = PullUnit::new("demo", "a", "fr", Path::new("/tmp/out"));
        assert_eq!(unit.output_path, PathBuf::from("/tmp/out/a_fr"));
    }
}
