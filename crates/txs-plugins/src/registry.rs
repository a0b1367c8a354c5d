use std::collections::BTreeMap;

use crate::error::PluginError;
use crate::mkdocs::MkdocsPlugin;
use crate::ConfigPlugin;

/// Name-keyed set of configuration generators.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: BTreeMap<&'static str, Box<dyn ConfigPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in plugin with default settings.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(MkdocsPlugin::default()));
        registry
    }

    /// Add a plugin, replacing any registered under the same name.
    pub fn register(&mut self, plugin: Box<dyn ConfigPlugin>) {
        tracing::debug!(plugin = plugin.name(), "registered");
        self.plugins.insert(plugin.name(), plugin);
    }

    /// Registered plugin names, sorted.
    pub fn discover(&self) -> Vec<&'static str> {
        self.plugins.keys().copied().collect()
    }

    /// Every registered plugin, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &dyn ConfigPlugin> {
        self.plugins.values().map(|plugin| &**plugin)
    }

    /// # Errors
    ///
    /// Returns [`PluginError::NotFound`] for an unregistered name.
    pub fn load(&self, name: &str) -> Result<&dyn ConfigPlugin, PluginError> {
        self.plugins
            .get(name)
            .map(|plugin| &**plugin)
            .ok_or_else(|| PluginError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::PluginOutput;

    struct Noop;

    impl ConfigPlugin for Noop {
        fn name(&self) -> &'static str {
            "noop"
        }

        fn description(&self) -> &'static str {
            "does nothing"
        }

        fn generate(&self, root: &Path) -> Result<PluginOutput, PluginError> {
            Ok(PluginOutput {
                path: root.to_path_buf(),
                resources: 0,
            })
        }
    }

    #[test]
    fn builtins_include_mkdocs() {
        let registry = PluginRegistry::with_builtins();
        assert_eq!(registry.discover(), vec!["mkdocs"]);
        assert_eq!(registry.load("mkdocs").unwrap().name(), "mkdocs");
    }

    #[test]
    fn discover_is_sorted() {
        let mut registry = PluginRegistry::with_builtins();
        registry.register(Box::new(Noop));
        assert_eq!(registry.discover(), vec!["mkdocs", "noop"]);
        assert_eq!(registry.iter().count(), 2);
    }

    #[test]
    fn unknown_plugin_is_not_found() {
        let registry = PluginRegistry::new();
        let err = registry.load("sphinx").err().unwrap();
        assert!(matches!(err, PluginError::NotFound(name) if name == "sphinx"));
    }
}
