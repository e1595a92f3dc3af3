//! Project definition loading.
//!
//! A project definition is a `pakkit.toml` file whose `[package]` table
//! deserializes into [`PackageOptions`].  The CLI owns file I/O and default
//! injection; the core crate only ever sees the finished options value.

use std::path::Path;

use pakkit_core::domain::PackageOptions;

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Load a project definition from `path`.
///
/// Missing `version` / `license` keys are filled in from the app config
/// before deserialisation so that user-level defaults win over the
/// built-in ones.
pub fn load(path: &Path, config: &AppConfig) -> CliResult<PackageOptions> {
    if !path.exists() {
        return Err(CliError::ProjectFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path)?;
    let mut doc: toml::Table = toml::from_str(&raw).map_err(|e| CliError::ConfigError {
        message: format!("invalid TOML in {}: {e}", path.display()),
        source: Some(Box::new(e)),
    })?;

    let package = doc
        .get_mut("package")
        .and_then(toml::Value::as_table_mut)
        .ok_or_else(|| CliError::ConfigError {
            message: format!("{} is missing a [package] table", path.display()),
            source: None,
        })?;

    package
        .entry("version")
        .or_insert_with(|| toml::Value::String(config.defaults.version.clone()));
    package
        .entry("license")
        .or_insert_with(|| toml::Value::String(config.defaults.license.clone()));

    let options: PackageOptions =
        package
            .clone()
            .try_into()
            .map_err(|e: toml::de::Error| CliError::ConfigError {
                message: format!("invalid [package] table in {}: {e}", path.display()),
                source: Some(Box::new(e)),
            })?;

    if options.name.trim().is_empty() {
        return Err(CliError::InvalidInput {
            message: format!("{} must set package.name", path.display()),
        });
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_project(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pakkit.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn minimal_definition_loads() {
        let (_dir, path) = write_project("[package]\nname = \"my-app\"\n");
        let opts = load(&path, &AppConfig::default()).unwrap();
        assert_eq!(opts.name, "my-app");
        assert_eq!(opts.version, "0.1.0");
        assert_eq!(opts.license, "Apache-2.0");
    }

    #[test]
    fn config_defaults_fill_omitted_fields() {
        let (_dir, path) = write_project("[package]\nname = \"my-app\"\n");
        let mut config = AppConfig::default();
        config.defaults.version = "2.0.0".into();
        config.defaults.license = "MIT".into();

        let opts = load(&path, &config).unwrap();
        assert_eq!(opts.version, "2.0.0");
        assert_eq!(opts.license, "MIT");
    }

    #[test]
    fn explicit_fields_win_over_config_defaults() {
        let (_dir, path) = write_project(
            "[package]\nname = \"my-app\"\nversion = \"9.9.9\"\nlicense = \"ISC\"\n",
        );
        let mut config = AppConfig::default();
        config.defaults.version = "2.0.0".into();

        let opts = load(&path, &config).unwrap();
        assert_eq!(opts.version, "9.9.9");
        assert_eq!(opts.license, "ISC");
    }

    #[test]
    fn dependency_lists_deserialize() {
        let (_dir, path) = write_project(
            r#"[package]
name = "my-app"
deps = ["express@^4.18.0", "lodash"]
dev-deps = ["typescript@~5.3"]
peer-deps = ["react@^18"]

[package.peer-dependency-options]
pinned-dev-dependency = false
"#,
        );
        let opts = load(&path, &AppConfig::default()).unwrap();
        assert_eq!(opts.deps.len(), 2);
        assert_eq!(opts.dev_deps, vec!["typescript@~5.3"]);
        assert!(!opts.peer_dependency_options.pinned_dev_dependency);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = load(&path, &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::ProjectFileNotFound { .. }));
    }

    #[test]
    fn missing_package_table_is_config_error() {
        let (_dir, path) = write_project("[project]\nname = \"oops\"\n");
        let err = load(&path, &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn empty_name_is_invalid_input() {
        let (_dir, path) = write_project("[package]\nname = \"\"\n");
        let err = load(&path, &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }
}
