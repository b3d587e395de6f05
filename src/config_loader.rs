use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{SemverError, SemverResult};
use crate::version::Version;

pub const DEFAULT_CONFIG_FILE: &str = "semverkit.toml";
pub const CONFIG_PATH_ENV: &str = "SEMVERKIT_CONFIG_PATH";
pub const ENV_PREFIX: &str = "SEMVERKIT_";

/// Which rendering the CLI prints by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Full,
    Short,
    Core,
}

impl RenderFormat {
    pub fn render(&self, version: &Version) -> String {
        match self {
            RenderFormat::Full => version.full(),
            RenderFormat::Short => version.short(),
            RenderFormat::Core => version.core(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SemverConfig {
    #[serde(default)]
    pub format: RenderFormat,
    #[serde(default)]
    pub json: bool,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for SemverConfig {
    fn default() -> Self {
        SemverConfig {
            format: RenderFormat::default(),
            json: false,
            log_filter: default_log_filter(),
        }
    }
}

/// Layered configuration: defaults, then the TOML file, then `SEMVERKIT_*`
/// environment variables.
///
/// The file is `path` if given, else `$SEMVERKIT_CONFIG_PATH`, else
/// `semverkit.toml` in the working directory. A missing file is not an error.
pub fn load_config(path: Option<&Path>) -> SemverResult<SemverConfig> {
    let file = match path {
        Some(p) => p.to_path_buf(),
        None => std::env::var(CONFIG_PATH_ENV)
            .map(Into::into)
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into()),
    };
    debug!(file = %file.display(), "loading configuration");

    let figment = Figment::from(Serialized::defaults(SemverConfig::default()))
        .merge(Toml::file(&file))
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["config_path"]));

    let config: SemverConfig = figment.extract()?;

    if config.log_filter.trim().is_empty() {
        return Err(SemverError::config("log_filter must not be empty"));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::io::Write;

    #[test]
    fn defaults_apply_without_file_or_env() {
        Jail::expect_with(|_jail| {
            let config = load_config(None).map_err(|e| e.to_string())?;
            assert_eq!(config.format, RenderFormat::Full);
            assert!(!config.json);
            assert_eq!(config.log_filter, "warn");
            Ok(())
        });
    }

    #[test]
    fn file_then_env_layering() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                format = "short"
                json = true
                "#,
            )?;
            let config = load_config(None).map_err(|e| e.to_string())?;
            assert_eq!(config.format, RenderFormat::Short);
            assert!(config.json);

            jail.set_env("SEMVERKIT_FORMAT", "core");
            let config = load_config(None).map_err(|e| e.to_string())?;
            assert_eq!(config.format, RenderFormat::Core);
            Ok(())
        });
    }

    #[test]
    fn config_path_env_selects_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", r#"log_filter = "debug""#)?;
            jail.set_env(CONFIG_PATH_ENV, "custom.toml");
            let config = load_config(None).map_err(|e| e.to_string())?;
            assert_eq!(config.log_filter, "debug");
            Ok(())
        });
    }

    #[test]
    fn explicit_path_and_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"  \"").unwrap();

        Jail::expect_with(|_jail| {
            let err = load_config(Some(file.path())).unwrap_err();
            assert!(matches!(err, SemverError::Config { .. }));
            assert!(err.to_string().contains("log_filter"));
            Ok(())
        });
    }

    #[test]
    fn unknown_format_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_FILE, r#"format = "long""#)?;
            assert!(load_config(None).is_err());
            Ok(())
        });
    }

    #[test]
    fn render_format_dispatch() {
        let v = Version::new(1, 0, 0).with_pre_release("beta").with_build("0002");
        assert_eq!(RenderFormat::Full.render(&v), "1.0.0-beta+0002");
        assert_eq!(RenderFormat::Short.render(&v), "1.0.0-beta");
        assert_eq!(RenderFormat::Core.render(&v), "1.0.0");
    }
}
