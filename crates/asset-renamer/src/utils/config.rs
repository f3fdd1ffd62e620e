use camino::{Utf8Path, Utf8PathBuf};
use eyre::{eyre, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::commands::OutputFormat;

const CONFIG_FILE_NAME: &str = "asset-renamer.toml";

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Basename folded into every asset name (e.g. the rig name)
    pub basename: Option<String>,
    /// Asset type used by `format` when none is given on the command line
    pub asset_type: Option<String>,
    /// Default output format for `batch`
    pub output_format: Option<OutputFormat>,
}

impl Config {
    pub fn resolve_basename(&self, cli_basename: Option<String>) -> String {
        cli_basename
            .or_else(|| self.basename.clone())
            .unwrap_or_default()
    }

    pub fn resolve_output_format(&self, cli_format: Option<OutputFormat>) -> OutputFormat {
        cli_format.or(self.output_format).unwrap_or_default()
    }
}

pub fn default_config_path() -> Result<Utf8PathBuf> {
    let exe_path = std::env::current_exe()?;
    let mut dir = exe_path
        .parent()
        .ok_or_else(|| eyre!("executable has no parent directory"))?
        .to_path_buf();
    dir.push(CONFIG_FILE_NAME);

    Utf8PathBuf::from_path_buf(dir).map_err(|path| eyre!("non UTF-8 config path: {:?}", path))
}

pub fn load_config(path: &Utf8Path) -> Result<Config> {
    if path.exists() {
        let contents = fs::read_to_string(path.as_std_path())
            .wrap_err_with(|| format!("failed to read config (path: {})", path))?;
        let cfg: Config = toml::from_str(&contents)
            .wrap_err_with(|| format!("failed to parse config (path: {})", path))?;
        Ok(cfg)
    } else {
        Ok(Config::default())
    }
}

pub fn save_config(path: &Utf8Path, cfg: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(cfg)?;
    fs::write(path.as_std_path(), toml_str)
        .wrap_err_with(|| format!("failed to write config (path: {})", path))?;
    Ok(())
}

/// Loads config and ensures a file exists by writing defaults if missing.
/// Returns the loaded config and the resolved path it was loaded/saved from.
pub fn load_or_create_config(path: Option<&Utf8Path>) -> Result<(Config, Utf8PathBuf)> {
    let final_path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    let cfg = if final_path.exists() {
        load_config(final_path.as_path())?
    } else {
        let cfg = Config::default();
        save_config(final_path.as_path(), &cfg)?;
        cfg
    };

    Ok((cfg, final_path))
}

/// Resolves the basename (CLI overrides config). If CLI provided, persist updated value.
pub fn resolve_and_persist_basename(
    cfg: &mut Config,
    path: &Utf8Path,
    cli_basename: Option<String>,
) -> Result<String> {
    let persist = cli_basename.is_some();
    let basename = cfg.resolve_basename(cli_basename);
    if persist && cfg.basename.as_deref() != Some(basename.as_str()) {
        cfg.basename = Some(basename.clone());
        save_config(path, cfg)?;
    }
    Ok(basename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_toml() {
        let cfg: Config = toml::from_str(
            r#"
            basename = "Zombie"
            asset_type = "Animation"
            output_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.basename.as_deref(), Some("Zombie"));
        assert_eq!(cfg.asset_type.as_deref(), Some("Animation"));
        assert_eq!(cfg.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_empty_config_is_default() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cfg = Config {
            basename: Some("Zombie".to_string()),
            asset_type: None,
            output_format: Some(OutputFormat::Csv),
        };

        assert_eq!(cfg.resolve_basename(None), "Zombie");
        assert_eq!(cfg.resolve_basename(Some("Mutant".to_string())), "Mutant");
        assert_eq!(cfg.resolve_output_format(None), OutputFormat::Csv);
        assert_eq!(cfg.resolve_output_format(Some(OutputFormat::Flat)), OutputFormat::Flat);
        assert_eq!(Config::default().resolve_basename(None), "");
        assert_eq!(Config::default().resolve_output_format(None), OutputFormat::Table);
    }

    #[test]
    fn test_config_round_trip() {
        let cfg = Config {
            basename: Some("Zombie".to_string()),
            asset_type: Some("Texture2D".to_string()),
            output_format: Some(OutputFormat::Flat),
        };
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(toml::from_str::<Config>(&toml_str).unwrap(), cfg);
    }
}
