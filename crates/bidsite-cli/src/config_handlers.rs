//! Handler functions for config CLI commands.

use std::path::PathBuf;

use bidsite_core::util::files::write_atomic;
use bidsite_core::{Error, Result};

use crate::cli::ConfigAction;
use crate::config::BidsiteConfig;

/// Handle a config subcommand.
pub fn handle_config_command(
    config_path: Option<&str>,
    config: &BidsiteConfig,
    action: ConfigAction,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Show => cmd_config_show(config),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force).map(|path| {
            println!("Config file created at {}", path.display());
        }),
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    match BidsiteConfig::resolve_config_path(config_path) {
        Some(path) => {
            println!("{}", path.display());
            if !path.exists() {
                eprintln!("(file does not exist, run `bidsite config init` to create it)");
            }
            Ok(())
        }
        None => Err(Error::config(
            "Could not determine config directory for this platform",
        )),
    }
}

/// Print the effective configuration.
pub fn cmd_config_show(config: &BidsiteConfig) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Create a default configuration file, returning where it was written.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => BidsiteConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    let toml_str = BidsiteConfig::default().to_toml_string()?;
    write_atomic(&path, toml_str.as_bytes())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let written = cmd_config_init(Some(path.to_str().unwrap()), false).unwrap();
        assert_eq!(written, path);

        let loaded = BidsiteConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(loaded.content, BidsiteConfig::default().content);
    }

    #[test]
    fn test_config_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine").unwrap();

        let err = cmd_config_init(Some(path.to_str().unwrap()), false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        cmd_config_init(Some(path.to_str().unwrap()), true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[content]"));
    }

    #[test]
    fn test_config_path_explicit() {
        assert!(cmd_config_path(Some("/tmp/bidsite-test.toml")).is_ok());
    }

    #[test]
    fn test_config_show() {
        assert!(cmd_config_show(&BidsiteConfig::default()).is_ok());
    }
}
