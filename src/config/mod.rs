#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use toml_config::SessionFile;

/// Settings after merging the session file with command line overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub verbose: bool,
    pub log_level: Option<String>,
}

impl Settings {
    pub fn resolve(file: Option<&SessionFile>, verbose: bool) -> Self {
        let log_level = file.and_then(|f| f.log_level()).map(str::to_string);

        Self { verbose, log_level }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> crate::utils::error::Result<Self> {
        use crate::utils::validation::{validate_path, Validate};

        let file = match &cli.config {
            Some(path) => {
                validate_path("config", path)?;
                let file = SessionFile::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        Ok(Self::resolve(file.as_ref(), cli.verbose))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let settings = Settings::resolve(None, false);
        assert!(!settings.verbose);
        assert!(settings.log_level.is_none());
    }

    #[test]
    fn test_resolve_takes_level_from_file() {
        let file = SessionFile::from_toml_str("[logging]\nlevel = \"info\"\n").unwrap();
        let settings = Settings::resolve(Some(&file), true);
        assert!(settings.verbose);
        assert_eq!(settings.log_level.as_deref(), Some("info"));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_without_arguments() {
        use clap::Parser;

        let cli = CliConfig::try_parse_from(["isbn-check"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.verbose);

        let settings = Settings::from_cli(&cli).unwrap();
        assert!(settings.log_level.is_none());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_has_no_banner_switch() {
        use clap::Parser;

        assert!(CliConfig::try_parse_from(["isbn-check", "--no-banner"]).is_err());
    }
}
