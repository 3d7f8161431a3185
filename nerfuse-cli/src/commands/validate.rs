//! Validate command implementation

use crate::error::CliResult;
use clap::Args;
use nerfuse_core::Settings;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the settings file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        println!("Validating settings: {}", self.config.display());

        // The known-verbs file is read as part of building the configuration
        let loaded = Settings::from_file(&self.config)
            .and_then(|settings| Ok((settings.to_builder().build()?, settings)));

        match loaded {
            Ok((config, settings)) => {
                println!("✓ Settings are valid!");
                println!("  Input format: {}", settings.fusion.input_format);
                println!(
                    "  Ignored labels: {}",
                    config.ignore_labels().collect::<Vec<_>>().join(", ")
                );
                println!(
                    "  Known verbs: {}",
                    config.splitters().known_verb_count()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Settings are invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            config: PathBuf::from("nerfuse.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("nerfuse.toml"));
    }

    #[test]
    fn test_validate_valid_settings() {
        let temp_dir = TempDir::new().unwrap();
        let verbs_path = temp_dir.path().join("verbs.txt");
        std::fs::write(&verbs_path, "said\n").unwrap();

        let config_path = temp_dir.path().join("nerfuse.toml");
        std::fs::write(
            &config_path,
            format!(
                "[fusion]\nignore_labels = [\"MONEY\", \"PERCENT\"]\n\n[heuristics]\nknown_verbs = {:?}\n",
                verbs_path.display().to_string()
            ),
        )
        .unwrap();

        let args = ValidateArgs {
            config: config_path,
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_settings() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[fusion]\nignore_labels = \"MONEY\"\n").unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_missing_known_verbs() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "[heuristics]\nknown_verbs = \"/nonexistent/verbs.txt\"\n"
        )
        .unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }
}
