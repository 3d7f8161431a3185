//! Generate config command implementation

use crate::error::CliResult;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Known verbs file to reference from the template
    #[arg(long, value_name = "FILE")]
    pub known_verbs: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        use std::fs;

        println!("Generating settings template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Settings template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the settings file to choose ignored labels");
        println!("2. Validate your settings:");
        println!("   nerfuse validate --config {}", self.output.display());
        println!("3. Use them for processing:");
        println!(
            "   nerfuse process --config {} < tagged.txt",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template settings content
    fn generate_template(&self) -> String {
        let known_verbs = match &self.known_verbs {
            Some(path) => format!("known_verbs = {:?}", path.display().to_string()),
            None => "# known_verbs = \"verbs.txt\"".to_string(),
        };

        format!(
            r#"# nerfuse settings

[fusion]
# Runs with these labels are written as plain words instead of one fused token
ignore_labels = ["MONEY"]

# Annotation convention of the tagger output: "inline-xml" or "slash-tags"
input_format = "inline-xml"

[heuristics]
# Newline-separated known verbs, added to the heuristic splitter set
{known_verbs}
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nerfuse_core::{InputFormat, Settings};
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("nerfuse.toml"),
            known_verbs: None,
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("nerfuse.toml"));
    }

    #[test]
    fn test_template_parses_as_defaults() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("nerfuse.toml"),
            known_verbs: None,
        };

        let settings =
            Settings::from_toml_str(&args.generate_template(), Path::new("template")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_template_with_known_verbs() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("nerfuse.toml"),
            known_verbs: Some(PathBuf::from("data/verbs.txt")),
        };

        let settings =
            Settings::from_toml_str(&args.generate_template(), Path::new("template")).unwrap();
        assert_eq!(
            settings.heuristics.known_verbs,
            Some(PathBuf::from("data/verbs.txt"))
        );
        assert_eq!(settings.fusion.input_format, InputFormat::InlineXml);
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("nerfuse.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            known_verbs: None,
        };

        assert!(args.execute().is_ok());
        assert!(output_path.exists());

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("ignore_labels = [\"MONEY\"]"));
    }
}
