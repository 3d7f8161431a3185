//! Process command implementation

use crate::error::{CliError, CliResult};
use crate::input::{resolve_patterns, InputSource};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use nerfuse_core::{FusionError, FusionPipeline, FusionStats, InputFormat, Settings};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob, `-` for stdin). Reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Annotation convention of the input [default: from settings, else inline-xml]
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormatArg>,

    /// File of newline-separated known verbs for the heuristic splitter set
    #[arg(long, value_name = "FILE")]
    pub known_verbs: Option<PathBuf>,

    /// Additional label to leave unfused (repeatable)
    #[arg(long = "ignore-label", value_name = "LABEL")]
    pub ignore_labels: Vec<String>,

    /// Do not ignore the default labels (MONEY, or those from the settings file)
    #[arg(long)]
    pub no_default_ignore: bool,

    /// Settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One space-joined line per input line
    Text,
    /// One JSON object per input line
    Json,
}

impl OutputFormat {
    /// Name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// Formatter writing to `writer`
    pub fn formatter<W>(self, writer: W) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        }
    }
}

/// Input formats accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormatArg {
    /// `<LABEL>first ... last</LABEL>` (Stanford inlineXML)
    InlineXml,
    /// `word/LABEL` with `O` outside entities (Stanford slashTags)
    SlashTags,
}

impl From<InputFormatArg> for InputFormat {
    fn from(arg: InputFormatArg) -> Self {
        match arg {
            InputFormatArg::InlineXml => InputFormat::InlineXml,
            InputFormatArg::SlashTags => InputFormat::SlashTags,
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging()?;

        log::info!("Starting entity fusion");
        log::debug!("Arguments: {:?}", self);

        // Configuration must be complete before any input is read
        let pipeline = self.build_pipeline()?;
        let sources = resolve_patterns(&self.input)?;
        let mut formatter = self.format.formatter(self.open_output()?);

        let mut total = FusionStats::default();
        for source in &sources {
            log::debug!("Reading {} as {}", source, pipeline.parser_name());
            let reader = source.open()?;
            let mut lines = pipeline.lines(reader);
            for line in lines.by_ref() {
                match line {
                    Ok(line) => formatter.format_line(&line)?,
                    Err(error) => {
                        formatter.finish()?;
                        return Err(Self::line_error(source, error));
                    }
                }
            }
            total += lines.stats();
        }
        formatter.finish()?;

        log::info!(
            "Processed {} lines ({} emitted, {} blank): {} entities fused, {} ignored runs",
            total.lines_read,
            total.lines_emitted,
            total.blank_lines,
            total.entities_fused,
            total.ignored_runs
        );

        Ok(())
    }

    /// Build the parse/fuse pipeline from the settings file and flags
    pub fn build_pipeline(&self) -> Result<FusionPipeline> {
        let settings = match &self.config {
            Some(path) => Settings::from_file(path)
                .map_err(|e| CliError::ConfigError(e.to_string()))?,
            None => Settings::default(),
        };

        let mut builder = settings.to_builder();
        if self.no_default_ignore {
            builder = builder.clear_ignore_labels();
        }
        builder = builder.ignore_labels(self.ignore_labels.iter().cloned());
        if let Some(path) = &self.known_verbs {
            builder = builder.known_verbs_file(path);
        }
        let config = builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let format = self
            .input_format
            .map(InputFormat::from)
            .unwrap_or(settings.fusion.input_format);

        log::debug!(
            "Ignoring labels {:?}; {} heuristic splitters",
            config.ignore_labels().collect::<Vec<_>>(),
            config.splitters().len()
        );

        Ok(FusionPipeline::new(format, config))
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    fn line_error(source: &InputSource, error: FusionError) -> anyhow::Error {
        match error {
            FusionError::Parse { line, source: err } => CliError::ProcessingError {
                source: source.to_string(),
                line,
                reason: err.to_string(),
            }
            .into(),
            FusionError::Decode { line, source: err } => CliError::ProcessingError {
                source: source.to_string(),
                line,
                reason: err.to_string(),
            }
            .into(),
            other => anyhow::Error::new(other).context(format!("Failed to read {}", source)),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when commands run in-process (tests)
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
