use clap::{Parser, ValueEnum};

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `deuda` binary.
#[derive(Debug, Parser)]
#[command(
    name = "deuda",
    version,
    about = "Debtor registry history lookup rendered as aligned series"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Table coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract global flags, falling back to the configured default format.
    pub fn global_flags(&self, general: &deuda_config::GeneralConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&general.default_format, true)
                .map_err(|error| anyhow::anyhow!("invalid general.default_format: {error}"))?,
        };
        Ok(GlobalFlags {
            format,
            color: self.color,
            quiet: self.quiet,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use deuda_config::GeneralConfig;

    use super::{Cli, ColorMode, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["deuda", "--format", "table", "--verbose", "schema"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Schema));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["deuda", "check", "20-12345678-6", "--format", "raw", "-q"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Check(ref args) if args.input == "20-12345678-6"));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["deuda", "--format", "xml", "schema"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn configured_format_is_the_fallback() {
        let config = GeneralConfig {
            default_format: "table".to_string(),
        };

        let cli = Cli::try_parse_from(["deuda", "schema"]).unwrap();
        let flags = cli.global_flags(&config).unwrap();
        assert_eq!(flags.format, OutputFormat::Table);
        assert_eq!(flags.color, ColorMode::Auto);

        let cli = Cli::try_parse_from(["deuda", "-f", "json", "schema"]).unwrap();
        assert_eq!(cli.global_flags(&config).unwrap().format, OutputFormat::Json);
    }

    #[test]
    fn situation_accepts_negative_codes() {
        let cli = Cli::try_parse_from(["deuda", "situation", "-1"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Situation(ref args) if args.code == -1));
    }

    #[test]
    fn chart_requires_file() {
        assert!(Cli::try_parse_from(["deuda", "chart"]).is_err());
        let cli = Cli::try_parse_from(["deuda", "chart", "--file", "resp.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Chart(_)));
    }
}
