use clap::{Args, Parser, Subcommand, ValueEnum};

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub base_url: Option<String>,
    pub quiet: bool,
    pub verbose: bool,
}

/// Top-level CLI parser for the `lait` binary.
#[derive(Debug, Parser)]
#[command(
    name = "lait",
    version,
    about = "LAIT demo seeding and smoke-test harness"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Override the configured backend base URL
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            base_url: self.base_url.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Full smoke test: health, auth, fixture uploads, verification checks.
    Smoke,
    /// Seed the fixture invoices: health, auth, uploads.
    Seed(SeedArgs),
    /// Probe backend health only.
    Health,
}

/// Arguments for `lait seed`.
#[derive(Clone, Debug, Args)]
pub struct SeedArgs {
    /// Seed only the first N fixture invoices.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["lait", "--format", "json", "--verbose", "smoke"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Smoke));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["lait", "health", "--quiet", "--base-url", "http://ci:5003"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert_eq!(cli.base_url.as_deref(), Some("http://ci:5003"));
        assert!(matches!(cli.command, Commands::Health));
    }

    #[test]
    fn seed_limit_parses() {
        let cli = Cli::try_parse_from(["lait", "seed", "--limit", "3"]).expect("cli should parse");
        match cli.command {
            Commands::Seed(args) => assert_eq!(args.limit, Some(3)),
            other => panic!("expected seed, got {other:?}"),
        }
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["lait", "--format", "xml", "smoke"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_accepts_all_supported_values() {
        for value in ["text", "json"] {
            let cli =
                Cli::try_parse_from(["lait", "--format", value, "smoke"]).expect("cli should parse");
            assert!(matches!(cli.command, Commands::Smoke));
        }
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["lait", "--base-url", "http://demo:5003", "smoke"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.base_url.as_deref(), Some("http://demo:5003"));
    }
}
