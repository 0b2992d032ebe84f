use clap::Parser;
use std::path::PathBuf;

/// Generate a third party license report from a build's dependency inventory
#[derive(Parser, Debug)]
#[command(name = "dependency-license-report")]
#[command(version)]
#[command(
    about = "Generate an HTML license report for the resolved dependencies of a project",
    long_about = None
)]
pub struct Args {
    /// Path to the dependency inventory exported by the build tool
    #[arg(short, long, default_value = "dependency-inventory.json")]
    pub inventory: PathBuf,

    /// Output file or directory (defaults to build/reports/dependency-license/index.html)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration to report (case-insensitive, defaults to "runtime")
    /// Can be specified multiple times: -c runtime -c compile
    #[arg(short = 'c', long = "configuration", value_name = "NAME")]
    pub configurations: Vec<String>,

    /// Exclude artifacts matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "com.example:*" -e "debug-*"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Path to a config file (defaults to dependency-license-report.config.yml next to the inventory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Per-request timeout for remote repositories, in seconds
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output (warnings and errors are still printed)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["dependency-license-report"]).unwrap();
        assert_eq!(args.inventory, PathBuf::from("dependency-inventory.json"));
        assert!(args.output.is_none());
        assert!(args.configurations.is_empty());
        assert!(args.exclude.is_empty());
        assert!(args.config.is_none());
        assert!(args.timeout_secs.is_none());
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_repeatable_options() {
        let args = Args::try_parse_from([
            "dependency-license-report",
            "-c",
            "runtime",
            "--configuration",
            "compile",
            "-e",
            "com.example:*",
            "-e",
            "debug-*",
        ])
        .unwrap();
        assert_eq!(args.configurations, vec!["runtime", "compile"]);
        assert_eq!(args.exclude, vec!["com.example:*", "debug-*"]);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = Args::try_parse_from(["dependency-license-report", "--timeout-secs", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["dependency-license-report", "-q", "-v"]);
        assert!(result.is_err());
    }
}
