use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "crate-version")]
#[command(version, about = "Look up the latest non-yanked version of a crate on crates.io")]
pub struct Cli {
    /// Name of the crate to look up
    #[arg(value_name = "CRATE")]
    pub crate_name: String,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Registry API base URL [env: CRATE_VERSION_REGISTRY]
    #[arg(long, value_name = "URL")]
    pub registry: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_crate_name() {
        let cli = Cli::try_parse_from(["crate-version", "serde"]).unwrap();

        assert_eq!(cli.crate_name, "serde");
        assert!(!cli.json);
        assert_eq!(cli.registry, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_options() {
        let cli = Cli::try_parse_from([
            "crate-version",
            "--json",
            "--registry",
            "http://mirror.test/api/v1/crates",
            "-v",
            "tokio",
        ])
        .unwrap();

        assert_eq!(cli.crate_name, "tokio");
        assert!(cli.json);
        assert_eq!(
            cli.registry.as_deref(),
            Some("http://mirror.test/api/v1/crates")
        );
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_missing_crate_name() {
        let err = Cli::try_parse_from(["crate-version"]).unwrap_err();

        assert!(err.use_stderr());
    }

    #[test]
    fn rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["crate-version", "serde", "tokio"]).is_err());
    }
}
