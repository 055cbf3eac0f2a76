/// CLI argument definitions via clap derive.
use clap::Parser;

/// teatime — make sure you don't forget about the kettle you boiled.
#[derive(Debug, Parser)]
#[command(
    name = "teatime",
    about = "Utility to make sure you don't forget about the kettle you boiled",
    version
)]
pub struct Cli {
    /// How long to wait for the kettle (e.g. "3m", "45s").
    #[arg(short = 'k', long, value_name = "DURATION")]
    pub kettle: Option<String>,

    /// How long to wait for the tea to brew (e.g. "4m").
    #[arg(short = 'b', long, value_name = "DURATION")]
    pub brew: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_flags() {
        let cli = Cli::parse_from(["teatime", "-k", "3m", "-b", "4m"]);
        assert_eq!(cli.kettle.as_deref(), Some("3m"));
        assert_eq!(cli.brew.as_deref(), Some("4m"));
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::parse_from(["teatime", "--kettle", "1h", "--brew", "2m"]);
        assert_eq!(cli.kettle.as_deref(), Some("1h"));
        assert_eq!(cli.brew.as_deref(), Some("2m"));
    }

    #[test]
    fn test_no_flags_is_valid() {
        let cli = Cli::parse_from(["teatime"]);
        assert!(cli.kettle.is_none());
        assert!(cli.brew.is_none());
    }
}
