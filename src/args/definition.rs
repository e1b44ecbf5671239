//! Command-line argument definition and processing.

use clap::Parser;

use crate::theme::Settings;

/// TokenTrackr - a terminal dashboard for token transfer events from a GraphQL indexer
#[derive(Parser, Debug)]
#[command(name = "tokentrackr")]
#[command(version)]
#[command(about = "A terminal dashboard for token transfer events from a GraphQL indexer", long_about = None)]
pub struct Args {
    /// GraphQL endpoint to query (overrides `endpoint` in settings.conf)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Rows per page on the Paginated tab (overrides `page_size`)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Start with the dark palette
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Start with the light palette
    #[arg(long)]
    pub light: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// What: Apply command-line overrides on top of file settings.
    ///
    /// Inputs:
    /// - `settings`: Settings loaded from `settings.conf`
    ///
    /// Output:
    /// - The effective settings, re-normalized.
    ///
    /// Details:
    /// - Only flags the user actually passed override the file.
    #[must_use]
    pub fn apply_to(&self, mut settings: Settings) -> Settings {
        if let Some(endpoint) = &self.endpoint {
            settings.endpoint.clone_from(endpoint);
        }
        if let Some(n) = self.page_size {
            settings.page_size = n;
        }
        if self.dark {
            settings.dark_mode = true;
        } else if self.light {
            settings.dark_mode = false;
        }
        crate::theme::normalize(&mut settings);
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Flags override only what they name.
    fn overrides_apply_on_top_of_settings() {
        let args = Args::parse_from([
            "tokentrackr",
            "--endpoint",
            "http://localhost:8000/subgraphs/name/usdt",
            "--light",
        ]);
        let base = Settings::default();
        let eff = args.apply_to(base.clone());
        assert_eq!(eff.endpoint, "http://localhost:8000/subgraphs/name/usdt");
        assert!(!eff.dark_mode);
        assert_eq!(eff.page_size, base.page_size);
    }

    #[test]
    fn page_size_is_normalized() {
        let args = Args::parse_from(["tokentrackr", "--page-size", "0"]);
        assert_eq!(args.apply_to(Settings::default()).page_size, 1);
    }

    #[test]
    fn dark_and_light_conflict() {
        assert!(Args::try_parse_from(["tokentrackr", "--dark", "--light"]).is_err());
    }
}
