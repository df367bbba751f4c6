use std::path::PathBuf;

use clap::Parser;

/// Terminal client for the animation generation service.
#[derive(Debug, Parser)]
#[command(name = "animagen", version, about)]
pub struct Args {
    /// Base URL of the generation server, overriding the config file.
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Path to an alternative config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// One-shot mode: submit this prompt without starting the TUI, print
    /// the video URL on success, and exit non-zero on failure.
    #[arg(long, value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Do not launch the external video player on success.
    #[arg(long)]
    pub no_play: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_tui_mode() {
        let args = Args::parse_from(["animagen"]);
        assert!(args.prompt.is_none());
        assert!(args.server.is_none());
        assert!(!args.no_play);
    }

    #[test]
    fn one_shot_flags_parse() {
        let args = Args::parse_from([
            "animagen",
            "--prompt",
            "a rotating cube",
            "--server",
            "http://10.0.0.2:5000",
            "--no-play",
        ]);
        assert_eq!(args.prompt.as_deref(), Some("a rotating cube"));
        assert_eq!(args.server.as_deref(), Some("http://10.0.0.2:5000"));
        assert!(args.no_play);
    }
}
