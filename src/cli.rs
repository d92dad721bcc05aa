use clap::Parser;
use std::path::PathBuf;

/// Deepfake evidence review timeline
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Media file to review (mp4, avi, mov, jpg, png) - optional, can also drag-and-drop
    #[arg(value_name = "FILE")]
    pub media: Option<PathBuf>,

    /// Load a previously exported analysis report instead of running analysis
    #[arg(short = 'r', long = "report", value_name = "REPORT")]
    pub report: Option<PathBuf>,

    /// Media duration in seconds (stands in for container metadata)
    #[arg(short = 'd', long = "duration", value_name = "SECONDS")]
    pub duration: Option<f64>,

    /// Start playback on launch
    #[arg(short = 'a', long = "autoplay")]
    pub autoplay: bool,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Args {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_media_and_duration() {
        let args = Args::parse_from(["deepscope", "clip.mp4", "--duration", "63.5"]);
        assert_eq!(args.media.as_deref(), Some(std::path::Path::new("clip.mp4")));
        assert_eq!(args.duration, Some(63.5));
        assert!(!args.autoplay);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(
            Args::parse_from(["deepscope"]).log_level(),
            log::LevelFilter::Warn
        );
        assert_eq!(
            Args::parse_from(["deepscope", "-vv"]).log_level(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            Args::parse_from(["deepscope", "-vvvv"]).log_level(),
            log::LevelFilter::Trace
        );
    }
}
