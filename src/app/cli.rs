use clap::Parser;
use std::path::PathBuf;

/// adb-music - control Android music playback from your terminal
#[derive(Parser, Debug, Default)]
#[command(name = "adb-music", version, about)]
pub struct Args {
    /// Device serial to control (skips the selection prompt)
    #[arg(long, short = 'd')]
    pub device: Option<String>,

    /// Number of bars in the visualizer
    #[arg(long, short = 'b')]
    pub bars: Option<usize>,

    /// Tallest bar, in rows
    #[arg(long, short = 'H')]
    pub max_height: Option<u16>,

    /// Width of each bar, in columns
    #[arg(long, short = 'w')]
    pub bar_width: Option<u16>,

    /// Milliseconds between frames
    #[arg(long, short = 'i')]
    pub interval: Option<u64>,

    /// Random seed for reproducible bar heights
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to the adb binary
    #[arg(long)]
    pub adb: Option<PathBuf>,

    /// Debug-level logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let args = Args::parse_from([
            "adb-music", "-d", "emulator-5554", "-b", "20", "-H", "10", "-w", "2", "-i", "50",
            "--seed", "7", "-v",
        ]);

        assert_eq!(args.device.as_deref(), Some("emulator-5554"));
        assert_eq!(args.bars, Some(20));
        assert_eq!(args.max_height, Some(10));
        assert_eq!(args.bar_width, Some(2));
        assert_eq!(args.interval, Some(50));
        assert_eq!(args.seed, Some(7));
        assert!(args.verbose);
        assert!(!args.generate_config);
    }

    #[test]
    fn test_defaults_leave_everything_unset() {
        let args = Args::parse_from(["adb-music"]);
        assert!(args.device.is_none());
        assert!(args.bars.is_none());
        assert!(args.adb.is_none());
    }
}
