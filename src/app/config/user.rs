use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User-editable configuration (ReadOnly by App after load)
/// stored in `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// adb binary; `adb` on the PATH when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adb_path: Option<PathBuf>,
    #[serde(default = "default_startup_delay")]
    pub startup_delay_ms: u64,
    #[serde(default)]
    pub visualizer: VisualizerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub bars: usize,
    pub max_height: u16,
    pub bar_width: u16,
    pub interval_ms: u64,
}

fn default_startup_delay() -> u64 {
    2000
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            bars: 15,
            max_height: 15,
            bar_width: 3,
            interval_ms: 100,
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            adb_path: None,
            startup_delay_ms: default_startup_delay(),
            visualizer: VisualizerConfig::default(),
        }
    }
}
