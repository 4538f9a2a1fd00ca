use anyhow::Result;
use std::fmt;

/// Playback controls a device understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaCommand {
    TogglePlayback,
    NextTrack,
    PreviousTrack,
    VolumeUp,
    VolumeDown,
}

impl MediaCommand {
    pub const ALL: [MediaCommand; 5] = [
        MediaCommand::TogglePlayback,
        MediaCommand::NextTrack,
        MediaCommand::PreviousTrack,
        MediaCommand::VolumeUp,
        MediaCommand::VolumeDown,
    ];

    /// Android key event injected for this command
    pub fn keycode(self) -> &'static str {
        match self {
            MediaCommand::TogglePlayback => "KEYCODE_MEDIA_PLAY_PAUSE",
            MediaCommand::NextTrack => "KEYCODE_MEDIA_NEXT",
            MediaCommand::PreviousTrack => "KEYCODE_MEDIA_PREVIOUS",
            MediaCommand::VolumeUp => "KEYCODE_VOLUME_UP",
            MediaCommand::VolumeDown => "KEYCODE_VOLUME_DOWN",
        }
    }
}

impl fmt::Display for MediaCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MediaCommand::TogglePlayback => "play/pause",
            MediaCommand::NextTrack => "next track",
            MediaCommand::PreviousTrack => "previous track",
            MediaCommand::VolumeUp => "volume up",
            MediaCommand::VolumeDown => "volume down",
        };
        f.write_str(label)
    }
}

/// A device reported by the bridge as ready for commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub serial: String,
    pub model: String,
}

/// The command channel to an addressed device.
///
/// Both calls are short-lived and blocking. Callers treat every failure as
/// best-effort: a failed command is dropped, a failed query reads as "not
/// playing".
pub trait DeviceChannel: Send + Sync {
    fn send_command(&self, serial: &str, command: MediaCommand) -> Result<()>;
    fn is_playing(&self, serial: &str) -> Result<bool>;
}
