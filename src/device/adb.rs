use crate::device::traits::{Device, DeviceChannel, MediaCommand};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdbError {
    #[error("failed to execute {program} {args:?}: {source}")]
    Spawn {
        program: String,
        args: Vec<String>,
        #[source]
        source: std::io::Error,
    },
    #[error("adb {args:?} exited with {status}: {stderr}")]
    CommandFailed {
        args: Vec<String>,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Wrapper around the `adb` binary.
#[derive(Debug, Clone)]
pub struct AdbChannel {
    adb: PathBuf,
}

impl AdbChannel {
    pub fn new(adb: impl Into<PathBuf>) -> Self {
        Self { adb: adb.into() }
    }

    pub fn binary(&self) -> &Path {
        &self.adb
    }

    /// True when `adb version` runs and exits cleanly.
    pub fn is_installed(&self) -> bool {
        match self.exec(None, &["version"]) {
            Ok(out) => {
                tracing::debug!(version = out.lines().next().unwrap_or_default(), "adb found");
                true
            }
            Err(e) => {
                tracing::info!("adb not available: {}", e);
                false
            }
        }
    }

    /// Execute a raw ADB command, optionally addressed to one device
    pub fn exec(&self, serial: Option<&str>, args: &[&str]) -> Result<String, AdbError> {
        let mut full_args = Vec::new();

        if let Some(s) = serial {
            full_args.push("-s");
            full_args.push(s);
        }

        full_args.extend_from_slice(args);

        tracing::trace!(?full_args, "adb exec");
        let output = Command::new(&self.adb)
            .args(&full_args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| AdbError::Spawn {
                program: self.adb.display().to_string(),
                args: owned(&full_args),
                source,
            })?;

        if !output.status.success() {
            return Err(AdbError::CommandFailed {
                args: owned(&full_args),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Connected devices in the `device` state, with their model names.
    pub fn devices(&self) -> Result<Vec<Device>, AdbError> {
        let listing = self.exec(None, &["devices"])?;

        let devices = parse_devices(&listing)
            .into_iter()
            .map(|serial| {
                let model = self.model(&serial);
                Device { serial, model }
            })
            .collect();

        Ok(devices)
    }

    fn model(&self, serial: &str) -> String {
        match self.exec(Some(serial), &["shell", "getprop", "ro.product.model"]) {
            Ok(model) if !model.is_empty() => model,
            Ok(_) => "Unknown".to_string(),
            Err(e) => {
                tracing::warn!(serial, "could not read device model: {}", e);
                "Unknown".to_string()
            }
        }
    }
}

impl DeviceChannel for AdbChannel {
    fn send_command(&self, serial: &str, command: MediaCommand) -> anyhow::Result<()> {
        tracing::debug!(serial, %command, "sending key event");
        self.exec(Some(serial), &["shell", "input", "keyevent", command.keycode()])?;
        Ok(())
    }

    fn is_playing(&self, serial: &str) -> anyhow::Result<bool> {
        let dump = self.exec(Some(serial), &["shell", "dumpsys", "audio"])?;
        Ok(parse_playback_state(&dump))
    }
}

/// Serials of ready devices from `adb devices` output.
///
/// The first line is the `List of devices attached` header. Entries in other
/// states (`offline`, `unauthorized`, ...) are skipped.
pub fn parse_devices(listing: &str) -> Vec<String> {
    listing
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(serial), Some("device")) => Some(serial.to_string()),
                _ => None,
            }
        })
        .collect()
}

/// Coarse player state from `dumpsys audio`: any started player counts.
pub fn parse_playback_state(dump: &str) -> bool {
    dump.to_lowercase().contains("state=started")
}

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_devices_keeps_ready_entries() {
        let listing = "List of devices attached\n\
                       emulator-5554\tdevice\n\
                       R58M123ABC\tunauthorized\n\
                       \n\
                       0123456789ABCDEF\tdevice\n";

        assert_eq!(
            parse_devices(listing),
            vec!["emulator-5554".to_string(), "0123456789ABCDEF".to_string()]
        );
    }

    #[test]
    fn test_parse_devices_header_only() {
        assert!(parse_devices("List of devices attached\n").is_empty());
        assert!(parse_devices("").is_empty());
    }

    #[test]
    fn test_parse_playback_state() {
        let playing = "  AudioPlaybackConfiguration piid:31 type:android.media.MediaPlayer u/pid:10123/4567 state:started\n\
                       players: piid:31 State=Started attr:AudioAttributes";
        assert!(parse_playback_state(playing));
        assert!(parse_playback_state("state=started"));
        assert!(!parse_playback_state("state=stopped"));
        assert!(!parse_playback_state(""));
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let adb = AdbChannel::new("/nonexistent/adb-music-test/adb");
        assert!(!adb.is_installed());

        let err = adb.exec(Some("emulator-5554"), &["devices"]).unwrap_err();
        assert!(matches!(err, AdbError::Spawn { .. }));
    }

    #[test]
    fn test_channel_failures_surface_as_errors() {
        let adb = AdbChannel::new("/nonexistent/adb-music-test/adb");
        assert!(adb.is_playing("emulator-5554").is_err());
        assert!(adb.send_command("emulator-5554", MediaCommand::NextTrack).is_err());
    }
}
