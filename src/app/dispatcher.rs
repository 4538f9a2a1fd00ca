use crate::app::keys::KeyAction;
use crate::app::state::LoopControl;
use crate::device::DeviceChannel;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Turns key presses into device commands or a quit request.
///
/// Runs on the input task, concurrently with the render loop. Commands go to
/// the blocking pool and are never awaited here.
#[derive(Clone)]
pub struct InputDispatcher {
    device_id: Arc<str>,
    channel: Arc<dyn DeviceChannel>,
    control: LoopControl,
}

impl InputDispatcher {
    pub fn new(device_id: Arc<str>, channel: Arc<dyn DeviceChannel>, control: LoopControl) -> Self {
        Self {
            device_id,
            channel,
            control,
        }
    }

    /// Handle one key press by name.
    ///
    /// Returns the handle of the spawned device command, if one was issued.
    pub fn on_key(&self, raw_key: &str) -> Option<JoinHandle<()>> {
        let action = KeyAction::from_key_name(raw_key);

        match action {
            KeyAction::Quit => {
                tracing::info!("quit requested");
                self.control.request_quit();
                None
            }
            KeyAction::Unrecognized => None,
            _ => {
                let command = action.command()?;
                let channel = self.channel.clone();
                let device_id = self.device_id.clone();

                Some(tokio::task::spawn_blocking(move || {
                    if let Err(e) = channel.send_command(&device_id, command) {
                        tracing::warn!(device = %device_id, %command, "command dropped: {:#}", e);
                    }
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::MediaCommand;
    use anyhow::{bail, Result};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingChannel {
        sent: Mutex<Vec<(String, MediaCommand)>>,
        fail: bool,
    }

    impl DeviceChannel for RecordingChannel {
        fn send_command(&self, serial: &str, command: MediaCommand) -> Result<()> {
            self.sent.lock().unwrap().push((serial.to_string(), command));
            if self.fail {
                bail!("device unreachable");
            }
            Ok(())
        }

        fn is_playing(&self, _serial: &str) -> Result<bool> {
            Ok(true)
        }
    }

    fn dispatcher(channel: Arc<RecordingChannel>) -> (InputDispatcher, LoopControl) {
        let control = LoopControl::new();
        let d = InputDispatcher::new("device123".into(), channel, control.clone());
        (d, control)
    }

    #[tokio::test]
    async fn test_media_keys_send_one_command_each() {
        let cases = [
            ("space", MediaCommand::TogglePlayback),
            ("right", MediaCommand::NextTrack),
            ("left", MediaCommand::PreviousTrack),
            ("up", MediaCommand::VolumeUp),
            ("down", MediaCommand::VolumeDown),
        ];

        for (key, expected) in cases {
            let channel = Arc::new(RecordingChannel::default());
            let (d, control) = dispatcher(channel.clone());

            d.on_key(key).expect("command not issued").await.unwrap();

            let sent = channel.sent.lock().unwrap();
            assert_eq!(*sent, vec![("device123".to_string(), expected)], "key {key}");
            assert!(control.is_running());
        }
    }

    #[tokio::test]
    async fn test_quit_clears_running_without_commands() {
        let channel = Arc::new(RecordingChannel::default());
        let (d, control) = dispatcher(channel.clone());

        assert!(d.on_key("Q").is_none());
        assert!(!control.is_running());
        assert!(channel.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unrecognized_keys_are_ignored() {
        let channel = Arc::new(RecordingChannel::default());
        let (d, control) = dispatcher(channel.clone());

        for key in ["x", "esc", "enter", "", "pageup"] {
            assert!(d.on_key(key).is_none());
        }
        assert!(control.is_running());
        assert!(channel.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_channel_failure_is_swallowed() {
        let channel = Arc::new(RecordingChannel {
            fail: true,
            ..Default::default()
        });
        let (d, control) = dispatcher(channel.clone());

        d.on_key("space").unwrap().await.unwrap();
        assert_eq!(channel.sent.lock().unwrap().len(), 1);
        assert!(control.is_running());
    }
}
