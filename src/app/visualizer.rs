use crate::app::config::Settings;
use crate::app::dispatcher::InputDispatcher;
use crate::app::input::{InputEvent, InputSubscription};
use crate::app::state::{LoopControl, StopReason};
use crate::device::DeviceChannel;
use crate::ui::{bars, FrameView, Screen};
use anyhow::Result;
use futures::Stream;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::future::Future;
use std::sync::Arc;

/// Ceiling for bar heights while nothing is playing.
pub const IDLE_MAX_HEIGHT: u16 = 3;

/// Random bar heights for one frame.
///
/// Playing: uniform in `1..=max_height`. Idle: uniform in
/// `1..=min(IDLE_MAX_HEIGHT, max_height)`, a low flicker.
pub fn generate_heights<R: Rng>(
    rng: &mut R,
    playing: bool,
    bars: usize,
    max_height: u16,
) -> Vec<u16> {
    let ceiling = if playing {
        max_height
    } else {
        IDLE_MAX_HEIGHT.min(max_height)
    }
    .max(1);

    (0..bars).map(|_| rng.gen_range(1..=ceiling)).collect()
}

/// The polling render loop for one device.
pub struct Visualizer {
    settings: Settings,
    device_id: Arc<str>,
    channel: Arc<dyn DeviceChannel>,
    rng: StdRng,
    probe_healthy: bool,
}

impl Visualizer {
    pub fn new(
        settings: Settings,
        device_id: impl Into<Arc<str>>,
        channel: Arc<dyn DeviceChannel>,
    ) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            settings,
            device_id: device_id.into(),
            channel,
            rng,
            probe_healthy: true,
        }
    }

    /// Draw frames until quit or interrupt.
    ///
    /// `events` feeds the input dispatcher for the lifetime of the loop;
    /// `shutdown` resolving counts as an interrupt. The input subscription is
    /// released and the screen cleared on every exit path, including a
    /// failing tick.
    pub async fn run<S, E, F>(
        &mut self,
        screen: &mut S,
        events: E,
        shutdown: F,
    ) -> Result<StopReason>
    where
        S: Screen + ?Sized,
        E: Stream<Item = InputEvent> + Send + 'static,
        F: Future<Output = ()>,
    {
        let control = LoopControl::new();
        let dispatcher =
            InputDispatcher::new(self.device_id.clone(), self.channel.clone(), control.clone());
        let subscription = InputSubscription::spawn(events, dispatcher, control.clone());

        tracing::info!(
            device = %self.device_id,
            bars = self.settings.bars,
            max_height = self.settings.max_height,
            interval_ms = self.settings.interval.as_millis() as u64,
            "visualization started"
        );

        let outcome = self.tick_loop(screen, &control, shutdown).await;

        subscription.release().await;
        let cleared = screen.clear();

        let reason = outcome?;
        cleared?;
        tracing::info!(?reason, "visualization stopped");
        Ok(reason)
    }

    async fn tick_loop<S, F>(
        &mut self,
        screen: &mut S,
        control: &LoopControl,
        shutdown: F,
    ) -> Result<StopReason>
    where
        S: Screen + ?Sized,
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut frames: u64 = 0;

        while control.is_running() {
            let playing = self.probe_playing().await;
            let heights = generate_heights(
                &mut self.rng,
                playing,
                self.settings.bars,
                self.settings.max_height,
            );

            let view = FrameView {
                device_id: &self.device_id,
                playing,
                bars: bars::render(&heights, self.settings.bar_width)?,
            };
            screen.present(&view)?;
            frames += 1;

            tokio::select! {
                _ = tokio::time::sleep(self.settings.interval) => {}
                _ = control.stopped() => {}
                _ = &mut shutdown => {
                    tracing::info!("interrupt signal received");
                    control.interrupt();
                }
            }
        }

        tracing::debug!(frames, "render loop finished");
        Ok(control.stop_reason().unwrap_or(StopReason::Quit))
    }

    /// Best-effort playback state; any failure reads as not playing.
    async fn probe_playing(&mut self) -> bool {
        let channel = self.channel.clone();
        let device_id = self.device_id.clone();

        let probe = tokio::task::spawn_blocking(move || channel.is_playing(&device_id));
        let result = match probe.await {
            Ok(result) => result,
            Err(e) => Err(anyhow::anyhow!("playback probe task failed: {}", e)),
        };

        match result {
            Ok(playing) => {
                if !self.probe_healthy {
                    tracing::info!(device = %self.device_id, "playback state available again");
                    self.probe_healthy = true;
                }
                playing
            }
            Err(e) => {
                // once per outage, not once per frame
                if self.probe_healthy {
                    tracing::warn!(device = %self.device_id, "playback state unavailable: {:#}", e);
                    self.probe_healthy = false;
                }
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seeded_heights_are_reproducible() {
        let a = generate_heights(&mut StdRng::seed_from_u64(42), true, 15, 15);
        let b = generate_heights(&mut StdRng::seed_from_u64(42), true, 15, 15);
        assert_eq!(a, b);
        assert_eq!(a.len(), 15);
    }

    #[test]
    fn test_idle_ceiling_respects_small_max_height() {
        let mut rng = StdRng::seed_from_u64(1);
        let heights = generate_heights(&mut rng, false, 200, 2);
        assert!(heights.iter().all(|h| (1..=2).contains(h)));

        let heights = generate_heights(&mut rng, true, 200, 1);
        assert!(heights.iter().all(|&h| h == 1));
    }

    #[test]
    fn test_playing_heights_reach_above_idle() {
        let mut rng = StdRng::seed_from_u64(9);
        let heights = generate_heights(&mut rng, true, 500, 15);
        assert!(heights.iter().any(|&h| h > IDLE_MAX_HEIGHT));
    }

    proptest! {
        #[test]
        fn prop_heights_within_bounds(
            seed in any::<u64>(),
            playing in any::<bool>(),
            bars in 1usize..64,
            max_height in 1u16..=40,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let heights = generate_heights(&mut rng, playing, bars, max_height);

            let ceiling = if playing { max_height } else { IDLE_MAX_HEIGHT.min(max_height) };
            prop_assert_eq!(heights.len(), bars);
            for h in heights {
                prop_assert!(h >= 1 && h <= ceiling);
            }
        }
    }
}
