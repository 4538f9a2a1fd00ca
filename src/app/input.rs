use crate::app::dispatcher::InputDispatcher;
use crate::app::keys;
use crate::app::state::LoopControl;
use crossterm::event::{Event, EventStream};
use futures::{future, Stream, StreamExt};
use tokio::task::JoinHandle;

/// A key press as seen by the render loop's input task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(String),
    Interrupt,
}

/// Key presses from the controlling terminal.
pub fn terminal_events() -> impl Stream<Item = InputEvent> + Send + 'static {
    EventStream::new().filter_map(|event| {
        let mapped = match event {
            Ok(Event::Key(key)) if keys::is_interrupt(&key) => Some(InputEvent::Interrupt),
            Ok(Event::Key(key)) => keys::key_name(&key).map(InputEvent::Key),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("terminal event error: {}", e);
                None
            }
        };
        future::ready(mapped)
    })
}

/// The render loop's registration with the key event source.
///
/// Forwarding runs on its own task until released. `release` stops it and
/// waits for the task to finish; dropping an unreleased subscription aborts
/// the task as a fallback.
pub struct InputSubscription {
    task: Option<JoinHandle<()>>,
}

impl InputSubscription {
    pub fn spawn<S>(events: S, dispatcher: InputDispatcher, control: LoopControl) -> Self
    where
        S: Stream<Item = InputEvent> + Send + 'static,
    {
        let task = tokio::spawn(async move {
            tokio::pin!(events);
            while let Some(event) = events.next().await {
                match event {
                    InputEvent::Key(name) => {
                        tracing::trace!(key = %name, "key press");
                        dispatcher.on_key(&name);
                    }
                    InputEvent::Interrupt => {
                        tracing::info!("interrupt key received");
                        control.interrupt();
                    }
                }
            }
            tracing::debug!("key event source ended");
        });

        tracing::debug!("input subscription registered");
        Self { task: Some(task) }
    }

    pub async fn release(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
            tracing::debug!("input subscription released");
        }
    }
}

impl Drop for InputSubscription {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("input subscription aborted on drop");
        }
    }
}
