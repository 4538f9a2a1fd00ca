pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod input;
pub mod keys;
pub mod state;
pub mod visualizer;

pub use dispatcher::InputDispatcher;
pub use input::{terminal_events, InputEvent, InputSubscription};
pub use keys::KeyAction;
pub use state::{LoopControl, StopReason};
pub use visualizer::Visualizer;
