pub mod app;
pub mod device;
pub mod logging;
pub mod ui;
