pub mod adb;
pub mod install;
pub mod select;
pub mod traits;

pub use adb::{AdbChannel, AdbError};
pub use select::select_device;
pub use traits::{Device, DeviceChannel, MediaCommand};
