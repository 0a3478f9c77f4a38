// mifare-classic-rs/mifare_classic/src/device/mod.rs

//! Reader handle and driver operations.

pub mod builder;
pub mod handle;
pub mod info;

pub use builder::ReaderBuilder;
pub use handle::{Initialized, Reader, Uninitialized};
pub use info::{DriverInfo, driver_info};
