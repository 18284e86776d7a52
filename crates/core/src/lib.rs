// semver-inc Core - Version model & increment use case
// NO process concerns (logging setup, argv, stdout) live here

pub mod application;
pub mod constants;
pub mod domain;
pub mod error;

pub use application::increment::increment;
pub use domain::{Component, Version};
pub use error::{Result, VersionError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
