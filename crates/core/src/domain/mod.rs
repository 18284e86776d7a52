// Domain Layer - Pure version model

pub mod component;
pub mod version;

// Re-exports
pub use component::Component;
pub use version::Version;
