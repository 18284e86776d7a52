// Increment Use Case

use crate::domain::{Component, Version};
use crate::error::Result;
use tracing::debug;

/// Parse `input` and return the version that follows it.
///
/// # Arguments
///
/// * `input` - Version string, e.g. `v1.2.3`
/// * `component` - Component to increment
///
/// # Example
/// ```
/// use semver_inc_core::{increment, Component};
///
/// let next = increment("2.3.6", Component::Minor).unwrap();
/// assert_eq!(next.to_string(), "2.4.0");
/// ```
pub fn increment(input: &str, component: Component) -> Result<Version> {
    let current = Version::parse(input).inspect_err(|e| {
        debug!(input = %input, error = %e, "Rejected version string");
    })?;

    let next = current.bump(component)?;

    debug!(
        current = %current,
        next = %next,
        component = %component,
        "Version incremented"
    );

    Ok(next)
}
