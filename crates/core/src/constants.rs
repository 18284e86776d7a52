// Output constants (no magic values)

/// Printed instead of a version when the input cannot be parsed
pub const SENTINEL_VERSION: &str = "0.0.0";

/// Anchored version pattern: optional `v`/`V`, then three decimal digit groups
///
/// `\d` is any Unicode decimal digit (category Nd), not only ASCII.
pub const VERSION_PATTERN: &str = r"^[Vv]?(\d+)\.(\d+)\.(\d+)$";

/// A single Unicode decimal digit
pub const DIGIT_PATTERN: &str = r"^\d$";
