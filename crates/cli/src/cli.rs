//! Command-line arguments

use clap::{ArgGroup, Parser, ValueEnum};
use semver_inc_core::Component;

const ABOUT: &str = "Increment a semantic version string (of the form 0.0.0)";

const LONG_ABOUT: &str = "\
Increment a semantic version string (of the form 0.0.0).

If no component flag is given, the patch number is incremented.
Incrementing the major or minor number resets the smaller parts to zero:

  semver-inc -m 2.3.6  -->  2.4.0
  semver-inc -M 2.3.6  -->  3.0.0

An input that is not [v]MAJOR.MINOR.PATCH prints 0.0.0 and exits with status 1.";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, multi-line
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "semver-inc")]
#[command(about = ABOUT, long_about = LONG_ABOUT)]
#[command(version)]
#[command(group(
    ArgGroup::new("component")
        .args(["major", "minor", "patch"])
        .multiple(false)
))]
pub struct Cli {
    /// Increment the major number (1.0.0 --> 2.0.0)
    #[arg(short = 'M', long)]
    pub major: bool,

    /// Increment the minor number (0.1.0 --> 0.2.0)
    #[arg(short = 'm', long)]
    pub minor: bool,

    /// Increment the patch number (0.0.1 --> 0.0.2), the default
    #[arg(short = 'p', long)]
    pub patch: bool,

    /// The version string to increment
    #[arg(id = "input", value_name = "VERSION")]
    pub input: String,

    /// Log format for diagnostics written to stderr [default: $SEMVER_INC_LOG_FORMAT, else pretty]
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Selected component; patch when no flag is set
    pub fn component(&self) -> Component {
        if self.major {
            Component::Major
        } else if self.minor {
            Component::Minor
        } else {
            Component::Patch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_component_is_patch() {
        let cli = Cli::try_parse_from(["semver-inc", "1.2.3"]).unwrap();
        assert_eq!(cli.component(), Component::Patch);
        assert_eq!(cli.input, "1.2.3");
    }

    #[test]
    fn test_flags_select_component() {
        let cases = [
            ("-M", Component::Major),
            ("--major", Component::Major),
            ("-m", Component::Minor),
            ("--minor", Component::Minor),
            ("-p", Component::Patch),
            ("--patch", Component::Patch),
        ];

        for (flag, expected) in cases {
            let cli = Cli::try_parse_from(["semver-inc", flag, "1.2.3"]).unwrap();
            assert_eq!(cli.component(), expected, "flag {}", flag);
        }
    }

    #[test]
    fn test_flags_are_mutually_exclusive() {
        for flags in [["-M", "-m"], ["-M", "-p"], ["-m", "-p"]] {
            let err = Cli::try_parse_from(["semver-inc", flags[0], flags[1], "1.2.3"]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentConflict, "flags {:?}", flags);
        }
    }

    #[test]
    fn test_version_is_required() {
        let err = Cli::try_parse_from(["semver-inc", "-M"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_log_format_flag() {
        let cli = Cli::try_parse_from(["semver-inc", "--log-format", "json", "1.2.3"]).unwrap();
        assert_eq!(cli.log_format, Some(LogFormat::Json));

        let cli = Cli::try_parse_from(["semver-inc", "1.2.3"]).unwrap();
        assert_eq!(cli.log_format, None);
    }

    #[test]
    fn test_prefixed_input_is_not_a_flag() {
        let cli = Cli::try_parse_from(["semver-inc", "V1.2.3"]).unwrap();
        assert_eq!(cli.input, "V1.2.3");
    }

    #[test]
    fn test_version_flag() {
        for flag in ["-V", "--version"] {
            let err = Cli::try_parse_from(["semver-inc", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayVersion, "flag {}", flag);
        }
    }
}
