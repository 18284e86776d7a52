// Component selection

/// Which part of a version an increment drives.
///
/// `Patch` is the default so a caller that selects nothing gets a patch bump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    #[default]
    Patch,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Component::Major => write!(f, "major"),
            Component::Minor => write!(f, "minor"),
            Component::Patch => write!(f, "patch"),
        }
    }
}
