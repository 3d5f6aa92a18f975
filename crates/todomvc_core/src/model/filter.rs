//! Display filter selected by the current route.

use std::fmt::{Display, Formatter};

/// Route segment for [`Filter::All`].
pub const FILTER_ALL: &str = "all";
/// Route segment for [`Filter::Active`].
pub const FILTER_ACTIVE: &str = "active";
/// Route segment for [`Filter::Completed`].
pub const FILTER_COMPLETED: &str = "completed";

/// Which subset of the task list is displayed.
///
/// Unknown route segments are kept verbatim in `Other` instead of being
/// rejected. They display like `All` and select no footer link.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
    Other(String),
}

impl Filter {
    /// Maps a route segment to a filter. Never fails.
    pub fn from_name(name: &str) -> Self {
        match name {
            FILTER_ALL => Self::All,
            FILTER_ACTIVE => Self::Active,
            FILTER_COMPLETED => Self::Completed,
            other => Self::Other(other.to_string()),
        }
    }

    /// Route segment for this filter.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => FILTER_ALL,
            Self::Active => FILTER_ACTIVE,
            Self::Completed => FILTER_COMPLETED,
            Self::Other(name) => name.as_str(),
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
