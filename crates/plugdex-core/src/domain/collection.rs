//! Dataset selector.

use std::fmt;
use std::str::FromStr;

/// Which dataset a pipeline step works on.
///
/// Plugins come from curated lists; configs are dotfile repositories found
/// by topic search. Both go through the same pipeline but are stored apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Collection {
    #[default]
    Plugin,
    Config,
}

impl Collection {
    pub const ALL: [Self; 2] = [Self::Plugin, Self::Config];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plugin => "plugin",
            Self::Config => "config",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plugin" | "plugins" => Ok(Self::Plugin),
            "config" | "configs" => Ok(Self::Config),
            other => Err(format!("unknown collection '{other}', expected plugin or config")),
        }
    }
}
