use crate::domain::Provider::*;
use std::fmt;

/// The location sources the bridge can override independently.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Provider {
    Gps,
    Network,
}

impl Provider {
    pub fn id(&self) -> &'static str {
        match self {
            Gps => "gps",
            Network => "network",
        }
    }

    pub fn all() -> [Provider; 2] {
        [Gps, Network]
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
