//! Entity kinds that can be ranked.
//!
//! # Examples
//! ```
//! use mallmap_core::Kind;
//!
//! assert_eq!(Kind::Mall.as_str(), "mall");
//! assert_eq!("store".parse::<Kind>(), Ok(Kind::Store));
//! ```

use serde::{Deserialize, Serialize};

/// Whether a candidate is a shopping mall or an individual store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// A shopping mall. Malls receive a small ranking bonus.
    Mall,
    /// A store, usually located inside a mall.
    Store,
}

impl Kind {
    /// Return the kind as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mall => "mall",
            Self::Store => "store",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mall" => Ok(Self::Mall),
            "store" => Ok(Self::Store),
            _ => Err(format!("unknown kind '{s}'")),
        }
    }
}
