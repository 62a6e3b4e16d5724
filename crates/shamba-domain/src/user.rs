//! User domain types.

use serde::{Deserialize, Serialize};

/// Account kind discriminator.
///
/// Wire format: snake_case string ("agrovet" | "farmer"). Set exactly once at
/// registration and never updated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserKind {
    Agrovet,
    Farmer,
}

impl UserKind {
    /// Convert from the stored string value. Returns `None` for unknown values.
    pub fn from_str_value(v: &str) -> Option<Self> {
        match v {
            "agrovet" => Some(Self::Agrovet),
            "farmer" => Some(Self::Farmer),
            _ => None,
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Agrovet => "agrovet",
            Self::Farmer => "farmer",
        }
    }
}
