//! Library configuration.
//!
//! Missing fields fall back to their defaults, so `{}` is a valid config.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Maintain tag -> items and kind -> items indices on insert.
    /// When off, tag and variant queries scan the whole catalog.
    pub secondary_indices: bool,

    /// Pre-allocation hint for the number of items.
    /// Capped at `MAX_PREALLOCATED_ITEMS`; never fails construction.
    pub expected_capacity: Option<usize>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            secondary_indices: true,
            expected_capacity: None,
        }
    }
}

impl LibraryConfig {
    /// Scan-only configuration (no secondary indices).
    pub fn scan_only() -> Self {
        Self {
            secondary_indices: false,
            ..Self::default()
        }
    }
}
