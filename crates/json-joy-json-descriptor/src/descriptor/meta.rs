//! Modifiers shared by every descriptor kind.

use serde::{Deserialize, Serialize};

/// Relaxations of the value requirement.
///
/// `optional` permits the value to be absent entirely, `nullable` permits an
/// explicit `null`. Absence is checked before null, so the two stay
/// distinguishable when combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub optional: bool,
    pub nullable: bool,
}

impl Meta {
    pub const REQUIRED: Meta = Meta {
        optional: false,
        nullable: false,
    };
    pub const OPTIONAL: Meta = Meta {
        optional: true,
        nullable: false,
    };
    pub const NULLABLE: Meta = Meta {
        optional: false,
        nullable: true,
    };
    pub const OPTIONAL_NULLABLE: Meta = Meta {
        optional: true,
        nullable: true,
    };

    pub fn new(optional: bool, nullable: bool) -> Self {
        Self { optional, nullable }
    }

    pub fn is_required(&self) -> bool {
        !self.optional && !self.nullable
    }
}
