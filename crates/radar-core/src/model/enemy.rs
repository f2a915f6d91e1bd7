use serde::{Deserialize, Serialize};

use crate::errors::{RadarError, Result};

/// Enemy type label that the mech protocols match against
pub const MECH: &str = "mech";

/// Enemy composition at a scanned point
///
/// The type label is free-form; only `"mech"` carries meaning for the
/// engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEnemyGroup")]
pub struct EnemyGroup {
    #[serde(rename = "type")]
    kind: String,
    number: u32,
}

#[derive(Deserialize)]
struct RawEnemyGroup {
    #[serde(rename = "type")]
    kind: String,
    number: i64,
}

impl TryFrom<RawEnemyGroup> for EnemyGroup {
    type Error = RadarError;

    fn try_from(raw: RawEnemyGroup) -> Result<Self> {
        Self::try_new(raw.kind, raw.number)
    }
}

impl EnemyGroup {
    pub fn new(kind: impl Into<String>, number: u32) -> Self {
        Self {
            kind: kind.into(),
            number,
        }
    }

    /// Build from an unchecked wire count
    ///
    /// # Errors
    ///
    /// `RadarError::NegativeCount` if `number` is negative or does not fit a `u32`.
    pub fn try_new(kind: impl Into<String>, number: i64) -> Result<Self> {
        let number = checked_count("enemies.number", number)?;
        Ok(Self::new(kind, number))
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn is_mech(&self) -> bool {
        self.kind == MECH
    }
}

/// Validate a wire count as a non-negative `u32`
pub(crate) fn checked_count(field: &str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(RadarError::NegativeCount {
            field: field.to_string(),
            value,
        });
    }
    u32::try_from(value).map_err(|_| RadarError::InvalidInput {
        reason: format!("{} out of range: {}", field, value),
    })
}
