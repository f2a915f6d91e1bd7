use serde::{Deserialize, Serialize};

use super::enemy::checked_count;
use super::{EnemyGroup, Position};
use crate::errors::{RadarError, Result};

/// One candidate target observed by the radar
///
/// `allies` is `None` when no allied units are present at the point, which
/// is distinct from `Some(0)`: the crossfire filter only looks at presence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawScanEntry")]
pub struct ScanEntry {
    coordinates: Position,
    enemies: EnemyGroup,
    allies: Option<u32>,
}

#[derive(Deserialize)]
struct RawScanEntry {
    coordinates: Position,
    enemies: EnemyGroup,
    #[serde(default)]
    allies: Option<i64>,
}

impl TryFrom<RawScanEntry> for ScanEntry {
    type Error = RadarError;

    fn try_from(raw: RawScanEntry) -> Result<Self> {
        let allies = raw
            .allies
            .map(|count| checked_count("allies", count))
            .transpose()?;
        Ok(Self::new(raw.coordinates, raw.enemies, allies))
    }
}

impl ScanEntry {
    pub fn new(coordinates: Position, enemies: EnemyGroup, allies: Option<u32>) -> Self {
        Self {
            coordinates,
            enemies,
            allies,
        }
    }

    /// Build from unchecked wire values
    ///
    /// # Errors
    ///
    /// `RadarError::NegativeCount` if the enemy or allied count is negative.
    pub fn try_new(
        coordinates: Position,
        kind: impl Into<String>,
        number: i64,
        allies: Option<i64>,
    ) -> Result<Self> {
        let enemies = EnemyGroup::try_new(kind, number)?;
        let allies = allies
            .map(|count| checked_count("allies", count))
            .transpose()?;
        Ok(Self::new(coordinates, enemies, allies))
    }

    pub fn coordinates(&self) -> Position {
        self.coordinates
    }

    pub fn enemies(&self) -> &EnemyGroup {
        &self.enemies
    }

    pub fn allies(&self) -> Option<u32> {
        self.allies
    }

    pub fn has_allies(&self) -> bool {
        self.allies.is_some()
    }

    pub fn is_mech(&self) -> bool {
        self.enemies.is_mech()
    }

    pub fn distance_from_origin(&self) -> f64 {
        self.coordinates.distance_from_origin()
    }
}
