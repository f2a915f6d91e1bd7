//! Wire shapes for `POST /radar`
//!
//! Counts arrive as signed integers so negative values can be reported as
//! validation errors instead of generic deserialization failures.

use serde::{Deserialize, Serialize};

use radar_core::{Position, Protocol, RadarError, ScanEntry};

/// Request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarRequest {
    pub protocols: Vec<String>,
    pub scan: Vec<ScanDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanDto {
    pub coordinates: CoordinatesDto,
    pub enemies: EnemiesDto,
    #[serde(default)]
    pub allies: Option<i64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoordinatesDto {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemiesDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub number: i64,
}

/// A request that passed boundary validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub protocols: Vec<Protocol>,
    pub scan: Vec<ScanEntry>,
}

impl RadarRequest {
    /// Parse protocol tokens and check counts
    ///
    /// # Errors
    ///
    /// The first `UnknownProtocol` or `NegativeCount` encountered.
    pub fn validate(self) -> Result<ValidatedRequest, RadarError> {
        let protocols = self
            .protocols
            .iter()
            .map(|token| token.parse::<Protocol>())
            .collect::<Result<Vec<_>, _>>()?;

        let scan = self
            .scan
            .into_iter()
            .map(ScanDto::into_entry)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidatedRequest { protocols, scan })
    }
}

impl ScanDto {
    /// # Errors
    ///
    /// `NegativeCount` if the enemy or allied count is negative.
    pub fn into_entry(self) -> Result<ScanEntry, RadarError> {
        ScanEntry::try_new(
            Position::new(self.coordinates.x, self.coordinates.y),
            self.enemies.kind,
            self.enemies.number,
            self.allies,
        )
    }
}
