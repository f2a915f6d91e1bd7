use crate::model::ScanEntry;

/// Radius of the engagement envelope around the origin, inclusive
pub const ENGAGEMENT_RANGE: f64 = 100.0;

/// A pruning predicate over scan entries
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    /// Keep entries within `max_distance` of the origin
    Range { max_distance: f64 },
    /// Drop entries whose enemy type is mech
    AvoidMech,
    /// Drop entries whose enemy type is not mech
    PrioritizeMech,
    /// Drop entries with allies present
    AvoidCrossfire,
}

impl Filter {
    /// The fixed engagement-envelope filter
    pub fn engagement_range() -> Self {
        Filter::Range {
            max_distance: ENGAGEMENT_RANGE,
        }
    }

    pub fn admits(&self, entry: &ScanEntry) -> bool {
        match self {
            Filter::Range { max_distance } => entry.distance_from_origin() <= *max_distance,
            Filter::AvoidMech => !entry.is_mech(),
            Filter::PrioritizeMech => entry.is_mech(),
            Filter::AvoidCrossfire => !entry.has_allies(),
        }
    }
}
