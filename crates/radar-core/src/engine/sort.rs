use std::cmp::Ordering;

use crate::model::ScanEntry;

/// A single reordering pass over the surviving entries
///
/// Each pass is a stable sort, so entries with equal keys keep the order
/// left by the previous pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPass {
    /// Most allies first; absent allies count as zero
    AssistAllies,
    /// Nearest to the origin first
    ClosestEnemies,
    /// Furthest from the origin first
    FurthestEnemies,
}

impl SortPass {
    pub fn apply(&self, entries: &mut [ScanEntry]) {
        match self {
            SortPass::AssistAllies => {
                entries.sort_by(|a, b| allied_count(b).cmp(&allied_count(a)));
            }
            SortPass::ClosestEnemies => entries.sort_by(compare_distance),
            SortPass::FurthestEnemies => entries.sort_by(|a, b| compare_distance(b, a)),
        }
    }
}

fn allied_count(entry: &ScanEntry) -> u32 {
    entry.allies().unwrap_or(0)
}

fn compare_distance(a: &ScanEntry, b: &ScanEntry) -> Ordering {
    a.distance_from_origin()
        .total_cmp(&b.distance_from_origin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EnemyGroup, Position};

    fn entry(x: i64, y: i64, kind: &str, allies: Option<u32>) -> ScanEntry {
        ScanEntry::new(Position::new(x, y), EnemyGroup::new(kind, 1), allies)
    }

    #[test]
    fn test_assist_allies_descending_with_absent_as_zero() {
        let sd1 = entry(3, 4, "mech", Some(2));
        let sd2 = entry(5, 12, "infantry", Some(5));
        let sd3 = entry(8, 10, "infantry", None);
        let mut targets = vec![sd1.clone(), sd2.clone(), sd3.clone()];

        SortPass::AssistAllies.apply(&mut targets);

        assert_eq!(targets, vec![sd2, sd1, sd3]);
    }

    #[test]
    fn test_assist_allies_keeps_order_between_none_and_zero() {
        let none = entry(1, 0, "tank", None);
        let zero = entry(2, 0, "tank", Some(0));
        let mut targets = vec![none.clone(), zero.clone()];

        SortPass::AssistAllies.apply(&mut targets);

        assert_eq!(targets, vec![none, zero]);
    }

    #[test]
    fn test_closest_enemies() {
        let sd1 = entry(3, 4, "mech", Some(2));
        let sd2 = entry(5, 12, "infantry", Some(2));
        let sd3 = entry(1, 2, "infantry", Some(5));
        let mut targets = vec![sd1.clone(), sd2.clone(), sd3.clone()];

        SortPass::ClosestEnemies.apply(&mut targets);

        assert_eq!(targets, vec![sd3, sd1, sd2]);
    }

    #[test]
    fn test_furthest_enemies() {
        let sd1 = entry(3, 4, "mech", Some(2));
        let sd2 = entry(5, 12, "infantry", Some(2));
        let sd3 = entry(1, 2, "infantry", Some(5));
        let mut targets = vec![sd1.clone(), sd2.clone(), sd3.clone()];

        SortPass::FurthestEnemies.apply(&mut targets);

        assert_eq!(targets, vec![sd2, sd1, sd3]);
    }

    #[test]
    fn test_descending_pass_is_stable_for_equal_distance() {
        let east = entry(100, 0, "mech", Some(5));
        let north = entry(0, 100, "mech", Some(2));
        let mut targets = vec![east.clone(), north.clone()];

        SortPass::FurthestEnemies.apply(&mut targets);

        assert_eq!(targets, vec![east, north]);
    }
}
