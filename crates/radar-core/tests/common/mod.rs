use radar_core::{EnemyGroup, Position, ScanEntry};

/// Build a scan entry with a single enemy of the given type
#[allow(dead_code)]
pub fn entry(x: i64, y: i64, kind: &str, allies: Option<u32>) -> ScanEntry {
    ScanEntry::new(Position::new(x, y), EnemyGroup::new(kind, 1), allies)
}

/// Build a scan entry with an explicit enemy count
#[allow(dead_code)]
pub fn entry_with_count(x: i64, y: i64, kind: &str, number: u32, allies: Option<u32>) -> ScanEntry {
    ScanEntry::new(Position::new(x, y), EnemyGroup::new(kind, number), allies)
}
