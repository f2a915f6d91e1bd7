pub mod enemy;
pub mod position;
pub mod scan;

pub use enemy::EnemyGroup;
pub use position::Position;
pub use scan::ScanEntry;
