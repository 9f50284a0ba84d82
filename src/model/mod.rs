pub mod firm;
pub mod inventory;
pub mod landmark;
pub mod phase;
pub mod unit;

pub use firm::FirmRecord;
pub use inventory::{BlockGroup, BlockSummary, Inventory, PhaseInventory};
pub use landmark::{landmarks, landmarks_by_id, Landmark, LandmarkKind};
pub use phase::Phase;
pub use unit::{Unit, UnitStatus};
