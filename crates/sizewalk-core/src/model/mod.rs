/// Data model for scan results.
///
/// Re-exports the flat record types and the collision counter used by
/// recursive scans.
pub mod file_record;
pub mod names;
pub mod size;

pub use file_record::{FileRecord, SizeMap};
pub use names::NameAllocator;
