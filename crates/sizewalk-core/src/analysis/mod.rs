/// Analysis modules — post-scan algorithms over a `SizeMap`.
pub mod top_files;

pub use top_files::{largest_files, DEFAULT_TOP_N};
