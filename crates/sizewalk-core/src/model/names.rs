/// Collision-free display names for recursive scans.
///
/// When the same base filename shows up in several subdirectories, the
/// first one keeps its name and later ones get a numeric suffix:
/// `a.txt`, `a.txt-2`, `a.txt-3`, ...
///
/// The suffix is the 1-based occurrence count *after* incrementing, so the
/// second occurrence is `-2`, never `-1`. Which physical file counts as
/// "first" depends on filesystem enumeration order.
use compact_str::{format_compact, CompactString};
use std::collections::{HashMap, HashSet};

/// Per-scan occurrence counter. Construct one per scan; never share.
#[derive(Debug, Default)]
pub struct NameAllocator {
    counts: HashMap<CompactString, u32>,
    issued: HashSet<CompactString>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the display name for the next file called `base`.
    ///
    /// A generated `base-<k>` may already exist as a literal filename seen
    /// earlier (or vice versa). In that case the counter for `base` keeps
    /// advancing until the candidate is unused, so every name handed out by
    /// one allocator is distinct.
    pub fn assign(&mut self, base: &str) -> CompactString {
        let count = self.counts.entry(CompactString::new(base)).or_insert(0);
        loop {
            *count += 1;
            let candidate = if *count == 1 {
                CompactString::new(base)
            } else {
                format_compact!("{base}-{count}")
            };
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// How many times `base` has been assigned so far.
    pub fn occurrences(&self, base: &str) -> u32 {
        self.counts.get(base).copied().unwrap_or(0)
    }
}
