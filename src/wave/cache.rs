//! Baseline capture
//!
//! The first time a path's content is seen its text is frozen as the
//! baseline. Later frames distort that snapshot, not whatever was rendered
//! last. A new content identity replaces the snapshot.

/// Single-entry cache keyed by content identity
#[derive(Debug, Clone, Default)]
pub struct BaselineCache {
    entry: Option<(u64, String)>,
}

impl BaselineCache {
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// Baseline for `identity`, capturing `source` if the identity changed.
    ///
    /// While the identity matches, `source` is ignored: the caller may be
    /// handing back text it already distorted.
    pub fn baseline(&mut self, identity: u64, source: &str) -> &str {
        let stale = !matches!(&self.entry, Some((id, _)) if *id == identity);
        if stale {
            log::debug!("Captured path baseline {:#x} ({} bytes)", identity, source.len());
            self.entry = Some((identity, source.to_string()));
        }
        self.entry.as_ref().map(|(_, text)| text.as_str()).unwrap_or_default()
    }

    /// The captured baseline, if any
    pub fn current(&self) -> Option<(u64, &str)> {
        self.entry.as_ref().map(|(id, text)| (*id, text.as_str()))
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_identity_keeps_first_snapshot() {
        let mut cache = BaselineCache::new();
        assert_eq!(cache.baseline(1, "M0,0"), "M0,0");
        assert_eq!(cache.baseline(1, "M0.37,-0.21"), "M0,0");
    }

    #[test]
    fn test_identity_change_recaptures() {
        let mut cache = BaselineCache::new();
        cache.baseline(1, "M0,0");
        assert_eq!(cache.baseline(2, "M5,5"), "M5,5");
        assert_eq!(cache.current(), Some((2, "M5,5")));
    }

    #[test]
    fn test_invalidate() {
        let mut cache = BaselineCache::new();
        cache.baseline(1, "M0,0");
        cache.invalidate();
        assert_eq!(cache.current(), None);
        assert_eq!(cache.baseline(1, "M9,9"), "M9,9");
    }
}
