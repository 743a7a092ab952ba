//! Knowledge base: the fixed catalog of advisory capsules.
//!
//! Built once from the static pack, read-only afterwards. Iteration order
//! is the authoring order and is stable across reads; consumers may
//! filter or slice but get no other ordering guarantee.

pub mod pack;

use pack::{CapsuleEntry, ADVISORY_PACK};
use serde::{Deserialize, Serialize};

/// An immutable advisory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeCapsule {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Crop-focus tags, lowercase, as authored.
    pub crop_focus: Vec<String>,
    pub body: String,
    /// Ordered action steps.
    pub plan: Vec<String>,
    pub seasonal_notes: Vec<String>,
    pub tips: Vec<String>,
    pub follow_ups: Vec<String>,
}

impl KnowledgeCapsule {
    fn from_entry(entry: &CapsuleEntry) -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            id: entry.id.to_string(),
            title: entry.title.to_string(),
            summary: entry.summary.to_string(),
            crop_focus: owned(entry.crop_focus),
            body: entry.body.to_string(),
            plan: owned(entry.plan),
            seasonal_notes: owned(entry.seasonal_notes),
            tips: owned(entry.tips),
            follow_ups: owned(entry.follow_ups),
        }
    }
}

/// The fixed, ordered catalog of advisory capsules.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    capsules: Vec<KnowledgeCapsule>,
}

impl KnowledgeBase {
    /// Build the base from the built-in pack, preserving catalog order.
    pub fn builtin() -> Self {
        Self {
            capsules: ADVISORY_PACK.iter().map(KnowledgeCapsule::from_entry).collect(),
        }
    }

    /// All capsules in catalog order.
    pub fn capsules(&self) -> &[KnowledgeCapsule] {
        &self.capsules
    }

    /// Lookup by capsule id.
    pub fn get(&self, id: &str) -> Option<&KnowledgeCapsule> {
        self.capsules.iter().find(|c| c.id == id)
    }

    /// The first `n` capsules, for the console's highlight panel.
    pub fn highlights(&self, n: usize) -> &[KnowledgeCapsule] {
        &self.capsules[..n.min(self.capsules.len())]
    }

    pub fn len(&self) -> usize {
        self.capsules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capsules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_loads_pack() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.len(), ADVISORY_PACK.len());
        assert!(!kb.is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let kb = KnowledgeBase::builtin();
        let capsule = kb.get("cotton-pest-spray");
        assert!(capsule.is_some());
        assert!(kb.get("no-such-capsule").is_none());
    }

    #[test]
    fn test_highlights_are_prefix() {
        let kb = KnowledgeBase::builtin();
        let highlights = kb.highlights(3);
        assert_eq!(highlights.len(), 3);
        assert_eq!(highlights[0].id, kb.capsules()[0].id);
        // Asking for more than exist clamps instead of panicking
        assert_eq!(kb.highlights(500).len(), kb.len());
    }
}
