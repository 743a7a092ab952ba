//! Knowledge base tests: stable catalog order, read-only access paths.

use kisan_common::knowledge::KnowledgeBase;

#[test]
fn test_iteration_order_stable_across_reads() {
    let kb = KnowledgeBase::builtin();
    let first: Vec<String> = kb.capsules().iter().map(|c| c.id.clone()).collect();
    let second: Vec<String> = kb.capsules().iter().map(|c| c.id.clone()).collect();
    assert_eq!(first, second);

    // A fresh base built from the same pack sees the same order
    let other = KnowledgeBase::builtin();
    let third: Vec<String> = other.capsules().iter().map(|c| c.id.clone()).collect();
    assert_eq!(first, third);
}

#[test]
fn test_every_capsule_has_actionable_content() {
    let kb = KnowledgeBase::builtin();
    for capsule in kb.capsules() {
        assert!(!capsule.plan.is_empty(), "{} has no plan", capsule.id);
        assert!(!capsule.crop_focus.is_empty(), "{} has no tags", capsule.id);
        assert!(!capsule.follow_ups.is_empty(), "{} has no follow-ups", capsule.id);
    }
}

#[test]
fn test_get_returns_same_capsule_as_iteration() {
    let kb = KnowledgeBase::builtin();
    for capsule in kb.capsules() {
        let looked_up = kb.get(&capsule.id).expect("id from iteration must resolve");
        assert_eq!(looked_up, capsule);
    }
}

#[test]
fn test_highlights_match_catalog_prefix() {
    let kb = KnowledgeBase::builtin();
    let highlights = kb.highlights(3);
    for (highlight, capsule) in highlights.iter().zip(kb.capsules()) {
        assert_eq!(highlight.id, capsule.id);
    }
}
