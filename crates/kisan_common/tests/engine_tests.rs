//! Response engine tests: matching, fallback, confidence bounds,
//! determinism.

use kisan_common::engine::{respond, AgentContext, FALLBACK_CONFIDENCE};
use kisan_common::knowledge::KnowledgeBase;
use kisan_common::language::Language;

fn ctx(crop: &str, region: &str) -> AgentContext {
    AgentContext::new(crop, region, Language::En)
}

#[test]
fn test_cotton_pest_scenario() {
    let kb = KnowledgeBase::builtin();
    let response = respond(
        "My cotton crop leaves are curling with small insects. What should I spray?",
        &ctx("Cotton", ""),
        &kb,
    );
    assert_eq!(response.matched_capsule.as_deref(), Some("cotton-pest-spray"));
    assert!(response.confidence >= 0.6, "confidence was {}", response.confidence);
    assert!(!response.detailed_plan.is_empty());
}

#[test]
fn test_gibberish_falls_back() {
    let kb = KnowledgeBase::builtin();
    let response = respond("asdkjh qweoiu random gibberish", &ctx("", ""), &kb);
    assert!(response.is_fallback());
    assert!(response.confidence < 0.3);
    assert!(!response.suggested_follow_ups.is_empty());
}

#[test]
fn test_gibberish_with_crop_context_still_falls_back() {
    // The crop boost must not manufacture a match from zero overlap
    let kb = KnowledgeBase::builtin();
    let response = respond("asdkjh qweoiu", &ctx("Cotton", "Akola"), &kb);
    assert!(response.is_fallback());
}

#[test]
fn test_title_echo_selects_own_capsule() {
    let kb = KnowledgeBase::builtin();
    for capsule in kb.capsules() {
        let response = respond(&capsule.title, &ctx("", ""), &kb);
        assert_eq!(
            response.matched_capsule.as_deref(),
            Some(capsule.id.as_str()),
            "title {:?} did not select its own capsule",
            capsule.title
        );
        assert!(response.confidence > FALLBACK_CONFIDENCE);
    }
}

#[test]
fn test_confidence_always_in_unit_interval() {
    let kb = KnowledgeBase::builtin();
    let queries = [
        "spray",
        "cotton cotton cotton cotton cotton pest insects spray whitefly aphids",
        "zzz",
        "how often should I irrigate sugarcane with drip during peak summer",
        "mandis are paying low for tomatoes, any buyers offering better prices?",
        "need a soil plan to increase organic carbon before next paddy season",
        "!!! ???",
    ];
    for query in queries {
        for crop in ["", "Cotton", "Sugarcane"] {
            let response = respond(query, &ctx(crop, ""), &kb);
            assert!(
                (0.0..=1.0).contains(&response.confidence),
                "confidence {} out of range for {:?}",
                response.confidence,
                query
            );
        }
    }
}

#[test]
fn test_identical_inputs_identical_responses() {
    let kb = KnowledgeBase::builtin();
    let context = ctx("Tomato", "Nashik");
    let query = "Mandis are paying low for tomatoes. Any buyers offering better prices?";
    let first = respond(query, &context, &kb);
    let second = respond(query, &context, &kb);
    assert_eq!(first, second);
}

#[test]
fn test_crop_boost_lifts_confidence() {
    let kb = KnowledgeBase::builtin();
    let query = "leaves are curling, what should I spray?";
    let plain = respond(query, &ctx("", ""), &kb);
    let boosted = respond(query, &ctx("Cotton", ""), &kb);
    assert!(boosted.confidence > plain.confidence);
}

#[test]
fn test_tailoring_line_in_summary() {
    let kb = KnowledgeBase::builtin();
    let query = "My cotton crop leaves are curling with small insects. What should I spray?";
    let response = respond(query, &ctx("Cotton", "Akola, Maharashtra"), &kb);
    assert!(response.summary.contains("Cotton"));
    assert!(response.summary.contains("Akola"));
    let bare = respond(query, &ctx("", ""), &kb);
    assert!(!bare.summary.contains("Tailored"));
}

#[test]
fn test_fallback_follows_language() {
    let kb = KnowledgeBase::builtin();
    let en = respond("zzzz qqqq", &AgentContext::new("", "", Language::En), &kb);
    let hi = respond("zzzz qqqq", &AgentContext::new("", "", Language::Hi), &kb);
    assert!(en.is_fallback() && hi.is_fallback());
    assert_ne!(en.headline, hi.headline);
    assert_eq!(en.confidence, hi.confidence);
}

#[test]
fn test_fallback_carries_escalation_plan() {
    let kb = KnowledgeBase::builtin();
    let response = respond("qqqq zzzz", &ctx("", ""), &kb);
    assert!(!response.detailed_plan.is_empty());
    assert!(response.seasonal_notes.is_empty());
}
