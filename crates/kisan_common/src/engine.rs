//! Response engine: maps a farmer's question plus call context to a
//! structured advisory reply.
//!
//! Pure function of (query, context, knowledge base). Scoring is lexical
//! overlap between query tokens and each capsule's searchable text, with
//! a boost when the caller's crop matches a capsule's crop-focus tags.
//! Ties break by catalog order. A query that clears no capsule's
//! threshold gets the fallback reply; that is a normal outcome, not an
//! error.

use crate::knowledge::{KnowledgeBase, KnowledgeCapsule};
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Query contains a crop-focus tag as a substring.
const TAG_CONTAINS_WEIGHT: u32 = 15;
/// Query token equals a crop-focus tag.
const TAG_WORD_WEIGHT: u32 = 10;
/// Query token (len > 3) is a substring of a tag.
const TAG_PARTIAL_WEIGHT: u32 = 5;
/// Title contains a query token (len > 3).
const TITLE_WORD_WEIGHT: u32 = 8;
/// Summary or body contains a query token (len > 4).
const DETAIL_WORD_WEIGHT: u32 = 3;
/// Context crop matches one of the capsule's crop-focus tags.
const CROP_FOCUS_BOOST: u32 = 20;

/// Minimum raw score for a capsule to count as a real match.
pub const MIN_MATCH_SCORE: u32 = 20;
/// Confidence reported on the fallback path. Strictly below the lowest
/// confidence any real match can report (MIN_MATCH_SCORE maps to ~0.44).
pub const FALLBACK_CONFIDENCE: f32 = 0.2;
/// Confidence is score / (score + pivot), an asymptotic map into [0, 1).
const SCORE_PIVOT: f32 = 25.0;

/// Per-call context supplied alongside the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentContext {
    /// Crop focus, free text, may be empty.
    pub crop: String,
    /// State or district, free text, may be empty.
    pub region: String,
    pub language: Language,
}

impl AgentContext {
    pub fn new(crop: impl Into<String>, region: impl Into<String>, language: Language) -> Self {
        Self {
            crop: crop.into(),
            region: region.into(),
            language,
        }
    }
}

/// The structured advisory reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub headline: String,
    pub summary: String,
    /// Ordered action steps.
    pub detailed_plan: Vec<String>,
    pub seasonal_notes: Vec<String>,
    pub improvement_tips: Vec<String>,
    pub suggested_follow_ups: Vec<String>,
    /// Match strength in [0, 1]; the fallback reply reports a value below
    /// anything a real match produces.
    pub confidence: f32,
    /// Id of the capsule behind this reply; `None` on the fallback path.
    pub matched_capsule: Option<String>,
}

impl AgentResponse {
    /// Whether this reply came from the fallback path.
    pub fn is_fallback(&self) -> bool {
        self.matched_capsule.is_none()
    }
}

/// Tokenize text for matching: lowercase, split on non-alphanumerics,
/// keep tokens of length >= 2.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.len() >= 2)
        .map(String::from)
        .collect()
}

/// Generate the advisory reply for a non-empty query.
///
/// Callers trim before invoking; a blank query never reaches the engine
/// (the console loop guards it). Inputs are never mutated.
pub fn respond(query: &str, ctx: &AgentContext, kb: &KnowledgeBase) -> AgentResponse {
    match best_match(query, ctx, kb) {
        Some((capsule, score)) => {
            tracing::debug!(capsule = %capsule.id, score, "capsule selected");
            capsule_response(capsule, score, ctx)
        }
        None => {
            tracing::debug!("no capsule cleared the match threshold, using fallback");
            fallback_response(ctx)
        }
    }
}

/// Highest-scoring capsule at or above the match threshold, ties broken
/// by catalog order (strict comparison keeps the earlier capsule).
fn best_match<'a>(
    query: &str,
    ctx: &AgentContext,
    kb: &'a KnowledgeBase,
) -> Option<(&'a KnowledgeCapsule, u32)> {
    let query_lower = query.to_lowercase();
    let query_tokens: BTreeSet<String> = tokenize(query).into_iter().collect();
    let crop_tokens: BTreeSet<String> = tokenize(&ctx.crop).into_iter().collect();

    let mut best: Option<(&KnowledgeCapsule, u32)> = None;
    for capsule in kb.capsules() {
        let score = score_capsule(capsule, &query_lower, &query_tokens, &crop_tokens);
        if score >= MIN_MATCH_SCORE && best.map_or(true, |(_, s)| score > s) {
            best = Some((capsule, score));
        }
    }
    best
}

/// Weighted lexical overlap between the query and one capsule.
fn score_capsule(
    capsule: &KnowledgeCapsule,
    query_lower: &str,
    query_tokens: &BTreeSet<String>,
    crop_tokens: &BTreeSet<String>,
) -> u32 {
    let mut score: u32 = 0;

    // Crop-focus tags carry the most weight
    for tag in &capsule.crop_focus {
        if query_lower.contains(tag.as_str()) {
            score += TAG_CONTAINS_WEIGHT;
        }
        for token in query_tokens {
            if token == tag {
                score += TAG_WORD_WEIGHT;
            } else if token.len() > 3 && tag.contains(token.as_str()) {
                score += TAG_PARTIAL_WEIGHT;
            }
        }
    }

    // Title matches
    let title_lower = capsule.title.to_lowercase();
    for token in query_tokens {
        if token.len() > 3 && title_lower.contains(token.as_str()) {
            score += TITLE_WORD_WEIGHT;
        }
    }

    // Summary and body matches, lighter weight
    let detail_lower = format!("{} {}", capsule.summary, capsule.body).to_lowercase();
    for token in query_tokens {
        if token.len() > 4 && detail_lower.contains(token.as_str()) {
            score += DETAIL_WORD_WEIGHT;
        }
    }

    // Boost when the caller's stated crop matches the capsule's focus.
    // Only strengthens an existing lexical match: the boost alone must
    // never turn a zero-overlap query into a selection.
    if score > 0 && !crop_tokens.is_empty() {
        let tag_tokens: BTreeSet<String> = capsule
            .crop_focus
            .iter()
            .flat_map(|t| tokenize(t))
            .collect();
        if crop_tokens.iter().any(|t| tag_tokens.contains(t)) {
            score += CROP_FOCUS_BOOST;
        }
    }

    score
}

fn confidence_for(score: u32) -> f32 {
    (score as f32 / (score as f32 + SCORE_PIVOT)).clamp(0.0, 1.0)
}

/// Build the reply for a matched capsule.
fn capsule_response(capsule: &KnowledgeCapsule, score: u32, ctx: &AgentContext) -> AgentResponse {
    let mut summary = capsule.summary.clone();
    if let Some(line) = ctx.language.tailoring_line(&ctx.crop, &ctx.region) {
        summary.push(' ');
        summary.push_str(&line);
    }

    AgentResponse {
        headline: capsule.title.clone(),
        summary,
        detailed_plan: capsule.plan.clone(),
        seasonal_notes: capsule.seasonal_notes.clone(),
        improvement_tips: capsule.tips.clone(),
        suggested_follow_ups: capsule.follow_ups.clone(),
        confidence: confidence_for(score),
        matched_capsule: Some(capsule.id.clone()),
    }
}

/// The generic gather-more-detail / escalate reply.
pub fn fallback_response(ctx: &AgentContext) -> AgentResponse {
    let pack = ctx.language.pack();
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();

    AgentResponse {
        headline: pack.fallback_headline.to_string(),
        summary: pack.fallback_summary.to_string(),
        detailed_plan: owned(pack.escalation_steps),
        seasonal_notes: Vec::new(),
        improvement_tips: Vec::new(),
        suggested_follow_ups: owned(pack.fallback_follow_ups),
        confidence: FALLBACK_CONFIDENCE,
        matched_capsule: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("My cotton crop, leaves curling!");
        assert!(tokens.contains(&"cotton".to_string()));
        assert!(tokens.contains(&"curling".to_string()));
        assert!(!tokens.contains(&"".to_string()));
    }

    #[test]
    fn test_tokenize_drops_single_chars() {
        let tokens = tokenize("a b cd");
        assert_eq!(tokens, vec!["cd".to_string()]);
    }

    #[test]
    fn test_confidence_monotonic_and_bounded() {
        let mut prev = 0.0;
        for score in [0, 5, 20, 60, 200, 10_000] {
            let c = confidence_for(score);
            assert!((0.0..=1.0).contains(&c));
            assert!(c >= prev);
            prev = c;
        }
    }

    #[test]
    fn test_min_match_confidence_above_fallback() {
        assert!(confidence_for(MIN_MATCH_SCORE) > FALLBACK_CONFIDENCE);
    }

    #[test]
    fn test_crop_boost_raises_score() {
        let kb = KnowledgeBase::builtin();
        let capsule = kb.get("cotton-pest-spray").unwrap();
        let query = "what should i spray on curling leaves";
        let query_lower = query.to_lowercase();
        let tokens: BTreeSet<String> = tokenize(query).into_iter().collect();
        let no_crop = BTreeSet::new();
        let with_crop: BTreeSet<String> = tokenize("Cotton").into_iter().collect();
        let base = score_capsule(capsule, &query_lower, &tokens, &no_crop);
        let boosted = score_capsule(capsule, &query_lower, &tokens, &with_crop);
        assert_eq!(boosted, base + CROP_FOCUS_BOOST);
    }

    #[test]
    fn test_fallback_localized() {
        let en = fallback_response(&AgentContext::new("", "", Language::En));
        let hi = fallback_response(&AgentContext::new("", "", Language::Hi));
        assert!(en.is_fallback());
        assert!(hi.is_fallback());
        assert_ne!(en.headline, hi.headline);
        assert!(!hi.suggested_follow_ups.is_empty());
    }
}
