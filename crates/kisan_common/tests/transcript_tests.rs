//! Transcript model tests: ordering, the message cap, serialization.

use chrono::{TimeZone, Utc};
use kisan_common::transcript::{Message, Speaker, Transcript, MAX_TRANSCRIPT_MESSAGES};

#[test]
fn test_speaker_display() {
    assert_eq!(format!("{}", Speaker::Farmer), "farmer");
    assert_eq!(format!("{}", Speaker::Agent), "agent");
}

#[test]
fn test_push_preserves_order() {
    let mut transcript = Transcript::new();
    assert!(transcript.is_empty());

    transcript.push(Message::farmer("first question"));
    transcript.push(Message::agent("first answer"));
    transcript.push(Message::farmer("second question"));

    assert_eq!(transcript.len(), 3);
    let speakers: Vec<Speaker> = transcript.messages().iter().map(|m| m.speaker).collect();
    assert_eq!(speakers, vec![Speaker::Farmer, Speaker::Agent, Speaker::Farmer]);
    assert_eq!(transcript.last().map(|m| m.text.as_str()), Some("second question"));
}

#[test]
fn test_cap_refuses_and_counts() {
    let mut transcript = Transcript::new();
    for i in 0..MAX_TRANSCRIPT_MESSAGES {
        assert!(transcript.push(Message::farmer(format!("q{}", i))));
    }
    assert!(!transcript.was_capped());

    assert!(!transcript.push(Message::farmer("over the cap")));
    assert!(!transcript.push(Message::agent("also over")));

    assert_eq!(transcript.len(), MAX_TRANSCRIPT_MESSAGES);
    assert!(transcript.was_capped());
    assert_eq!(transcript.dropped_count(), 2);
}

#[test]
fn test_serialization_round_trip() {
    let mut transcript = Transcript::new();
    let stamp = Utc.with_ymd_and_hms(2026, 6, 15, 10, 30, 0).unwrap();
    transcript.push(Message::new(Speaker::Farmer, "leaves curling", stamp));
    transcript.push(Message::new(Speaker::Agent, "scout the field first", stamp));

    let json = serde_json::to_string(&transcript).unwrap();
    assert!(json.contains("\"speaker\":\"farmer\""));
    assert!(json.contains("\"speaker\":\"agent\""));

    let parsed: Transcript = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed.messages()[0].text, "leaves curling");
    assert_eq!(parsed.messages()[0].sent_at, stamp);
}
