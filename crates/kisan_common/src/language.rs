//! Interaction languages and the templated strings that frame a reply.
//!
//! Capsule advisory content is authored in English; everything templated
//! around it (section labels, the fallback reply, tailoring lines) comes
//! from the per-language pack so the transcript framing follows the
//! caller's language.

use crate::error::DeskError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported interaction languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    /// Parse a language code, case-insensitively. Unknown codes are `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Self::En),
            "hi" => Some(Self::Hi),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिंदी",
        }
    }

    /// The templated strings for this language.
    pub fn pack(&self) -> &'static LanguagePack {
        match self {
            Self::En => &EN_PACK,
            Self::Hi => &HI_PACK,
        }
    }

    /// One-line tailoring sentence naming the caller's crop and/or region.
    /// `None` when both are empty.
    pub fn tailoring_line(&self, crop: &str, region: &str) -> Option<String> {
        let crop = crop.trim();
        let region = region.trim();
        match (self, crop.is_empty(), region.is_empty()) {
            (_, true, true) => None,
            (Self::En, false, false) => Some(format!("Tailored for {} growers in {}.", crop, region)),
            (Self::En, false, true) => Some(format!("Tailored for {} growers.", crop)),
            (Self::En, true, false) => Some(format!("Tailored for farmers in {}.", region)),
            (Self::Hi, false, false) => Some(format!("{} ({}) के किसानों के लिए तैयार सलाह।", crop, region)),
            (Self::Hi, false, true) => Some(format!("{} के किसानों के लिए तैयार सलाह।", crop)),
            (Self::Hi, true, false) => Some(format!("{} के किसानों के लिए तैयार सलाह।", region)),
        }
    }
}

impl FromStr for Language {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| DeskError::UnknownLanguage(s.to_string()))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Templated strings for one language.
pub struct LanguagePack {
    /// Section label above the numbered plan steps.
    pub action_steps: &'static str,
    pub seasonal_watchouts: &'static str,
    pub pro_tips: &'static str,
    pub need_from_farmer: &'static str,
    pub confidence_label: &'static str,
    pub fallback_headline: &'static str,
    pub fallback_summary: &'static str,
    pub fallback_follow_ups: &'static [&'static str],
    /// Escalation playbook, also used as the fallback reply's plan.
    pub escalation_steps: &'static [&'static str],
}

pub static EN_PACK: LanguagePack = LanguagePack {
    action_steps: "Action steps:",
    seasonal_watchouts: "Seasonal watch-outs:",
    pro_tips: "Pro tips:",
    need_from_farmer: "Need from farmer:",
    confidence_label: "Confidence score:",
    fallback_headline: "Let's gather a little more detail",
    fallback_summary: "This question did not match a specific advisory. Collect \
                       the details below, and escalate to the field officer if \
                       the issue is urgent.",
    fallback_follow_ups: &[
        "Which crop and variety is affected?",
        "How large is the affected area, in acres?",
        "When did the problem start, and has any treatment been tried?",
    ],
    escalation_steps: &[
        "Log the unresolved case in the CRM within 5 minutes.",
        "Schedule a field officer visit when crop loss exceeds 20%.",
        "Connect the caller to the agri-finance partner for credit relief.",
    ],
};

pub static HI_PACK: LanguagePack = LanguagePack {
    action_steps: "अगले कदम:",
    seasonal_watchouts: "मौसमी सावधानियां:",
    pro_tips: "उपयोगी सुझाव:",
    need_from_farmer: "किसान से जानकारी चाहिए:",
    confidence_label: "विश्वास स्कोर:",
    fallback_headline: "कृपया थोड़ी और जानकारी दें",
    fallback_summary: "यह प्रश्न किसी विशेष सलाह से मेल नहीं खाया। नीचे दी गई जानकारी \
                       एकत्र करें, और मामला गंभीर हो तो फील्ड अधिकारी को भेजें।",
    fallback_follow_ups: &[
        "कौन सी फसल और किस्म प्रभावित है?",
        "प्रभावित क्षेत्र कितने एकड़ में है?",
        "समस्या कब शुरू हुई, और क्या कोई उपचार किया गया है?",
    ],
    escalation_steps: &[
        "अनसुलझे मामले को 5 मिनट के भीतर CRM में दर्ज करें।",
        "फसल नुकसान 20% से अधिक होने पर फील्ड अधिकारी का दौरा तय करें।",
        "ऋण राहत के लिए कॉलर को एग्री-फाइनेंस साझेदार से जोड़ें।",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_case_insensitive() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("EN"), Some(Language::En));
        assert_eq!(Language::from_code(" hi "), Some(Language::Hi));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_from_str_error_names_code() {
        let err = "xx".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("xx"));
    }

    #[test]
    fn test_tailoring_line() {
        assert_eq!(Language::En.tailoring_line("", ""), None);
        assert_eq!(Language::En.tailoring_line("  ", ""), None);
        let line = Language::En.tailoring_line("Cotton", "Akola").unwrap();
        assert!(line.contains("Cotton"));
        assert!(line.contains("Akola"));
        let hi = Language::Hi.tailoring_line("कपास", "").unwrap();
        assert!(hi.contains("कपास"));
    }

    #[test]
    fn test_packs_fully_populated() {
        for lang in [Language::En, Language::Hi] {
            let pack = lang.pack();
            assert!(!pack.action_steps.is_empty());
            assert!(!pack.fallback_headline.is_empty());
            assert!(!pack.fallback_summary.is_empty());
            assert!(!pack.fallback_follow_ups.is_empty());
            assert!(!pack.escalation_steps.is_empty());
        }
    }
}
