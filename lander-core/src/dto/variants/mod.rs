//! Variant generation DTOs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on variants per request
pub const MAX_VARIANTS: u32 = 10;

fn default_count() -> u32 {
    3
}

/// Voice the generated copy should take
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Neutral,
    Bold,
    Playful,
    Professional,
    Urgent,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Neutral,
        Tone::Bold,
        Tone::Playful,
        Tone::Professional,
        Tone::Urgent,
    ];
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tone::Neutral => "neutral",
            Tone::Bold => "bold",
            Tone::Playful => "playful",
            Tone::Professional => "professional",
            Tone::Urgent => "urgent",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown tone: {}", s))
    }
}

/// Request to generate copy variants for one optimization point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVariantsRequest {
    /// Current text of the optimization point (e.g. the headline)
    pub original_text: String,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub tone: Tone,
    /// Free-form notes about the page or product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// A single generated variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub text: String,
    pub tone: Tone,
    pub rationale: String,
}

/// Result of a `generate-variants` job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedVariants {
    pub variants: Vec<Variant>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: GenerateVariantsRequest =
            serde_json::from_str(r#"{"originalText":"Hello"}"#).unwrap();
        assert_eq!(request.count, 3);
        assert_eq!(request.tone, Tone::Neutral);
        assert!(request.context.is_none());
    }

    #[test]
    fn test_tone_parsing_is_case_insensitive() {
        assert_eq!("Playful".parse::<Tone>().unwrap(), Tone::Playful);
        assert!("sarcastic".parse::<Tone>().is_err());
    }
}
