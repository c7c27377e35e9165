//! Synthetic copy generator
//!
//! Template-based stand-in for the AI generation the real server performs.
//! Output depends only on the request and the seed.

use lander_core::dto::briefing::{BriefingDraft, DraftBriefingRequest};
use lander_core::dto::variants::{GenerateVariantsRequest, GeneratedVariants, Tone, Variant};
use lander_core::operation::{DraftBriefing, GenerateVariants, Operation};

use crate::random::{derive_seed, seeded_pick, seeded_range};

/// Operation the simulated backend knows how to execute
pub trait SimulatedOperation: Operation {
    fn simulate(request: &Self::Request, seed: u64) -> Self::Output;
}

impl SimulatedOperation for GenerateVariants {
    fn simulate(request: &Self::Request, seed: u64) -> Self::Output {
        generate_variants(request, seed)
    }
}

impl SimulatedOperation for DraftBriefing {
    fn simulate(request: &Self::Request, seed: u64) -> Self::Output {
        draft_briefing(request, seed)
    }
}

fn templates(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Neutral => &[
            "{text}",
            "{text}, made simple",
            "Discover how to {lower}",
            "A better way: {lower}",
            "{text}, without the hassle",
            "Here's how you {lower}",
        ],
        Tone::Bold => &[
            "{text}. Period.",
            "Stop settling. {text}.",
            "{text}, starting today",
            "The only way to {lower}",
            "Dare to {lower}",
            "{text}, no compromises",
        ],
        Tone::Playful => &[
            "{text} (yes, really!)",
            "Psst... {lower}",
            "{text}, and have fun doing it",
            "Who says you can't {lower}?",
            "{text}. Cue the happy dance.",
            "Go on, {lower}",
        ],
        Tone::Professional => &[
            "{text} with confidence",
            "Proven ways to {lower}",
            "{text}: built for teams",
            "Enterprise-ready: {lower}",
            "{text}, backed by data",
            "Trusted by professionals to {lower}",
        ],
        Tone::Urgent => &[
            "{text} before it's too late",
            "Don't wait: {lower}",
            "Last chance to {lower}",
            "{text}, today only",
            "Act now and {lower}",
            "Time is running out: {text}",
        ],
    }
}

fn rationales(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Neutral => &[
            "Keeps the original promise while reducing friction",
            "Clarifies the benefit in plain language",
            "Leads with the outcome the visitor wants",
        ],
        Tone::Bold => &[
            "Confident phrasing signals category leadership",
            "Short declarative sentences raise perceived certainty",
            "Challenges the status quo to provoke action",
        ],
        Tone::Playful => &[
            "Light humor lowers the visitor's guard",
            "Conversational voice builds rapport",
            "Unexpected phrasing increases attention",
        ],
        Tone::Professional => &[
            "Emphasizes reliability for risk-averse buyers",
            "Signals credibility with business-oriented language",
            "Speaks to team-level decision makers",
        ],
        Tone::Urgent => &[
            "Scarcity framing encourages immediate action",
            "Time pressure reduces decision delay",
            "Loss aversion nudges hesitant visitors",
        ],
    }
}

const CLOSERS: &[&str] = &[
    " Try it free.",
    " See it in action.",
    " Join thousands of teams.",
    " Start in minutes.",
    " No credit card required.",
];

const AUDIENCES: &[&str] = &[
    "Small business owners evaluating their first tool",
    "Marketing teams running frequent campaigns",
    "Technical founders shipping on a budget",
    "Operations leads replacing manual workflows",
];

const KEY_MESSAGES: &[&str] = &[
    "Fast setup with no engineering effort",
    "Transparent pricing that scales with usage",
    "Measurable results within the first week",
    "Integrates with the tools you already use",
    "Support from real people when you need it",
    "Security and privacy built in",
];

const GOALS: &[&str] = &[
    "Sign up for a free trial",
    "Book a demo",
    "Subscribe to the newsletter",
    "Request pricing",
    "Download the guide",
];

/// Produces `request.count` distinct variants of the original text
pub fn generate_variants(request: &GenerateVariantsRequest, seed: u64) -> GeneratedVariants {
    let core = request
        .original_text
        .trim()
        .trim_end_matches(['.', '!', '?']);
    let lower = lowercase_first(core);
    let templates = templates(request.tone);
    let offset = seeded_range(seed, 0, templates.len() as u64 - 1) as usize;

    let variants = (0..request.count as usize)
        .map(|i| {
            let variant_seed = derive_seed(seed, i as u64);
            let template = templates[(offset + i) % templates.len()];
            let mut text = template.replace("{text}", core).replace("{lower}", &lower);

            // Templates are exhausted; tell repeats apart with a closer
            if i >= templates.len() {
                let closer = CLOSERS[(i - templates.len()) % CLOSERS.len()];
                text.push_str(closer);
            }

            let mut rationale = seeded_pick(variant_seed, rationales(request.tone))
                .copied()
                .unwrap_or_default()
                .to_string();
            if let Some(context) = request.context.as_deref().filter(|c| !c.trim().is_empty()) {
                rationale.push_str(&format!(" (tailored to: {})", context.trim()));
            }

            Variant {
                text,
                tone: request.tone,
                rationale,
            }
        })
        .collect();

    GeneratedVariants { variants }
}

/// Drafts a briefing for the requested page and goal
pub fn draft_briefing(request: &DraftBriefingRequest, seed: u64) -> BriefingDraft {
    let page = page_name(&request.page_url);

    let target_audience = match request.audience.as_deref().map(str::trim) {
        Some(audience) if !audience.is_empty() => audience.to_string(),
        _ => seeded_pick(derive_seed(seed, 0), AUDIENCES)
            .copied()
            .unwrap_or_default()
            .to_string(),
    };

    let key_messages = distinct_picks(derive_seed(seed, 1), KEY_MESSAGES, 3);

    let mut suggested_goals = vec![request.goal.trim().to_string()];
    for goal in distinct_picks(derive_seed(seed, 2), GOALS, 3) {
        if suggested_goals.len() == 3 {
            break;
        }
        if !goal.eq_ignore_ascii_case(&suggested_goals[0]) {
            suggested_goals.push(goal);
        }
    }

    BriefingDraft {
        summary: format!(
            "The {} page should convince visitors to \"{}\".",
            page,
            request.goal.trim()
        ),
        target_audience,
        key_messages,
        suggested_goals,
    }
}

/// `count` distinct items, in an order chosen by `seed`
fn distinct_picks(seed: u64, items: &[&str], count: usize) -> Vec<String> {
    let offset = seeded_range(seed, 0, items.len() as u64 - 1) as usize;
    let step = if items.len() > 1 { 1 + offset % (items.len() - 1) } else { 1 };

    let mut picked: Vec<String> = Vec::with_capacity(count);
    let mut index = offset;
    while picked.len() < count.min(items.len()) {
        let item = items[index % items.len()];
        if !picked.iter().any(|p| p == item) {
            picked.push(item.to_string());
        } else {
            index += 1;
            continue;
        }
        index += step;
    }
    picked
}

/// Last meaningful path segment of a URL, or its host
fn page_name(url: &str) -> String {
    let without_scheme = url.split("://").nth(1).unwrap_or(url);
    let without_query = without_scheme.split(['?', '#']).next().unwrap_or_default();
    let mut segments = without_query.split('/').filter(|s| !s.is_empty());
    let host = segments.next().unwrap_or("landing");
    segments.last().unwrap_or(host).to_string()
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants_request(count: u32, tone: Tone) -> GenerateVariantsRequest {
        GenerateVariantsRequest {
            original_text: "Ship faster with less code.".to_string(),
            count,
            tone,
            context: None,
        }
    }

    #[test]
    fn test_generates_requested_count() {
        for count in [1, 3, 10] {
            let output = generate_variants(&variants_request(count, Tone::Bold), 42);
            assert_eq!(output.variants.len(), count as usize);
        }
    }

    #[test]
    fn test_variants_are_distinct() {
        let output = generate_variants(&variants_request(10, Tone::Urgent), 7);
        let mut texts: Vec<_> = output.variants.iter().map(|v| v.text.clone()).collect();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), 10);
    }

    #[test]
    fn test_same_seed_same_output() {
        let request = variants_request(4, Tone::Playful);
        assert_eq!(generate_variants(&request, 99), generate_variants(&request, 99));
    }

    #[test]
    fn test_variants_keep_tone_and_core_text() {
        let output = generate_variants(&variants_request(6, Tone::Professional), 1);
        for variant in &output.variants {
            assert_eq!(variant.tone, Tone::Professional);
            assert!(
                variant.text.contains("Ship faster with less code")
                    || variant.text.contains("ship faster with less code"),
                "unexpected variant: {}",
                variant.text
            );
            assert!(!variant.rationale.is_empty());
        }
    }

    #[test]
    fn test_context_is_reflected_in_rationale() {
        let mut request = variants_request(1, Tone::Neutral);
        request.context = Some("B2B analytics".to_string());
        let output = generate_variants(&request, 3);
        assert!(output.variants[0].rationale.ends_with("(tailored to: B2B analytics)"));
    }

    #[test]
    fn test_briefing_uses_given_audience_and_goal() {
        let request = DraftBriefingRequest {
            page_url: "https://example.com/products/pricing?ref=ad".to_string(),
            goal: "Book a demo".to_string(),
            audience: Some("CFOs at mid-size companies".to_string()),
        };
        let draft = draft_briefing(&request, 5);

        assert_eq!(draft.target_audience, "CFOs at mid-size companies");
        assert_eq!(draft.summary, "The pricing page should convince visitors to \"Book a demo\".");
        assert_eq!(draft.suggested_goals[0], "Book a demo");
        assert_eq!(draft.suggested_goals.len(), 3);
        assert_eq!(
            draft
                .suggested_goals
                .iter()
                .filter(|g| g.eq_ignore_ascii_case("book a demo"))
                .count(),
            1
        );
        assert_eq!(draft.key_messages.len(), 3);
    }

    #[test]
    fn test_distinct_picks_never_repeat() {
        for seed in 0..200 {
            let picks = distinct_picks(seed, KEY_MESSAGES, 3);
            assert_eq!(picks.len(), 3);
            assert_ne!(picks[0], picks[1]);
            assert_ne!(picks[1], picks[2]);
            assert_ne!(picks[0], picks[2]);
        }
    }

    #[test]
    fn test_page_name() {
        assert_eq!(page_name("https://example.com/"), "example.com");
        assert_eq!(page_name("https://example.com/a/pricing#top"), "pricing");
        assert_eq!(page_name("landing"), "landing");
    }
}
