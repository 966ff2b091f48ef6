//! Keyword-rule intent classification with an Indian city gazetteer.
//!
//! Rules are evaluated in a fixed priority order and the first match wins;
//! categories overlap in keyword space so the order is load-bearing.

use bi_core::Intent;
use tracing::debug;

/// Lowercase city names matched as substrings. Multi-word names come first so
/// extraction prefers "navi mumbai" over "mumbai".
pub const CITY_GAZETTEER: &[&str] = &[
    "new delhi",
    "navi mumbai",
    "mumbai",
    "delhi",
    "bangalore",
    "bengaluru",
    "hyderabad",
    "chennai",
    "kolkata",
    "pune",
    "ahmedabad",
    "surat",
    "jaipur",
    "lucknow",
    "kanpur",
    "nagpur",
    "indore",
    "thane",
    "bhopal",
    "visakhapatnam",
    "vizag",
    "patna",
    "vadodara",
    "ghaziabad",
    "ludhiana",
    "agra",
    "nashik",
    "faridabad",
    "meerut",
    "rajkot",
    "varanasi",
    "srinagar",
    "aurangabad",
    "dhanbad",
    "amritsar",
    "prayagraj",
    "allahabad",
    "ranchi",
    "howrah",
    "coimbatore",
    "jabalpur",
    "gwalior",
    "vijayawada",
    "jodhpur",
    "madurai",
    "raipur",
    "kota",
    "guwahati",
    "chandigarh",
    "solapur",
    "hubli",
    "mysore",
    "mysuru",
    "tiruchirappalli",
    "bareilly",
    "aligarh",
    "tiruppur",
    "gurgaon",
    "gurugram",
    "moradabad",
    "jalandhar",
    "bhubaneswar",
    "salem",
    "warangal",
    "thiruvananthapuram",
    "trivandrum",
    "bhiwandi",
    "saharanpur",
    "guntur",
    "bikaner",
    "noida",
    "jamshedpur",
    "bhilai",
    "cuttack",
    "kochi",
    "cochin",
    "udaipur",
    "dehradun",
    "mangalore",
    "belgaum",
    "nellore",
    "ajmer",
    "siliguri",
    "panaji",
    "shimla",
    "puducherry",
    "pondicherry",
    "kozhikode",
    "thrissur",
    "jammu",
    "vellore",
];

const MARKET_ENTRY_PHRASES: &[&str] = &[
    "new market",
    "enter",
    "entering",
    "expand",
    "expansion",
    "move to",
    "relocate",
    "shift to",
    "tier 2",
    "tier-2",
    "tier 3",
    "tier-3",
    "new city",
    "new location",
    "geographic",
    "international",
];

const GROWTH_WORDS: &[&str] = &["grow", "scale", "growth"];
const HIRING_WORDS: &[&str] = &["hire", "hiring", "team", "recruit"];
const FUNDING_WORDS: &[&str] = &["fund", "invest", "capital", "raise"];
const MARKETING_WORDS: &[&str] = &["market", "customer", "acquire", "sales"];
const OPERATIONS_WORDS: &[&str] = &["operation", "efficien", "process", "optimize"];

const PIVOT_PHRASES: &[&str] = &[
    "pivot",
    "transform",
    "diversify",
    "new service",
    "new offering",
    "new product line",
    "new business",
    "new line of",
    "branch out",
    "rebrand",
];
const ADD_TARGETS: &[&str] = &[
    "consulting",
    "service",
    "product",
    "offering",
    "vertical",
    "segment",
    "division",
    "line",
];

const COMPLIANCE_WORDS: &[&str] = &[
    "gst",
    "tax",
    "compli",
    "legal",
    "sue",
    "lawsuit",
    "terminate",
    "dismiss",
    "fire",
    "action against",
    "labor",
    "labour",
    "contract",
    "dispute",
    "grievance",
    "warning letter",
    "notice",
    "severance",
];

/// True if `haystack` contains any of `needles`. Callers lowercase first.
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn is_pivot(q: &str) -> bool {
    contains_any(q, PIVOT_PHRASES)
        || (q.contains("add") && contains_any(q, ADD_TARGETS))
        || (q.contains("should") && q.contains("start") && contains_any(q, &["new", "another"]))
        || (q.contains("should") && q.contains("add"))
}

/// Classify a free-text query. Unmatched queries map to [`Intent::General`].
pub fn classify_intent(query: &str) -> Intent {
    let q = query.to_lowercase();
    let intent = if find_city(&q).is_some() || contains_any(&q, MARKET_ENTRY_PHRASES) {
        Intent::MarketEntry
    } else if contains_any(&q, GROWTH_WORDS) {
        Intent::Growth
    } else if contains_any(&q, HIRING_WORDS) {
        Intent::Hiring
    } else if contains_any(&q, FUNDING_WORDS) {
        Intent::Funding
    } else if contains_any(&q, MARKETING_WORDS) {
        Intent::Marketing
    } else if contains_any(&q, OPERATIONS_WORDS) {
        Intent::Operations
    } else if is_pivot(&q) {
        Intent::Pivot
    } else if contains_any(&q, COMPLIANCE_WORDS) {
        Intent::Compliance
    } else {
        Intent::General
    };
    debug!(%intent, "classified query");
    intent
}

/// Gazetteer cities match whole words only, so "franchise" is not Ranchi.
fn find_city(lowered: &str) -> Option<&'static str> {
    CITY_GAZETTEER.iter().copied().find(|c| contains_word(lowered, c))
}

fn contains_word(haystack: &str, word: &str) -> bool {
    haystack.match_indices(word).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + word.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// First gazetteer city mentioned in `query`, title-cased.
pub fn extract_city(query: &str) -> Option<String> {
    find_city(&query.to_lowercase()).map(title_case)
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_mention_wins_over_compliance() {
        assert_eq!(
            classify_intent("I want to sue my employee for fraud in Mumbai"),
            Intent::MarketEntry
        );
    }

    #[test]
    fn unmatched_text_is_general() {
        assert_eq!(classify_intent("random unrelated text"), Intent::General);
        assert_eq!(classify_intent(""), Intent::General);
    }

    #[test]
    fn rules_fire_in_priority_order() {
        let cases = [
            ("Should I expand to Jaipur?", Intent::MarketEntry),
            ("Is a tier-2 launch worth it", Intent::MarketEntry),
            ("How do I grow revenue", Intent::Growth),
            ("Can I scale my team fast", Intent::Growth),
            ("I need to hire two chefs", Intent::Hiring),
            ("Should I raise capital now", Intent::Funding),
            ("How do I acquire more customers", Intent::Marketing),
            ("Help me optimize my billing process", Intent::Operations),
            ("Should I add consulting to my offer", Intent::Pivot),
            ("Time to pivot?", Intent::Pivot),
            ("Should we start another brand", Intent::Pivot),
            ("When is my GST return due", Intent::Compliance),
            ("My cashier stole money, can I fire him", Intent::Compliance),
        ];
        for (q, expected) in cases {
            assert_eq!(classify_intent(q), expected, "query: {q}");
        }
    }

    #[test]
    fn market_entry_beats_pivot() {
        assert_eq!(
            classify_intent("Should I add a new service line when I expand"),
            Intent::MarketEntry
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify_intent("OPENING IN PUNE"), Intent::MarketEntry);
        assert_eq!(classify_intent("REBRAND the shop"), Intent::Pivot);
    }

    #[test]
    fn extracts_and_title_cases_city() {
        assert_eq!(extract_city("Should I expand to Jaipur?").as_deref(), Some("Jaipur"));
        assert_eq!(extract_city("a kiosk in NAVI MUMBAI").as_deref(), Some("Navi Mumbai"));
        assert_eq!(extract_city("somewhere nice"), None);
    }

    #[test]
    fn cities_inside_other_words_do_not_match() {
        assert_eq!(extract_city("Should I franchise my bakery?"), None);
        assert_ne!(classify_intent("Should I franchise my bakery?"), Intent::MarketEntry);
        assert_eq!(extract_city("draw a diagram of the methane plant"), None);
        assert_eq!(extract_city("is this an opportune moment"), None);
        assert_eq!(extract_city("opening in pune, then ranchi").as_deref(), Some("Pune"));
        assert_eq!(extract_city("Thane!").as_deref(), Some("Thane"));
    }

    #[test]
    fn gazetteer_is_lowercase_and_large() {
        assert!(CITY_GAZETTEER.len() >= 80);
        assert!(CITY_GAZETTEER.iter().all(|c| c.to_lowercase() == *c));
    }
}
