use super::domain::{PurchaseUrgency, FACTOR_MAX, FACTOR_MIN};

/// Upper (exclusive) ratio bound and the score awarded below it.
pub(crate) struct RatioStep {
    pub below: f64,
    pub score: i8,
}

pub(crate) const DISCRETIONARY_STEPS: [RatioStep; 4] = [
    RatioStep { below: 0.10, score: 2 },
    RatioStep { below: 0.25, score: 1 },
    RatioStep { below: 0.50, score: 0 },
    RatioStep { below: 1.0, score: -1 },
];

pub(crate) const DISCRETIONARY_FLOOR: i8 = -2;

/// Score awarded when the text mentions any of the keywords.
pub(crate) struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub score: i8,
}

/// Evaluated top to bottom; the first matching tier wins.
pub(crate) const LONG_TERM_RULES: [KeywordRule; 4] = [
    KeywordRule {
        keywords: &["invest", "education", "health", "skill"],
        score: 2,
    },
    KeywordRule {
        keywords: &["computer", "tool", "equipment", "book"],
        score: 1,
    },
    KeywordRule {
        keywords: &["subscription", "service", "vacation"],
        score: -1,
    },
    KeywordRule {
        keywords: &["luxury", "entertainment"],
        score: -2,
    },
];

pub(crate) enum Alignment {
    /// Goal and item both mention the same keyword.
    Shared(&'static [&'static str]),
    /// Item mentions any of the keywords.
    ItemMentions(&'static [&'static str]),
}

pub(crate) struct GoalRule {
    pub goal_keywords: &'static [&'static str],
    pub alignment: Alignment,
    pub aligned: i8,
    pub misaligned: i8,
}

pub(crate) const GOAL_RULES: [GoalRule; 2] = [
    GoalRule {
        goal_keywords: &["emergency", "debt", "save"],
        alignment: Alignment::Shared(&["emergency", "health"]),
        aligned: 1,
        misaligned: -1,
    },
    GoalRule {
        goal_keywords: &["invest", "business"],
        alignment: Alignment::ItemMentions(&["invest", "business"]),
        aligned: 1,
        misaligned: -1,
    },
];

/// Above this ratio a "Mostly Wants" purchase scores the behavioral minimum.
pub(crate) const WANTS_RATIO_LIMIT: f64 = 0.5;

/// Substring match on lower-cased text.
pub(crate) fn mentions_keyword(text: &str, keyword: &str) -> bool {
    text.contains(keyword)
}

/// Like [`mentions_keyword`], but a keyword ending in `y` also matches its
/// `-ies` plural ("emergency" / "emergencies"). Only the shared-keyword goal
/// check uses this.
pub(crate) fn mentions_keyword_or_plural(text: &str, keyword: &str) -> bool {
    if mentions_keyword(text, keyword) {
        return true;
    }
    match keyword.strip_suffix('y') {
        Some(stem) if !stem.is_empty() => text.contains(&format!("{stem}ies")),
        _ => false,
    }
}

pub(crate) fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|keyword| mentions_keyword(text, keyword))
}

pub(crate) fn discretionary(ratio: f64) -> i8 {
    DISCRETIONARY_STEPS
        .iter()
        .find(|step| ratio < step.below)
        .map(|step| step.score)
        .unwrap_or(DISCRETIONARY_FLOOR)
}

pub(crate) fn opportunity(ratio: f64, has_high_interest_debt: bool) -> i8 {
    if has_high_interest_debt {
        return FACTOR_MIN;
    }
    let raw = 1.0 - (ratio * 2.0).floor();
    // NaN survives the clamp and casts to 0.
    raw.clamp(f64::from(FACTOR_MIN), f64::from(FACTOR_MAX)) as i8
}

pub(crate) fn goal_alignment(goal: &str, item: &str) -> i8 {
    for rule in &GOAL_RULES {
        if !mentions_any(goal, rule.goal_keywords) {
            continue;
        }
        let aligned = match rule.alignment {
            Alignment::Shared(keywords) => keywords.iter().any(|keyword| {
                mentions_keyword_or_plural(goal, keyword)
                    && mentions_keyword_or_plural(item, keyword)
            }),
            Alignment::ItemMentions(keywords) => mentions_any(item, keywords),
        };
        return if aligned { rule.aligned } else { rule.misaligned };
    }
    0
}

pub(crate) fn long_term(item: &str) -> i8 {
    LONG_TERM_RULES
        .iter()
        .find(|rule| mentions_any(item, rule.keywords))
        .map(|rule| rule.score)
        .unwrap_or(0)
}

pub(crate) fn behavioral(urgency: &PurchaseUrgency, ratio: f64) -> i8 {
    match urgency {
        PurchaseUrgency::UrgentNeeds => 2,
        PurchaseUrgency::Mixed => 0,
        PurchaseUrgency::MostlyWants if ratio > WANTS_RATIO_LIMIT => FACTOR_MIN,
        PurchaseUrgency::MostlyWants => -1,
        PurchaseUrgency::Other(_) | PurchaseUrgency::Unspecified => 0,
    }
}
