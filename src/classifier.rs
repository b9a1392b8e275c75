//! Field classification for game-rule documents.
//!
//! Decides, from an object key alone, whether the value under that key holds
//! human-readable text (names, descriptions, rules text) or something that
//! must never be translated (identifiers, stat codes, flags). The policy is an
//! ordered rule table: the first rule that matches a key decides.

/// Keys that never hold translatable text even though they don't end in "id".
pub const NON_TRANSLATABLE_KEYS: &[&str] = &[
    "version",
    "seq",
    "MOVE",
    "APL",
    "SAVE",
    "WOUNDS",
    "ATK",
    "HIT",
    "DMG",
    "isDefault",
    "isPublished",
    "isHomebrew",
    "isOpType",
    "isActivated",
    "basesize",
    "currWOUNDS",
    "amount",
    "AP",
    "wepType",
    "type",
    // Encoded effect tokens
    "effects",
];

/// Keys that always hold translatable text.
pub const TRANSLATABLE_KEYS: &[&str] = &[
    "killteamName",
    "description",
    "composition",
    "opTypeName",
    "wepName",
    "profileName",
    "abilityName",
    "ployName",
    "eqName",
    "optionName",
    "name",
    "title",
    "reveal",
    "additionalRules",
    "victoryPoints",
];

/// Array of category labels, translated label by label.
pub const ARCHETYPES_KEY: &str = "archetypes";

/// One entry of the classification policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Key ends in "id", any case.
    IdentifierSuffix,
    /// Key is listed in [`NON_TRANSLATABLE_KEYS`].
    NonTranslatableKey,
    /// Key is listed in [`TRANSLATABLE_KEYS`].
    TranslatableKey,
    /// Key contains "description" or "name", any case.
    ProseSubstring,
    /// Key is exactly [`ARCHETYPES_KEY`].
    Archetypes,
    /// Anything else.
    Fallback,
}

impl Rule {
    /// Rules in priority order. [`Rule::Fallback`] matches every key, so the
    /// table is total.
    pub const ORDER: [Rule; 6] = [
        Rule::IdentifierSuffix,
        Rule::NonTranslatableKey,
        Rule::TranslatableKey,
        Rule::ProseSubstring,
        Rule::Archetypes,
        Rule::Fallback,
    ];

    /// Whether this rule applies to `key`.
    pub fn matches(self, key: &str) -> bool {
        match self {
            Rule::IdentifierSuffix => key.to_lowercase().ends_with("id"),
            Rule::NonTranslatableKey => NON_TRANSLATABLE_KEYS.contains(&key),
            Rule::TranslatableKey => TRANSLATABLE_KEYS.contains(&key),
            Rule::ProseSubstring => {
                let lower = key.to_lowercase();
                lower.contains("description") || lower.contains("name")
            }
            Rule::Archetypes => key == ARCHETYPES_KEY,
            Rule::Fallback => true,
        }
    }

    /// The answer this rule gives when it is the first to match.
    pub fn verdict(self) -> bool {
        matches!(
            self,
            Rule::TranslatableKey | Rule::ProseSubstring | Rule::Archetypes
        )
    }
}

/// Outcome of classifying a key: the deciding rule and its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub rule: Rule,
    pub translatable: bool,
}

/// Classify `key` by the first matching rule in [`Rule::ORDER`].
pub fn classify(key: &str) -> Classification {
    let rule = Rule::ORDER
        .iter()
        .copied()
        .find(|rule| rule.matches(key))
        .unwrap_or(Rule::Fallback);

    Classification {
        rule,
        translatable: rule.verdict(),
    }
}

/// Whether the value under `key` holds translatable text.
pub fn is_translatable(key: &str) -> bool {
    classify(key).translatable
}
