//! Match strategy taxonomy.
//!
//! Strategy names travel into the output table as flat strings
//! (`conservative`, `fuzzy_partial_ratio`, ...), so the enum round-trips
//! through `Display`/`FromStr` and serializes as that string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ResolveError;

/// One of the four deterministic rewritings of a raw code used as an
/// index key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NormVariant {
    /// Uppercased, trimmed, restricted to `[A-Z0-9\-_]`.
    Conservative,
    /// As conservative but punctuation stripped too (`[A-Z0-9]`).
    Aggressive,
    /// Aggressive with `O→0, I→1, S→5, B→8` applied before the strip.
    OcrCorrected,
    /// Aggressive with leading zeros removed.
    NoLeadingZeros,
}

impl NormVariant {
    /// Exact-match cascade order, most precise first. A conservative hit
    /// rewrites the fewest characters and is trusted over the lossier
    /// variants, which risk collisions between distinct codes.
    pub const CASCADE: [NormVariant; 4] = [
        NormVariant::Conservative,
        NormVariant::Aggressive,
        NormVariant::OcrCorrected,
        NormVariant::NoLeadingZeros,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Aggressive => "aggressive",
            Self::OcrCorrected => "ocr_corrected",
            Self::NoLeadingZeros => "no_leading_zeros",
        }
    }
}

/// A string-similarity scorer used by the fuzzy stage. All scorers
/// return scores on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FuzzyScorer {
    /// Best full-ratio alignment of the shorter string inside the longer.
    PartialRatio,
    /// Token-set comparison over sorted unique whitespace tokens.
    TokenSetRatio,
    /// Plain Indel-based ratio over the whole strings.
    Ratio,
}

impl FuzzyScorer {
    /// Fixed evaluation order; earlier scorers win score ties.
    pub const EVALUATION_ORDER: [FuzzyScorer; 3] = [
        FuzzyScorer::PartialRatio,
        FuzzyScorer::TokenSetRatio,
        FuzzyScorer::Ratio,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PartialRatio => "partial_ratio",
            Self::TokenSetRatio => "token_set_ratio",
            Self::Ratio => "ratio",
        }
    }
}

/// How a record's category was produced. Closed set: output strategy
/// names are exhaustiveness-checked instead of free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStrategy {
    /// Canonical-code equality under one normalization variant.
    Exact(NormVariant),
    /// Best approximate match from one similarity scorer.
    Fuzzy(FuzzyScorer),
    /// Truncation of the normalized code found verbatim in the index.
    PartialMatch,
    /// Forced override for subtotal/aggregate rows.
    SpecialCase,
    /// No stage produced a match.
    NoMatch,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(variant) => f.write_str(variant.as_str()),
            Self::Fuzzy(scorer) => write!(f, "fuzzy_{}", scorer.as_str()),
            Self::PartialMatch => f.write_str("partial_match"),
            Self::SpecialCase => f.write_str("special_case"),
            Self::NoMatch => f.write_str("no_match"),
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let strategy = match s {
            "conservative" => Self::Exact(NormVariant::Conservative),
            "aggressive" => Self::Exact(NormVariant::Aggressive),
            "ocr_corrected" => Self::Exact(NormVariant::OcrCorrected),
            "no_leading_zeros" => Self::Exact(NormVariant::NoLeadingZeros),
            "fuzzy_partial_ratio" => Self::Fuzzy(FuzzyScorer::PartialRatio),
            "fuzzy_token_set_ratio" => Self::Fuzzy(FuzzyScorer::TokenSetRatio),
            "fuzzy_ratio" => Self::Fuzzy(FuzzyScorer::Ratio),
            "partial_match" => Self::PartialMatch,
            "special_case" => Self::SpecialCase,
            "no_match" => Self::NoMatch,
            other => return Err(ResolveError::UnknownStrategy(other.to_string())),
        };
        Ok(strategy)
    }
}

impl Serialize for MatchStrategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MatchStrategy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        let all = [
            MatchStrategy::Exact(NormVariant::Conservative),
            MatchStrategy::Exact(NormVariant::Aggressive),
            MatchStrategy::Exact(NormVariant::OcrCorrected),
            MatchStrategy::Exact(NormVariant::NoLeadingZeros),
            MatchStrategy::Fuzzy(FuzzyScorer::PartialRatio),
            MatchStrategy::Fuzzy(FuzzyScorer::TokenSetRatio),
            MatchStrategy::Fuzzy(FuzzyScorer::Ratio),
            MatchStrategy::PartialMatch,
            MatchStrategy::SpecialCase,
            MatchStrategy::NoMatch,
        ];
        for strategy in all {
            let name = strategy.to_string();
            let parsed: MatchStrategy = name.parse().expect("parse strategy name");
            assert_eq!(parsed, strategy, "round trip failed for {name}");
        }
    }

    #[test]
    fn fuzzy_names_carry_scorer() {
        let name = MatchStrategy::Fuzzy(FuzzyScorer::TokenSetRatio).to_string();
        assert_eq!(name, "fuzzy_token_set_ratio");
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "fuzzy_jaro".parse::<MatchStrategy>().unwrap_err();
        assert!(matches!(err, ResolveError::UnknownStrategy(_)));
    }

    #[test]
    fn cascade_order_is_fixed() {
        assert_eq!(
            NormVariant::CASCADE.map(|v| v.as_str()),
            [
                "conservative",
                "aggressive",
                "ocr_corrected",
                "no_leading_zeros"
            ]
        );
    }
}
