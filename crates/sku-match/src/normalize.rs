//! Code and text normalization primitives.
//!
//! Every comparison in the engine goes through one of the canonical
//! rewritings defined here. All functions are pure and total: any
//! string input (including empty, standing in for an absent code)
//! produces a deterministic result.

use sku_model::NormVariant;

/// The four canonical variants derived from one raw code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedCodeSet {
    /// Uppercased, trimmed, restricted to `[A-Z0-9\-_]`.
    pub conservative: String,
    /// As conservative but punctuation stripped too.
    pub aggressive: String,
    /// OCR confusion pairs (`O→0, I→1, S→5, B→8`) rewritten before the
    /// aggressive strip.
    pub ocr_corrected: String,
    /// Aggressive variant with leading zeros removed.
    pub no_leading_zeros: String,
}

impl NormalizedCodeSet {
    #[must_use]
    pub fn variant(&self, variant: NormVariant) -> &str {
        match variant {
            NormVariant::Conservative => &self.conservative,
            NormVariant::Aggressive => &self.aggressive,
            NormVariant::OcrCorrected => &self.ocr_corrected,
            NormVariant::NoLeadingZeros => &self.no_leading_zeros,
        }
    }
}

/// Derives all four canonical variants of a raw code in one pass.
#[must_use]
pub fn normalize_code(raw: &str) -> NormalizedCodeSet {
    let upper = raw.trim().to_uppercase();

    let mut conservative = String::with_capacity(upper.len());
    let mut aggressive = String::with_capacity(upper.len());
    let mut ocr_corrected = String::with_capacity(upper.len());
    for ch in upper.chars() {
        if ch.is_ascii_uppercase() || ch.is_ascii_digit() {
            conservative.push(ch);
            aggressive.push(ch);
        } else if ch == '-' || ch == '_' {
            conservative.push(ch);
        }
        let corrected = match ch {
            'O' => '0',
            'I' => '1',
            'S' => '5',
            'B' => '8',
            other => other,
        };
        if corrected.is_ascii_uppercase() || corrected.is_ascii_digit() {
            ocr_corrected.push(corrected);
        }
    }
    let no_leading_zeros = aggressive.trim_start_matches('0').to_string();

    NormalizedCodeSet {
        conservative,
        aggressive,
        ocr_corrected,
        no_leading_zeros,
    }
}

/// Normalizes free text for catalog comparisons: uppercase, alphanumeric
/// characters only. Shared with the sibling stages that compare catalog
/// text outside the code cascade.
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit())
        .collect()
}
