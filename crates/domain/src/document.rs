// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! National tax-id document validation.
//!
//! A document is eleven digits. The first nine are the base number and the
//! last two are check digits, each computed as a weighted sum modulo 11:
//!
//! - digit 1 weighs `d0..d8` with 10 down to 2
//! - digit 2 weighs `d0..d9` with 11 down to 2
//!
//! A remainder below 2 yields 0, otherwise the digit is `11 - remainder`.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Number of digits in a normalized document.
pub const DOCUMENT_LENGTH: usize = 11;

/// Characters accepted as visual separators and stripped before validation.
const SEPARATORS: [char; 3] = ['.', '-', '/'];

/// A validated national tax-id.
///
/// Holds exactly eleven normalized digits that pass the two-pass checksum
/// and are not all identical. The only way to obtain one is through
/// [`Document::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Document {
    digits: String,
}

impl Document {
    /// Validates and normalizes a raw document string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input is empty once separators are removed
    /// - The input does not contain exactly eleven digits
    /// - All eleven digits are identical
    /// - The check digits do not match
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let digits: String = clean(raw);

        if digits.is_empty() {
            return Err(DomainError::EmptyDocument);
        }

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::MalformedDocument(String::from(
                "document must contain only digits and separators",
            )));
        }

        if digits.len() != DOCUMENT_LENGTH {
            return Err(DomainError::MalformedDocument(format!(
                "document must have {DOCUMENT_LENGTH} digits, got {}",
                digits.len()
            )));
        }

        let values: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();

        if values.iter().all(|d| *d == values[0]) {
            return Err(DomainError::UniformDigitsDocument);
        }

        let digit1: u32 = check_digit(&values[..9]);
        let digit2: u32 = check_digit(&values[..10]);

        if values[9] != digit1 || values[10] != digit2 {
            return Err(DomainError::ChecksumMismatch);
        }

        Ok(Self { digits })
    }

    /// Returns the eleven normalized digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let d: &str = &self.digits;
        write!(f, "{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}

impl TryFrom<String> for Document {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Document> for String {
    fn from(value: Document) -> Self {
        value.digits
    }
}

/// Validates a raw document string without keeping the normalized value.
///
/// # Errors
///
/// Returns the same errors as [`Document::parse`].
pub fn validate_document(raw: &str) -> Result<(), DomainError> {
    Document::parse(raw).map(|_| ())
}

/// Computes one check digit over `digits`, weighting from `len + 1` down to 2.
///
/// Callers pass nine digits for the first check digit and ten for the second.
#[must_use]
pub fn check_digit(digits: &[u32]) -> u32 {
    let mut weight: u32 = u32::try_from(digits.len()).map_or(0, |len| len + 1);
    let mut total: u32 = 0;

    for digit in digits {
        total += digit * weight;
        weight -= 1;
    }

    let rest: u32 = total % 11;
    if rest < 2 { 0 } else { 11 - rest }
}

fn clean(raw: &str) -> String {
    raw.trim().chars().filter(|c| !SEPARATORS.contains(c)).collect()
}
