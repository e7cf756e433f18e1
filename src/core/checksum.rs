//! ISBN check digit arithmetic.
//!
//! Both formulas are pure and assume their input has already been
//! validated: the right number of entries, each one a decimal digit.

use crate::domain::model::{CheckDigit, DigitSequence, IsbnKind, Verdict};

/// ISBN-10: weight position `i` by `10 - i`, result in `0..=10`.
pub fn isbn10_check(stem: &[u8; 9]) -> u8 {
    let a: u32 = stem
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (10 - i as u32))
        .sum();

    ((11 - a % 11) % 11) as u8
}

/// ISBN-13: even positions weigh 1, odd positions weigh 3, result in `0..=9`.
pub fn isbn13_check(stem: &[u8; 12]) -> u8 {
    let (a, b) = stem
        .iter()
        .enumerate()
        .fold((0u32, 0u32), |(a, b), (i, &d)| {
            if i % 2 == 0 {
                (a + u32::from(d), b)
            } else {
                (a, b + u32::from(d))
            }
        });

    ((10 - (a + b * 3) % 10) % 10) as u8
}

/// Computes the check digit for a stem, or for the stem portion of a full
/// ISBN.
///
/// # Panics
///
/// If the sequence is shorter than a stem. Sequences accepted by
/// [`classify`](crate::core::classifier::classify) never are.
pub fn compute_check(seq: &DigitSequence) -> CheckDigit {
    let value = match seq.kind() {
        IsbnKind::Isbn10 => {
            let mut stem = [0u8; 9];
            stem.copy_from_slice(seq.stem());
            isbn10_check(&stem)
        }
        IsbnKind::Isbn13 => {
            let mut stem = [0u8; 12];
            stem.copy_from_slice(seq.stem());
            isbn13_check(&stem)
        }
    };

    tracing::debug!("computed {} check digit {} for {}", seq.kind(), value, seq);

    // Both formulas stay within 0..=10.
    CheckDigit::new(value).unwrap_or(CheckDigit::X)
}

/// Validate mode: compares the supplied check character of a full ISBN
/// against the computed one. Returns `None` for a bare stem.
pub fn evaluate(seq: &DigitSequence) -> Option<Verdict> {
    let supplied = seq.supplied_check()?;
    let actual = compute_check(seq);

    Some(Verdict {
        kind: seq.kind(),
        supplied,
        actual,
    })
}
