use std::fmt;

/// ISBN 的兩種格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsbnKind {
    Isbn10,
    Isbn13,
}

impl IsbnKind {
    /// 不含檢查碼的長度
    pub fn stem_len(self) -> usize {
        match self {
            IsbnKind::Isbn10 => 9,
            IsbnKind::Isbn13 => 12,
        }
    }

    /// 含檢查碼的完整長度
    pub fn full_len(self) -> usize {
        self.stem_len() + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            IsbnKind::Isbn10 => "ISBN-10",
            IsbnKind::Isbn13 => "ISBN-13",
        }
    }
}

impl fmt::Display for IsbnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A check digit value. ISBN-10 can produce 10, which is written as `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckDigit(u8);

impl CheckDigit {
    pub const X: CheckDigit = CheckDigit(10);

    /// Returns `None` for anything outside `0..=10`.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 10).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Self::X),
            _ => c.to_digit(10).map(|d| Self(d as u8)),
        }
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 10 {
            f.write_str("X")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// An ordered run of decimal digits, optionally closed by an `X` check
/// character. Holds either a stem (9/12) or a full ISBN (10/13).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSequence {
    digits: Vec<u8>,
}

impl DigitSequence {
    /// Builds a sequence from already-normalized text.
    ///
    /// Every character must be a decimal digit, except that the last one may
    /// be `X`/`x`. Length rules are the classifier's business, not this one.
    pub fn parse(text: &str) -> Option<Self> {
        let count = text.chars().count();
        let mut digits = Vec::with_capacity(count);

        for (i, c) in text.chars().enumerate() {
            match c.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None if i + 1 == count => digits.push(CheckDigit::from_char(c)?.value()),
                None => return None,
            }
        }

        if digits.is_empty() {
            return None;
        }
        Some(Self { digits })
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// 長度 <= 10 視為 ISBN-10
    pub fn kind(&self) -> IsbnKind {
        if self.digits.len() <= 10 {
            IsbnKind::Isbn10
        } else {
            IsbnKind::Isbn13
        }
    }

    /// True when the sequence carries its own check character.
    pub fn is_full(&self) -> bool {
        self.digits.len() == self.kind().full_len()
    }

    /// The digits before the check character (or all of them for a stem).
    pub fn stem(&self) -> &[u8] {
        let end = self.kind().stem_len().min(self.digits.len());
        &self.digits[..end]
    }

    /// The check character typed by the user, if this is a full ISBN.
    pub fn supplied_check(&self) -> Option<CheckDigit> {
        if !self.is_full() {
            return None;
        }
        self.digits.last().copied().and_then(CheckDigit::new)
    }

    /// True if any position holds the `X` value.
    pub fn has_check_letter(&self) -> bool {
        self.digits.contains(&10)
    }

    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.digits.starts_with(prefix)
    }

    /// The stem as text, e.g. for grouping into the hyphenated form.
    pub fn stem_text(&self) -> String {
        self.stem().iter().map(|d| char::from(b'0' + d)).collect()
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            if d == 10 {
                f.write_str("X")?;
            } else {
                write!(f, "{}", d)?;
            }
        }
        Ok(())
    }
}

/// 一筆已分類的輸入
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Stem only: compute and display the check digit.
    Compute(DigitSequence),
    /// Full ISBN: check the supplied check character.
    Validate(DigitSequence),
}

impl Request {
    pub fn sequence(&self) -> &DigitSequence {
        match self {
            Request::Compute(seq) | Request::Validate(seq) => seq,
        }
    }
}

/// Outcome of validate mode. A mismatch is a normal result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub kind: IsbnKind,
    pub supplied: CheckDigit,
    pub actual: CheckDigit,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        self.supplied == self.actual
    }
}
