use crate::domain::model::{DigitSequence, IsbnKind, Request};
use crate::utils::error::InputError;
use regex::Regex;
use std::sync::OnceLock;

const ISBN13_PREFIX: [u8; 3] = [9, 7, 8];

/// 一行輸入解析後的指令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Run(Request),
}

fn separator_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[-_\s]").expect("separator pattern is valid"))
}

fn sequence_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+[Xx]?$").expect("sequence pattern is valid"))
}

/// Removes hyphens, underscores and whitespace.
pub fn normalize(raw: &str) -> String {
    separator_pattern().replace_all(raw, "").into_owned()
}

/// `q` / `quit`, any case, separators ignored.
pub fn is_quit(normalized: &str) -> bool {
    let lower = normalized.to_lowercase();
    lower == "q" || lower == "quit"
}

/// Classifies one raw line typed at the prompt.
pub fn parse_command(raw: &str) -> Result<Command, InputError> {
    let normalized = normalize(raw);

    if is_quit(&normalized) {
        return Ok(Command::Quit);
    }

    classify(&normalized).map(Command::Run)
}

/// Decides compute vs. validate mode for a normalized digit string.
pub fn classify(normalized: &str) -> Result<Request, InputError> {
    if !sequence_pattern().is_match(normalized) {
        tracing::debug!("rejected '{}': not a digit sequence", normalized);
        return Err(InputError::InvalidSequence);
    }

    let seq = DigitSequence::parse(normalized).ok_or(InputError::InvalidSequence)?;
    let len = seq.len();

    let validating = len == IsbnKind::Isbn10.full_len() || len == IsbnKind::Isbn13.full_len();
    let computing = len == IsbnKind::Isbn10.stem_len() || len == IsbnKind::Isbn13.stem_len();

    if !validating && !computing {
        tracing::debug!("rejected '{}': {} digits", normalized, len);
        return Err(InputError::InvalidLength { len });
    }

    // X 只能作為 ISBN-10 的檢查碼
    if seq.has_check_letter() && len != IsbnKind::Isbn10.full_len() {
        tracing::debug!("rejected '{}': check letter outside ISBN-10", normalized);
        return Err(InputError::InvalidSequence);
    }

    if seq.kind() == IsbnKind::Isbn13 && !seq.starts_with(&ISBN13_PREFIX) {
        tracing::debug!("rejected '{}': missing 978 prefix", normalized);
        return Err(InputError::MissingPrefix);
    }

    if validating {
        Ok(Request::Validate(seq))
    } else {
        Ok(Request::Compute(seq))
    }
}
