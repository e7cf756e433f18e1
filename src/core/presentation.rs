use crate::domain::model::{CheckDigit, DigitSequence, IsbnKind, Verdict};

pub const BANNER: &str = "An International Standard Book Number (ISBN) is used as an identifier for each item published,\n\
primarily books. The last digit is the check digit and is used for validating the ISBN. ISBNs\n\
come in 2 forms; ISBN-10 and ISBN-13, the latter of which starts with the digits, 978.\n\
\n\
More info at: https://en.wikipedia.org/wiki/ISBN";

pub const INSTRUCTIONS: &str = "Enter all digits except for the last one to get the check digit, or enter the full ISBN to\n\
validate it, based on its checksum (or type (Q)uit):";

pub const INPUT_MARKER: &str = "> ";

pub const EXIT_MESSAGE: &str = "Exiting program...";

/// Hyphenated display form of a stem plus its check digit.
///
/// ISBN-10 groups 1-4-4 (`0-3064-0615-2`), ISBN-13 groups 3-5-4
/// (`978-03064-0615-7`), each followed by the check character.
pub fn format_isbn(seq: &DigitSequence, check: CheckDigit) -> String {
    let stem = seq.stem_text();
    let check_text = check.to_string();
    let bounds: &[usize] = match seq.kind() {
        IsbnKind::Isbn10 => &[0, 1, 5, 9],
        IsbnKind::Isbn13 => &[0, 3, 8, 12],
    };

    let mut groups: Vec<&str> = bounds
        .windows(2)
        .filter_map(|w| stem.get(w[0]..w[1]))
        .collect();

    groups.push(&check_text);
    groups.join("-")
}

/// Output lines for compute mode.
pub fn render_compute(seq: &DigitSequence, check: CheckDigit) -> Vec<String> {
    vec![
        String::new(),
        format!("Checksum: {}", check),
        format!("{}:  {}", seq.kind().label(), format_isbn(seq, check)),
    ]
}

/// Output lines for validate mode.
pub fn render_verdict(verdict: &Verdict) -> Vec<String> {
    let mut lines = vec![String::new()];

    if verdict.is_valid() {
        lines.push("The checksum is valid".to_string());
    } else {
        lines.push("The checksum is not valid".to_string());
        lines.push(format!("The actual checksum is: {}", verdict.actual));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(text: &str) -> DigitSequence {
        DigitSequence::parse(text).unwrap()
    }

    #[test]
    fn test_format_isbn10() {
        let check = CheckDigit::new(2).unwrap();
        assert_eq!(format_isbn(&seq("030640615"), check), "0-3064-0615-2");
        assert_eq!(format_isbn(&seq("080442957"), CheckDigit::X), "0-8044-2957-X");
    }

    #[test]
    fn test_format_isbn13() {
        let check = CheckDigit::new(7).unwrap();
        assert_eq!(format_isbn(&seq("978030640615"), check), "978-03064-0615-7");
    }

    #[test]
    fn test_format_uses_stem_of_full_sequence() {
        let check = CheckDigit::new(2).unwrap();
        assert_eq!(format_isbn(&seq("0306406151"), check), "0-3064-0615-2");
    }

    #[test]
    fn test_render_compute() {
        let lines = render_compute(&seq("030640615"), CheckDigit::new(2).unwrap());
        assert_eq!(lines, vec!["", "Checksum: 2", "ISBN-10:  0-3064-0615-2"]);

        let lines = render_compute(&seq("978030640615"), CheckDigit::new(7).unwrap());
        assert_eq!(lines[2], "ISBN-13:  978-03064-0615-7");
    }

    #[test]
    fn test_render_verdict() {
        let valid = Verdict {
            kind: IsbnKind::Isbn10,
            supplied: CheckDigit::new(2).unwrap(),
            actual: CheckDigit::new(2).unwrap(),
        };
        assert_eq!(render_verdict(&valid), vec!["", "The checksum is valid"]);

        let invalid = Verdict {
            kind: IsbnKind::Isbn10,
            supplied: CheckDigit::new(1).unwrap(),
            actual: CheckDigit::X,
        };
        assert_eq!(
            render_verdict(&invalid),
            vec!["", "The checksum is not valid", "The actual checksum is: X"]
        );
    }
}
