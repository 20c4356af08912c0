//! Text segmentation at word, sentence and paragraph granularity
//!
//! Fragments borrow from the input and keep its order. Empty fragments are
//! never returned.

use sentiment_core::Granularity;
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that end in a period without ending a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "inc", "ltd", "co",
    "corp", "llc", "plc", "dept", "approx", "fig", "jan", "feb", "mar", "apr", "jun", "jul",
    "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Split `text` into ordered fragments at the given granularity
pub fn segment(text: &str, granularity: Granularity) -> Vec<&str> {
    match granularity {
        Granularity::Word => split_words(text),
        Granularity::Sentence => split_sentences(text),
        Granularity::Paragraph => split_paragraphs(text),
    }
}

/// Split on whitespace, leaving punctuation attached to its word
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split on newlines, dropping blank lines
///
/// Kept lines are returned as written, including indentation.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}

/// Split into sentences
///
/// Boundaries come from the Unicode sentence rules (UAX #29), which already
/// keep decimals and lowercase continuations together. A boundary right
/// after a known abbreviation, a single capital initial or a dotted acronym
/// is then undone, as is a line break that does not follow `.`, `?` or `!`.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut pending: Option<usize> = None;

    for (offset, piece) in text.split_sentence_bound_indices() {
        let start = *pending.get_or_insert(offset);
        let end = offset + piece.len();

        if !ends_with_terminator(piece) || ends_with_abbreviation(piece) {
            continue;
        }

        push_trimmed(&mut sentences, &text[start..end]);
        pending = None;
    }

    if let Some(start) = pending {
        push_trimmed(&mut sentences, &text[start..]);
    }

    sentences
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, span: &'a str) {
    let trimmed = span.trim();
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}

/// Closing quotes and brackets may follow the terminator
fn ends_with_terminator(piece: &str) -> bool {
    piece
        .trim_end()
        .trim_end_matches(['"', '\'', ')', ']', '\u{201d}', '\u{2019}'])
        .ends_with(['.', '?', '!'])
}

fn ends_with_abbreviation(piece: &str) -> bool {
    let Some(stem) = piece.trim_end().strip_suffix('.') else {
        return false;
    };
    let last = stem
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or(stem)
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    if last.is_empty() {
        return false;
    }

    if ABBREVIATIONS.contains(&last.to_lowercase().as_str()) {
        return true;
    }

    let mut chars = last.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        // "I." ends plenty of sentences
        return c.is_uppercase() && c != 'I';
    }

    // U.S. / e.g. / i.e.
    last.contains('.')
        && last.split('.').all(|part| {
            let mut chars = part.chars();
            matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_words_keep_punctuation() {
        assert_eq!(
            split_words("Stocks  soared, then\tfell!"),
            vec!["Stocks", "soared,", "then", "fell!"]
        );
    }

    #[test]
    fn test_single_word_is_stripped() {
        assert_eq!(segment("  bullish \n", Granularity::Word), vec!["bullish"]);
    }

    #[test]
    fn test_two_sentences() {
        assert_eq!(
            split_sentences("I love this! I hate that."),
            vec!["I love this!", "I hate that."]
        );
    }

    #[test]
    fn test_question_and_exclamation() {
        assert_eq!(
            split_sentences("Is it up? Yes!!! It is."),
            vec!["Is it up?", "Yes!!!", "It is."]
        );
    }

    #[rstest]
    #[case("Dr. Smith bought more shares. Then he sold.", vec!["Dr. Smith bought more shares.", "Then he sold."])]
    #[case("Shares of Acme Corp. Holdings fell. Analysts shrugged.", vec!["Shares of Acme Corp. Holdings fell.", "Analysts shrugged."])]
    #[case("J. P. Morgan reported. Markets cheered.", vec!["J. P. Morgan reported.", "Markets cheered."])]
    #[case("The U.S. Treasury moved. Yields rose.", vec!["The U.S. Treasury moved.", "Yields rose."])]
    #[case("Growth hit 3.5 percent. Nice.", vec!["Growth hit 3.5 percent.", "Nice."])]
    #[case("So do I. We agree.", vec!["So do I.", "We agree."])]
    fn test_abbreviation_awareness(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_sentences(text), expected);
    }

    #[test]
    fn test_line_break_without_terminator_continues() {
        assert_eq!(
            split_sentences("first line\nsecond line. third."),
            vec!["first line\nsecond line. third."]
        );
        assert_eq!(
            split_sentences("Quarterly update\nSales grew. Costs fell."),
            vec!["Quarterly update\nSales grew.", "Costs fell."]
        );
        assert_eq!(
            split_sentences("Title\n\nBody starts here! Done."),
            vec!["Title\n\nBody starts here!", "Done."]
        );
    }

    #[test]
    fn test_line_break_after_terminator_ends_sentence() {
        assert_eq!(
            split_sentences("Stocks rose.\nBonds fell."),
            vec!["Stocks rose.", "Bonds fell."]
        );
        assert_eq!(
            split_sentences("He said \"sell!\"\nNobody did."),
            vec!["He said \"sell!\"", "Nobody did."]
        );
    }

    #[test]
    fn test_abbreviation_before_line_break_continues() {
        assert_eq!(
            split_sentences("Meet Dr.\nSmith today."),
            vec!["Meet Dr.\nSmith today."]
        );
    }

    #[test]
    fn test_trailing_text_without_terminator() {
        assert_eq!(
            split_sentences("First one. and a tail"),
            vec!["First one. and a tail"]
        );
        assert_eq!(split_sentences("No terminator"), vec!["No terminator"]);
    }

    #[test]
    fn test_paragraphs_drop_blank_lines() {
        let text = "First paragraph.\n\n   \nSecond paragraph.\r\nThird.";
        assert_eq!(
            split_paragraphs(text),
            vec!["First paragraph.", "Second paragraph.", "Third."]
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\n\t\n")]
    fn test_empty_input(#[case] text: &str) {
        for g in Granularity::ALL {
            assert!(segment(text, g).is_empty(), "{} produced fragments", g);
        }
    }

    #[test]
    fn test_segmentation_is_deterministic() {
        let text = "Mr. Lee was upbeat. Revenue grew 12.5%! Will it last? Maybe.";
        let first = split_sentences(text);
        for _ in 0..10 {
            assert_eq!(split_sentences(text), first);
        }
    }
}
