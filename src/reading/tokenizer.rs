use super::sentence::{Document, Sentence};
use super::token::{
    is_punctuation_mark, is_sentence_terminator, is_separator, trim_blank, Token,
};

/// Splits text after every `.`, `!` or `?`.
///
/// The run of ASCII whitespace following a terminator is the separator and
/// belongs to neither side. Pieces are trimmed of control characters and
/// spaces; empty pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if !is_sentence_terminator(c) {
            continue;
        }

        let end = index + c.len_utf8();
        push_trimmed(&mut sentences, &text[start..end]);

        // Consume the separator
        start = end;
        while let Some(&(next_index, next)) = chars.peek() {
            if !is_separator(next) {
                break;
            }
            start = next_index + next.len_utf8();
            chars.next();
        }
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed<'a>(pieces: &mut Vec<&'a str>, piece: &'a str) {
    let piece = trim_blank(piece);
    if !piece.is_empty() {
        pieces.push(piece);
    }
}

/// Splits one sentence into word and punctuation pieces.
///
/// Each punctuation mark becomes its own piece; ASCII whitespace runs
/// separate pieces and are discarded. Word pieces are trimmed like
/// sentences, so stray control characters at their edges are dropped.
pub fn split_pieces(sentence: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut word_start: Option<usize> = None;

    for (index, c) in sentence.char_indices() {
        if is_separator(c) || is_punctuation_mark(c) {
            if let Some(start) = word_start.take() {
                push_trimmed(&mut pieces, &sentence[start..index]);
            }
            if !is_separator(c) {
                pieces.push(&sentence[index..index + c.len_utf8()]);
            }
        } else if word_start.is_none() {
            word_start = Some(index);
        }
    }

    if let Some(start) = word_start {
        push_trimmed(&mut pieces, &sentence[start..]);
    }

    pieces
}

pub fn tokenize_sentence(sentence: &str) -> Sentence {
    Sentence::new(split_pieces(sentence).into_iter().map(Token::from_piece).collect())
}

/// Tokenizes text into sentences of word and punctuation tokens.
///
/// The caller guarantees `text` is not blank; the shell also makes sure it
/// ends in a terminator before calling. Abbreviations and decimals are not
/// special-cased: every terminator closes a sentence.
///
/// # Panics
///
/// Panics if `text` is empty or holds only spaces and control characters.
pub fn tokenize(text: &str) -> Document {
    assert!(
        !trim_blank(text).is_empty(),
        "tokenize requires non-blank text"
    );

    Document::new(
        split_sentences(text)
            .into_iter()
            .map(tokenize_sentence)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Token {
        Token::Word(text.to_string())
    }

    fn punct(mark: char) -> Token {
        Token::Punctuation(mark)
    }

    /// Walks the trimmed input, matching every token in order and allowing
    /// only whitespace between them.
    fn assert_covers_input(text: &str) {
        let document = tokenize(text);
        let mut rest = trim_blank(text);
        for sentence in document.sentences() {
            for token in sentence.tokens() {
                let token_text = token.to_string();
                rest = rest.trim_start_matches(is_separator);
                assert!(
                    rest.starts_with(&token_text),
                    "token {:?} not found at {:?}",
                    token,
                    rest
                );
                rest = &rest[token_text.len()..];
            }
        }
        assert!(trim_blank(rest).is_empty(), "unconsumed input: {:?}", rest);
    }

    #[test]
    fn test_split_sentences_three_terminators() {
        assert_eq!(split_sentences("A. B! C?"), vec!["A.", "B!", "C?"]);
    }

    #[test]
    fn test_split_sentences_no_space_after_terminator() {
        assert_eq!(split_sentences("One.Two."), vec!["One.", "Two."]);
    }

    #[test]
    fn test_split_sentences_drops_trailing_whitespace() {
        assert_eq!(split_sentences("Hi there.   \n"), vec!["Hi there."]);
    }

    #[test]
    fn test_split_sentences_keeps_unterminated_tail() {
        assert_eq!(split_sentences("Done. not yet"), vec!["Done.", "not yet"]);
    }

    #[test]
    fn test_split_sentences_consecutive_terminators() {
        // Every terminator closes a sentence, so "?!" yields a lone "!"
        assert_eq!(split_sentences("Really?! Yes."), vec!["Really?", "!", "Yes."]);
    }

    #[test]
    fn test_split_pieces_word_and_comma() {
        assert_eq!(split_pieces("Hello, world!"), vec!["Hello", ",", "world", "!"]);
    }

    #[test]
    fn test_split_pieces_collapses_whitespace() {
        assert_eq!(split_pieces("a \t  b\nc."), vec!["a", "b", "c", "."]);
    }

    #[test]
    fn test_tokenize_sentence_count() {
        let document = tokenize("A. B! C?");
        assert_eq!(document.len(), 3);

        let expected = [("A", '.'), ("B", '!'), ("C", '?')];
        for (sentence, (text, mark)) in document.sentences().iter().zip(expected) {
            assert_eq!(sentence.tokens(), &[word(text), punct(mark)]);
        }
    }

    #[test]
    fn test_tokenize_punctuation_adjacency() {
        let document = tokenize("Hello, world!");
        assert_eq!(document.len(), 1);
        assert_eq!(
            document.sentences()[0].tokens(),
            &[word("Hello"), punct(','), word("world"), punct('!')]
        );
    }

    #[test]
    fn test_tokenize_quotes_are_standalone() {
        let document = tokenize("He said \"go\".");
        assert_eq!(
            document.sentences()[0].tokens(),
            &[
                word("He"),
                word("said"),
                punct('"'),
                word("go"),
                punct('"'),
                punct('.')
            ]
        );
    }

    #[test]
    fn test_tokenize_apostrophe_splits_word() {
        let document = tokenize("I don't know.");
        assert_eq!(
            document.sentences()[0].tokens(),
            &[
                word("I"),
                word("don"),
                punct('\''),
                word("t"),
                word("know"),
                punct('.')
            ]
        );
    }

    #[test]
    fn test_tokenize_abbreviation_is_boundary() {
        let document = tokenize("Dr. Smith arrived.");
        assert_eq!(document.len(), 2);
        assert_eq!(document.sentences()[0].tokens(), &[word("Dr"), punct('.')]);
    }

    #[test]
    fn test_tokenize_decimal_is_boundary() {
        let document = tokenize("Pi is 3.14 roughly.");
        assert_eq!(document.len(), 2);
        assert_eq!(
            document.sentences()[0].tokens(),
            &[word("Pi"), word("is"), word("3"), punct('.')]
        );
        assert_eq!(
            document.sentences()[1].tokens(),
            &[word("14"), word("roughly"), punct('.')]
        );
    }

    #[test]
    fn test_tokenize_punctuation_only_input() {
        let document = tokenize("...");
        assert_eq!(document.len(), 3);
        for sentence in document.sentences() {
            assert_eq!(sentence.tokens(), &[punct('.')]);
        }
    }

    #[test]
    fn test_tokenize_preserves_case() {
        let document = tokenize("MiXeD case.");
        assert_eq!(document.sentences()[0].tokens()[0], word("MiXeD"));
    }

    #[test]
    fn test_tokenize_other_symbols_stay_in_words() {
        let document = tokenize("well-known; fact.");
        assert_eq!(
            document.sentences()[0].tokens(),
            &[word("well-known;"), word("fact"), punct('.')]
        );
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let text = "The dog ran. A dog barked! Why?";
        assert_eq!(tokenize(text), tokenize(text));
    }

    #[test]
    fn test_tokenize_no_empty_sentences() {
        let document = tokenize("  One.   Two!  \n\n Three?   ");
        assert_eq!(document.len(), 3);
        assert!(document.sentences().iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_tokenize_covers_input() {
        for text in [
            "A. B! C?",
            "Hello, world!",
            "  \"Quoted,\" she said.  Then 'left'!",
            "Dr. Who?? Yes... no.",
            "naïve café, déjà vu.",
            "caf\u{00A0}bar, ran.\u{3000}Then\tstop!",
        ] {
            assert_covers_input(text);
        }
    }

    #[test]
    fn test_tokenize_nbsp_stays_inside_word() {
        let document = tokenize("caf\u{00A0}bar ran.");
        assert_eq!(
            document.sentences()[0].tokens(),
            &[word("caf\u{00A0}bar"), word("ran"), punct('.')]
        );
    }

    #[test]
    fn test_tokenize_unicode_space_after_terminator_is_kept() {
        let document = tokenize("One.\u{00A0}Two.\u{3000}Three.");
        assert_eq!(document.len(), 3);
        assert_eq!(
            document.sentences()[1].tokens(),
            &[word("\u{00A0}Two"), punct('.')]
        );
        assert_eq!(
            document.sentences()[2].tokens(),
            &[word("\u{3000}Three"), punct('.')]
        );
    }

    #[test]
    fn test_tokenize_vertical_tab_and_form_feed_separate() {
        let document = tokenize("a\x0Bb\x0Cc. d");
        assert_eq!(document.len(), 2);
        assert_eq!(
            document.sentences()[0].tokens(),
            &[word("a"), word("b"), word("c"), punct('.')]
        );
    }

    #[test]
    fn test_split_pieces_trims_control_characters() {
        assert_eq!(split_pieces("\x01go \x02now\x03"), vec!["go", "now"]);
    }

    #[test]
    #[should_panic(expected = "non-blank")]
    fn test_tokenize_rejects_blank_text() {
        tokenize("   ");
    }
}
