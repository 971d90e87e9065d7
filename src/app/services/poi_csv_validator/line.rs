//! Line-level mechanics: ratings extraction and field tokenization
//!
//! A PoI line is handled in two stages. First the ratings suffix is split
//! off at the last `{` on the line. The remaining prefix is then split on
//! commas and run through a two-state machine that reassembles quoted
//! fields whose literal content contains commas.

use crate::constants::{FIELD_DELIMITER, QUOTE_CHAR, RATINGS_OPEN_BRACE};

/// A raw line split into its data prefix and ratings suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitLine<'a> {
    /// Everything before the last `{`, trailing comma included
    pub prefix: &'a str,

    /// From the last `{` to the end of the line, brace included
    pub ratings: &'a str,
}

/// Locate the ratings suffix on a line
///
/// Returns `None` when the line has no `{` at all, which the caller reports
/// as a broken-ratings violation.
pub fn split_ratings(line: &str) -> Option<SplitLine<'_>> {
    line.rfind(RATINGS_OPEN_BRACE).map(|idx| SplitLine {
        prefix: &line[..idx],
        ratings: &line[idx..],
    })
}

/// Faults that stop tokenization before the end of the prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizeFault {
    /// An empty token arrived while a quoted field was being accumulated
    EmptyWithinQuote,

    /// The prefix ended while a quoted field was still being accumulated
    UnterminatedQuote,
}

/// Tokenizer state: either between fields or inside a quoted accumulation
#[derive(Debug)]
enum QuoteState {
    Unquoted,
    Accumulating(String),
}

/// Split a line prefix into completed fields
///
/// Tokens are the comma-separated pieces of the prefix; a single trailing
/// empty token (from a comma directly before the `{`) is not a field, but
/// interior empty tokens are. A token beginning with `"` opens a quoted
/// accumulation that swallows subsequent tokens, rejoined with commas,
/// until one ends with `"`; the whole accumulated text, quotes included,
/// is then a single completed field.
///
/// Both fault kinds stop the scan, so the returned fields are always the
/// ones completed before the fault.
pub fn tokenize_fields(prefix: &str) -> (Vec<String>, Option<TokenizeFault>) {
    let mut tokens: Vec<&str> = prefix.split(FIELD_DELIMITER).collect();
    if tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }

    let mut fields = Vec::new();
    let mut state = QuoteState::Unquoted;

    for token in tokens {
        state = match state {
            QuoteState::Unquoted if token.starts_with(QUOTE_CHAR) => {
                QuoteState::Accumulating(token.to_string())
            }
            QuoteState::Unquoted => {
                fields.push(token.to_string());
                QuoteState::Unquoted
            }
            QuoteState::Accumulating(_) if token.is_empty() => {
                return (fields, Some(TokenizeFault::EmptyWithinQuote));
            }
            QuoteState::Accumulating(mut buffer) => {
                buffer.push(FIELD_DELIMITER);
                buffer.push_str(token);
                if token.ends_with(QUOTE_CHAR) {
                    fields.push(buffer);
                    QuoteState::Unquoted
                } else {
                    QuoteState::Accumulating(buffer)
                }
            }
        };
    }

    if matches!(state, QuoteState::Accumulating(_)) {
        return (fields, Some(TokenizeFault::UnterminatedQuote));
    }

    (fields, None)
}
