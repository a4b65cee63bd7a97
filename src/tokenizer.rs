//! Identifier tokenization for property-name derivation.

use std::hash::{Hash, Hasher};

/// Separator characters used when nothing else is configured.
pub const DEFAULT_SEPARATORS: [char; 2] = ['.', '-'];

/// A piece of a dotted/dashed identifier, borrowed from the identifier text.
///
/// Separators remember the character that produced them so it can be written
/// back, but any separator equals any other separator.
#[derive(Debug, Clone, Copy)]
pub enum Token<'a> {
    /// A run of non-separator characters.
    Literal(&'a str),
    /// A separator character, or `""` for the end sentinel.
    Separator(&'a str),
}

impl Token<'_> {
    /// The source text of this token.
    pub const fn text(&self) -> &str {
        return match *self {
            Token::Literal(text) | Token::Separator(text) => text,
        };
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        return match (self, other) {
            (Token::Literal(a), Token::Literal(b)) => a == b,
            (Token::Separator(_), Token::Separator(_)) => true,
            _ => false,
        };
    }
}

impl Eq for Token<'_> {}

impl Hash for Token<'_> {
    /// Separators all hash alike to stay consistent with `PartialEq`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        match *self {
            Token::Literal(text) => {
                0_u8.hash(state);
                text.hash(state);
            },
            Token::Separator(_) => 1_u8.hash(state),
        }
    }
}

/// Split `identifier` at every separator, keeping each separator as a token,
/// and append an empty separator as the end sentinel.
///
/// Doubled, leading, or trailing separators produce no empty literals.
pub fn tokenize<'a>(identifier: &'a str, separators: &[char]) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut start = 0_usize;

    for (idx, sep) in identifier.match_indices(separators) {
        if let Some(literal) = identifier.get(start..idx).filter(|s| return !s.is_empty()) {
            tokens.push(Token::Literal(literal));
        }
        tokens.push(Token::Separator(sep));
        start = idx.saturating_add(sep.len());
    }

    if let Some(rest) = identifier.get(start..).filter(|s| return !s.is_empty()) {
        tokens.push(Token::Literal(rest));
    }
    tokens.push(Token::Separator(""));
    return tokens;
}

/// Concatenate token text back into an identifier fragment.
pub fn join(tokens: &[Token<'_>]) -> String {
    return tokens.iter().map(Token::text).collect();
}
