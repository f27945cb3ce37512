//! Tokens with attached trivia.
//!
//! Trivia is the formatting the front end saw around a token: whitespace,
//! comments, line breaks. Rewrites must carry it over so the rewritten
//! declaration keeps its visual position in the document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token together with its leading and trailing trivia.
///
/// Trivia is kept as raw text; this crate never interprets it, it only
/// moves it between tokens during rewriting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token text itself (e.g. `"const"`, `"static"`).
    pub text: String,
    /// Trivia preceding the token (indentation, comments).
    pub leading: String,
    /// Trivia following the token, typically a single space.
    pub trailing: String,
}

impl Token {
    /// Create a token with no leading trivia and one trailing space.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            leading: String::new(),
            trailing: " ".to_string(),
        }
    }

    /// Create a token with explicit leading trivia and one trailing space.
    pub fn with_leading(text: impl Into<String>, leading: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            leading: leading.into(),
            trailing: " ".to_string(),
        }
    }

    /// Render the token as source text, trivia included.
    pub fn render(&self) -> String {
        format!("{}{}{}", self.leading, self.text, self.trailing)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_has_trailing_space() {
        let tok = Token::new("const");
        assert_eq!(tok.render(), "const ");
    }

    #[test]
    fn test_leading_trivia_is_rendered_first() {
        let tok = Token::with_leading("const", "    // note\n    ");
        assert_eq!(tok.render(), "    // note\n    const ");
    }
}
