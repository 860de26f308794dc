//! Token cursor over the not-yet-consumed part of a command line.

/// Where a token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenOrigin {
    /// Typed on the command line (or passed by the caller).
    CommandLine,
    /// Read from a line of an argfile.
    Argfile,
}

/// A single argument token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub origin: TokenOrigin,
}

impl Token {
    pub fn command_line(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: TokenOrigin::CommandLine,
        }
    }

    pub fn argfile(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: TokenOrigin::Argfile,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Cursor over the remaining tokens of a parse pass.
///
/// Indices passed to [`peek`](Self::peek) and [`splice`](Self::splice) are
/// relative to the current position.
#[derive(Debug, Clone, Default)]
pub struct ArgCursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl ArgCursor {
    /// Cursor over raw command-line strings.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: args.into_iter().map(Token::command_line).collect(),
            pos: 0,
        }
    }

    /// Token at `idx` positions past the cursor.
    pub fn peek(&self, idx: usize) -> Option<&Token> {
        self.tokens.get(self.pos + idx)
    }

    /// Token under the cursor.
    pub fn current(&self) -> Option<&Token> {
        self.peek(0)
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Move the cursor forward by `n` tokens, clamped to the end.
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.tokens.len());
    }

    /// Replace the token at `idx` with `replacement`, in order.
    ///
    /// An empty replacement removes the token. Out-of-range indices are ignored.
    pub fn splice(&mut self, idx: usize, replacement: Vec<Token>) {
        let at = self.pos + idx;
        if at >= self.tokens.len() {
            return;
        }
        self.tokens.splice(at..=at, replacement);
    }

    /// Texts of the remaining tokens.
    pub fn remaining_texts(&self) -> Vec<&str> {
        self.tokens[self.pos..].iter().map(Token::as_str).collect()
    }
}
