//! Argfile expansion: `@path` tokens replaced by the lines of `path`.
//!
//! ```text
//! -m @msg.txt        msg.txt = "bob"            → -m bob
//! @files.txt         files.txt = "a.rs\nb c.rs" → a.rs "b c.rs"
//! ```
//!
//! Each line is one argument, whitespace and all. There is no quoting, no
//! comments, and lines read from an argfile are never expanded again.

use std::fs;
use std::path::{Path, PathBuf};

use crate::args::cursor::{ArgCursor, Token, TokenOrigin};
use crate::args::error::ParseError;
use crate::args::handler::{OptionHandler, Parameters, Setter};
use crate::config::ArgfileConfig;

/// Conventional argfile sentinel.
pub const PREFIX: char = '@';

/// Split argfile contents into arguments, one per line.
///
/// `\r\n` endings are accepted. A trailing newline does not add an empty
/// argument, but blank lines elsewhere are kept as empty arguments.
pub fn split_argfile(content: &str) -> Vec<String> {
    content.lines().map(str::to_owned).collect()
}

/// Resolves and reads argfile references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgfileExpander {
    prefix: char,
}

impl ArgfileExpander {
    pub fn new(prefix: char) -> Self {
        Self { prefix }
    }

    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// Path referenced by `token`, if it is an expandable argfile reference.
    pub fn argfile_path<'t>(&self, token: &'t Token) -> Option<&'t str> {
        if token.origin != TokenOrigin::CommandLine {
            return None;
        }
        token.text.strip_prefix(self.prefix)
    }

    /// Read `path` and split it into arguments.
    pub fn expand(&self, path: &Path) -> Result<Vec<String>, ParseError> {
        let content = fs::read_to_string(path).map_err(|source| ParseError::Argfile {
            path: path.to_path_buf(),
            source,
        })?;
        let args = split_argfile(&content);
        tracing::debug!(path = %path.display(), count = args.len(), "expanded argfile");
        Ok(args)
    }

    /// Expand the token `idx` positions past the cursor in place.
    ///
    /// An empty argfile removes its token, so the next token moves into `idx`
    /// and is checked as well.
    pub(crate) fn expand_at(&self, cursor: &mut ArgCursor, idx: usize) -> Result<(), ParseError> {
        while let Some(path) = cursor.peek(idx).and_then(|t| self.argfile_path(t)) {
            let path = PathBuf::from(path);
            let lines = self.expand(&path)?;
            cursor.splice(idx, lines.into_iter().map(Token::argfile).collect());
        }
        Ok(())
    }
}

impl Default for ArgfileExpander {
    fn default() -> Self {
        Self::new(PREFIX)
    }
}

impl From<&ArgfileConfig> for ArgfileExpander {
    fn from(config: &ArgfileConfig) -> Self {
        Self::new(config.prefix)
    }
}

/// Decorates any [`OptionHandler`] with argfile expansion.
///
/// The delegate reads an ordinary [`Parameters`] view in which every token it
/// touches has already been expanded, so it never sees the `@path` token.
#[derive(Debug)]
pub struct ArgfileHandler<H> {
    delegate: H,
    expander: ArgfileExpander,
}

impl<H> ArgfileHandler<H> {
    pub fn new(delegate: H) -> Self {
        Self::with_expander(delegate, ArgfileExpander::default())
    }

    pub fn with_expander(delegate: H, expander: ArgfileExpander) -> Self {
        Self { delegate, expander }
    }
}

impl<T, H> OptionHandler<T> for ArgfileHandler<H>
where
    H: OptionHandler<T>,
{
    fn parse_arguments(
        &self,
        params: &mut Parameters<'_>,
        setter: &mut dyn Setter<T>,
    ) -> Result<usize, ParseError> {
        let mut expanding = params.with_expander(&self.expander);
        self.delegate.parse_arguments(&mut expanding, setter)
    }

    fn default_meta_var(&self) -> &'static str {
        self.delegate.default_meta_var()
    }

    fn expander(&self) -> Option<&ArgfileExpander> {
        Some(&self.expander)
    }
}
