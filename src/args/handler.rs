//! Option handler abstraction: consume tokens from a cursor, store values.

use crate::args::argfile::ArgfileExpander;
use crate::args::cursor::{ArgCursor, Token};
use crate::args::error::ParseError;

/// Destination for parsed values.
pub trait Setter<T> {
    /// Store one parsed value.
    fn add_value(&mut self, value: T);

    /// Whether the destination accepts more than one value.
    ///
    /// A multi-valued positional stays active for every following positional token.
    fn is_multi_valued(&self) -> bool {
        false
    }
}

/// Single value; a later value replaces an earlier one.
impl<T> Setter<T> for Option<T> {
    fn add_value(&mut self, value: T) {
        *self = Some(value);
    }
}

impl<T> Setter<T> for Vec<T> {
    fn add_value(&mut self, value: T) {
        self.push(value);
    }

    fn is_multi_valued(&self) -> bool {
        true
    }
}

impl Setter<bool> for bool {
    fn add_value(&mut self, value: bool) {
        *self = value;
    }
}

/// Strategy for consuming the tokens that belong to one option or argument.
pub trait OptionHandler<T> {
    /// Read tokens from `params`, store the parsed value(s) in `setter`, and
    /// report how many tokens were consumed.
    ///
    /// For options, `params` starts after the option name itself.
    fn parse_arguments(
        &self,
        params: &mut Parameters<'_>,
        setter: &mut dyn Setter<T>,
    ) -> Result<usize, ParseError>;

    /// Placeholder shown in usage text when the declaration has none.
    fn default_meta_var(&self) -> &'static str;

    /// Expander applied to the tokens this handler reads, if any.
    fn expander(&self) -> Option<&ArgfileExpander> {
        None
    }
}

/// The view of the cursor handed to an [`OptionHandler`].
///
/// When an [`ArgfileExpander`] is attached, every token read through
/// [`get`](Self::get) or counted by [`len`](Self::len) is expanded in place first.
pub struct Parameters<'a> {
    option: &'a str,
    cursor: &'a mut ArgCursor,
    expander: Option<&'a ArgfileExpander>,
}

impl<'a> Parameters<'a> {
    pub fn new(option: &'a str, cursor: &'a mut ArgCursor) -> Self {
        Self {
            option,
            cursor,
            expander: None,
        }
    }

    /// Reborrow this view with argfile expansion enabled.
    pub fn with_expander<'b>(&'b mut self, expander: &'b ArgfileExpander) -> Parameters<'b> {
        Parameters {
            option: self.option,
            cursor: &mut *self.cursor,
            expander: Some(expander),
        }
    }

    /// Name of the option (or argument meta-variable) being parsed.
    pub fn option(&self) -> &str {
        self.option
    }

    /// Token `idx` positions from the start of this view, if any.
    pub fn get(&mut self, idx: usize) -> Result<Option<&str>, ParseError> {
        if let Some(expander) = self.expander {
            expander.expand_at(self.cursor, idx)?;
        }
        Ok(self.cursor.peek(idx).map(Token::as_str))
    }

    /// Number of tokens left, after expanding all of them.
    pub fn len(&mut self) -> Result<usize, ParseError> {
        if let Some(expander) = self.expander {
            let mut idx = 0;
            while idx < self.cursor.remaining() {
                expander.expand_at(self.cursor, idx)?;
                idx += 1;
            }
        }
        Ok(self.cursor.remaining())
    }

    pub fn is_empty(&mut self) -> Result<bool, ParseError> {
        Ok(self.get(0)?.is_none())
    }
}
