//! Built-in option handlers.

use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::args::error::ParseError;
use crate::args::handler::{OptionHandler, Parameters, Setter};

fn convert<T>(option: &str, raw: &str) -> Result<T, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|e: T::Err| ParseError::InvalidValue {
        option: option.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Consumes exactly one token and converts it with [`FromStr`].
#[derive(Debug)]
pub struct OneArgumentHandler<T> {
    _value: PhantomData<fn() -> T>,
}

impl<T> OneArgumentHandler<T> {
    pub fn new() -> Self {
        Self {
            _value: PhantomData,
        }
    }
}

impl<T> Default for OneArgumentHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OptionHandler<T> for OneArgumentHandler<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn parse_arguments(
        &self,
        params: &mut Parameters<'_>,
        setter: &mut dyn Setter<T>,
    ) -> Result<usize, ParseError> {
        let option = params.option().to_string();
        let Some(raw) = params.get(0)? else {
            return Err(ParseError::MissingOperand { option });
        };
        setter.add_value(convert(&option, raw)?);
        Ok(1)
    }

    fn default_meta_var(&self) -> &'static str {
        "VALUE"
    }
}

/// Consumes every remaining token.
#[derive(Debug)]
pub struct RestOfArgumentsHandler<T> {
    _value: PhantomData<fn() -> T>,
}

impl<T> RestOfArgumentsHandler<T> {
    pub fn new() -> Self {
        Self {
            _value: PhantomData,
        }
    }
}

impl<T> Default for RestOfArgumentsHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OptionHandler<T> for RestOfArgumentsHandler<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn parse_arguments(
        &self,
        params: &mut Parameters<'_>,
        setter: &mut dyn Setter<T>,
    ) -> Result<usize, ParseError> {
        let option = params.option().to_string();
        let count = params.len()?;
        for idx in 0..count {
            if let Some(raw) = params.get(idx)? {
                setter.add_value(convert(&option, raw)?);
            }
        }
        Ok(count)
    }

    fn default_meta_var(&self) -> &'static str {
        "ARGS"
    }
}

/// Flag with no operand; presence stores `true`.
#[derive(Debug, Default)]
pub struct BooleanHandler;

impl OptionHandler<bool> for BooleanHandler {
    fn parse_arguments(
        &self,
        _params: &mut Parameters<'_>,
        setter: &mut dyn Setter<bool>,
    ) -> Result<usize, ParseError> {
        setter.add_value(true);
        Ok(0)
    }

    fn default_meta_var(&self) -> &'static str {
        ""
    }
}
