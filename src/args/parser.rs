//! Command-line parser that dispatches tokens to registered handlers.

use std::marker::PhantomData;

use crate::args::argfile::ArgfileExpander;
use crate::args::cursor::{ArgCursor, Token, TokenOrigin};
use crate::args::error::ParseError;
use crate::args::handler::{OptionHandler, Parameters, Setter};
use crate::args::registry::{ArgumentDef, OptionDef};

/// A handler bound to the field of `B` it writes to.
trait Binding<B> {
    fn parse(&self, params: &mut Parameters<'_>, target: &mut B) -> Result<usize, ParseError>;
    fn is_multi_valued(&self, target: &mut B) -> bool;
    fn default_meta_var(&self) -> &'static str;
    fn expander(&self) -> Option<&ArgfileExpander>;
}

struct Bound<B, T, S, H> {
    handler: H,
    access: fn(&mut B) -> &mut S,
    _value: PhantomData<fn(T)>,
}

impl<B, T, S, H> Binding<B> for Bound<B, T, S, H>
where
    S: Setter<T>,
    H: OptionHandler<T>,
{
    fn parse(&self, params: &mut Parameters<'_>, target: &mut B) -> Result<usize, ParseError> {
        self.handler.parse_arguments(params, (self.access)(target))
    }

    fn is_multi_valued(&self, target: &mut B) -> bool {
        Setter::<T>::is_multi_valued(&*(self.access)(target))
    }

    fn default_meta_var(&self) -> &'static str {
        self.handler.default_meta_var()
    }

    fn expander(&self) -> Option<&ArgfileExpander> {
        self.handler.expander()
    }
}

struct OptionEntry<B> {
    def: OptionDef,
    binding: Box<dyn Binding<B>>,
}

struct ArgumentEntry<B> {
    def: ArgumentDef,
    binding: Box<dyn Binding<B>>,
}

/// Parser for a target type `B`.
///
/// Every option and positional argument is registered explicitly with the
/// handler that consumes its tokens and an accessor for the field it fills:
///
/// ```ignore
/// let parser = CmdLineParser::<Opts>::new()
///     .option(OptionDef::new("-m"), ArgfileHandler::new(OneArgumentHandler::new()), |o| &mut o.message)
///     .argument(ArgumentDef::new("FILES"), RestOfArgumentsHandler::new(), |o| &mut o.files);
/// ```
pub struct CmdLineParser<B> {
    options: Vec<OptionEntry<B>>,
    arguments: Vec<ArgumentEntry<B>>,
}

impl<B: 'static> CmdLineParser<B> {
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            arguments: Vec::new(),
        }
    }

    /// Register a named option.
    ///
    /// # Panics
    ///
    /// If any of the option's names is already registered.
    pub fn option<T, S, H>(mut self, def: OptionDef, handler: H, access: fn(&mut B) -> &mut S) -> Self
    where
        T: 'static,
        S: Setter<T> + 'static,
        H: OptionHandler<T> + 'static,
    {
        for name in def.names() {
            assert!(
                self.find_option(name).is_none(),
                "option '{name}' registered twice"
            );
        }
        self.options.push(OptionEntry {
            def,
            binding: Box::new(Bound {
                handler,
                access,
                _value: PhantomData,
            }),
        });
        self
    }

    /// Register the next positional argument.
    pub fn argument<T, S, H>(
        mut self,
        def: ArgumentDef,
        handler: H,
        access: fn(&mut B) -> &mut S,
    ) -> Self
    where
        T: 'static,
        S: Setter<T> + 'static,
        H: OptionHandler<T> + 'static,
    {
        self.arguments.push(ArgumentEntry {
            def,
            binding: Box::new(Bound {
                handler,
                access,
                _value: PhantomData,
            }),
        });
        self
    }

    /// Parse `args` into a fresh `B`.
    pub fn parse<I, A>(&self, args: I) -> Result<B, ParseError>
    where
        B: Default,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        let mut target = B::default();
        self.parse_into(&mut target, args)?;
        Ok(target)
    }

    /// Parse `args` into `target`.
    ///
    /// On error `target` may hold values from options parsed before the failure.
    pub fn parse_into<I, A>(&self, target: &mut B, args: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        let mut cursor = ArgCursor::new(args);
        let mut seen_options = vec![false; self.options.len()];
        let mut seen_arguments = vec![false; self.arguments.len()];
        let mut positional = 0;
        let mut options_done = false;

        while let Some(token) = cursor.current() {
            let token = token.clone();

            if !options_done && token.text == "--" {
                options_done = true;
                cursor.advance(1);
                continue;
            }

            if !options_done && is_option_like(&token.text) {
                self.split_inline_value(&mut cursor, &token);
                let name = cursor.current().map(|t| t.text.clone()).unwrap_or_default();
                let index = self
                    .find_option(&name)
                    .ok_or_else(|| ParseError::UnknownOption(token.text.clone()))?;
                let entry = &self.options[index];

                cursor.advance(1);
                let consumed = {
                    let mut params = Parameters::new(entry.def.name, &mut cursor);
                    entry.binding.parse(&mut params, target)?
                };
                cursor.advance(consumed);
                seen_options[index] = true;
                tracing::trace!(option = entry.def.name, consumed, "parsed option");
                continue;
            }

            let Some(entry) = self.arguments.get(positional) else {
                return Err(ParseError::TooManyArguments(token.text));
            };

            if let Some(expander) = entry.binding.expander() {
                if expander.argfile_path(&token).is_some() {
                    expander.expand_at(&mut cursor, 0)?;
                    // An empty argfile vanishes; dispatch whatever followed it.
                    if cursor
                        .current()
                        .map_or(true, |t| t.origin == TokenOrigin::CommandLine)
                    {
                        continue;
                    }
                }
            }

            let before = cursor.remaining();
            let consumed = {
                let mut params = Parameters::new(entry.def.meta_var, &mut cursor);
                entry.binding.parse(&mut params, target)?
            };
            let stalled = consumed == 0 && cursor.remaining() == before;
            cursor.advance(consumed);
            if consumed > 0 {
                seen_arguments[positional] = true;
            }
            tracing::trace!(argument = entry.def.meta_var, consumed, "parsed argument");

            if stalled || !entry.binding.is_multi_valued(target) {
                positional += 1;
            }
        }

        for (entry, seen) in self.options.iter().zip(&seen_options) {
            if entry.def.required && !seen {
                return Err(ParseError::MissingRequired(entry.def.name.to_string()));
            }
        }
        for (entry, seen) in self.arguments.iter().zip(&seen_arguments) {
            if entry.def.required && !seen {
                return Err(ParseError::MissingRequired(entry.def.meta_var.to_string()));
            }
        }

        Ok(())
    }

    /// One line per declaration: `-m (--message) MESSAGE : description`.
    pub fn usage(&self) -> String {
        let mut rows: Vec<(String, &str)> = Vec::new();

        for entry in &self.options {
            let mut left = entry.def.name.to_string();
            if !entry.def.aliases.is_empty() {
                left.push_str(&format!(" ({})", entry.def.aliases.join(", ")));
            }
            let meta_var = entry
                .def
                .meta_var
                .unwrap_or_else(|| entry.binding.default_meta_var());
            if !meta_var.is_empty() {
                left.push(' ');
                left.push_str(meta_var);
            }
            rows.push((left, entry.def.description));
        }
        for entry in &self.arguments {
            rows.push((entry.def.meta_var.to_string(), entry.def.description));
        }

        let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
        rows.iter()
            .map(|(left, description)| format!(" {left:<width$} : {description}\n"))
            .collect()
    }

    fn find_option(&self, name: &str) -> Option<usize> {
        self.options.iter().position(|e| e.def.matches(name))
    }

    /// Rewrite `--name=value` into `--name value` when `--name` is registered.
    fn split_inline_value(&self, cursor: &mut ArgCursor, token: &Token) {
        let Some((name, value)) = token.text.split_once('=') else {
            return;
        };
        if self.find_option(name).is_none() {
            return;
        }
        let parts = vec![
            Token {
                text: name.to_string(),
                origin: token.origin,
            },
            Token {
                text: value.to_string(),
                origin: token.origin,
            },
        ];
        cursor.splice(0, parts);
    }
}

impl<B: 'static> Default for CmdLineParser<B> {
    fn default() -> Self {
        Self::new()
    }
}

fn is_option_like(text: &str) -> bool {
    text.len() > 1 && text.starts_with('-')
}
