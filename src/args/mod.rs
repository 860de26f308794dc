//! Argument parsing with argfile expansion.
//!
//! ```text
//! Raw args → Cursor → Dispatch (option / positional) → Handler → Setter
//!                                                        ↑
//!                                         ArgfileHandler expands @path
//! ```
//!
//! Handlers are plain [`OptionHandler`] strategies. Wrapping one in
//! [`ArgfileHandler`] makes every `@path` token it reads behave as if the
//! lines of `path` had been typed in its place.

mod argfile;
mod cursor;
mod error;
mod handler;
mod handlers;
mod parser;
mod pipeline;
mod registry;

pub use argfile::{split_argfile, ArgfileExpander, ArgfileHandler, PREFIX};
pub use cursor::{ArgCursor, Token, TokenOrigin};
pub use error::ParseError;
pub use handler::{OptionHandler, Parameters, Setter};
pub use handlers::{BooleanHandler, OneArgumentHandler, RestOfArgumentsHandler};
pub use parser::CmdLineParser;
pub use pipeline::{build_invocation, expand_args, Invocation};
pub use registry::{ArgumentDef, OptionDef};
