// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! argmatch is a library for declaring command-line arguments and matching a
//! sequence of tokens against those declarations.
//!
//! Named arguments are introduced by one of their aliases and consume a fixed
//! number of value tokens (or exactly one of a set of fixed variants).
//! Positional arguments are matched by their order among the remaining
//! tokens. Every argument can be required, have a default value, and be
//! limited in how many times it may occur. The result maps each argument's
//! name to its occurrences, whose raw values can then be coerced into typed
//! values on demand.

/// config defines the parse-time policies of an ArgumentParser.
pub mod config;
/// error defines the errors which can come up while declaring arguments or
/// parsing tokens.
pub mod error;
/// parser defines ArgumentParser, the main entry point of this library.
pub mod parser;
/// spec defines the declarations of named and positional arguments, and the
/// registry which holds them.
pub mod spec;

mod matching;

// Re-export most commonly used symbols, to allow using this library with just
// one "use".

pub use self::config::ParserConfig;
pub use self::error::{Error, Result};
pub use self::parser::ArgumentParser;
pub use self::spec::{NamedSpec, PositionalSpec, Specs, Variant, UNBOUNDED};
pub use argmatch_values::{
    coerce, MultipleOccurrencePolicy, Occurrence, ParsingResult, Value, ValueError, ValueKind,
};

#[cfg(test)]
mod tests;
