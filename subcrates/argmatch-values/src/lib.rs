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

//! argmatch-values contains the types used to represent the result of parsing
//! command-line arguments: the per-argument occurrences, and the conversion of
//! their raw string values into typed values.

/// error defines the errors which can come up while querying parsed values.
pub mod error;
/// result defines ParsingResult, which maps argument names to their matched
/// occurrences.
pub mod result;
/// value defines the typed values a raw argument string can be coerced into.
pub mod value;

pub use self::error::{ValueError, ValueResult};
pub use self::result::{MultipleOccurrencePolicy, Occurrence, ParsingResult};
pub use self::value::{coerce, Value, ValueKind};

#[cfg(test)]
mod tests;
