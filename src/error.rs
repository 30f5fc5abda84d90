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

use argmatch_values::error::ValueError;
use thiserror::Error;

/// Formats a list of value tokens for use in an error message, like
/// `("a", "b")`.
fn format_tuple(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("\"{}\"", v)).collect();
    format!("({})", quoted.join(", "))
}

fn format_variants(variants: &[Vec<String>]) -> String {
    let tuples: Vec<String> = variants.iter().map(|v| format_tuple(v)).collect();
    tuples.join(", ")
}

/// Error represents the various errors which can come up while declaring
/// arguments, parsing command-line arguments, or querying the parsed values.
///
/// Token indices are zero-based positions in the token sequence given to the
/// parser (after the program name has been dropped, for argv-style input).
#[derive(Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// An argument was declared with a canonical name which is already used
    /// by another named or positional argument.
    #[error("Duplicate argument name '{name}'")]
    DuplicateName {
        /// The canonical name which was reused.
        name: String,
    },
    /// A named argument was declared with an alias which already belongs to
    /// another named argument.
    #[error("Alias '{alias}' of argument '{name}' is already used by argument '{existing}'")]
    DuplicateAlias {
        /// The alias which was reused.
        alias: String,
        /// The argument being declared.
        name: String,
        /// The argument which already owns the alias.
        existing: String,
    },
    /// An argument declaration is invalid by itself (for example, it has no
    /// aliases), or conflicts with the parser's other declarations (for
    /// example, two positionals at the same position).
    #[error("Invalid specification for argument '{name}': {reason}")]
    InvalidSpecification {
        /// The argument being declared.
        name: String,
        /// A human-readable description of the problem.
        reason: String,
    },
    /// A token was classified as a named argument, but no argument owns it.
    #[error("Unknown argument '{token}' at index {index}")]
    UnknownArgument {
        /// The offending token.
        token: String,
        /// The token's index.
        index: usize,
    },
    /// An argument was matched more times than its declaration allows.
    #[error("Argument '{name}' may occur at most {max} time(s), but occurred again as '{token}' at index {index}")]
    OccurrenceLimitExceeded {
        /// The argument's canonical name.
        name: String,
        /// The token which would have started the extra occurrence.
        token: String,
        /// The token's index.
        index: usize,
        /// The argument's maximum number of occurrences.
        max: usize,
    },
    /// The values given for an argument with declared variants did not
    /// exactly match any of them.
    #[error(
        "Invalid values {} for argument '{name}' at index {index}; expected one of: {}",
        format_tuple(.attempted),
        format_variants(.accepted)
    )]
    InvalidVariant {
        /// The argument's canonical name.
        name: String,
        /// The tokens which were compared against the variants.
        attempted: Vec<String>,
        /// Every acceptable variant, in declaration order.
        accepted: Vec<Vec<String>>,
        /// The index of the first attempted token.
        index: usize,
    },
    /// A named argument needed more value tokens than were available before
    /// the end of input or the next recognized alias.
    #[error("Argument '{name}' at index {index} expects {expected} value(s), but only {available} are available")]
    InsufficientArguments {
        /// The argument's canonical name.
        name: String,
        /// The number of value tokens the argument consumes.
        expected: usize,
        /// The number of value tokens which were actually available.
        available: usize,
        /// The index of the alias token which introduced the argument.
        index: usize,
    },
    /// A positional token was found, but every positional argument has
    /// already been fully matched.
    #[error("Unexpected argument '{token}' at index {index}")]
    UnexpectedArgument {
        /// The offending token.
        token: String,
        /// The token's index.
        index: usize,
    },
    /// A required argument never occurred.
    #[error("Missing required argument '{name}'")]
    MissingRequiredArgument {
        /// The argument's canonical name.
        name: String,
    },
    /// An error encountered while querying parsed values.
    #[error("{0}")]
    Values(#[from] ValueError),
}

impl Error {
    /// Returns true if this error was raised while declaring arguments.
    pub fn is_declaration_error(&self) -> bool {
        matches!(
            *self,
            Error::DuplicateName { .. }
                | Error::DuplicateAlias { .. }
                | Error::InvalidSpecification { .. }
        )
    }

    /// Returns true if this error was raised while parsing a token sequence.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            *self,
            Error::UnknownArgument { .. }
                | Error::OccurrenceLimitExceeded { .. }
                | Error::InvalidVariant { .. }
                | Error::InsufficientArguments { .. }
                | Error::UnexpectedArgument { .. }
                | Error::MissingRequiredArgument { .. }
        )
    }
}

/// A Result type which uses argmatch's internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
