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

use crate::value::ValueKind;
use thiserror::Error;

/// ValueError represents the errors which can come up while querying parsed
/// argument values, after parsing itself has already succeeded.
#[derive(Debug, Eq, PartialEq, Error)]
pub enum ValueError {
    /// A raw string value could not be converted into the requested type.
    #[error("Invalid {kind} value '{value}'")]
    Conversion {
        /// The raw value which failed to convert.
        value: String,
        /// The type the caller asked for.
        kind: ValueKind,
    },
    /// A single occurrence was asked for, but the argument was matched more
    /// than once (use `get_all` instead).
    #[error("Argument '{name}' occurred {count} times, but a single occurrence was requested")]
    MultipleOccurrences {
        /// The canonical name of the argument.
        name: String,
        /// How many occurrences were recorded.
        count: usize,
    },
    /// A value was requested by index, but the occurrence doesn't have that
    /// many values (flags, for example, have none at all).
    #[error("No value at index {index} (occurrence has {len} values)")]
    NoSuchValue {
        /// The index the caller asked for.
        index: usize,
        /// The number of values the occurrence actually holds.
        len: usize,
    },
}

/// A Result type which uses argmatch-values' ValueError type.
pub type ValueResult<T> = Result<T, ValueError>;
