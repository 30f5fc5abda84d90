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

use argmatch_values::result::MultipleOccurrencePolicy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ParserConfig holds the parse-time policies of an `ArgumentParser`. Unlike
/// argument declarations, these don't change what is accepted on the command
/// line, only how the input is adapted and how results are queried.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// What `ParsingResult::get` does for arguments matched more than once.
    /// This is stamped onto every ParsingResult the parser produces.
    pub multiple_occurrence_policy: MultipleOccurrencePolicy,
    /// Whether `ArgumentParser::parse_argv` drops the first element (the
    /// program name) before parsing.
    pub skip_program_name: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            multiple_occurrence_policy: MultipleOccurrencePolicy::default(),
            skip_program_name: true,
        }
    }
}
