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

use crate::error::*;
use crate::value::{coerce, Value, ValueKind};
use indexmap::IndexMap;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// MultipleOccurrencePolicy decides what `ParsingResult::get` does when a
/// single occurrence is requested, but the argument was matched more than
/// once.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MultipleOccurrencePolicy {
    /// Return a `ValueError::MultipleOccurrences` error.
    Fail,
    /// Return the first recorded occurrence, ignoring the rest.
    First,
}

impl Default for MultipleOccurrencePolicy {
    fn default() -> Self {
        MultipleOccurrencePolicy::Fail
    }
}

/// An Occurrence is one matched instance of an argument. It holds the raw
/// (uncoerced) value tokens which were consumed for that match: none for a
/// flag, exactly one for most arguments, or several for multi-value
/// arguments and variants.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Occurrence {
    values: Vec<String>,
}

impl Occurrence {
    /// Construct a new Occurrence holding the given raw values.
    pub fn new(values: Vec<String>) -> Self {
        Occurrence { values: values }
    }

    /// Returns all of this occurrence's raw values, in order.
    pub fn values(&self) -> &[String] {
        self.values.as_slice()
    }

    /// Returns the first raw value, or None for a flag occurrence.
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(|v| v.as_str())
    }

    /// Returns the number of raw values this occurrence holds.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this occurrence holds no values (i.e. it is a flag).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coerce the value at the given index into the given ValueKind.
    pub fn coerce_at(&self, index: usize, kind: ValueKind) -> ValueResult<Value> {
        match self.values.get(index) {
            None => Err(ValueError::NoSuchValue {
                index: index,
                len: self.values.len(),
            }),
            Some(v) => coerce(v.as_str(), kind),
        }
    }

    /// Coerce this occurrence's first value into the given ValueKind. This is
    /// the usual accessor for single-value arguments.
    pub fn coerce(&self, kind: ValueKind) -> ValueResult<Value> {
        self.coerce_at(0, kind)
    }

    /// Coerce every value of this occurrence into the given ValueKind. The
    /// first value which fails to convert is reported as an error.
    pub fn coerce_all(&self, kind: ValueKind) -> ValueResult<Vec<Value>> {
        self.values.iter().map(|v| coerce(v.as_str(), kind)).collect()
    }
}

impl From<Vec<String>> for Occurrence {
    fn from(values: Vec<String>) -> Self {
        Occurrence::new(values)
    }
}

/// ParsingResult maps argument names to the ordered list of occurrences which
/// were matched (or defaulted) for that argument. Names are kept in the order
/// they were first recorded.
///
/// It is built up by the parser, and then only read by callers. Raw values are
/// stored as strings; they are only converted into other types when a caller
/// asks for them, so conversion errors surface at query time.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParsingResult {
    occurrences: IndexMap<String, Vec<Occurrence>>,
    policy: MultipleOccurrencePolicy,
}

impl ParsingResult {
    /// Construct a new, empty ParsingResult which applies the given policy in
    /// `get`.
    pub fn new(policy: MultipleOccurrencePolicy) -> Self {
        ParsingResult {
            occurrences: IndexMap::new(),
            policy: policy,
        }
    }

    /// Returns the policy this result applies when a single occurrence is
    /// requested for an argument which was matched more than once.
    pub fn policy(&self) -> MultipleOccurrencePolicy {
        self.policy
    }

    /// Append an occurrence for the given argument. Existing occurrences are
    /// never overwritten.
    pub fn add_occurrence<O: Into<Occurrence>>(&mut self, name: &str, occurrence: O) {
        self.occurrences
            .entry(name.to_owned())
            .or_default()
            .push(occurrence.into());
    }

    /// Returns every occurrence recorded for the given argument, in the order
    /// they were matched. The returned slice is empty if the argument never
    /// occurred (this is not an error).
    pub fn get_all(&self, name: &str) -> &[Occurrence] {
        self.occurrences
            .get(name)
            .map(|occurrences| occurrences.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the single occurrence recorded for the given argument, or None
    /// if it never occurred.
    ///
    /// If it occurred more than once, the result depends on this result's
    /// `MultipleOccurrencePolicy`: either an error, or the first occurrence.
    pub fn get(&self, name: &str) -> ValueResult<Option<&Occurrence>> {
        let occurrences = self.get_all(name);
        match occurrences.len() {
            0 => Ok(None),
            1 => Ok(occurrences.first()),
            count => match self.policy {
                MultipleOccurrencePolicy::Fail => Err(ValueError::MultipleOccurrences {
                    name: name.to_owned(),
                    count: count,
                }),
                MultipleOccurrencePolicy::First => {
                    debug!(
                        "Returning the first of {} occurrences of '{}'",
                        count, name
                    );
                    Ok(occurrences.first())
                }
            },
        }
    }

    /// A convenience wrapper around `get`, which coerces the single
    /// occurrence's first value into the given ValueKind.
    pub fn get_value(&self, name: &str, kind: ValueKind) -> ValueResult<Option<Value>> {
        match self.get(name)? {
            None => Ok(None),
            Some(occurrence) => occurrence.coerce(kind).map(Some),
        }
    }

    /// Returns whether or not the given argument occurred at least once
    /// (defaults count as an occurrence).
    pub fn contains(&self, name: &str) -> bool {
        !self.get_all(name).is_empty()
    }

    /// Returns how many times the given argument occurred. This is the usual
    /// way to query repeated flags.
    pub fn count(&self, name: &str) -> usize {
        self.get_all(name).len()
    }

    /// Returns the names of every argument with at least one occurrence, in
    /// the order they were first recorded.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.occurrences.keys().map(|k| k.as_str())
    }

    /// Returns an iterator over (name, occurrences) pairs, in the order the
    /// names were first recorded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.occurrences
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Returns the number of distinct arguments which occurred.
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    /// Returns true if no argument occurred at all.
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}
