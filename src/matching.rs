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
use crate::spec::{Specs, Variant, UNBOUNDED};
use argmatch_values::result::{MultipleOccurrencePolicy, ParsingResult};
use log::{debug, trace};

/// Remaining tracks how many more times one argument may occur during a
/// single parse. None means the argument is unbounded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Remaining(Option<usize>);

impl Remaining {
    fn new(max_occurrences: usize) -> Remaining {
        Remaining(match max_occurrences {
            UNBOUNDED => None,
            max => Some(max),
        })
    }

    fn is_exhausted(&self) -> bool {
        self.0 == Some(0)
    }

    fn take(&mut self) {
        if let Some(ref mut remaining) = self.0 {
            *remaining = remaining.saturating_sub(1);
        }
    }
}

/// Returns the run of tokens starting at `start` which can be consumed as
/// values: everything up to (but not including) the next alias, or the end
/// of input.
fn value_run<'t>(specs: &Specs, tokens: &'t [String], start: usize) -> &'t [String] {
    let rest = tokens.get(start..).unwrap_or(&[]);
    let len = rest
        .iter()
        .position(|t| specs.is_alias(t))
        .unwrap_or(rest.len());
    &rest[..len]
}

/// Returns the length of the first variant (in declaration order) which
/// exactly matches the start of the given run of tokens.
fn match_variant(variants: &[Variant], run: &[String]) -> Option<usize> {
    variants
        .iter()
        .find(|v| run.len() >= v.len() && run[..v.len()] == v[..])
        .map(|v| v.len())
}

fn invalid_variant(name: &str, variants: &[Variant], run: &[String], index: usize) -> Error {
    let longest = variants.iter().map(|v| v.len()).max().unwrap_or(0);
    Error::InvalidVariant {
        name: name.to_owned(),
        attempted: run[..longest.min(run.len())].to_vec(),
        accepted: variants.to_vec(),
        index: index,
    }
}

/// Matcher holds the state of one parse: a cursor over the tokens, and the
/// per-argument counters which are reset for every parse, so the same Specs
/// can be used to parse any number of token sequences.
struct Matcher<'s, 't> {
    specs: &'s Specs,
    tokens: &'t [String],
    cursor: usize,
    named_remaining: Vec<Remaining>,
    positional_remaining: Vec<Remaining>,
    positional_matched: Vec<usize>,
    /// The positional argument the next positional token will be offered to.
    /// Earlier positionals are finished.
    positional_cursor: usize,
    result: ParsingResult,
}

impl<'s, 't> Matcher<'s, 't> {
    fn new(
        specs: &'s Specs,
        tokens: &'t [String],
        policy: MultipleOccurrencePolicy,
    ) -> Matcher<'s, 't> {
        Matcher {
            specs: specs,
            tokens: tokens,
            cursor: 0,
            named_remaining: specs
                .named()
                .map(|s| Remaining::new(s.get_max_occurrences()))
                .collect(),
            positional_remaining: specs
                .positional()
                .iter()
                .map(|s| Remaining::new(s.get_max_occurrences()))
                .collect(),
            positional_matched: vec![0; specs.positional().len()],
            positional_cursor: 0,
            result: ParsingResult::new(policy),
        }
    }

    /// Match one occurrence of the named argument introduced by the alias at
    /// the cursor.
    fn match_named(&mut self) -> Result<()> {
        let specs = self.specs;
        let tokens = self.tokens;
        let index = self.cursor;
        let alias = &tokens[index];

        let idx = specs
            .find_named_index(alias)
            .ok_or_else(|| Error::UnknownArgument {
                token: alias.clone(),
                index: index,
            })?;
        let spec = &specs.named_slice()[idx];

        if self.named_remaining[idx].is_exhausted() {
            return Err(Error::OccurrenceLimitExceeded {
                name: spec.get_name().to_owned(),
                token: alias.clone(),
                index: index,
                max: spec.get_max_occurrences(),
            });
        }

        let run = value_run(specs, tokens, index + 1);
        let consumed: &[String] = if spec.is_flag() {
            &[]
        } else if let Some(variants) = spec.get_variants() {
            match match_variant(variants, run) {
                Some(len) => &run[..len],
                None => {
                    return Err(invalid_variant(
                        spec.get_name(),
                        variants,
                        run,
                        index + 1,
                    ))
                }
            }
        } else {
            let nargs = spec.get_nargs();
            if run.len() < nargs {
                return Err(Error::InsufficientArguments {
                    name: spec.get_name().to_owned(),
                    expected: nargs,
                    available: run.len(),
                    index: index,
                });
            }
            &run[..nargs]
        };

        trace!(
            "Matched '{}' at index {} as '{}' with values {:?}",
            alias,
            index,
            spec.get_name(),
            consumed
        );
        self.named_remaining[idx].take();
        self.result.add_occurrence(spec.get_name(), consumed.to_vec());
        self.cursor = index + 1 + consumed.len();
        Ok(())
    }

    /// Match the non-alias token at the cursor (and, for variants, the tokens
    /// after it) against the next positional argument with capacity left.
    fn match_positional(&mut self) -> Result<()> {
        let specs = self.specs;
        let tokens = self.tokens;
        let index = self.cursor;
        let run = value_run(specs, tokens, index);

        loop {
            let pidx = self.positional_cursor;
            let spec = match specs.positional().get(pidx) {
                None => {
                    return Err(Error::UnexpectedArgument {
                        token: tokens[index].clone(),
                        index: index,
                    })
                }
                Some(spec) => spec,
            };

            if self.positional_remaining[pidx].is_exhausted() {
                self.positional_cursor += 1;
                continue;
            }

            let len = match spec.get_variants() {
                None => 1,
                Some(variants) => match match_variant(variants, run) {
                    Some(len) => len,
                    // This positional already has a match, so let the
                    // following one try these tokens instead.
                    None if self.positional_matched[pidx] > 0 => {
                        self.positional_cursor += 1;
                        continue;
                    }
                    None => return Err(invalid_variant(spec.get_name(), variants, run, index)),
                },
            };

            let consumed = &run[..len];
            trace!(
                "Matched {:?} at index {} as positional '{}'",
                consumed,
                index,
                spec.get_name()
            );
            self.positional_remaining[pidx].take();
            self.positional_matched[pidx] += 1;
            self.result.add_occurrence(spec.get_name(), consumed.to_vec());
            self.cursor = index + len;
            return Ok(());
        }
    }

    /// Record default values for every argument which never occurred, or fail
    /// if a required argument is missing.
    fn finalize(&mut self) -> Result<()> {
        let specs = self.specs;
        let named = specs
            .named()
            .map(|s| (s.get_name(), s.is_required(), s.get_default_value()));
        let positional = specs
            .positional()
            .iter()
            .map(|s| (s.get_name(), s.is_required(), s.get_default_value()));

        for (name, required, default_value) in named.chain(positional) {
            if self.result.contains(name) {
                continue;
            }
            if required {
                return Err(Error::MissingRequiredArgument {
                    name: name.to_owned(),
                });
            }
            if let Some(dv) = default_value {
                trace!("Using default value '{}' for '{}'", dv, name);
                self.result.add_occurrence(name, vec![dv.to_owned()]);
            }
        }
        Ok(())
    }

    fn run(mut self) -> Result<ParsingResult> {
        while self.cursor < self.tokens.len() {
            if self.specs.is_alias(&self.tokens[self.cursor]) {
                self.match_named()?;
            } else {
                self.match_positional()?;
            }
        }
        self.finalize()?;
        Ok(self.result)
    }
}

/// Match the given tokens against the given Specs, in a single left-to-right
/// pass. Tokens which exactly equal some alias always introduce that named
/// argument; every other token is offered to the positional arguments in
/// position order.
///
/// On success, every argument which occurred (or has a default) has at least
/// one occurrence in the returned result. The first violation encountered is
/// returned as an error, and no partial result is produced.
pub(crate) fn match_tokens(
    specs: &Specs,
    tokens: &[String],
    policy: MultipleOccurrencePolicy,
) -> Result<ParsingResult> {
    debug!("Matching {} command-line tokens", tokens.len());
    let result = Matcher::new(specs, tokens, policy).run()?;
    debug!("Matched {} distinct arguments", result.len());
    Ok(result)
}
