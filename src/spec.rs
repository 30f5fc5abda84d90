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
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A Variant is one fixed, acceptable tuple of values for an argument. When an
/// argument declares variants, each of its occurrences must consume exactly
/// the tokens of one of them.
pub type Variant = Vec<String>;

/// The maximum occurrence count which means "no limit".
pub const UNBOUNDED: usize = 0;

fn to_variants<I, V, S>(variants: I) -> Vec<Variant>
where
    I: IntoIterator<Item = V>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    variants
        .into_iter()
        .map(|v| v.into_iter().map(|s| s.into()).collect())
        .collect()
}

fn invalid(name: &str, reason: &str) -> Error {
    Error::InvalidSpecification {
        name: name.to_owned(),
        reason: reason.to_owned(),
    }
}

/// Checks the properties shared by both named and positional arguments.
fn validate_common(
    name: &str,
    variants: Option<&[Variant]>,
    default_value: Option<&str>,
) -> Result<()> {
    if name.is_empty() {
        return Err(invalid(name, "the canonical name must not be empty"));
    }
    if let Some(variants) = variants {
        if variants.is_empty() {
            return Err(invalid(name, "the set of variants must not be empty"));
        }
        if variants.iter().any(|v| v.is_empty()) {
            return Err(invalid(name, "variants must contain at least one value"));
        }
        if let Some(dv) = default_value {
            if !variants.iter().any(|v| v.len() == 1 && v[0] == dv) {
                return Err(invalid(
                    name,
                    &format!("default value '{}' does not match any variant", dv),
                ));
            }
        }
    }
    Ok(())
}

/// NamedSpec describes a named argument: one which is introduced on the
/// command line by one of its aliases (e.g. "-v" or "--verbose"), and which
/// may then consume some number of value tokens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedSpec {
    name: String,
    aliases: Vec<String>,
    is_flag: bool,
    /// The number of value tokens consumed per occurrence. Ignored for flags
    /// and for arguments with variants.
    nargs: usize,
    variants: Option<Vec<Variant>>,
    required: bool,
    /// Ignored if the argument is required.
    default_value: Option<String>,
    max_occurrences: usize,
}

impl NamedSpec {
    /// Constructs a NamedSpec for an argument which takes one value per
    /// occurrence, is optional, has no default, and may occur once.
    pub fn new(name: &str, aliases: &[&str]) -> NamedSpec {
        NamedSpec {
            name: name.to_owned(),
            aliases: aliases.iter().map(|&a| a.to_owned()).collect(),
            is_flag: false,
            nargs: 1,
            variants: None,
            required: false,
            default_value: None,
            max_occurrences: 1,
        }
    }

    /// Constructs a NamedSpec for a flag: an argument which takes no values,
    /// and whose presence alone is the signal. By default, a flag may occur
    /// once.
    pub fn flag(name: &str, aliases: &[&str]) -> NamedSpec {
        NamedSpec {
            is_flag: true,
            nargs: 0,
            ..NamedSpec::new(name, aliases)
        }
    }

    /// Sets the exact number of value tokens each occurrence consumes.
    pub fn nargs(mut self, nargs: usize) -> NamedSpec {
        self.nargs = nargs;
        self
    }

    /// Marks this argument as required: parsing fails if it never occurs. Any
    /// default value is ignored.
    pub fn required(mut self) -> NamedSpec {
        self.required = true;
        self
    }

    /// Sets the value recorded (as a single occurrence) if this argument
    /// never occurs.
    pub fn default_value(mut self, default_value: &str) -> NamedSpec {
        self.default_value = Some(default_value.to_owned());
        self
    }

    /// Restricts this argument's values to the given tuples. Each occurrence
    /// consumes exactly as many tokens as the variant it matches, so this
    /// overrides `nargs`.
    pub fn variants<I, V, S>(mut self, variants: I) -> NamedSpec
    where
        I: IntoIterator<Item = V>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants = Some(to_variants(variants));
        self
    }

    /// Sets the maximum number of times this argument may occur. `UNBOUNDED`
    /// removes the limit.
    pub fn max_occurrences(mut self, max_occurrences: usize) -> NamedSpec {
        self.max_occurrences = max_occurrences;
        self
    }

    /// Returns this argument's canonical name, which is also its key in the
    /// parsing result.
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns every token spelling which introduces this argument.
    pub fn get_aliases(&self) -> &[String] {
        self.aliases.as_slice()
    }

    /// Returns true if this argument is a flag.
    pub fn is_flag(&self) -> bool {
        self.is_flag
    }

    /// Returns the number of value tokens consumed per occurrence, for
    /// arguments which are neither flags nor restricted to variants.
    pub fn get_nargs(&self) -> usize {
        self.nargs
    }

    /// Returns this argument's variants, if it has any.
    pub fn get_variants(&self) -> Option<&[Variant]> {
        self.variants.as_deref()
    }

    /// Returns true if this argument must occur at least once.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns this argument's default value, if it has one.
    pub fn get_default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Returns the maximum number of occurrences, or `UNBOUNDED`.
    pub fn get_max_occurrences(&self) -> usize {
        self.max_occurrences
    }

    fn validate(&self) -> Result<()> {
        validate_common(&self.name, self.get_variants(), self.get_default_value())?;
        if self.aliases.is_empty() {
            return Err(invalid(&self.name, "named arguments need at least one alias"));
        }
        if self.aliases.iter().any(|a| a.is_empty()) {
            return Err(invalid(&self.name, "aliases must not be empty"));
        }
        if self.is_flag {
            if self.required || self.default_value.is_some() || self.variants.is_some() {
                return Err(invalid(
                    &self.name,
                    "flags cannot be required, have a default value, or have variants",
                ));
            }
        } else if self.nargs == 0 && self.variants.is_none() {
            return Err(invalid(
                &self.name,
                "arguments which take no values must be declared as flags",
            ));
        }
        Ok(())
    }
}

impl fmt::Display for NamedSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.aliases.join(", "))?;
        if let Some(ref dv) = self.default_value {
            write!(f, " [Default: {}]", dv)?;
        }
        Ok(())
    }
}

/// PositionalSpec describes a positional argument: one which has no alias,
/// and is matched purely by its position among the tokens which aren't named
/// arguments. Each occurrence consumes one token, or the tokens of one of its
/// variants.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionalSpec {
    name: String,
    display_name: String,
    /// Assigned by the registry when this is None.
    position: Option<i64>,
    required: bool,
    default_value: Option<String>,
    variants: Option<Vec<Variant>>,
    max_occurrences: usize,
}

impl PositionalSpec {
    /// Constructs a PositionalSpec which is optional, has no default, may
    /// occur once, and will be placed after every positional argument
    /// registered before it.
    pub fn new(name: &str, display_name: &str) -> PositionalSpec {
        PositionalSpec {
            name: name.to_owned(),
            display_name: display_name.to_owned(),
            position: None,
            required: false,
            default_value: None,
            variants: None,
            max_occurrences: 1,
        }
    }

    /// Sets this argument's position explicitly. Positional arguments are
    /// matched in ascending position order.
    pub fn position(mut self, position: i64) -> PositionalSpec {
        self.position = Some(position);
        self
    }

    /// Marks this argument as required. Any default value is ignored.
    pub fn required(mut self) -> PositionalSpec {
        self.required = true;
        self
    }

    /// Sets the value recorded (as a single occurrence) if this argument
    /// never occurs.
    pub fn default_value(mut self, default_value: &str) -> PositionalSpec {
        self.default_value = Some(default_value.to_owned());
        self
    }

    /// Restricts this argument's values to the given tuples.
    pub fn variants<I, V, S>(mut self, variants: I) -> PositionalSpec
    where
        I: IntoIterator<Item = V>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants = Some(to_variants(variants));
        self
    }

    /// Sets the maximum number of times this argument may occur. `UNBOUNDED`
    /// removes the limit.
    pub fn max_occurrences(mut self, max_occurrences: usize) -> PositionalSpec {
        self.max_occurrences = max_occurrences;
        self
    }

    /// Returns this argument's canonical name.
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the name used for this argument in diagnostics.
    pub fn get_display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns this argument's position. Before registration, this is None
    /// unless a position was set explicitly.
    pub fn get_position(&self) -> Option<i64> {
        self.position
    }

    /// Returns true if this argument must occur at least once.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns this argument's default value, if it has one.
    pub fn get_default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Returns this argument's variants, if it has any.
    pub fn get_variants(&self) -> Option<&[Variant]> {
        self.variants.as_deref()
    }

    /// Returns the maximum number of occurrences, or `UNBOUNDED`.
    pub fn get_max_occurrences(&self) -> usize {
        self.max_occurrences
    }
}

impl fmt::Display for PositionalSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.display_name)?;
        if let Some(ref dv) = self.default_value {
            write!(f, " [Default: {}]", dv)?;
        }
        Ok(())
    }
}

/// Specs is the registry of every argument declared for one parser. It
/// enforces that names and aliases are unique, assigns positions to
/// positional arguments which didn't specify one, and keeps positional
/// arguments sorted by position.
///
/// Registration is append-only; invalid declarations are rejected
/// immediately.
#[derive(Clone, Debug)]
pub struct Specs {
    named: Vec<NamedSpec>,
    /// Sorted by position.
    positional: Vec<PositionalSpec>,
    /// Maps each alias to an index in `named`.
    aliases: HashMap<String, usize>,
    names: HashSet<String>,
    next_position: i64,
}

impl Default for Specs {
    fn default() -> Self {
        Specs::new()
    }
}

impl Specs {
    /// Construct a new, empty registry.
    pub fn new() -> Specs {
        Specs {
            named: Vec::new(),
            positional: Vec::new(),
            aliases: HashMap::new(),
            names: HashSet::new(),
            next_position: 1,
        }
    }

    fn check_name(&self, name: &str) -> Result<()> {
        if self.names.contains(name) {
            return Err(Error::DuplicateName {
                name: name.to_owned(),
            });
        }
        Ok(())
    }

    fn warn_ignored_default(name: &str, required: bool, default_value: Option<&str>) {
        if let (true, Some(dv)) = (required, default_value) {
            warn!(
                "Argument '{}' is required, so its default value '{}' will never be used",
                name, dv
            );
        }
    }

    /// Register a named argument. This fails if the declaration is invalid,
    /// or if its name or any of its aliases is already in use.
    pub fn add_named(&mut self, spec: NamedSpec) -> Result<()> {
        spec.validate()?;
        self.check_name(spec.get_name())?;

        let mut seen: HashSet<&str> = HashSet::new();
        for alias in spec.get_aliases() {
            if let Some(&idx) = self.aliases.get(alias) {
                return Err(Error::DuplicateAlias {
                    alias: alias.clone(),
                    name: spec.name.clone(),
                    existing: self.named[idx].name.clone(),
                });
            }
            if !seen.insert(alias.as_str()) {
                return Err(Error::DuplicateAlias {
                    alias: alias.clone(),
                    name: spec.name.clone(),
                    existing: spec.name.clone(),
                });
            }
        }

        Specs::warn_ignored_default(spec.get_name(), spec.required, spec.get_default_value());
        debug!("Registering named argument {}", spec);

        let idx = self.named.len();
        for alias in spec.get_aliases() {
            self.aliases.insert(alias.clone(), idx);
        }
        self.names.insert(spec.name.clone());
        self.named.push(spec);
        Ok(())
    }

    /// Register a positional argument. If it has no explicit position, it is
    /// placed after every positional argument registered so far. This fails
    /// if the declaration is invalid, if its name is already in use, or if
    /// another positional argument already has the same position.
    pub fn add_positional(&mut self, mut spec: PositionalSpec) -> Result<()> {
        validate_common(
            spec.get_name(),
            spec.get_variants(),
            spec.get_default_value(),
        )?;
        self.check_name(spec.get_name())?;

        let position = spec.position.unwrap_or(self.next_position);
        let idx = match self
            .positional
            .binary_search_by_key(&position, |p| p.position.unwrap_or_default())
        {
            Ok(existing) => {
                return Err(invalid(
                    spec.get_name(),
                    &format!(
                        "position {} is already taken by argument '{}'",
                        position, self.positional[existing].name
                    ),
                ));
            }
            Err(idx) => idx,
        };

        spec.position = Some(position);
        self.next_position = self.next_position.max(position.saturating_add(1));

        Specs::warn_ignored_default(spec.get_name(), spec.required, spec.get_default_value());
        debug!("Registering positional argument {} at position {}", spec, position);

        self.names.insert(spec.name.clone());
        self.positional.insert(idx, spec);
        Ok(())
    }

    /// Returns an iterator over the named arguments, in registration order.
    pub fn named(&self) -> impl DoubleEndedIterator<Item = &NamedSpec> {
        self.named.iter()
    }

    /// Returns the positional arguments, in position order.
    pub fn positional(&self) -> &[PositionalSpec] {
        self.positional.as_slice()
    }

    /// Locate the named argument which owns the given alias. The alias must
    /// match exactly.
    pub fn find_named_spec(&self, alias: &str) -> Option<&NamedSpec> {
        self.find_named_index(alias).map(|idx| &self.named[idx])
    }

    pub(crate) fn find_named_index(&self, alias: &str) -> Option<usize> {
        self.aliases.get(alias).copied()
    }

    pub(crate) fn named_slice(&self) -> &[NamedSpec] {
        self.named.as_slice()
    }

    /// Returns true if the given token is an alias of some named argument.
    pub fn is_alias(&self, token: &str) -> bool {
        self.aliases.contains_key(token)
    }
}
