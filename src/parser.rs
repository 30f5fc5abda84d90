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

use crate::config::ParserConfig;
use crate::error::*;
use crate::matching::match_tokens;
use crate::spec::{NamedSpec, PositionalSpec, Specs};
use argmatch_values::result::ParsingResult;
use std::env;
use std::fmt;

/// ArgumentParser is the entry point of this library. Arguments are declared
/// on it up front (each declaration is validated immediately), and then any
/// number of token sequences can be parsed against those declarations.
///
/// Parsing takes `&self`: all of the state of a parse lives in that call, so
/// a parser can be reused freely.
#[derive(Clone, Debug, Default)]
pub struct ArgumentParser {
    name: String,
    description: String,
    version: String,
    config: ParserConfig,
    specs: Specs,
}

impl ArgumentParser {
    /// Construct a new parser, with no arguments declared yet, for the
    /// program with the given metadata.
    pub fn new(name: &str, description: &str, version: &str) -> ArgumentParser {
        ArgumentParser {
            name: name.to_owned(),
            description: description.to_owned(),
            version: version.to_owned(),
            config: ParserConfig::default(),
            specs: Specs::new(),
        }
    }

    /// Replace this parser's configuration.
    pub fn with_config(mut self, config: ParserConfig) -> ArgumentParser {
        self.config = config;
        self
    }

    /// Returns the program name this parser was constructed with.
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the program description this parser was constructed with.
    pub fn get_description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the program version this parser was constructed with.
    pub fn get_version(&self) -> &str {
        self.version.as_str()
    }

    /// Returns this parser's configuration.
    pub fn get_config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns every argument declared so far.
    pub fn get_specs(&self) -> &Specs {
        &self.specs
    }

    /// Declare a flag with the given canonical name and aliases. This is a
    /// shorthand for `add_named(NamedSpec::flag(name, aliases))`.
    pub fn add_flag(&mut self, name: &str, aliases: &[&str]) -> Result<()> {
        self.add_named(NamedSpec::flag(name, aliases))
    }

    /// Declare a named argument.
    pub fn add_named(&mut self, spec: NamedSpec) -> Result<()> {
        self.specs.add_named(spec)
    }

    /// Declare a positional argument.
    pub fn add_positional(&mut self, spec: PositionalSpec) -> Result<()> {
        self.specs.add_positional(spec)
    }

    /// Parse the given sequence of tokens, which has already been split up
    /// (e.g. by a shell). Nothing is dropped from the front of the sequence.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParsingResult> {
        let tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_owned()).collect();
        match_tokens(
            &self.specs,
            tokens.as_slice(),
            self.config.multiple_occurrence_policy,
        )
    }

    /// Parse a whole command string. The string is split on whitespace; no
    /// quoting or escaping is supported.
    pub fn parse_str(&self, command: &str) -> Result<ParsingResult> {
        let tokens: Vec<&str> = command.split_whitespace().collect();
        self.parse(tokens.as_slice())
    }

    /// Parse a process-style argument vector. Unless the configuration says
    /// otherwise, the first element (the program name) is dropped.
    pub fn parse_argv<I, S>(&self, argv: I) -> Result<ParsingResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let skip = if self.config.skip_program_name { 1 } else { 0 };
        let tokens: Vec<String> = argv
            .into_iter()
            .skip(skip)
            .map(|t| t.as_ref().to_owned())
            .collect();
        self.parse(tokens.as_slice())
    }

    /// Parse this process's own command-line arguments. Arguments which
    /// aren't valid Unicode are converted lossily.
    pub fn parse_env(&self) -> Result<ParsingResult> {
        self.parse_argv(env::args_os().map(|a| a.to_string_lossy().into_owned()))
    }
}

impl fmt::Display for ArgumentParser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name.as_str())?;
        if !self.version.is_empty() {
            write!(f, " {}", self.version)?;
        }
        if !self.description.is_empty() {
            write!(f, " - {}", self.description)?;
        }
        Ok(())
    }
}
