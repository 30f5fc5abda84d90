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
use argmatch_values::result::MultipleOccurrencePolicy;

#[test]
fn test_default_config() {
    let config = ParserConfig::default();
    assert_eq!(MultipleOccurrencePolicy::Fail, config.multiple_occurrence_policy);
    assert!(config.skip_program_name);
}

#[cfg(feature = "serde")]
#[test]
fn test_deserialize_config() {
    let config: ParserConfig =
        serde_json::from_str(r#"{"multiple_occurrence_policy": "first"}"#).unwrap();
    assert_eq!(
        ParserConfig {
            multiple_occurrence_policy: MultipleOccurrencePolicy::First,
            skip_program_name: true,
        },
        config
    );

    let config: ParserConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(ParserConfig::default(), config);

    let round_tripped: ParserConfig =
        serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
    assert_eq!(config, round_tripped);
}
