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
use crate::spec::*;

#[test]
fn test_find_named_spec() {
    let mut specs = Specs::new();
    specs.add_named(NamedSpec::flag("verbose", &["-v", "--verbose"])).unwrap();
    specs.add_named(NamedSpec::new("count", &["--count", "-c"])).unwrap();
    specs.add_named(NamedSpec::new("output", &["-o"]).required()).unwrap();

    let find = |alias: &str| specs.find_named_spec(alias).map(|s| s.get_name().to_owned());
    assert_eq!(Some("verbose".to_owned()), find("-v"));
    assert_eq!(Some("verbose".to_owned()), find("--verbose"));
    assert_eq!(Some("count".to_owned()), find("--count"));
    assert_eq!(Some("count".to_owned()), find("-c"));
    assert_eq!(Some("output".to_owned()), find("-o"));

    // Only exact matches are recognized.
    assert_eq!(None, find("verbose"));
    assert_eq!(None, find("--verb"));
    assert_eq!(None, find("-vc"));
    assert_eq!(None, find("--count=3"));
    assert!(!specs.is_alias("count"));
}

#[test]
fn test_named_defaults() {
    let option = NamedSpec::new("count", &["--count"]);
    assert!(!option.is_flag());
    assert_eq!(1, option.get_nargs());
    assert_eq!(1, option.get_max_occurrences());
    assert!(!option.is_required());
    assert_eq!(None, option.get_default_value());
    assert_eq!(None, option.get_variants());

    let flag = NamedSpec::flag("verbose", &["-v"]);
    assert!(flag.is_flag());
    assert_eq!(1, flag.get_max_occurrences());
}

#[test]
fn test_duplicate_name() {
    let mut specs = Specs::new();
    specs.add_named(NamedSpec::flag("foo", &["-f"])).unwrap();
    assert_eq!(
        Err(Error::DuplicateName {
            name: "foo".to_owned(),
        }),
        specs.add_named(NamedSpec::flag("foo", &["-g"]))
    );
    // Positional and named arguments share a namespace.
    assert_eq!(
        Err(Error::DuplicateName {
            name: "foo".to_owned(),
        }),
        specs.add_positional(PositionalSpec::new("foo", "FOO"))
    );
}

#[test]
fn test_duplicate_alias() {
    let mut specs = Specs::new();
    specs.add_named(NamedSpec::flag("foo", &["-f", "--foo"])).unwrap();
    assert_eq!(
        Err(Error::DuplicateAlias {
            alias: "--foo".to_owned(),
            name: "bar".to_owned(),
            existing: "foo".to_owned(),
        }),
        specs.add_named(NamedSpec::new("bar", &["-b", "--foo"]))
    );
    assert_eq!(
        Err(Error::DuplicateAlias {
            alias: "-b".to_owned(),
            name: "baz".to_owned(),
            existing: "baz".to_owned(),
        }),
        specs.add_named(NamedSpec::new("baz", &["-b", "-b"]))
    );

    // Failed registrations leave the registry untouched.
    assert!(!specs.is_alias("-b"));
    specs.add_named(NamedSpec::new("bar", &["-b"])).unwrap();
    assert_eq!(2, specs.named().count());
}

fn assert_invalid(result: Result<()>) {
    match result {
        Err(e @ Error::InvalidSpecification { .. }) => assert!(e.is_declaration_error()),
        other => panic!("expected InvalidSpecification, got {:?}", other),
    }
}

#[test]
fn test_invalid_named_specs() {
    let mut specs = Specs::new();
    assert_invalid(specs.add_named(NamedSpec::new("foo", &[])));
    assert_invalid(specs.add_named(NamedSpec::new("foo", &[""])));
    assert_invalid(specs.add_named(NamedSpec::new("", &["-f"])));
    assert_invalid(specs.add_named(NamedSpec::new("foo", &["-f"]).nargs(0)));
    assert_invalid(specs.add_named(NamedSpec::flag("foo", &["-f"]).required()));
    assert_invalid(specs.add_named(NamedSpec::flag("foo", &["-f"]).default_value("x")));
    assert_invalid(specs.add_named(
        NamedSpec::flag("foo", &["-f"]).variants(vec![vec!["a"]]),
    ));
    assert_invalid(specs.add_named(
        NamedSpec::new("foo", &["-f"]).variants(Vec::<Vec<&str>>::new()),
    ));
    assert_invalid(specs.add_named(
        NamedSpec::new("foo", &["-f"]).variants(vec![vec!["a"], vec![]]),
    ));
    assert_invalid(specs.add_named(
        NamedSpec::new("mode", &["--mode"])
            .variants(vec![vec!["fast"], vec!["slow", "safe"]])
            .default_value("bogus"),
    ));
    // A default only matches a single-value variant.
    assert_invalid(specs.add_named(
        NamedSpec::new("mode", &["--mode"])
            .variants(vec![vec!["fast"], vec!["slow", "safe"]])
            .default_value("slow"),
    ));
    assert!(specs.named().next().is_none());
}

#[test]
fn test_invalid_positional_specs() {
    let mut specs = Specs::new();
    assert_invalid(specs.add_positional(PositionalSpec::new("", "EMPTY")));
    assert_invalid(specs.add_positional(
        PositionalSpec::new("color", "COLOR").variants(Vec::<Vec<&str>>::new()),
    ));
    assert_invalid(specs.add_positional(
        PositionalSpec::new("color", "COLOR")
            .variants(vec![vec!["red"]])
            .default_value("blue"),
    ));
    assert!(specs.positional().is_empty());
}

#[test]
fn test_default_matching_variant() {
    let mut specs = Specs::new();
    specs
        .add_named(
            NamedSpec::new("mode", &["--mode"])
                .variants(vec![vec!["fast"], vec!["slow", "safe"]])
                .default_value("fast"),
        )
        .unwrap();
    specs
        .add_positional(
            PositionalSpec::new("color", "COLOR")
                .variants(vec![vec!["red"], vec!["blue"]])
                .default_value("blue"),
        )
        .unwrap();
    assert_eq!(Some("fast"), specs.named().next().unwrap().get_default_value());
    assert_eq!(Some("blue"), specs.positional()[0].get_default_value());
}

#[test]
fn test_positional_auto_position() {
    let mut specs = Specs::new();
    specs.add_positional(PositionalSpec::new("a", "A")).unwrap();
    specs.add_positional(PositionalSpec::new("b", "B")).unwrap();
    specs.add_positional(PositionalSpec::new("c", "C").position(10)).unwrap();
    specs.add_positional(PositionalSpec::new("d", "D")).unwrap();

    let positions: Vec<(&str, Option<i64>)> = specs
        .positional()
        .iter()
        .map(|s| (s.get_name(), s.get_position()))
        .collect();
    assert_eq!(
        vec![
            ("a", Some(1)),
            ("b", Some(2)),
            ("c", Some(10)),
            ("d", Some(11)),
        ],
        positions
    );
}

#[test]
fn test_positionals_sorted_by_position() {
    let mut specs = Specs::new();
    specs.add_positional(PositionalSpec::new("last", "LAST").position(3)).unwrap();
    specs.add_positional(PositionalSpec::new("first", "FIRST").position(-1)).unwrap();
    specs.add_positional(PositionalSpec::new("middle", "MIDDLE").position(2)).unwrap();

    let names: Vec<&str> = specs.positional().iter().map(|s| s.get_name()).collect();
    assert_eq!(vec!["first", "middle", "last"], names);
}

#[test]
fn test_positional_position_conflict() {
    let mut specs = Specs::new();
    specs.add_positional(PositionalSpec::new("a", "A")).unwrap();
    assert_invalid(specs.add_positional(PositionalSpec::new("b", "B").position(1)));

    // An explicit position can also collide with a later automatic one.
    let mut specs = Specs::new();
    specs.add_positional(PositionalSpec::new("a", "A").position(2)).unwrap();
    specs.add_positional(PositionalSpec::new("b", "B").position(1)).unwrap();
    specs.add_positional(PositionalSpec::new("c", "C")).unwrap();
    assert_eq!(Some(3), specs.positional()[2].get_position());
}

#[test]
fn test_registries_are_independent() {
    let mut first = Specs::new();
    first.add_positional(PositionalSpec::new("a", "A")).unwrap();
    first.add_positional(PositionalSpec::new("b", "B")).unwrap();

    let mut second = Specs::new();
    second.add_positional(PositionalSpec::new("a", "A")).unwrap();
    assert_eq!(Some(1), second.positional()[0].get_position());
}

#[test]
fn test_display() {
    assert_eq!(
        "count (-c, --count) [Default: 5]",
        NamedSpec::new("count", &["-c", "--count"])
            .default_value("5")
            .to_string()
    );
    assert_eq!(
        "input <FILE>",
        PositionalSpec::new("input", "FILE").to_string()
    );
}
