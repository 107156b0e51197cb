// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use serde_json::json;

use super::{AttrValue, DataType, DescriptionFormat, Entity, Parser};
use crate::action::registry::ActionRegistry;
use crate::context::LaunchContext;
use crate::core::env::container::Env;
use crate::error::{FrontendError, LaunchError};
use crate::launch::LaunchService;
use crate::substitution::TypedSubstitution;

fn entity(attributes: serde_json::Value) -> Entity {
    Entity::from_value("test", &attributes).unwrap()
}

fn frontend_error(err: &LaunchError) -> &FrontendError {
    match err {
        LaunchError::Frontend(e) => &**e,
        other => panic!("expected frontend error, got {other}"),
    }
}

// =============================================================================
// Entity
// =============================================================================

#[test]
fn test_entity_string_attribute() {
    let e = entity(json!({ "name": "PATH" }));
    assert_eq!(e.type_name(), "test");
    assert_eq!(e.get_str("name").unwrap(), "PATH");
    assert_eq!(e.get_str_opt("missing").unwrap(), None);
}

#[test]
fn test_entity_missing_required_attribute() {
    let e = entity(json!({}));
    let err = e.get_attr("name", DataType::Str, false).unwrap_err();
    assert!(matches!(
        frontend_error(&err),
        FrontendError::MissingAttribute { attribute, .. } if attribute == "name"
    ));
}

#[test]
fn test_entity_bool_attribute_coercion() {
    let e = entity(json!({
        "native": false,
        "token": "Yes",
        "expr": "$(var flag)",
    }));

    assert_eq!(
        e.get_attr("native", DataType::Bool, false).unwrap(),
        AttrValue::Bool(false)
    );
    assert_eq!(
        e.get_attr("token", DataType::Bool, false).unwrap(),
        AttrValue::Bool(true)
    );
    assert_eq!(
        e.get_attr("expr", DataType::Bool, true).unwrap(),
        AttrValue::Str("$(var flag)".to_string())
    );
    assert!(e.get_attr("expr", DataType::Bool, false).is_err());
}

#[test]
fn test_entity_numeric_attributes() {
    let e = entity(json!({ "count": 3, "ratio": 0.5 }));
    assert_eq!(e.get_attr("count", DataType::Int, false).unwrap(), AttrValue::Int(3));
    assert_eq!(e.get_attr("count", DataType::Float, false).unwrap(), AttrValue::Float(3.0));
    assert_eq!(e.get_attr("ratio", DataType::Float, false).unwrap(), AttrValue::Float(0.5));
    assert!(e.get_attr("ratio", DataType::Int, false).is_err());
}

#[test]
fn test_entity_type_mismatch_message() {
    let e = Entity::from_value("append_env", &json!({ "name": ["PATH"] })).unwrap();
    let err = e.get_attr("name", DataType::Str, false).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"frontend error: attribute 'name' of entity 'append_env' must be a string, found an array"
    );
}

#[test]
fn test_entity_tracks_unparsed_attributes() {
    let e = entity(json!({ "a": "1", "b": "2", "c": "3" }));
    e.get_str("b").unwrap();
    let _ = e.get_str_opt("not-there");
    assert_eq!(e.unparsed_attributes(), ["a", "c"]);
}

#[test]
fn test_entity_from_non_object() {
    let err = Entity::from_value("append_env", &json!("PATH")).unwrap_err();
    assert!(matches!(
        frontend_error(&err),
        FrontendError::InvalidDescription { .. }
    ));
}

// =============================================================================
// Parser
// =============================================================================

#[test]
fn test_parse_if_substitutions() {
    let registry = ActionRegistry::new();
    let parser = Parser::new(&registry);

    let literal: TypedSubstitution<bool> =
        parser.parse_if_substitutions(AttrValue::Bool(true)).unwrap();
    assert_eq!(literal, TypedSubstitution::Literal(true));

    let deferred: TypedSubstitution<bool> = parser
        .parse_if_substitutions(AttrValue::Str("$(var x)".to_string()))
        .unwrap();
    assert!(matches!(deferred, TypedSubstitution::Deferred(_)));

    assert!(
        parser
            .parse_if_substitutions::<bool>(AttrValue::Int(1))
            .is_err()
    );
}

#[test]
fn test_parse_description_toml() {
    let registry = ActionRegistry::with_builtin_actions();
    let parser = Parser::new(&registry);
    let content = r#"
[[launch]]
append_env = { name = "PATH", value = "$(var prefix)/bin", prepend = true, separator = ":" }

[[launch]]
[launch.append_env]
name = "TOOL_FLAGS"
value = "-v"
separator = " "
"#;

    let description = parser
        .parse_description_str(content, DescriptionFormat::Toml)
        .unwrap();
    assert_eq!(description.len(), 2);

    let mut env = Env::new();
    env.set("PATH", "/usr/bin").set("TOOL_FLAGS", "-q");
    let context = LaunchContext::new(env)
        .with_launch_configurations([("prefix".to_string(), "/opt/tool".to_string())]);
    let mut service = LaunchService::new(context);
    service.run(&description).unwrap();

    let env = service.context().environment();
    assert_eq!(env.get("PATH"), Some("/opt/tool/bin:/usr/bin"));
    assert_eq!(env.get("TOOL_FLAGS"), Some("-q -v"));
}

#[test]
fn test_parse_description_yaml_and_json() {
    let registry = ActionRegistry::with_builtin_actions();
    let parser = Parser::new(&registry);

    let yaml = "launch:\n  - append_env:\n      name: FOO\n      value: bar\n      prepend: 'off'\n";
    let json = r#"{ "launch": [ { "append_env": { "name": "FOO", "value": "bar" } } ] }"#;

    for (content, format) in [(yaml, DescriptionFormat::Yaml), (json, DescriptionFormat::Json)] {
        let description = parser.parse_description_str(content, format).unwrap();
        let mut service = LaunchService::default();
        service.run(&description).unwrap();
        assert_eq!(
            service.context().environment().get("FOO"),
            Some("bar"),
            "{format:?}"
        );
    }
}

#[test]
fn test_parse_description_unknown_action() {
    let registry = ActionRegistry::with_builtin_actions();
    let parser = Parser::new(&registry);
    let err = parser
        .parse_description(&json!({ "launch": [ { "set_env": { "name": "A", "value": "b" } } ] }))
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"frontend error: unknown action 'set_env'");
}

#[test]
fn test_parse_description_unexpected_attribute() {
    let registry = ActionRegistry::with_builtin_actions();
    let parser = Parser::new(&registry);
    let err = parser
        .parse_description(&json!({
            "launch": [ { "append_env": { "name": "A", "value": "b", "sep": ";" } } ]
        }))
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"frontend error: entity 'append_env' has unexpected attribute(s): sep"
    );
}

#[test]
fn test_parse_description_shape_errors() {
    let registry = ActionRegistry::with_builtin_actions();
    let parser = Parser::new(&registry);

    let cases = [
        json!({}),
        json!({ "launch": { "append_env": {} } }),
        json!({ "launch": [ "append_env" ] }),
        json!({ "launch": [ {} ] }),
        json!({ "launch": [ { "append_env": {}, "other": {} } ] }),
    ];
    for case in cases {
        let err = parser.parse_description(&case).unwrap_err();
        assert!(
            matches!(frontend_error(&err), FrontendError::InvalidDescription { .. }),
            "{case}: {err}"
        );
    }
}

#[test]
fn test_description_format_from_path() {
    assert_eq!(
        DescriptionFormat::from_path(Path::new("a/launch.toml")),
        Some(DescriptionFormat::Toml)
    );
    assert_eq!(
        DescriptionFormat::from_path(Path::new("launch.YML")),
        Some(DescriptionFormat::Yaml)
    );
    assert_eq!(
        DescriptionFormat::from_path(Path::new("launch.json")),
        Some(DescriptionFormat::Json)
    );
    assert_eq!(DescriptionFormat::from_path(Path::new("launch.xml")), None);
    assert_eq!(DescriptionFormat::from_path(Path::new("launch")), None);
}

#[test]
fn test_load_description_unsupported_extension() {
    let registry = ActionRegistry::with_builtin_actions();
    let parser = Parser::new(&registry);
    let err = parser
        .load_description(Path::new("launch.xml"))
        .unwrap_err();
    assert!(matches!(frontend_error(&err), FrontendError::LoadFailed { .. }));
}

#[test]
fn test_load_description_missing_file() {
    let registry = ActionRegistry::with_builtin_actions();
    let parser = Parser::new(&registry);
    let err = parser
        .load_description(Path::new("definitely/not/here/launch.toml"))
        .unwrap_err();
    assert!(matches!(frontend_error(&err), FrontendError::LoadFailed { .. }));
}
