// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Substitution, SubstitutionList, TypedScalar, TypedSubstitution, parse};
use crate::context::LaunchContext;
use crate::core::env::container::Env;
use crate::error::{LaunchError, SubstitutionError};

fn context() -> LaunchContext {
    let mut env = Env::new();
    env.set("HOME", "/home/launch").set("EMPTY", "");
    LaunchContext::new(env).with_launch_configurations([
        ("prefix".to_string(), "/opt/tool".to_string()),
        ("which".to_string(), "HOME".to_string()),
    ])
}

fn resolve(text: &str) -> String {
    parse(text).unwrap().perform(&context()).unwrap()
}

fn env_sub(name: &str, default: Option<&str>) -> Substitution {
    Substitution::EnvironmentVariable {
        name: name.into(),
        default: default.map(Into::into),
    }
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_parse_plain_text() {
    let list = parse("/usr/local/bin").unwrap();
    assert_eq!(list, SubstitutionList::text("/usr/local/bin"));
    assert_eq!(list.as_literal().as_deref(), Some("/usr/local/bin"));
}

#[test]
fn test_parse_empty_input() {
    let list = parse("").unwrap();
    assert!(list.is_empty());
    assert_eq!(list.perform(&context()).unwrap(), "");
}

#[test]
fn test_parse_mixed_tokens() {
    let list = parse("$(var prefix)/bin:$(optenv EXTRA)").unwrap();
    assert_eq!(
        list.tokens(),
        [
            Substitution::LaunchConfiguration {
                name: "prefix".into(),
                default: None,
            },
            Substitution::Text("/bin:".to_string()),
            env_sub("EXTRA", Some("")),
        ]
    );
    assert!(list.as_literal().is_none());
}

#[test]
fn test_parse_nested_substitution() {
    let list = parse("$(env $(var which))").unwrap();
    assert_eq!(
        list.tokens(),
        [Substitution::EnvironmentVariable {
            name: Substitution::LaunchConfiguration {
                name: "which".into(),
                default: None,
            }
            .into(),
            default: None,
        }]
    );
    assert_eq!(list.perform(&context()).unwrap(), "/home/launch");
}

#[test]
fn test_parse_quoted_default_keeps_whitespace() {
    assert_eq!(resolve("$(env MISSING 'two words')"), "two words");
    assert_eq!(resolve("$(var missing \"a $(var prefix) b\")"), "a /opt/tool b");
}

#[test]
fn test_parse_escaped_dollar() {
    assert_eq!(resolve(r"cost: \$(var prefix)"), "cost: $(var prefix)");
    assert_eq!(resolve(r"C:\tools\bin"), r"C:\tools\bin");
}

#[test]
fn test_parse_whitespace_inside_parentheses() {
    assert_eq!(resolve("$(  var   prefix  )"), "/opt/tool");
}

#[test]
fn test_parse_unterminated_substitution() {
    let err = parse("$(var prefix").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid substitution syntax in '$(var prefix' at offset 0: unterminated substitution, expected ')'"
    );
}

#[test]
fn test_parse_unterminated_quote() {
    let err = parse("x$(env A 'b)").unwrap_err();
    assert!(
        matches!(err, SubstitutionError::Syntax { offset: 9, .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_parse_empty_substitution() {
    let err = parse("$( )").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid substitution syntax in '$( )' at offset 0: empty substitution"
    );
}

#[test]
fn test_parse_unknown_substitution() {
    let err = parse("$(find-pkg-share foo)").unwrap_err();
    assert!(matches!(
        err,
        SubstitutionError::UnknownSubstitution { ref name } if name == "find-pkg-share"
    ));
}

#[test]
fn test_parse_argument_count() {
    let err = parse("$(env A B C)").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"substitution 'env' expects 1..=2 argument(s), got 3");
    assert!(parse("$(var)").is_err());
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_environment_variable_resolution() {
    assert_eq!(resolve("$(env HOME)"), "/home/launch");
    assert_eq!(resolve("[$(env EMPTY)]"), "[]");
    assert_eq!(resolve("$(env MISSING fallback)"), "fallback");
    assert_eq!(resolve("[$(optenv MISSING)]"), "[]");
}

#[test]
fn test_environment_variable_not_set() {
    let err = parse("$(env MISSING)")
        .unwrap()
        .perform(&context())
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"substitution error: environment variable 'MISSING' is not set"
    );
}

#[test]
fn test_launch_configuration_not_set() {
    let err = parse("$(var missing)")
        .unwrap()
        .perform(&context())
        .unwrap_err();
    assert!(matches!(err, LaunchError::Substitution(_)));
}

#[test]
fn test_nested_list_token() {
    let list = SubstitutionList::new(vec![
        Substitution::Text("<".to_string()),
        Substitution::Nested(parse("$(var prefix)/lib").unwrap()),
        Substitution::Text(">".to_string()),
    ]);
    assert_eq!(list.perform(&context()).unwrap(), "</opt/tool/lib>");
}

#[test]
fn test_display_renders_text_syntax() {
    let list = parse("$(var prefix)/bin:$(optenv EXTRA):$(env A 'b c')").unwrap();
    insta::assert_snapshot!(list.to_string(), @"$(var prefix)/bin:$(optenv EXTRA):$(env A 'b c')");
    assert_eq!(parse(&list.to_string()).unwrap(), list);
}

// =============================================================================
// Typed substitutions
// =============================================================================

#[test]
fn test_bool_coercion_yaml_tokens() {
    for text in ["true", "True", "TRUE", "yes", "Yes", "on", "ON", " true\n"] {
        assert_eq!(bool::coerce(text), Some(true), "{text:?}");
    }
    for text in ["false", "False", "no", "NO", "off", "Off"] {
        assert_eq!(bool::coerce(text), Some(false), "{text:?}");
    }
    for text in ["", "1", "0", "y", "n", "maybe"] {
        assert_eq!(bool::coerce(text), None, "{text:?}");
    }
}

#[test]
fn test_typed_literal_and_deferred() {
    let mut ctx = context();
    ctx.set_launch_configuration("flag", "yes");

    let literal = TypedSubstitution::from(true);
    let deferred: TypedSubstitution<bool> = parse("$(var flag)").unwrap().into();
    let text: TypedSubstitution<bool> = "Off".into();

    assert!(literal.perform(&ctx).unwrap());
    assert!(deferred.perform(&ctx).unwrap());
    assert!(!text.perform(&ctx).unwrap());
}

#[test]
fn test_typed_invalid_value() {
    let value: TypedSubstitution<bool> = "$(var prefix)".into();
    // Plain text conversion does not parse substitutions.
    let err = value.perform(&context()).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"substitution error: cannot interpret '$(var prefix)' as bool"
    );
}
