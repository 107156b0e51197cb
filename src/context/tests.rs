// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::LaunchContext;
use crate::core::env::container::Env;
use crate::substitution::{Substitution, SubstitutionList, TypedSubstitution};

#[test]
fn test_launch_configurations_override() {
    let mut context = LaunchContext::new(Env::new()).with_launch_configurations([
        ("prefix".to_string(), "/usr".to_string()),
        ("mode".to_string(), "debug".to_string()),
    ]);
    context.set_launch_configuration("prefix", "/opt");

    assert_eq!(context.launch_configuration("prefix"), Some("/opt"));
    assert_eq!(context.launch_configuration("mode"), Some("debug"));
    assert_eq!(context.launch_configuration("missing"), None);
    assert_eq!(context.launch_configurations().len(), 2);
}

#[test]
fn test_environment_mut_is_visible_to_substitutions() {
    let mut context = LaunchContext::default();
    context.environment_mut().set("HOME_DIR", "/home/launch");

    let list: SubstitutionList = Substitution::EnvironmentVariable {
        name: "HOME_DIR".into(),
        default: None,
    }
    .into();
    assert_eq!(context.perform_substitution(&list).unwrap(), "/home/launch");
}

#[test]
fn test_perform_typed_substitution() {
    let mut context = LaunchContext::default();
    context.set_launch_configuration("flag", "On");

    let deferred: TypedSubstitution<bool> = Substitution::LaunchConfiguration {
        name: "flag".into(),
        default: None,
    }
    .into();
    assert!(context.perform_typed_substitution(&deferred).unwrap());
    assert!(
        !context
            .perform_typed_substitution(&TypedSubstitution::Literal(false))
            .unwrap()
    );
}

#[test]
fn test_into_environment() {
    let mut context = LaunchContext::default();
    context.environment_mut().set("A", "1");
    assert_eq!(context.into_environment().get("A"), Some("1"));
}
