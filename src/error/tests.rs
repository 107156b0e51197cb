// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, FrontendError, LaunchError, LaunchResult, ProcessError, SubstitutionError};

#[test]
fn test_frontend_error_display() {
    let err = FrontendError::MissingAttribute {
        entity: "append_env".to_string(),
        attribute: "value".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"entity 'append_env' is missing required attribute 'value'"
    );
}

#[test]
fn test_substitution_error_is_boxed_into_launch_error() {
    let err: LaunchError = SubstitutionError::LaunchConfigurationNotSet {
        name: "prefix".to_string(),
    }
    .into();

    assert!(matches!(err, LaunchError::Substitution(_)));
    insta::assert_snapshot!(
        err.to_string(),
        @"substitution error: launch configuration 'prefix' is not set"
    );
}

#[test]
fn test_every_sub_error_converts_into_its_variant() {
    let config: LaunchError = ConfigError::NotFound("launch-rs.toml".to_string()).into();
    let process: LaunchError = ProcessError::ExecutableNotFound {
        name: "cargo".to_string(),
    }
    .into();

    assert!(matches!(config, LaunchError::Config(_)));
    assert!(matches!(process, LaunchError::Process(_)));
    assert_eq!(
        process.to_string(),
        "process error: executable not found: 'cargo' (not in PATH)"
    );
}

#[test]
fn test_launch_error_size() {
    // Every variant holds one Box: pointer + discriminant
    let size = std::mem::size_of::<LaunchError>();
    assert!(size <= 16, "LaunchError is {size} bytes, expected <= 16");
}

#[test]
fn test_launch_result_size() {
    let size = std::mem::size_of::<LaunchResult<()>>();
    assert!(size <= 16, "LaunchResult<()> is {size} bytes, expected <= 16");
}
