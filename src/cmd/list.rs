// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for launch-rs.

use crate::action::registry::ActionRegistry;

/// Main handler for list command.
pub fn run_list_command(registry: &ActionRegistry) {
    let tags: Vec<_> = registry.tags().collect();
    if tags.is_empty() {
        println!("No actions registered");
    } else {
        for tag in tags {
            println!("{tag}");
        }
    }
}
