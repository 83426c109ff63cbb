// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

//! Entry point directives for console scripts.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "./entry_points_test.rs"]
mod entry_points_test;

/// A configured entry point from an `entry_points:` item.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct EntryPoint {
    /// Name of the installed command.
    pub name: String,
    /// Callable target in `module:function` form.
    pub target: String,
}

/// Entry point directives grouped by category.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct EntryPointTable {
    /// Console script directives in `name = module:function` form.
    pub console_scripts: Vec<String>,
}

/// Convert configured entry points into console-script directives.
///
/// Directives keep declaration order. An absent section (empty slice) yields
/// an empty table, not an error.
pub fn generate_entry_points(entry_points: &[EntryPoint]) -> EntryPointTable {
    EntryPointTable {
        console_scripts: entry_points
            .iter()
            .map(|ep| format!("{} = {}", ep.name, ep.target))
            .collect(),
    }
}
