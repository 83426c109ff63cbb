// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

//! Explicit build context replacing process-wide flags.

#[cfg(test)]
#[path = "./context_test.rs"]
mod context_test;

/// Boolean-like environment variable marking a documentation build.
pub const DOCS_BUILD_ENV: &str = "BUILDSPEC_DOCS_BUILD";

/// Environment variable overriding the running runtime version.
pub const RUNTIME_VERSION_ENV: &str = "BUILDSPEC_RUNTIME_VERSION";

/// Environment variable naming the tool configuration directory.
pub const CONFIG_DIR_ENV: &str = "BUILDSPEC_CONFIGDIR";

/// Home directory forced during documentation builds.
pub const DOCS_HOME: &str = "/home/docs/";

/// An environment variable set by [`BuildContext::apply_overrides`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvOverride {
    pub name: String,
    pub value: String,
}

/// Context for one build invocation.
///
/// Components receive this explicitly instead of reading process-wide flags.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    /// Whether this invocation runs inside a documentation build.
    pub docs_build: bool,

    /// Runtime version of the surrounding environment, when signalled.
    pub runtime_version: Option<String>,

    /// Environment overrides applied by this context, in order.
    pub overrides: Vec<EnvOverride>,
}

impl BuildContext {
    /// Build a context from the process environment.
    pub fn from_env() -> Self {
        let docs_build = std::env::var(DOCS_BUILD_ENV)
            .ok()
            .is_some_and(|v| is_truthy(&v));

        let runtime_version = std::env::var(RUNTIME_VERSION_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());

        Self {
            docs_build,
            runtime_version,
            overrides: Vec::new(),
        }
    }

    /// The running environment version used for the minimum-runtime gate.
    ///
    /// None when the environment does not signal its version; the gate is
    /// skipped in that case.
    pub fn running_version(&self) -> Option<&str> {
        self.runtime_version.as_deref()
    }

    /// Apply documentation-build environment overrides.
    ///
    /// When [`BuildContext::docs_build`] is set, HOME and the tool config
    /// directory are pointed at [`DOCS_HOME`] before any metadata load.
    /// Applied overrides are recorded on the context. No-op otherwise.
    pub fn apply_overrides(&mut self) {
        if !self.docs_build {
            return;
        }

        for name in ["HOME", CONFIG_DIR_ENV] {
            // Safety: the assembler is single-threaded run-to-completion;
            // nothing reads the environment concurrently.
            unsafe { std::env::set_var(name, DOCS_HOME) };
            self.overrides.push(EnvOverride {
                name: name.to_string(),
                value: DOCS_HOME.to_string(),
            });
        }
    }
}

/// Interpret a boolean-like environment value.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
