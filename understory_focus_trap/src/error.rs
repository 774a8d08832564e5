// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by focus trap sessions.

use core::fmt;

/// Error returned when a trap session cannot be wired.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TrapError {
    /// Trapping is enabled and a descendant received focus, but the container has
    /// no visible focusable descendant to cycle between.
    ///
    /// This is a misconfigured container; the session is disposed when this is raised.
    NoFocusableDescendant {
        /// Whether the first boundary was resolved before the scan gave up.
        first_found: bool,
    },
}

impl fmt::Display for TrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFocusableDescendant { first_found } => write!(
                f,
                "focus trap container has no focusable descendant (first boundary found: {first_found})"
            ),
        }
    }
}

impl core::error::Error for TrapError {}
