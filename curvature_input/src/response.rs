// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Outcome of feeding one input event to a gesture handler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureResponse {
    /// The event was consumed; the host should suppress its default action
    /// (page scroll, text selection, browser pinch zoom).
    pub handled: bool,
}

impl GestureResponse {
    /// The event was consumed.
    pub const HANDLED: Self = Self { handled: true };
    /// The event was not for us.
    pub const IGNORED: Self = Self { handled: false };

    /// Returns `true` if the host should suppress its default action.
    #[must_use]
    pub const fn prevent_default(self) -> bool {
        self.handled
    }
}
