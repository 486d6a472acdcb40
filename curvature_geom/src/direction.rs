// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Region code of a point relative to a [`ZeroAngleRect`](crate::ZeroAngleRect).
    ///
    /// The empty set ([`Direction::INSIDE`]) means the point is within the
    /// rectangle. Otherwise at most one horizontal bit and at most one vertical
    /// bit are set; the classifier never produces `LEFT | RIGHT` or
    /// `TOP | BOTTOM`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Direction: u8 {
        /// Beyond the left edge.
        const LEFT   = 0b0001;
        /// Beyond the right edge.
        const RIGHT  = 0b0010;
        /// Beyond the top edge.
        const TOP    = 0b0100;
        /// Beyond the bottom edge.
        const BOTTOM = 0b1000;
    }
}

impl Direction {
    /// Inside the rectangle: no bits set.
    pub const INSIDE: Self = Self::empty();
    /// Both horizontal bits.
    pub const HORIZONTAL: Self = Self::LEFT.union(Self::RIGHT);
    /// Both vertical bits.
    pub const VERTICAL: Self = Self::TOP.union(Self::BOTTOM);

    /// Returns `true` for [`Direction::INSIDE`].
    #[inline]
    #[must_use]
    pub const fn is_inside(self) -> bool {
        self.is_empty()
    }

    /// Horizontal component only (`LEFT`, `RIGHT` or inside).
    #[inline]
    #[must_use]
    pub const fn horizontal(self) -> Self {
        self.intersection(Self::HORIZONTAL)
    }

    /// Vertical component only (`TOP`, `BOTTOM` or inside).
    #[inline]
    #[must_use]
    pub const fn vertical(self) -> Self {
        self.intersection(Self::VERTICAL)
    }

    /// Returns `true` when a segment between points with codes `a` and `b`
    /// cannot cross the rectangle boundary.
    ///
    /// That is the case when both points are inside, or when both lie beyond
    /// the same edge (a shared nonzero horizontal or vertical component).
    #[must_use]
    pub fn at_same_side(a: Self, b: Self) -> bool {
        (a.is_inside() && b.is_inside()) || !Self::shared_side(a, b).is_inside()
    }

    /// The edges both codes lie beyond.
    #[must_use]
    pub fn shared_side(a: Self, b: Self) -> Self {
        let horizontal = if a.horizontal() == b.horizontal() {
            a.horizontal()
        } else {
            Self::INSIDE
        };
        let vertical = if a.vertical() == b.vertical() {
            a.vertical()
        } else {
            Self::INSIDE
        };
        horizontal | vertical
    }

    /// Mirrors the code across the rectangle center.
    #[must_use]
    pub fn opposite(self) -> Self {
        let mut out = Self::INSIDE;
        if self.contains(Self::LEFT) {
            out |= Self::RIGHT;
        } else if self.contains(Self::RIGHT) {
            out |= Self::LEFT;
        }
        if self.contains(Self::TOP) {
            out |= Self::BOTTOM;
        } else if self.contains(Self::BOTTOM) {
            out |= Self::TOP;
        }
        out
    }

    /// Returns `true` for the diagonal regions (one horizontal and one vertical bit).
    #[inline]
    #[must_use]
    pub const fn is_corner(self) -> bool {
        !self.horizontal().is_empty() && !self.vertical().is_empty()
    }
}
