// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::{E, LN_10};
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::grid;

/// Immutable 2D value used for coordinates, pixel positions, scales and sizes.
///
/// Every operation returns a new value. Equality is exact numeric equality,
/// so any value holding a NaN component (and in particular [`Vector2::NAV`])
/// never compares equal to anything, itself included. Polylines use `NAV` as
/// an unambiguous "lift the pen" marker.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// Unit vector towards positive Y (up in coordinate space).
    pub const UP: Self = Self::new(0.0, 1.0);
    /// Unit vector towards negative Y.
    pub const DOWN: Self = Self::new(0.0, -1.0);
    /// Unit vector towards negative X.
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    /// Unit vector towards positive X.
    pub const RIGHT: Self = Self::new(1.0, 0.0);
    /// "Not a vector": both components NaN. Breaks a polyline.
    pub const NAV: Self = Self::new(f64::NAN, f64::NAN);

    /// Creates a vector from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `v`.
    #[inline]
    #[must_use]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    /// Point on a circle of `radius` at angle `theta` (radians).
    ///
    /// Angles follow the Y-up convention of coordinate space: `0` points along
    /// positive X and positive angles turn towards positive Y.
    #[must_use]
    pub fn from_angle(theta: f64, radius: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(cos * radius, sin * radius)
    }

    /// Component-wise sum.
    #[inline]
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference.
    #[inline]
    #[must_use]
    pub fn minus(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Multiplies both components by `factor`.
    #[inline]
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Multiplies component-wise by `factor`.
    #[inline]
    #[must_use]
    pub fn scale_by(self, factor: Self) -> Self {
        Self::new(self.x * factor.x, self.y * factor.y)
    }

    /// Divides both components by `divisor`.
    #[inline]
    #[must_use]
    pub fn divide(self, divisor: f64) -> Self {
        Self::new(self.x / divisor, self.y / divisor)
    }

    /// Divides component-wise by `divisor`.
    #[inline]
    #[must_use]
    pub fn divide_by(self, divisor: Self) -> Self {
        Self::new(self.x / divisor.x, self.y / divisor.y)
    }

    /// Dot product.
    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Signed angle from `self` to `other`, in radians.
    #[must_use]
    pub fn angle_between(self, other: Self) -> f64 {
        let det = self.x * other.y - self.y * other.x;
        det.atan2(self.dot(other))
    }

    /// Euclidean length.
    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Squared Euclidean length.
    #[inline]
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Unit vector in the same direction.
    ///
    /// Vectors shorter than `min_length` normalize to [`Vector2::ZERO`].
    #[must_use]
    pub fn normalize(self, min_length: f64) -> Self {
        let length = self.length();
        if length < min_length {
            Self::ZERO
        } else {
            self.divide(length)
        }
    }

    /// Same direction, length limited to `max_length`.
    #[must_use]
    pub fn max_length(self, max_length: f64) -> Self {
        let length = self.length();
        if length > max_length {
            self.scale(max_length / length)
        } else {
            self
        }
    }

    /// Component-wise absolute value.
    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Negates both components.
    #[inline]
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Negates the X component.
    #[inline]
    #[must_use]
    pub fn inverse_x(self) -> Self {
        Self::new(-self.x, self.y)
    }

    /// Negates the Y component.
    #[inline]
    #[must_use]
    pub fn inverse_y(self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Swaps the components.
    #[inline]
    #[must_use]
    pub fn swap_xy(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Rounds each component to the nearest multiple of the matching `step` component.
    #[must_use]
    pub fn round_to(self, step: Self) -> Self {
        Self::new(grid::round_to(self.x, step.x), grid::round_to(self.y, step.y))
    }

    /// Rounds each component down to a multiple of the matching `step` component.
    #[must_use]
    pub fn floor_to(self, step: Self) -> Self {
        Self::new(grid::floor_to(self.x, step.x), grid::floor_to(self.y, step.y))
    }

    /// Rounds each component up to a multiple of the matching `step` component.
    #[must_use]
    pub fn ceil_to(self, step: Self) -> Self {
        Self::new(grid::ceil_to(self.x, step.x), grid::ceil_to(self.y, step.y))
    }

    /// Rounds each component to the nearest integer.
    #[must_use]
    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    /// Component-wise clamp. Bounds are not reordered.
    #[must_use]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(self.x.max(min.x).min(max.x), self.y.max(min.y).min(max.y))
    }

    /// Scales the vector along its own direction so its X component becomes `x`.
    ///
    /// Returns `self` when `x` already equals the X component. For a vector
    /// with a zero X component the Y component becomes non-finite.
    #[must_use]
    pub fn scale_to_x(self, x: f64) -> Self {
        if x.to_bits() == self.x.to_bits() {
            return self;
        }
        Self::new(x, self.y * x / self.x)
    }

    /// Scales the vector along its own direction so its Y component becomes `y`.
    #[must_use]
    pub fn scale_to_y(self, y: f64) -> Self {
        if y.to_bits() == self.y.to_bits() {
            return self;
        }
        Self::new(self.x * y / self.y, y)
    }

    /// Moves at most `max_delta` of length towards `target`.
    ///
    /// When `target` is within `max_delta` the result is exactly `target`.
    /// Animations rely on this snap to detect arrival.
    #[must_use]
    pub fn move_to(self, target: Self, max_delta: f64) -> Self {
        let delta = target.minus(self);
        let distance = delta.length();
        if distance <= max_delta {
            target
        } else {
            self.plus(delta.scale(max_delta / distance))
        }
    }

    /// Linear interpolation between `self` (`t = 0`) and `other` (`t = 1`).
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self.plus(other.minus(self).scale(t))
    }

    /// Component-wise natural logarithm.
    #[must_use]
    pub fn ln(self) -> Self {
        Self::new(self.x.ln(), self.y.ln())
    }

    /// Component-wise base-10 logarithm.
    #[must_use]
    pub fn log10(self) -> Self {
        self.ln().divide(LN_10)
    }

    /// Component-wise `e^v`.
    #[must_use]
    pub fn exp(self) -> Self {
        Self::new(E.powf(self.x), E.powf(self.y))
    }

    /// Component-wise `10^v`.
    #[must_use]
    pub fn pow10(self) -> Self {
        Self::new(10.0_f64.powf(self.x), 10.0_f64.powf(self.y))
    }

    /// Returns `true` if either component is NaN.
    #[inline]
    #[must_use]
    pub fn has_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Returns `true` if both components are NaN, i.e. this is [`Vector2::NAV`].
    #[inline]
    #[must_use]
    pub fn is_nav(self) -> bool {
        self.x.is_nan() && self.y.is_nan()
    }

    /// Returns `true` if both components are finite.
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns `self`, or `fallback` when any component is NaN.
    #[must_use]
    pub fn valid_or(self, fallback: Self) -> Self {
        if self.has_nan() { fallback } else { self }
    }

    /// Bitwise identity: like `==`, but NaN components of the same bit pattern
    /// match and `0.0` differs from `-0.0`.
    #[inline]
    #[must_use]
    pub fn same_bits(self, other: Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }

    /// Smaller of the two components.
    #[inline]
    #[must_use]
    pub fn min_component(self) -> f64 {
        self.x.min(self.y)
    }

    /// Converts into a [`kurbo::Point`].
    #[inline]
    #[must_use]
    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Converts into a [`kurbo::Vec2`].
    #[inline]
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}; {:?})", self.x, self.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}; {})", self.x, self.y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.plus(rhs)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.minus(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.inverse()
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        self.divide(rhs)
    }
}

impl From<(f64, f64)> for Vector2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<f64> for Vector2 {
    #[inline]
    fn from(v: f64) -> Self {
        Self::splat(v)
    }
}

impl From<Point> for Vector2 {
    #[inline]
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vec2> for Vector2 {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for Point {
    #[inline]
    fn from(v: Vector2) -> Self {
        v.to_point()
    }
}

impl From<Vector2> for Vec2 {
    #[inline]
    fn from(v: Vector2) -> Self {
        v.to_vec2()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::Vector2;

    #[test]
    fn nav_never_equals_itself() {
        assert_ne!(Vector2::NAV, Vector2::NAV);
        assert!(Vector2::NAV.is_nav());
        assert!(Vector2::new(f64::NAN, 1.0).has_nan());
        assert!(!Vector2::new(f64::NAN, 1.0).is_nav());
        assert_eq!(Vector2::new(1.0, 2.0), Vector2::new(1.0, 2.0));
    }

    #[test]
    fn arithmetic_returns_new_values() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);
        assert_eq!(a + b, Vector2::new(4.0, -2.0));
        assert_eq!(a - b, Vector2::new(-2.0, 6.0));
        assert_eq!(a.scale_by(b), Vector2::new(3.0, -8.0));
        assert_eq!(b.divide_by(Vector2::new(3.0, 2.0)), Vector2::new(1.0, -2.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_eq!(b.length(), 5.0);
        assert_eq!(b.abs(), Vector2::new(3.0, 4.0));
        // `a` is untouched by all of the above.
        assert_eq!(a, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn move_to_snaps_exactly_when_within_reach() {
        let start = Vector2::new(0.0, 0.0);
        let target = Vector2::new(3.0, 4.0);

        assert_eq!(start.move_to(target, 5.0), target);
        assert_eq!(start.move_to(target, 7.5), target);

        let partial = start.move_to(target, 2.5);
        assert_abs_diff_eq!(partial.x, 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(partial.y, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(partial.minus(start).length(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn move_to_target_is_idempotent() {
        let target = Vector2::new(-2.0, 8.0);
        assert_eq!(target.move_to(target, 0.0), target);
    }

    #[test]
    fn from_angle_is_y_up() {
        let p = Vector2::from_angle(core::f64::consts::FRAC_PI_2, 2.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-12);
        let q = Vector2::from_angle(0.0, 3.0);
        assert_eq!(q, Vector2::new(3.0, 0.0));
    }

    #[test]
    fn scale_to_axis_follows_direction() {
        let v = Vector2::new(2.0, 1.0);
        assert_eq!(v.scale_to_x(4.0), Vector2::new(4.0, 2.0));
        assert_eq!(v.scale_to_y(-1.0), Vector2::new(-2.0, -1.0));
        assert!(Vector2::new(0.0, 1.0).scale_to_x(1.0).y.is_infinite());
    }

    #[test]
    fn log_and_exp_are_inverse() {
        let v = Vector2::new(100.0, 0.01);
        let l = v.log10();
        assert_abs_diff_eq!(l.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(l.y, -2.0, epsilon = 1e-12);
        let back = v.ln().exp();
        assert_abs_diff_eq!(back.x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(back.y, 0.01, epsilon = 1e-12);
        let p = l.pow10();
        assert_abs_diff_eq!(p.x, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn grid_rounding_per_axis() {
        let v = Vector2::new(1.26, -1.26);
        let step = Vector2::new(0.5, 0.25);
        assert_eq!(v.round_to(step), Vector2::new(1.5, -1.25));
        assert_eq!(v.floor_to(Vector2::splat(0.5)), Vector2::new(1.0, -1.5));
        assert_eq!(v.ceil_to(Vector2::splat(0.5)), Vector2::new(1.5, -1.0));
    }

    #[test]
    fn valid_or_replaces_any_nan() {
        let fallback = Vector2::new(300.0, 100.0);
        assert_eq!(Vector2::NAV.valid_or(fallback), fallback);
        assert_eq!(Vector2::new(1.0, f64::NAN).valid_or(fallback), fallback);
        assert_eq!(Vector2::ONE.valid_or(fallback), Vector2::ONE);
    }

    #[test]
    fn same_bits_matches_nav() {
        assert!(Vector2::NAV.same_bits(Vector2::NAV));
        assert!(!Vector2::ZERO.same_bits(Vector2::new(-0.0, 0.0)));
    }
}
