// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use peniko::color::{ParseError, Srgb, parse_color};
use thiserror::Error;

/// A color as supplied by callers, before resolution.
///
/// Producers accept any of these forms and resolve them once, at
/// construction, into a [`Color`]. Ticks never parse colors.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorSpec {
    /// Opaque 8-bit sRGB triple.
    Rgb(u8, u8, u8),
    /// 8-bit sRGB triple plus an alpha in `0.0..=1.0`.
    Rgba(u8, u8, u8, f32),
    /// Already resolved color.
    Solid(Color),
    /// CSS color token such as `"lightgray"`, `"#ff8800"` or `"rgb(1, 2, 3)"`.
    Token(String),
}

/// Errors produced while resolving a [`ColorSpec`].
#[derive(Debug, Error)]
pub enum ColorError {
    /// The token is not a CSS color.
    #[error("invalid color token {token:?}")]
    InvalidToken {
        /// The rejected token.
        token: String,
        /// Parser diagnostic.
        #[source]
        source: ParseError,
    },
    /// The alpha component is outside `0.0..=1.0` or not a number.
    #[error("alpha {0} is outside 0..=1")]
    InvalidAlpha(f32),
}

impl ColorSpec {
    /// Resolves to a concrete color.
    pub fn resolve(&self) -> Result<Color, ColorError> {
        match self {
            Self::Rgb(r, g, b) => Ok(Color::from_rgb8(*r, *g, *b)),
            Self::Rgba(r, g, b, a) => {
                if !(0.0..=1.0).contains(a) {
                    return Err(ColorError::InvalidAlpha(*a));
                }
                Ok(Color::from_rgb8(*r, *g, *b).with_alpha(*a))
            }
            Self::Solid(color) => Ok(*color),
            Self::Token(token) => parse_color(token.trim())
                .map(|dynamic| dynamic.to_alpha_color::<Srgb>())
                .map_err(|source| ColorError::InvalidToken {
                    token: token.clone(),
                    source,
                }),
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<&str> for ColorSpec {
    fn from(token: &str) -> Self {
        Self::Token(token.to_owned())
    }
}

impl From<String> for ColorSpec {
    fn from(token: String) -> Self {
        Self::Token(token)
    }
}

impl From<[u8; 3]> for ColorSpec {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::Rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, f32)> for ColorSpec {
    fn from((r, g, b, a): (u8, u8, u8, f32)) -> Self {
        Self::Rgba(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use peniko::Color;
    use peniko::color::palette::css;

    use super::{ColorError, ColorSpec};

    #[test]
    fn numeric_forms() {
        let rgb = ColorSpec::Rgb(10, 20, 30).resolve().unwrap();
        assert_eq!(rgb.to_rgba8().r, 10);
        assert_eq!(rgb.to_rgba8().a, 255);

        let rgba = ColorSpec::from((255, 0, 0, 0.5)).resolve().unwrap();
        assert_eq!(rgba.components[3], 0.5);
    }

    #[test]
    fn tokens_resolve_like_css() {
        let gray = ColorSpec::from("lightgray").resolve().unwrap();
        assert_eq!(gray.to_rgba8(), css::LIGHT_GRAY.to_rgba8());
        let hex = ColorSpec::from("#ff8800").resolve().unwrap();
        assert_eq!(hex.to_rgba8(), Color::from_rgb8(0xff, 0x88, 0x00).to_rgba8());
    }

    #[test]
    fn bad_input_is_an_error() {
        assert!(matches!(
            ColorSpec::from("not-a-color").resolve(),
            Err(ColorError::InvalidToken { .. })
        ));
        assert!(matches!(
            ColorSpec::Rgba(0, 0, 0, 1.5).resolve(),
            Err(ColorError::InvalidAlpha(_))
        ));
        assert!(ColorSpec::Rgba(0, 0, 0, f32::NAN).resolve().is_err());
    }
}
