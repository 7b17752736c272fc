//! The fixed base palette — nine named LCh(ab) anchors.
//!
//! Eight hued colors share one lightness and chroma and sit 45° apart on
//! the hue wheel, so every button theme has the same perceived weight;
//! the ninth is the achromatic gray. Emission order is the order of
//! [`BASE_COLORS`].

use ob_color::color::Color;

/// Shared lightness of every base color.
pub const BASE_LIGHTNESS: f32 = 45.0;

/// Shared chroma of the eight hued base colors (gray carries none).
pub const BASE_CHROMA: f32 = 35.0;

/// The base colors, in emission order.
pub const BASE_COLORS: [(&str, Color); 9] = [
    ("red", Color::lch(BASE_LIGHTNESS, BASE_CHROMA, 0.0)),
    ("orange", Color::lch(BASE_LIGHTNESS, BASE_CHROMA, 45.0)),
    ("yellow", Color::lch(BASE_LIGHTNESS, BASE_CHROMA, 90.0)),
    ("green", Color::lch(BASE_LIGHTNESS, BASE_CHROMA, 135.0)),
    ("cyan", Color::lch(BASE_LIGHTNESS, BASE_CHROMA, 180.0)),
    ("blue", Color::lch(BASE_LIGHTNESS, BASE_CHROMA, 225.0)),
    ("indigo", Color::lch(BASE_LIGHTNESS, BASE_CHROMA, 270.0)),
    ("purple", Color::lch(BASE_LIGHTNESS, BASE_CHROMA, 315.0)),
    ("gray", Color::gray(BASE_LIGHTNESS)),
];

/// Look up a base color by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn base_color(name: &str) -> Option<Color> {
    BASE_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, color)| *color)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_entries() {
        assert_eq!(BASE_COLORS.len(), 9);
    }

    #[test]
    fn names_are_unique() {
        for (i, (a, _)) in BASE_COLORS.iter().enumerate() {
            for (b, _) in &BASE_COLORS[i + 1..] {
                assert_ne!(a, b, "duplicate base color name {a}");
            }
        }
    }

    #[test]
    fn shared_lightness() {
        for (name, color) in &BASE_COLORS {
            assert!(
                (color.l - BASE_LIGHTNESS).abs() < f32::EPSILON,
                "{name} lightness is {}",
                color.l
            );
        }
    }

    #[test]
    fn hues_are_45_degrees_apart() {
        // The eight hued entries step 0°, 45°, … 315° in order.
        for (i, (name, color)) in BASE_COLORS[..8].iter().enumerate() {
            let expected = 45.0 * i as f32;
            assert!(
                (color.h - expected).abs() < f32::EPSILON,
                "{name} hue is {}, expected {expected}",
                color.h
            );
            assert!(
                (color.c - BASE_CHROMA).abs() < f32::EPSILON,
                "{name} chroma is {}",
                color.c
            );
        }
    }

    #[test]
    fn gray_is_last_and_achromatic() {
        let (name, color) = BASE_COLORS[8];
        assert_eq!(name, "gray");
        assert!(color.is_achromatic());
    }

    #[test]
    fn lookup_by_name() {
        let blue = base_color("blue").unwrap();
        assert!((blue.h - 225.0).abs() < f32::EPSILON);
        assert!(base_color("mauve").is_none());
    }
}
