//! Swatch derivation — one base color into the full set of button colors.
//!
//! Every field is a fixed perceptual offset from the base, applied with
//! the color type's floor/wrap rules. The offsets are small on the CIE
//! scale: gradient stops move lightness by a few units, the disabled
//! state drops most of the chroma, and the label pair drops all of it.

use ob_color::color::Color;

/// The derived color set for one button theme.
///
/// Gradient stops pair with the base color itself: the resting gradient
/// runs base → [`normal_lo`](Self::normal_lo), the hover gradient runs
/// [`hover_hi`](Self::hover_hi) → base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    /// The base color — top stop of the resting gradient and bottom stop
    /// of the hover gradient.
    pub base: Color,

    // ── Gradient stops ────────────────────────────────────────
    /// Bottom stop of the resting gradient.
    pub normal_lo: Color,
    /// Top stop of the hover gradient.
    pub hover_hi: Color,
    /// Top stop of the pressed gradient.
    pub active_hi: Color,
    /// Bottom stop of the pressed gradient.
    pub active_lo: Color,

    // ── Flat surfaces ─────────────────────────────────────────
    /// Flat background while disabled (most chroma removed).
    pub disabled: Color,
    /// Inset top-edge highlight.
    pub border_highlight: Color,
    /// Drop shadow behind button text and icons.
    pub text_shadow: Color,

    // ── Label variant ─────────────────────────────────────────
    /// Label background — the base with chroma removed.
    pub label_bg: Color,
    /// Label text — darker than the background, also achromatic.
    pub label_fg: Color,

    /// Inline link text over the gradients.
    pub link: Color,
}

impl Swatch {
    /// Derive the full swatch from a base color.
    #[must_use]
    pub fn derive(base: Color) -> Self {
        Self {
            base,
            normal_lo: base.darken(3.6),
            hover_hi: base.lighten(3.6),
            active_hi: base.darken(5.4),
            active_lo: base.darken(2.7),
            disabled: base.desaturate(18.0),
            border_highlight: base.lighten(5.4),
            text_shadow: base.darken(10.0),
            label_bg: base.set_chroma(0.0),
            label_fg: base.darken(10.0).set_chroma(0.0),
            link: base.lighten(30.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
