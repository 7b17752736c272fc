// SPDX-License-Identifier: MIT
//
// ob-color color system — CIE LCh(ab) values rendered to sRGB hex.
//
// Single-character variable names (r, g, b, l, c, h, x, y, z) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
//
// The button themes are authored in LCh(ab), the cylindrical form of CIE
// Lab. Derivations (darker gradient stop, desaturated disabled state,
// achromatic label) are single offsets in that space, so related shades
// stay perceptually related instead of merely numerically related.
//
// Conversion pipeline:
//
//   LCh(ab) ↔ Lab ↔ XYZ (D65) ↔ Linear sRGB ↔ sRGB ↔ hex text
//
// Out-of-gamut results are clipped per channel: each sRGB component is
// clamped to [0, 1] before 8-bit rounding. Clipping can shift the
// perceived hue; `in_srgb_gamut` reports whether it would occur.

use std::fmt;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An immutable color in CIE LCh(ab) space.
///
/// LCh(ab) is the cylindrical representation of CIE Lab: the same space,
/// addressed by lightness, chroma, and hue angle instead of two opponent
/// axes. Equal offsets in L or C correspond to roughly equal perceptual
/// steps, which is what makes "darken by 3.6" a meaningful recipe for a
/// gradient stop.
///
/// Deriving never mutates: every operation returns a new value, with
/// lightness and chroma floored at 0 and hue wrapped into [0°, 360°).
///
/// # Examples
///
/// ```
/// use ob_color::color::Color;
///
/// let red = Color::lch(45.0, 35.0, 0.0);
///
/// // Gradient stops are single offsets from the base.
/// let lower_stop = red.darken(3.6);
/// let disabled = red.desaturate(18.0);
///
/// // The achromatic label variant drops chroma entirely.
/// let label = red.set_chroma(0.0);
/// assert!(label.is_achromatic());
///
/// // Rendering goes through Lab → XYZ → sRGB and formats as hex.
/// let css_value = red.to_hex();
/// assert!(css_value.starts_with('#'));
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Lightness: 0.0 (black) to 100.0 (diffuse white).
    pub l: f32,

    /// Chroma (colorfulness): 0.0 (gray) upward. Unbounded in theory;
    /// the sRGB gamut limits displayable values to roughly 130.
    pub c: f32,

    /// Hue angle in degrees: 0.0 to 360.0.
    /// ~0° = red, ~90° = yellow, ~180° = green/cyan, ~270° = blue.
    pub h: f32,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from LCh(ab) values.
    ///
    /// Values are stored as given; the clamp/normalize rules apply to
    /// every *derivation*, and the base palette constants are already in
    /// range by construction.
    #[inline]
    #[must_use]
    pub const fn lch(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    /// Create a pure gray at the given lightness (chroma 0).
    #[inline]
    #[must_use]
    pub const fn gray(l: f32) -> Self {
        Self::lch(l, 0.0, 0.0)
    }

    /// Create a color from sRGB components (0.0 to 1.0 range).
    #[must_use]
    pub fn srgb(r: f32, g: f32, b: f32) -> Self {
        let (l, c, h) = srgb_to_lch(r, g, b);
        Self { l, c, h }
    }

    /// Create a color from 8-bit sRGB components (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Create a color from a hex string.
    ///
    /// Supports `#RGB` and `#RRGGBB`, with or without the leading `#`.
    ///
    /// Returns `None` if the string is not a valid hex color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Pure black.
    pub const BLACK: Self = Self::lch(0.0, 0.0, 0.0);

    /// Diffuse white.
    pub const WHITE: Self = Self::lch(100.0, 0.0, 0.0);

    /// Whether this color is achromatic (no visible chroma).
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < 1e-3
    }

    // ─── Field Overrides ─────────────────────────────────────────────────
    //
    // The "set" half of the derivation API: replace one field, keep the
    // rest, and apply the clamp/normalize rule for that field.

    /// Set lightness to an absolute value (floored at 0).
    #[inline]
    #[must_use]
    pub const fn set_lightness(self, l: f32) -> Self {
        Self { l: l.max(0.0), ..self }
    }

    /// Set chroma to an absolute value (floored at 0).
    #[inline]
    #[must_use]
    pub const fn set_chroma(self, c: f32) -> Self {
        Self { c: c.max(0.0), ..self }
    }

    /// Set hue to an absolute angle (wrapped into 0°–360°).
    #[inline]
    #[must_use]
    pub fn set_hue(self, h: f32) -> Self {
        Self { h: normalize_hue(h), ..self }
    }

    // ─── Relative Offsets ────────────────────────────────────────────────

    /// Offset all three fields at once.
    ///
    /// Equivalent to the setters applied to `(l + dl, c + dc, h + dh)`:
    /// the result passes through the same floor-at-0 and hue-wrap rules
    /// as an absolute override.
    #[inline]
    #[must_use]
    pub fn adjust(self, dl: f32, dc: f32, dh: f32) -> Self {
        self.set_lightness(self.l + dl)
            .set_chroma(self.c + dc)
            .set_hue(self.h + dh)
    }

    /// Increase lightness by `amount`.
    #[inline]
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        self.set_lightness(self.l + amount)
    }

    /// Decrease lightness by `amount` (floored at 0).
    #[inline]
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        self.set_lightness(self.l - amount)
    }

    /// Increase chroma (color intensity) by `amount`.
    #[inline]
    #[must_use]
    pub fn saturate(self, amount: f32) -> Self {
        self.set_chroma(self.c + amount)
    }

    /// Decrease chroma by `amount` (floored at 0).
    #[inline]
    #[must_use]
    pub fn desaturate(self, amount: f32) -> Self {
        self.set_chroma(self.c - amount)
    }

    /// Shift the hue by `degrees` (wraps around 360°).
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f32) -> Self {
        self.set_hue(self.h + degrees)
    }

    // ─── Conversions to sRGB ─────────────────────────────────────────────

    /// Convert to sRGB with per-channel gamut clipping.
    ///
    /// Each component is clamped to [0, 1]. This is the crate's one and
    /// only gamut strategy: out-of-range channels are cut off rather than
    /// the chroma being reduced, matching how the published palette was
    /// originally rendered.
    #[must_use]
    pub fn to_srgb(self) -> (f32, f32, f32) {
        let (r, g, b) = lch_to_srgb(self.l, self.c, self.h);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Convert to 8-bit sRGB with gamut clipping.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Render as a CSS hex string (`#rrggbb`).
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Whether this color is within the sRGB gamut.
    ///
    /// Colors outside the gamut get per-channel clipping during
    /// conversion, which can shift the perceived hue.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        let (r, g, b) = lch_to_srgb(self.l, self.c, self.h);
        (0.0..=1.0).contains(&r) && (0.0..=1.0).contains(&g) && (0.0..=1.0).contains(&b)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::lch({:.2}, {:.2}, {:.1})", self.l, self.c, self.h)
    }
}

impl fmt::Display for Color {
    /// Displays as the rendered hex value — `Color` values interpolate
    /// directly into CSS text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        // Compare with a small epsilon on the CIE scale (L and C span
        // 0–100+, so 1e-3 is far below a perceptible step).
        const EPS: f32 = 1e-3;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Color Space Conversion Functions ────────────────────────────────────────
//
// These implement the standard CIELAB ↔ sRGB conversion under the D65
// white point (2° observer). Matrix coefficients are the published sRGB
// values; the Lab transfer function uses the exact rational constants
// ε = 216/24389 and κ = 24389/27 to avoid the discontinuity in the
// commonly quoted rounded forms.
//
// Pipeline: LCh(ab) ↔ Lab ↔ XYZ ↔ Linear sRGB ↔ sRGB
//
// All functions are pure and deterministic.

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

// ─── LCh(ab) ↔ Lab ──────────────────────────────────────────────────────────

/// Convert LCh chroma and hue to Lab a, b components.
#[inline]
fn lch_to_lab_ab(c: f32, h: f32) -> (f32, f32) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

/// Convert Lab a, b components to LCh chroma and hue.
#[inline]
fn lab_ab_to_lch(a: f32, b: f32) -> (f32, f32) {
    let c = a.hypot(b);
    let h = if c < 1e-6 {
        0.0 // Achromatic — hue is undefined, default to 0
    } else {
        let h = b.atan2(a).to_degrees();
        if h < 0.0 { h + 360.0 } else { h }
    };
    (c, h)
}

// ─── Lab ↔ XYZ (D65) ────────────────────────────────────────────────────────

/// D65 reference white, 2° observer, Y normalized to 1.
const WHITE_X: f32 = 0.950_47;
const WHITE_Y: f32 = 1.0;
const WHITE_Z: f32 = 1.088_83;

/// CIE ε = 216/24389: the t³ / linear-segment crossover of the Lab curve.
const EPSILON: f32 = 216.0 / 24389.0;

/// CIE κ = 24389/27: the slope of the linear segment.
const KAPPA: f32 = 24389.0 / 27.0;

/// Convert Lab to XYZ under D65.
#[inline]
fn lab_to_xyz(l: f32, a: f32, b: f32) -> (f32, f32, f32) {
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let fx3 = fx * fx * fx;
    let fz3 = fz * fz * fz;

    let xr = if fx3 > EPSILON {
        fx3
    } else {
        116.0f32.mul_add(fx, -16.0) / KAPPA
    };
    let yr = if l > KAPPA * EPSILON {
        fy * fy * fy
    } else {
        l / KAPPA
    };
    let zr = if fz3 > EPSILON {
        fz3
    } else {
        116.0f32.mul_add(fz, -16.0) / KAPPA
    };

    (xr * WHITE_X, yr * WHITE_Y, zr * WHITE_Z)
}

/// Convert XYZ under D65 to Lab.
#[inline]
fn xyz_to_lab(x: f32, y: f32, z: f32) -> (f32, f32, f32) {
    #[inline]
    fn f(t: f32) -> f32 {
        if t > EPSILON {
            t.cbrt()
        } else {
            KAPPA.mul_add(t, 16.0) / 116.0
        }
    }

    let fx = f(x / WHITE_X);
    let fy = f(y / WHITE_Y);
    let fz = f(z / WHITE_Z);

    let l = 116.0f32.mul_add(fy, -16.0);
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    (l, a, b)
}

// ─── XYZ ↔ Linear sRGB ──────────────────────────────────────────────────────
//
// The sRGB primaries under D65. Coefficients from IEC 61966-2-1.

/// Convert XYZ to linear sRGB (components may fall outside [0, 1]).
#[inline]
fn xyz_to_linear_srgb(x: f32, y: f32, z: f32) -> (f32, f32, f32) {
    let r = 3.240_454_2f32.mul_add(x, (-1.537_138_5f32).mul_add(y, -(0.498_531_4 * z)));
    let g = (-0.969_266_0f32).mul_add(x, 1.876_010_8f32.mul_add(y, 0.041_556_0 * z));
    let b = 0.055_643_4f32.mul_add(x, (-0.204_025_9f32).mul_add(y, 1.057_225_2 * z));
    (r, g, b)
}

/// Convert linear sRGB to XYZ.
#[inline]
fn linear_srgb_to_xyz(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let x = 0.412_456_4f32.mul_add(r, 0.357_576_1f32.mul_add(g, 0.180_437_5 * b));
    let y = 0.212_672_9f32.mul_add(r, 0.715_152_2f32.mul_add(g, 0.072_175_0 * b));
    let z = 0.019_333_9f32.mul_add(r, 0.119_192_0f32.mul_add(g, 0.950_304_1 * b));
    (x, y, z)
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────
//
// sRGB uses a piecewise transfer function (gamma curve) to encode linear
// light values into the perceptual domain.

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f32.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Composite Conversions ───────────────────────────────────────────────────

/// Convert sRGB (0.0–1.0) → LCh(ab).
fn srgb_to_lch(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let lr = srgb_to_linear(r);
    let lg = srgb_to_linear(g);
    let lb = srgb_to_linear(b);
    let (x, y, z) = linear_srgb_to_xyz(lr, lg, lb);
    let (l, a, b_lab) = xyz_to_lab(x, y, z);
    let (c, h) = lab_ab_to_lch(a, b_lab);
    (l, c, h)
}

/// Convert LCh(ab) → sRGB (0.0–1.0, may be out of gamut).
fn lch_to_srgb(l: f32, c: f32, h: f32) -> (f32, f32, f32) {
    let (a, b) = lch_to_lab_ab(c, h);
    let (x, y, z) = lab_to_xyz(l, a, b);
    let (lr, lg, lb) = xyz_to_linear_srgb(x, y, z);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse a hex color string into a Color.
fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);

    match s.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(s.as_bytes()[0])?;
            let g = parse_hex_digit(s.as_bytes()[1])?;
            let b = parse_hex_digit(s.as_bytes()[2])?;
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&s.as_bytes()[0..2])?;
            let g = parse_hex_byte(&s.as_bytes()[2..4])?;
            let b = parse_hex_byte(&s.as_bytes()[4..6])?;
            Some(Color::rgb8(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
