// SPDX-License-Identifier: MIT
//
// ob-color — CIE LCh(ab) color model for the ob-css generator.
//
// A single-purpose crate: one immutable color value in a cylindrical
// perceptual space (lightness, chroma, hue), a small set of derivation
// operations with clamping and hue normalization, and the full
// LCh(ab) → sRGB conversion pipeline needed to render values as hex.
//
// This crate intentionally avoids external color libraries in favor of
// the standard CIELAB/sRGB conversion formulas written out directly.
// Every constant is from the published sRGB and CIELAB definitions.

pub mod color;

pub use color::Color;
