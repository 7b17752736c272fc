//! Stylesheet emission — structural template plus per-color class blocks.
//!
//! The structural rules are hand-authored and fixed; only the custom
//! properties inside each `.ob-<name>` block are generated. Buttons pick
//! their theme by class (`<button class="ob-button ob-blue">`), and every
//! pseudo-class rule resolves through the theme's custom properties.
//!
//! Output is assembled into a single `String` so the binary can hand the
//! whole stylesheet to one `write_all`.

use crate::palette::BASE_COLORS;
use crate::swatch::Swatch;

/// Structural rules shared by every theme.
///
/// Buttons draw their surfaces from the custom properties declared in the
/// per-color blocks; rows collapse the inner corner radii of adjacent
/// buttons so a group reads as one segmented control. The breakpoint
/// steps the type size down on narrow viewports.
const TEMPLATE: &str = "
.ob-button {
  background: var(--ob-background-normal);
  border-radius: var(--ob-border-radius);
  border: solid 1px var(--ob-border-color);
  box-shadow: inset 0 1px 0 0 var(--ob-border-highlight-color);
  color: inherit;
  font-size: 1.5em;
  line-height: 1.8;
  padding: 0 0.4em;
  text-shadow: 1px 1px 0px var(--ob-text-shadow-color);
  touch-action: manipulation;
}
.ob-button.ob-label {
  background: var(--ob-background-label);
  color: var(--ob-color-label);
}
.ob-button:hover {
  background: var(--ob-background-hover);
}
.ob-button:active, .ob-button.active {
  background: var(--ob-background-active);
}
.ob-button:disabled {
  background: var(--ob-background-disabled);
  box-shadow: none;
  color: gray;
}
.ob-button > svg {
  filter: drop-shadow(1px 1px 0 var(--ob-text-shadow-color));
}
.ob-button a {
  color: var(--ob-color-link);
}

.ob-row {
  display: flex;
  align-items: center;
  justify-content: center;
}
.ob-row.ob-large {
  font-size: 2em;
}
.ob-row > * {
  flex: 1 0 0;
}
.ob-row.ob-stretch > * {
  flex: 0 1 100%;
}
.ob-row > .ob-label {
  flex: 0 1 0;
}
.ob-row > :not(:last-child) {
  border-right-width: 0;
  border-top-right-radius: 0;
  border-bottom-right-radius: 0;
}
.ob-row > :not(:first-child) {
  border-top-left-radius: 0;
  border-bottom-left-radius: 0;
}

@media (max-width: 480px) {
  .ob-button {
    font-size: 1.2em;
  }
  .ob-row.ob-large {
    font-size: 1.5em;
  }
}

";

/// Render one `.ob-<name>` class block from a derived swatch.
///
/// Colors interpolate through their `Display` impl, which renders the
/// gamut-clipped hex value.
#[must_use]
pub fn class_block(name: &str, swatch: &Swatch) -> String {
    let Swatch {
        base,
        normal_lo,
        hover_hi,
        active_hi,
        active_lo,
        disabled,
        border_highlight,
        text_shadow,
        label_bg,
        label_fg,
        link,
    } = *swatch;

    format!(
        "\
.ob-{name} {{
  --ob-background-normal: linear-gradient(to bottom, {base} 30%, {normal_lo} 100%);
  --ob-background-hover: linear-gradient(to bottom, {hover_hi} 20%, {base} 100%);
  --ob-background-active: linear-gradient(to bottom, {active_hi} 20%, {active_lo} 100%);
  --ob-background-disabled: {disabled};
  --ob-border-color: black;
  --ob-border-radius: 10px;
  --ob-border-highlight-color: {border_highlight};
  --ob-text-shadow-color: {text_shadow};
  --ob-background-label: {label_bg};
  --ob-color-label: {label_fg};
  --ob-color-link: {link};
}}
"
    )
}

/// Generate the complete stylesheet: the structural template followed by
/// one class block per base color, in palette order, separated by blank
/// lines. The text ends with exactly one trailing newline.
#[must_use]
pub fn stylesheet() -> String {
    let mut out = String::with_capacity(8 * 1024);
    out.push_str(TEMPLATE);
    for (i, (name, base)) in BASE_COLORS.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&class_block(name, &Swatch::derive(*base)));
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::base_color;
    use pretty_assertions::assert_eq;

    /// Every custom property a class block must declare.
    const EXPECTED_PROPS: [&str; 11] = [
        "--ob-background-normal:",
        "--ob-background-hover:",
        "--ob-background-active:",
        "--ob-background-disabled:",
        "--ob-border-color:",
        "--ob-border-radius:",
        "--ob-border-highlight-color:",
        "--ob-text-shadow-color:",
        "--ob-background-label:",
        "--ob-color-label:",
        "--ob-color-link:",
    ];

    /// Extract the `.ob-<name>` block from the full stylesheet text.
    fn block_of<'a>(css: &'a str, name: &str) -> &'a str {
        let open = format!(".ob-{name} {{");
        let start = css.find(&open).unwrap_or_else(|| panic!("no block for {name}"));
        let end = css[start..].find("\n}").expect("unterminated block") + start + 2;
        &css[start..end]
    }

    #[test]
    fn one_block_per_base_color() {
        let css = stylesheet();
        for (name, _) in &BASE_COLORS {
            let open = format!(".ob-{name} {{");
            assert_eq!(
                css.matches(&open).count(),
                1,
                "expected exactly one {open} block"
            );
        }
        // And no stray blocks: one normal-gradient declaration per color.
        assert_eq!(css.matches("--ob-background-normal:").count(), BASE_COLORS.len());
    }

    #[test]
    fn blocks_declare_all_custom_properties() {
        let css = stylesheet();
        for (name, _) in &BASE_COLORS {
            let block = block_of(&css, name);
            for prop in EXPECTED_PROPS {
                assert!(block.contains(prop), "{name} block missing {prop}");
            }
        }
    }

    #[test]
    fn template_precedes_color_blocks() {
        let css = stylesheet();
        let button = css.find(".ob-button {").expect("no .ob-button rule");
        let first_theme = css.find(".ob-red {").expect("no .ob-red block");
        assert!(button < first_theme);
        assert!(css.contains("@media (max-width: 480px)"));
        assert!(css.contains(".ob-row > :not(:first-child)"));
    }

    #[test]
    fn blocks_follow_palette_order() {
        let css = stylesheet();
        let mut last = 0;
        for (name, _) in &BASE_COLORS {
            let pos = css.find(&format!(".ob-{name} {{")).unwrap();
            assert!(pos > last, "{name} block out of order");
            last = pos;
        }
    }

    #[test]
    fn output_is_byte_identical_across_runs() {
        assert_eq!(stylesheet(), stylesheet());
    }

    #[test]
    fn output_ends_with_single_newline() {
        let css = stylesheet();
        assert!(css.ends_with("}\n"), "must end at the last block");
        assert!(!css.ends_with("\n\n"), "no trailing blank line");
    }

    #[test]
    fn gradient_stops_are_literal() {
        let block = class_block("blue", &Swatch::derive(base_color("blue").unwrap()));
        assert!(block.contains("linear-gradient(to bottom, #"));
        assert!(block.contains(" 30%, #"));
        assert!(block.contains(" 20%, #"));
        assert!(block.contains(" 100%);"));
    }

    #[test]
    fn fixed_declarations_are_verbatim() {
        let block = class_block("red", &Swatch::derive(base_color("red").unwrap()));
        assert!(block.contains("  --ob-border-color: black;\n"));
        assert!(block.contains("  --ob-border-radius: 10px;\n"));
    }

    #[test]
    fn block_shape() {
        let block = class_block("green", &Swatch::derive(base_color("green").unwrap()));
        assert!(block.starts_with(".ob-green {\n"));
        assert!(block.ends_with("}\n"));
        // One declaration per expected property, two-space indented.
        assert_eq!(block.matches("\n  --ob-").count(), EXPECTED_PROPS.len());
    }

    #[test]
    fn color_values_render_as_hex() {
        let block = class_block("purple", &Swatch::derive(base_color("purple").unwrap()));
        for line in block.lines() {
            let Some((prop, value)) = line.trim().split_once(": ") else {
                continue;
            };
            // Flat color properties carry a 6-digit hex value.
            if matches!(
                prop,
                "--ob-background-disabled"
                    | "--ob-border-highlight-color"
                    | "--ob-text-shadow-color"
                    | "--ob-background-label"
                    | "--ob-color-label"
                    | "--ob-color-link"
            ) {
                let value = value.trim_end_matches(';');
                assert_eq!(value.len(), 7, "{prop} value {value} is not #rrggbb");
                assert!(value.starts_with('#'));
                assert!(value[1..].bytes().all(|b| b.is_ascii_hexdigit()));
            }
        }
    }

    #[test]
    fn label_colors_are_gray_hex() {
        // Achromatic labels must render with equal r/g/b channels.
        let s = Swatch::derive(base_color("indigo").unwrap());
        let hex = s.label_bg.to_hex();
        assert_eq!(hex[1..3], hex[3..5]);
        assert_eq!(hex[3..5], hex[5..7]);
    }

    #[test]
    fn gray_theme_matches_its_label() {
        // The gray base is already achromatic, so its label background
        // equals its base color.
        let s = Swatch::derive(base_color("gray").unwrap());
        assert_eq!(s.base.to_hex(), s.label_bg.to_hex());
    }
}
