// SPDX-License-Identifier: MIT
//
// ob-css — a build-time CSS generator for gradient button themes.
//
// This is the binary that wires the crates together:
//
//   ob-color → CIE LCh(ab) color values, sRGB hex rendering
//   ob-theme → base palette, swatch derivation, stylesheet emission
//
// One invocation performs one deterministic computation:
//
//   palette → swatch per color → class blocks + template → stdout
//
// There is no input: no arguments, no environment, no files read. The
// entire stylesheet is assembled in memory and written in a single
// write_all so the output is all-or-nothing.

use std::env;
use std::io::{self, Write};
use std::process;

/// Write the stylesheet to stdout in one syscall-sized chunk.
fn emit(css: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(css.as_bytes())?;
    out.flush()
}

fn main() {
    // The generator is argument-free; anything on the command line is a
    // mistake worth flagging rather than silently ignoring.
    if env::args().len() > 1 {
        eprintln!("usage: ob-css");
        process::exit(2);
    }

    let css = ob_theme::stylesheet();
    if let Err(e) = emit(&css) {
        eprintln!("ob-css: {e}");
        process::exit(1);
    }
}
