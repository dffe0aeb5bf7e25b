use std::io::{self, Write};

use crate::solver::MbState;

/// xterm-256 palette index for cells inside the set (near black).
pub const INTERIOR_COLOR: u8 = 16;
pub const INTERIOR_GLYPH: char = '#';
pub const ESCAPE_GLYPH: char = '*';

/// Density ramp for plain-text output, indexed by `iter mod 7`.
pub const GLYPH_RAMP: &[u8; 7] = b" .-+*%@";

pub const SGR_RESET: &str = "\x1b[0m";

pub fn sgr_color(code: u8) -> String {
    format!("\x1b[38;5;{}m", code)
}

/// Glyph for a cell in no-color mode.
pub fn i_value_glyph(i_value: u32, max_i_value: u32) -> char {
    if i_value >= max_i_value {
        INTERIOR_GLYPH
    } else {
        GLYPH_RAMP[(i_value % 7) as usize] as char
    }
}

pub trait ColorScale {
    fn i_value_color(&self, i_value: u32, max_i_value: u32) -> u8;
}

/// Piecewise-linear gradient over the 256-color cube: deep blue (21) to
/// cyan (51) to green/yellow (87) to bright red (196). Interpolation
/// truncates toward zero and only the final band clamps its fraction;
/// intentionally not perceptually uniform.
#[derive(Copy, Clone, Debug, Default)]
pub struct BandedGradient;

const BAND1: i32 = 21;
const BAND2: i32 = 51;
const BAND3: i32 = 87;
const BAND4: i32 = 196;

impl ColorScale for BandedGradient {
    fn i_value_color(&self, i_value: u32, max_i_value: u32) -> u8 {
        if i_value >= max_i_value {
            return INTERIOR_COLOR;
        }
        let t = i_value as f64 / max_i_value as f64;
        let code = if t < 0.33 {
            let u = t / 0.33;
            BAND1 + ((BAND2 - BAND1) as f64 * u) as i32
        } else if t < 0.66 {
            let u = (t - 0.33) / 0.33;
            BAND2 + ((BAND3 - BAND2) as f64 * u) as i32
        } else {
            let u = ((t - 0.66) / 0.34).min(1.0);
            BAND3 + ((BAND4 - BAND3) as f64 * u) as i32
        };
        code as u8
    }
}

pub trait Painter {
    fn paint<W: Write>(&self, state: &MbState, out: &mut W) -> io::Result<()>;
}

/// Colored renderer: one SGR sequence per glyph, a reset after the last
/// column of each row and one more after the whole grid.
pub struct AnsiPainter<S: ColorScale> {
    scale: S,
}

impl<S: ColorScale> AnsiPainter<S> {
    pub fn new(scale: S) -> Self {
        Self { scale }
    }
}

impl<S: ColorScale> Painter for AnsiPainter<S> {
    fn paint<W: Write>(&self, state: &MbState, out: &mut W) -> io::Result<()> {
        let max = state.max_iterations();
        for y in 0..state.height() {
            for x in 0..state.width() {
                let i = state.i_value(x, y);
                let glyph = if i >= max { INTERIOR_GLYPH } else { ESCAPE_GLYPH };
                let code = self.scale.i_value_color(i, max);
                write!(out, "{}{}", sgr_color(code), glyph)?;
                if x == state.width() - 1 {
                    out.write_all(SGR_RESET.as_bytes())?;
                }
            }
            out.write_all(b"\n")?;
        }
        out.write_all(SGR_RESET.as_bytes())?;
        Ok(())
    }
}

/// Plain-text renderer using the density ramp, no escape sequences.
pub struct AsciiPainter;

impl Painter for AsciiPainter {
    fn paint<W: Write>(&self, state: &MbState, out: &mut W) -> io::Result<()> {
        let max = state.max_iterations();
        let mut row = String::with_capacity(state.width() + 1);
        for y in 0..state.height() {
            row.clear();
            for x in 0..state.width() {
                row.push(i_value_glyph(state.i_value(x, y), max));
            }
            row.push('\n');
            out.write_all(row.as_bytes())?;
        }
        Ok(())
    }
}
