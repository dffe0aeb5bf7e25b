use std::io::{self, Write};

use crate::config::RenderConfig;
use crate::coord::{SampleGrid, Viewport};
use crate::painter::{AnsiPainter, AsciiPainter, BandedGradient, Painter};
use crate::solver::EscapeTimeSolver;

pub mod bench;
pub mod complex;
pub mod config;
pub mod coord;
pub mod painter;
pub mod solver;

/// Render the configured view to `out`: fit the default window to the
/// grid, solve every cell, paint glyphs. The stderr summary is left to
/// the caller.
pub fn render<W: Write>(config: &RenderConfig, out: &mut W) -> io::Result<()> {
    let viewport = Viewport::default().fit_to(config.width, config.height);
    let grid = SampleGrid::new(viewport, config.width, config.height);
    let state = EscapeTimeSolver::new(config.max_iterations).solve(&grid);
    if config.color {
        AnsiPainter::new(BandedGradient).paint(&state, out)
    } else {
        AsciiPainter.paint(&state, out)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn render_to_string(config: &RenderConfig) -> String {
        let mut buf = Vec::new();
        render(config, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_small_grid_no_color() {
        let config = RenderConfig {
            width: 4,
            height: 2,
            max_iterations: 10,
            color: false,
        };
        let text = render_to_string(&config);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert_eq!(line.chars().count(), 4);
            assert!(line.chars().all(|ch| "# .-+*%@".contains(ch)));
        }
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_render_color_grid_shape() {
        let config = RenderConfig {
            width: 6,
            height: 3,
            max_iterations: 25,
            color: true,
        };
        let text = render_to_string(&config);
        assert_eq!(text.matches("\x1b[38;5;").count(), 18);
        assert_eq!(text.matches('\n').count(), 3);
        assert!(text.ends_with(painter::SGR_RESET));
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = RenderConfig {
            width: 20,
            height: 8,
            ..RenderConfig::default()
        };
        assert_eq!(render_to_string(&config), render_to_string(&config));
    }
}
