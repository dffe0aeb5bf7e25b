pub const DEFAULT_WIDTH: usize = 120;
pub const DEFAULT_HEIGHT: usize = 40;
pub const DEFAULT_MAX_ITERATIONS: u32 = 500;

/// Sanity bound on every numeric parameter.
const PARAM_MAX: i64 = 100_000;

/// Render parameters, fixed for the lifetime of one run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub max_iterations: u32,
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            color: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Render(RenderConfig),
}

/// Parse one numeric parameter. Anything non-numeric or outside
/// [0, 100000] is rejected; the caller keeps its default.
fn parse_param(text: &str) -> Option<u32> {
    let v: i64 = text.parse().ok()?;
    if (0..=PARAM_MAX).contains(&v) {
        Some(v as u32)
    } else {
        None
    }
}

/// Interpret command-line arguments (program name excluded).
///
/// Positional slots bind left to right: width, height, max_iter. A slot
/// that fails to parse is ignored silently and its default stands; this
/// never produces an error. `--no-color` is honored in any position.
/// `-h`/`--help` short-circuits only as the very first argument.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Invocation {
    if let Some(first) = args.first() {
        let first = first.as_ref();
        if first == "-h" || first == "--help" {
            return Invocation::Help;
        }
    }

    let mut config = RenderConfig::default();
    if let Some(v) = args.first().and_then(|a| parse_param(a.as_ref())) {
        config.width = v as usize;
    }
    if let Some(v) = args.get(1).and_then(|a| parse_param(a.as_ref())) {
        config.height = v as usize;
    }
    if let Some(v) = args.get(2).and_then(|a| parse_param(a.as_ref())) {
        config.max_iterations = v;
    }
    if args.iter().any(|a| a.as_ref() == "--no-color") {
        config.color = false;
    }
    Invocation::Render(config)
}

pub fn usage(program: &str) -> String {
    format!(
        "Mandelbrot (terminal)\nUsage: {} [width] [height] [max_iter] [--no-color]",
        program
    )
}
