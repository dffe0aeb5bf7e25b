use std::env;
use std::io::{self, BufWriter, Write};

use mandelterm::config::{parse_args, usage, Invocation};
use mandelterm::render;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("mandelterm");

    let config = match parse_args(&args[1..]) {
        Invocation::Help => {
            println!("{}", usage(program));
            return Ok(());
        }
        Invocation::Render(config) => config,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(&config, &mut out)?;
    out.flush()?;

    eprintln!(
        "Rendered Mandelbrot: {}x{}, max_iter={}, color={}",
        config.width,
        config.height,
        config.max_iterations,
        if config.color { "on" } else { "off" }
    );
    Ok(())
}
