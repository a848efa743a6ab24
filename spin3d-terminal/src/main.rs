/// spin3d - spinning ASCII polyhedra
///
/// Frames go to stdout, diagnostics to stderr. Press Enter to stop, or
/// interrupt the process.
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead};
use spin3d_terminal::{Args, Config, StopSignal, TerminalApp};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let config = Config::from(args);
    let mut app = TerminalApp::from_config(&config).context("failed to build the viewer")?;

    let stop = StopSignal::new();
    let listener = stop.clone();
    std::thread::spawn(move || {
        let mut line = String::new();
        // EOF means no interactive input; keep running
        if let Ok(n) = io::stdin().lock().read_line(&mut line) {
            if n > 0 {
                debug!("stop requested from stdin");
                listener.stop();
            }
        }
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app.run(&mut out, &stop).context("animation failed")?;

    Ok(())
}
