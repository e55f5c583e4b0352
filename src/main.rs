use std::{env, io, process};

mod logging;

/// Looks at the first argument after the program name.
fn wants_demo<I: IntoIterator<Item = String>>(args: I) -> bool {
    match args.into_iter().nth(1) {
        None => false,
        Some(arg) if arg == "--demo" => true,
        Some(arg) => {
            log::warn!("Ignoring unknown argument {}, reading commands from stdin", arg);
            false
        }
    }
}

fn main() {
    logging::setup_logging();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if wants_demo(env::args()) {
        movielog::run_demo(&mut out)
    } else {
        movielog::run(io::stdin().lock(), &mut out)
    };

    if let Err(e) = result {
        log::error!("{}", e);
        process::exit(1);
    }
}
