//! Entry point for the `mp4gif` binary.
//!
//! Sets up logging, hands the command line to the dispatcher and exits with the
//! code it returns.

use std::process;

fn main() {
    mp4gif_cli::logging::init_logging();

    let code = mp4gif_cli::run(std::env::args_os().skip(1));
    process::exit(code);
}
