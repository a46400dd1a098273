//! rebrand's main application entry point. Parses arguments, configures
//! logging, and hands off to the orchestrator with a terminal prompter.

use rebrand::{
    cli::get_args,
    error::default_error_handler,
    logger::init_logger,
    prompt::DialoguerPrompter,
    runner::run,
};

fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args, &DialoguerPrompter) {
        default_error_handler(err);
    }
}
