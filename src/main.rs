//! CLI entrypoint for repo-clean.

use clap::Parser;
use repo_clean::cli::{run, Args};
use repo_clean::logging::init_logging;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    std::process::exit(run(args));
}
