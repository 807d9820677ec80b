use clap::Parser;

use diff_lint::cli::Cli;
use diff_lint::commands::run_annotate;
use diff_lint::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let exit_code = run_annotate(&cli);

    std::process::exit(exit_code);
}
