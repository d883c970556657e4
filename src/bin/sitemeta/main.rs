mod args;
mod check;
mod debug;
mod error;
mod export;

use clap::Parser as _;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = args::Cli::parse();

    cli.color.write_global();
    args::init_logging(&cli.verbose);

    cli.command
        .run()
        .map_err(|e| proc_exit::Code::FAILURE.with_message(format!("{e:#}")))?;

    Ok(())
}
