//! Binary entrypoint for the `data-block-id` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    pretty_env_logger::init();

    match data_block_id::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
