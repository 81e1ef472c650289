use clap::Parser;
use hauler::app::cli_args::CliArgs;
use hauler::app::run;

fn main() {
    env_logger::init();

    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = CliArgs::parse();
    match run::command_line_runner(&args) {
        Ok(_) => {}
        Err(e) => log::error!("{e}"),
    }
}
