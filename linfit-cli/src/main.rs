use clap::Parser;
use linfit_cli::{cli::Cli, run};
use log::debug;
use std::process;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    debug!("{:?}", cli);

    match run(&cli).and_then(|report| report.render(cli.format)) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("error[{}]: {}", e.kind(), e);
            process::exit(1);
        }
    }
}
