use std::process::ExitCode;
use log::error;
use crate::initialization::init;
use crate::worker::run;

mod config;
mod crc;
mod errors;
mod initialization;
mod logging;
mod manager_publish;
mod manager_station;
mod models;
mod worker;

fn main() -> ExitCode {
    let mgr = match init() {
        Ok(mgr) => mgr,
        Err(e) => {
            error!("{}", e);
            println!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(mgr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
