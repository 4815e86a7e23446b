use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use lms::console::controller::ConsoleController;
use lms::core::domain::Configuration;
use lms::lending::domain::service::LendingServiceImpl;
use lms::utils::logging::setup_tracing;

fn main() -> ExitCode {
    let config = Configuration::from_env();
    setup_tracing(&config);
    info!(branch = config.branch_id.as_str(), "starting library session");

    let svc = LendingServiceImpl::new(&config);
    let stdin = io::stdin();
    let mut controller = ConsoleController::new(svc, config.output, stdin.lock(), io::stdout());
    match controller.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "library session aborted");
            ExitCode::FAILURE
        }
    }
}
