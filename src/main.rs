use coral_cts::cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Test failures are reported in the summary only; the exit code reflects
    // fatal errors such as a failed test data download.
    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
