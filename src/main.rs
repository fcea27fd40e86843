use std::process::ExitCode;
use stdio_tester::cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse command line arguments
    let cli_args = cli::parse_args();
    cli::init_tracing(cli_args.verbose);

    // Process the command
    match cli::process_command(cli_args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(cli::exit_code_for(&e))
        }
    }
}
