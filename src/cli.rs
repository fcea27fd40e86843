// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;

use crate::core::{
    config::{HarnessConfig, Settings},
    error::{EXIT_GENERIC_FAILURE, LoadError},
};

pub mod commands;

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub verbose: bool,
    pub config: Option<PathBuf>,
    pub command: CliCommand,
}

/// The subcommand and its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run {
        cmd: String,
        exec: String,
        tests: PathBuf,
        timelimit: Option<u64>,
    },
    Generate {
        cmd: String,
        exec: String,
        tests: PathBuf,
    },
}

/// Rewrites the two-letter `-tl` flag into `--timelimit`, since clap short
/// flags are a single character. `-tl=N` becomes `--timelimit=N`.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| {
            if arg == "-tl" {
                "--timelimit".to_string()
            } else if let Some(value) = arg.strip_prefix("-tl=") {
                format!("--timelimit={value}")
            } else {
                arg
            }
        })
        .collect()
}

fn target_args() -> [Arg; 3] {
    [
        Arg::new("cmd")
            .help("Command used to run the executable, e.g. \"python3\" (use \"\" to run it directly)")
            .value_name("CMD")
            .required(true)
            .action(ArgAction::Set),
        Arg::new("exec")
            .help("Filename of the executable in the current directory (e.g. main.py, main.class, main.exe)")
            .value_name("EXEC")
            .required(true)
            .action(ArgAction::Set),
        Arg::new("tests")
            .help("Path to the tests directory containing input/ and output/")
            .value_name("TESTS")
            .required(true)
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set),
    ]
}

pub fn build_cli() -> Command {
    Command::new("stdio-tester")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Black-box tester for programs that talk over stdin and stdout")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print debug diagnostics to stderr")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Optional TOML settings file (time limit, subdirectory names)")
                .value_name("CONFIG")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("run")
                .about("Run a program on every test and compare its output with the expected output")
                .args(target_args())
                .arg(
                    Arg::new("timelimit")
                        .long("timelimit")
                        .help("Time limit for a test in seconds (also -tl) [default: 1]")
                        .value_name("SECONDS")
                        .value_parser(clap::value_parser!(u64).range(1..))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate expected outputs by running a reference program on every test")
                .args(target_args()),
        )
}

fn positional(matches: &ArgMatches) -> (String, String, PathBuf) {
    // All three are required, clap rejects the command line otherwise.
    let cmd = matches.get_one::<String>("cmd").cloned().unwrap_or_default();
    let exec = matches.get_one::<String>("exec").cloned().unwrap_or_default();
    let tests = matches.get_one::<PathBuf>("tests").cloned().unwrap_or_default();
    (cmd, exec, tests)
}

/// Parses an argument list (program name first).
pub fn parse_args_from<I>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = String>,
{
    let matches = build_cli().try_get_matches_from(normalize_args(args))?;
    let verbose = matches.get_flag("verbose");
    let config = matches.get_one::<PathBuf>("config").cloned();

    let command = match matches.subcommand() {
        Some(("run", run_matches)) => {
            let (cmd, exec, tests) = positional(run_matches);
            CliCommand::Run {
                cmd,
                exec,
                tests,
                timelimit: run_matches.get_one::<u64>("timelimit").copied(),
            }
        }
        Some(("generate", generate_matches)) => {
            let (cmd, exec, tests) = positional(generate_matches);
            CliCommand::Generate { cmd, exec, tests }
        }
        _ => {
            return Err(build_cli().error(
                clap::error::ErrorKind::MissingSubcommand,
                "a subcommand is required",
            ));
        }
    };

    Ok(CliArgs {
        verbose,
        config,
        command,
    })
}

/// Parses the process arguments, printing usage and exiting on error.
pub fn parse_args() -> CliArgs {
    parse_args_from(env::args()).unwrap_or_else(|e| e.exit())
}

/// Installs the stderr diagnostics subscriber. The filter comes from the
/// command line only.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs the parsed command.
pub async fn process_command(args: CliArgs) -> Result<()> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    match args.command {
        CliCommand::Run {
            cmd,
            exec,
            tests,
            timelimit,
        } => {
            let config = HarnessConfig::for_run(cmd, exec, tests, timelimit, settings);
            commands::run::execute(&config).await?;
        }
        CliCommand::Generate { cmd, exec, tests } => {
            let config = HarnessConfig::for_generate(cmd, exec, tests, settings);
            commands::generate::execute(&config).await?;
        }
    }
    Ok(())
}

/// Maps a fatal error to the process exit code.
pub fn exit_code_for(error: &anyhow::Error) -> u8 {
    error
        .downcast_ref::<LoadError>()
        .map_or(EXIT_GENERIC_FAILURE, LoadError::exit_code)
}
