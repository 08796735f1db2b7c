use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod backend;
mod error;
mod extractor;

use backend::LopdfBackend;

/// Print the plain text of every page of a PDF to standard output.
#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Path to the PDF document
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    input: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            log::debug!("argument error: {err}");
            eprintln!("{}", usage(std::env::args_os().next()));
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn usage(program: Option<OsString>) -> String {
    let program = program
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pdf-extractor".into());
    format!("Usage: {program} <path_to_pdf>")
}

fn run(args: &Args) -> Result<()> {
    let stdout = std::io::stdout();
    extractor::print_text(&LopdfBackend, &args.input, &mut stdout.lock())?;
    Ok(())
}
