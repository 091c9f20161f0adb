use anyhow::Context;
use clap::Parser;
use std::fs::OpenOptions;
use std::path::Path;
use std::process::ExitCode;
use txtmanip::cli::Args;
use txtmanip::error::{EXIT_ERROR, EXIT_OK};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_ERROR)
            } else {
                ExitCode::from(EXIT_OK)
            };
        }
    };

    match try_main(&args) {
        Ok(replay) => {
            println!("{replay}");
            ExitCode::from(EXIT_OK)
        }
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn try_main(args: &Args) -> anyhow::Result<String> {
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }
    Ok(txtmanip::app::run(args)?)
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file '{}'", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(log_file))
        .init();

    Ok(())
}
