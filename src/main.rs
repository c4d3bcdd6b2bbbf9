use std::io::stdout;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::WrapErr;

use osc::commands::{run_copy, run_paste};
use osc::config::{DEFAULT_TIMEOUT_SECS, Environment, Options, Settings};
use osc::logging;

/// Reads or writes the system clipboard using the ANSI OSC52 escape sequence
#[derive(Parser, Debug)]
#[command(name = "osc", version)]
struct Args {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to file
    #[arg(short, long, global = true, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Use specific tty device
    #[arg(short, long, global = true, value_name = "PATH")]
    device: Option<PathBuf>,

    /// Tty read timeout in seconds
    #[arg(short, long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: f64,

    /// Target clipboard, can be empty or one or more of c, p, q, s, or 0-7
    #[arg(short, long, global = true, default_value = "c")]
    clipboard: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Copies input to the system clipboard. With no files, reads stdin
    Copy {
        /// Files to copy, concatenated in order
        files: Vec<PathBuf>,
    },
    /// Outputs system clipboard contents to stdout
    Paste,
    /// Outputs version information
    Version,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    if let Command::Version = args.command {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let options = Options {
        clipboard: args.clipboard.clone(),
        timeout_secs: args.timeout,
        device: args.device.clone(),
    };
    // Rejects bad flags before any I/O, including the log file
    let settings = Settings::resolve(&options, &Environment::from_env())?;

    logging::init(args.verbose, args.log.as_deref())
        .wrap_err_with(|| format!("Failed to open log file {:?}", args.log))?;
    log::debug!(
        "mode={:?} device={} timeout={:?} clipboard={:?}",
        settings.mode,
        settings.device.display(),
        settings.timeout,
        settings.selector.as_str()
    );

    let result = match &args.command {
        Command::Copy { files } => run_copy(&settings, files).map(|n| {
            log::debug!("Copied {} bytes", n);
        }),
        Command::Paste => run_paste(&settings, &mut stdout().lock()).map(|n| {
            log::debug!("Pasted {} bytes", n);
        }),
        Command::Version => Ok(()),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        return Err(e.into());
    }

    Ok(())
}
