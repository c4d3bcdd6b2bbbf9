//! Log sink setup for the osc binary

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Debug level with `verbose`, errors only with just a log file, otherwise off
pub fn level_filter(verbose: bool, log_file: Option<&Path>) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Debug
    } else if log_file.is_some() {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Off
    }
}

/// Install the global logger, appending to `log_file` if given, else stderr
pub fn init(verbose: bool, log_file: Option<&Path>) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_filter(verbose, log_file))
        .format(|buf, record| {
            let datetime = chrono::Local::now();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        });

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    builder.init();
    log::debug!("logging started");
    Ok(())
}
