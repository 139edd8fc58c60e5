use flexi_logger::{
    colored_default_format, opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger,
    LoggerHandle, Naming,
};
use std::path::Path;

/// Starts the global logger for a binary.
///
/// `RUST_LOG` wins over `default_level`. Without a directory, logs go to
/// stderr in color; with one, to files there, rotated every 10 MB.
/// Keep the returned handle alive for as long as logs should be written.
pub fn setup_logging(default_level: &str, log_dir: Option<&Path>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(default_level)?;
    match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .format(opt_format)
            .rotate(
                Criterion::Size(10 * 1024 * 1024), // Rotate logs after they reach 10 MB
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            )
            .start(),
        None => logger.format(colored_default_format).start(),
    }
}
