use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::General;
use crate::errors::LoggingError;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%z)} {l:<5} {t} - {m}{n}";

/// Builds the log4rs configuration from the general settings
///
/// # Arguments
///
/// * 'general' - general settings holding log path, level and console switch
pub fn build_log_config(general: &General) -> Result<Config, LoggingError> {
    let mut builder = Config::builder();
    let mut root = Root::builder();

    if general.log_to_stderr {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build();

        builder = builder.appender(Appender::builder().build("stderr", Box::new(stderr)));
        root = root.appender("stderr");
    }

    if let Some(log_path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build(log_path)?;

        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    Ok(builder.build(root.build(general.log_level))?)
}

/// Sets up logging for the run
///
/// # Arguments
///
/// * 'general' - general settings holding log path, level and console switch
pub fn setup_logger(general: &General) -> Result<(), LoggingError> {
    let config = build_log_config(general)?;
    let _ = log4rs::init_config(config)?;

    Ok(())
}
