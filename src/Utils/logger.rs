use log::info;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::File;
use std::path::Path;

/// Initializes logging for the whole process.
///
/// A console logger is added when `console` is set, a file logger when
/// `log_file` names a path. Calling this twice is harmless, the second
/// initialization is ignored.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>, console: bool) {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if console {
        loggers.push(TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }

    if let Some(filename) = log_file {
        if let Ok(file) = File::create(filename) {
            loggers.push(WriteLogger::new(level, Config::default(), file));
        }
    }

    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
        info!("logging initialized with level {}", level);
    }
}
