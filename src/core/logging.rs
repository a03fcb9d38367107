//! Logging setup over flexi_logger
//!
//! Text and JSON line formats with optional file output. Format and color
//! choice are fixed at initialization.

use flexi_logger::{DeferredNow, FileSpec, Logger};

/// Initialize process-wide logging
///
/// `log_level` falls back to `info`, `log_format` to `text`. When
/// `log_file` is given, output goes to that file instead of stderr.
pub fn init_logging(
    log_level: Option<&str>,
    log_format: Option<&str>,
    log_file: Option<&std::path::Path>,
    color_enabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut logger = Logger::try_with_str(log_level.unwrap_or("info"))?;

    logger = match (log_format.unwrap_or("text"), color_enabled) {
        ("json", _) => logger.format(json_format),
        ("text", true) => logger.format(text_color_format),
        _ => logger.format(text_format),
    };

    if let Some(file_path) = log_file {
        logger = logger.log_to_file(FileSpec::try_from(file_path)?);
    }

    logger.start()?;
    Ok(())
}

fn level_tag(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    }
}

// "YYYY-MM-DD HH:mm:ss.fff TAG message (module)"
fn text_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_tag(record.level()),
        record.args(),
        record.target()
    )
}

fn text_color_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use colored::Colorize;

    let tag = match record.level() {
        log::Level::Error => "ERR".red().bold(),
        log::Level::Warn => "WRN".yellow(),
        log::Level::Info => "INF".green(),
        log::Level::Debug => "DBG".blue(),
        log::Level::Trace => "TRC".magenta(),
    };

    write!(
        w,
        "{} {} {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
        tag,
        record.args()
    )
}

fn json_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    let line = serde_json::json!({
        "timestamp": now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        "level": level_tag(record.level()),
        "message": record.args().to_string(),
        "target": record.target(),
    });
    w.write_all(line.to_string().as_bytes())
}
