use chrono::Local;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Install the global logger, writing colored lines to stderr.
///
/// `level` wins over `RUST_LOG`; with neither set the level is `info`.
/// Stdout is left free for the ranked output.
pub fn init(level: Option<&str>) -> anyhow::Result<()> {
    let requested = level
        .map(str::to_string)
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());
    let level_filter = requested.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);

    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr())
        .apply()?;

    log::debug!("logger initialized at level {level_filter}");
    Ok(())
}
