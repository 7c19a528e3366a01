//! Process-wide logging setup.

use log::LevelFilter;

/// Installs a fern dispatcher writing to stdout.
///
/// Call once, early in `main`. Returns an error if a global logger is
/// already installed.
pub fn init(level: LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{:<5}] {}: {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}
