use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Installs the global logger. HTTP internals stay at `warn` unless tracing.
pub fn init(level: LevelFilter) -> Result<()> {
    let transport_level = if level == LevelFilter::Trace {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };

    SimpleLogger::new()
        .with_level(level)
        .with_module_level("hyper", transport_level)
        .with_module_level("reqwest", transport_level)
        .init()?;

    Ok(())
}
