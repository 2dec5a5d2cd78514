use std::io::Write;

use crate::util::error::DispatchResult;

/// Installs the global logger. `RUST_LOG` takes precedence over `default_filter`.
pub fn init(default_filter: &str) -> DispatchResult<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());
    env_logger::Builder::new()
        .parse_filters(&filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;
    Ok(())
}
