use log::LevelFilter;
use std::io::Write;

/// Logs go to stderr so stdout carries only the installer's own messages.
/// `RUST_LOG` raises the level above the default of `warn`.
pub fn init_logger() -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();

    builder
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        });

    builder.try_init()?;
    Ok(())
}
