//! Logger setup for the `bake` binary.  Library crates only use the `log`
//! facade; the dispatch is installed once here.

use anyhow::Context as _;

/// Overrides the configured level when set (`BAKE_LOG=debug`).
pub const ENV_OVERRIDE: &str = "BAKE_LOG";

/// Install a stderr logger printing `[LEVEL target] message`.
pub fn init(configured: &str) -> anyhow::Result<()> {
    let level = std::env::var(ENV_OVERRIDE).unwrap_or_else(|_| configured.to_string());
    let filter = parse_level(&level)?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(filter)
        .chain(std::io::stderr())
        .apply()
        .context("installing logger")
}

pub fn parse_level(level: &str) -> anyhow::Result<log::LevelFilter> {
    level
        .parse()
        .with_context(|| format!("unknown log level {level:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(parse_level("debug").unwrap(), log::LevelFilter::Debug);
        assert_eq!(parse_level("WARN").unwrap(), log::LevelFilter::Warn);
        assert_eq!(parse_level("off").unwrap(), log::LevelFilter::Off);
        assert!(parse_level("loud").is_err());
    }
}
