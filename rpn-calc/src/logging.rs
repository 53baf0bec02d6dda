use env_logger::{Builder, Env};
use log::LevelFilter;

/// Environment variable holding the log filter, in `env_logger` syntax.
pub const LOG_ENV: &str = "RPN_LOG";

/// Logger configuration: `RPN_LOG` (default `warn`), overridden by an explicit
/// level from the command line.
pub fn builder(level: Option<LevelFilter>) -> Builder {
    let mut builder = Builder::from_env(Env::new().filter_or(LOG_ENV, "warn"));
    builder.format_timestamp(None);
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_level_wins() {
        assert_eq!(
            builder(Some(LevelFilter::Debug)).build().filter(),
            LevelFilter::Debug
        );
        assert_eq!(
            builder(Some(LevelFilter::Off)).build().filter(),
            LevelFilter::Off
        );
    }
}
