use std::str::FromStr;
use tracing::Level;
use crate::core::domain::Configuration;

pub(crate) fn parse_level(level: &str) -> Level {
    Level::from_str(level).unwrap_or(Level::INFO)
}

pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(parse_level(config.log_level.as_str()))
        // disable printing the name of the module in every log line.
        .with_target(false)
        // the menu owns stdout, so logs go to stderr.
        .with_writer(std::io::stderr);

    if config.json_logs {
        builder
            .with_ansi(false)
            .without_time()
            .json()
            .init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use crate::utils::logging::parse_level;

    #[test]
    fn test_should_parse_level() {
        assert_eq!(Level::DEBUG, parse_level("debug"));
        assert_eq!(Level::WARN, parse_level("WARN"));
        assert_eq!(Level::INFO, parse_level("chatty"));
    }
}
