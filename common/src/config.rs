/// Presentation settings for a single run of the console.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Skips the start-up banner.
    pub no_banner: bool,

    /// Reduces decoration around dashboards.
    ///
    /// `1` drops the banner and decorated headers, `2` also drops the title block
    /// shown before every login.
    pub quiet: u8,

    /// Raises the log level, one step per occurrence of `-v`.
    pub verbose: u8,
}

impl Config {
    /// Name of the log level the verbosity maps to when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        let mut cfg: Config = Config::default();
        assert_eq!(cfg.log_level(), "warn");

        cfg.verbose = 2;
        assert_eq!(cfg.log_level(), "debug");

        cfg.verbose = 9;
        assert_eq!(cfg.log_level(), "trace");
    }
}
