use std::{env, path::PathBuf};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Width of a day cell in the rendered text grid (default: 18)
    pub cell_width: usize,
    /// Events file consulted when `--events` is not passed (default: none)
    pub events_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ROOMME_CELL_WIDTH` - Day cell width in characters (default: 18)
    /// - `ROOMME_EVENTS` - Default events file path (default: unset)
    pub fn from_env() -> Self {
        Self {
            cell_width: env::var("ROOMME_CELL_WIDTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(18),
            events_path: env::var("ROOMME_EVENTS").ok().map(PathBuf::from),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        env::remove_var("ROOMME_CELL_WIDTH");
        env::remove_var("ROOMME_EVENTS");

        let config = Config::from_env();

        assert_eq!(config.cell_width, 18);
        assert_eq!(config.events_path, None);
    }
}
