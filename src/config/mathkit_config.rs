// src/config/mathkit_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;
use crate::root_finder::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

/// Main mathkit configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathkitConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Root finder convergence settings
    pub solver: SolverConfig,

    /// Bounds for the worked integer searches
    pub search: SearchConfig,
}

/// Bounds used by the `mathkit` driver's integer searches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Primes are listed over [1, prime_range_end] (default: 100)
    pub prime_range_end: i64,

    /// Largest Mersenne exponent tried (default: 40)
    pub mersenne_limit: u32,

    /// Perfect numbers are searched over [1, perfect_limit] (default: 10_000)
    pub perfect_limit: i64,

    /// Largest exponent tried when disproving "2^p - 1 is always prime" (default: 100)
    pub counterexample_limit: u32,
}

impl Default for MathkitConfig {
    fn default() -> Self {
        MathkitConfig {
            log_level: "info".to_string(),
            solver: SolverConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            prime_range_end: 100,
            mersenne_limit: 40,
            perfect_limit: 10_000,
            counterexample_limit: 100,
        }
    }
}

impl MathkitConfig {
    /// Load configuration with precedence: defaults → config file → env vars
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("mathkit.toml").exists() {
            builder = builder.add_source(File::with_name("mathkit.toml"));
        } else if Path::new("mathkit.yaml").exists() {
            builder = builder.add_source(File::with_name("mathkit.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let search = SearchConfig::default();
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("solver.tolerance", DEFAULT_TOLERANCE)?
            .set_default("solver.max_iterations", DEFAULT_MAX_ITERATIONS as i64)?
            .set_default("search.prime_range_end", search.prime_range_end)?
            .set_default("search.mersenne_limit", i64::from(search.mersenne_limit))?
            .set_default("search.perfect_limit", search.perfect_limit)?
            .set_default("search.counterexample_limit", i64::from(search.counterexample_limit))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables, e.g. MATHKIT_SOLVER__TOLERANCE=1e-9
        let config = builder
            .add_source(
                Environment::with_prefix("MATHKIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = MathkitConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.solver.tolerance, 1e-6);
        assert_eq!(config.solver.max_iterations, Some(10_000));
        assert_eq!(config.search.prime_range_end, 100);
        assert_eq!(config.search.mersenne_limit, 40);
        assert_eq!(config.search.perfect_limit, 10_000);
        assert_eq!(config.search.counterexample_limit, 100);
    }

    #[test]
    fn test_load_without_file() {
        // Should successfully load defaults when no config file exists
        let config = MathkitConfig::load().unwrap_or_else(|_| MathkitConfig::default());
        assert_eq!(config.search.mersenne_limit, 40);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("mathkit_config_test_{}.toml", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "log_level = \"debug\"").unwrap();
            writeln!(file, "[solver]").unwrap();
            writeln!(file, "tolerance = 1e-9").unwrap();
            writeln!(file, "[search]").unwrap();
            writeln!(file, "mersenne_limit = 20").unwrap();
        }

        let config = MathkitConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.solver.tolerance, 1e-9);
        assert_eq!(config.solver.max_iterations, Some(10_000));
        assert_eq!(config.search.mersenne_limit, 20);
        assert_eq!(config.search.perfect_limit, 10_000);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let config = MathkitConfig::load_from_file("definitely_not_here.toml").unwrap();
        assert_eq!(config.solver, SolverConfig::default());
    }
}
