use std::fs;

/// Configuration for a prime search run, read from a `key=value` text file.
///
/// Recognized keys:
/// - `threads`: worker thread count (default: 4, non-positive falls back to
///   the machine's available parallelism)
/// - `limit`: inclusive upper search bound (default: 100000, clamped to 2)
///
/// Lines starting with '#' are comments. Whitespace around keys and values
/// is trimmed. Unknown keys and malformed values are ignored with a warning,
/// keeping the default for that field. A missing file is not an error.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub threads: i64,
    pub limit: i64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            threads: 4,
            limit: 100_000,
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to defaults for anything
    /// missing or malformed. Never fails: configuration problems degrade to
    /// defaults with a warning on stderr.
    pub fn load(path: &str) -> Config {
        let mut config = Config::default();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                eprintln!("[WARN] Could not open {}, using defaults.", path);
                return config;
            }
        };

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();
            match key {
                "threads" => match value.parse::<i64>() {
                    Ok(n) => config.threads = n,
                    Err(_) => eprintln!("[WARN] Ignoring malformed threads value: {}", value),
                },
                "limit" => match value.parse::<i64>() {
                    Ok(n) => config.limit = n,
                    Err(_) => eprintln!("[WARN] Ignoring malformed limit value: {}", value),
                },
                _ => {}
            }
        }

        config
    }

    /// Validated worker count: non-positive values fall back to the
    /// machine's available parallelism, always at least 1.
    pub fn worker_count(&self) -> usize {
        if self.threads > 0 {
            self.threads as usize
        } else {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        }
    }

    /// Validated inclusive upper search bound: values below 2 clamp to 2.
    pub fn search_limit(&self) -> u64 {
        self.limit.max(2) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("primebench_{}_{}.txt", name, std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/primebench_config.txt");
        assert_eq!(config.threads, 4);
        assert_eq!(config.limit, 100_000);
    }

    #[test]
    fn test_parses_keys_with_comments_and_whitespace() {
        let path = write_temp_config(
            "parse",
            "# benchmark settings\n  threads = 8  \n\nlimit=500\nignored_key=7\n",
        );
        let config = Config::load(path.to_str().unwrap());
        fs::remove_file(&path).unwrap();

        assert_eq!(config.threads, 8);
        assert_eq!(config.limit, 500);
    }

    #[test]
    fn test_malformed_value_keeps_default() {
        let path = write_temp_config("malformed", "threads=lots\nlimit=20\n");
        let config = Config::load(path.to_str().unwrap());
        fs::remove_file(&path).unwrap();

        assert_eq!(config.threads, 4);
        assert_eq!(config.limit, 20);
    }

    #[test]
    fn test_worker_count_falls_back_when_non_positive() {
        let config = Config {
            threads: 0,
            limit: 100,
        };
        assert!(config.worker_count() >= 1);

        let config = Config {
            threads: -3,
            limit: 100,
        };
        assert!(config.worker_count() >= 1);
    }

    #[test]
    fn test_search_limit_clamps_to_two() {
        let config = Config { threads: 4, limit: 1 };
        assert_eq!(config.search_limit(), 2);

        let config = Config { threads: 4, limit: -10 };
        assert_eq!(config.search_limit(), 2);

        let config = Config { threads: 4, limit: 2 };
        assert_eq!(config.search_limit(), 2);
    }
}
