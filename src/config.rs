use std::{env, net::SocketAddr, path::PathBuf, str::FromStr};

/// Daily targets used for percent-of-goal displays.
#[derive(Debug, Clone, PartialEq)]
pub struct Goals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub water_litres: f64,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            protein: 150.0,
            carbs: 250.0,
            fat: 65.0,
            water_litres: 2.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub goals: Goals,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            data_dir: PathBuf::from("data"),
            goals: Goals::default(),
        }
    }
}

impl Config {
    /// Environment variables override the defaults; values that fail to
    /// parse are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |name: &str, fallback: f64| parse_or(lookup(name), fallback);

        Self {
            port: parse_or(lookup("PORT"), defaults.port),
            data_dir: lookup("APP_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            goals: Goals {
                calories: parsed("GOAL_CALORIES", defaults.goals.calories),
                protein: parsed("GOAL_PROTEIN", defaults.goals.protein),
                carbs: parsed("GOAL_CARBS", defaults.goals.carbs),
                fat: parsed("GOAL_FAT", defaults.goals.fat),
                water_litres: parsed("GOAL_WATER_LITRES", defaults.goals.water_litres),
            },
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_or<T: FromStr>(value: Option<String>, fallback: T) -> T {
    value
        .and_then(|value| value.trim().parse::<T>().ok())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.goals, Goals::default());
    }

    #[test]
    fn env_overrides_and_bad_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "9001"),
            ("APP_DATA_DIR", "/tmp/fit"),
            ("GOAL_CALORIES", "2400"),
            ("GOAL_FAT", "lots"),
        ]));
        assert_eq!(config.port, 9001);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/fit"));
        assert_eq!(config.goals.calories, 2400.0);
        assert_eq!(config.goals.fat, 65.0);
        assert_eq!(config.addr().port(), 9001);
    }
}
