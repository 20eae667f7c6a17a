use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

use crate::duration::parse_duration;
use crate::error::{ConfigError, ValueError};

/// Flat string key/value configuration.
///
/// Values are kept as strings and converted on read. Keys are unique; a
/// later `set` (or a later load) replaces an earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    values: BTreeMap<String, String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from explicit pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Copy every process environment variable into the store.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn load_from_env(&mut self) -> &mut Self {
        let before = self.values.len();
        for (key, value) in std::env::vars_os() {
            if let (Ok(key), Ok(value)) = (key.into_string(), value.into_string()) {
                self.values.insert(key, value);
            }
        }
        debug!(
            loaded = self.values.len() - before,
            total = self.values.len(),
            "loaded configuration from environment"
        );
        self
    }

    /// Read `KEY=VALUE` lines from a dotenv file into the store without
    /// touching the process environment.
    pub fn load_dotenv(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, ConfigError> {
        let path = path.as_ref();
        let mut loaded = 0usize;
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            self.values.insert(key, value);
            loaded += 1;
        }
        debug!(path = %path.display(), loaded, "loaded configuration from dotenv file");
        Ok(self)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The stored value, or `default` when the key is absent or empty.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.get(key) {
            Some(value) if !value.is_empty() => value,
            _ => default,
        }
    }

    pub fn exists(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn lookup(&self, key: &str) -> Result<&str, ConfigError> {
        self.get(key).ok_or_else(|| ConfigError::NotFound {
            key: key.to_string(),
        })
    }

    fn convert<T>(
        &self,
        key: &str,
        parse: impl FnOnce(&str) -> Result<T, ValueError>,
    ) -> Result<T, ConfigError> {
        parse(self.lookup(key)?).map_err(|source| ConfigError::Parse {
            key: key.to_string(),
            source,
        })
    }

    fn convert_or<T>(&self, key: &str, default: T, read: Result<T, ConfigError>) -> T {
        match read {
            Ok(value) => value,
            Err(ConfigError::NotFound { .. }) => default,
            Err(err) => {
                warn!(key, error = %err, "falling back to default configuration value");
                default
            }
        }
    }

    pub fn get_int(&self, key: &str) -> Result<i64, ConfigError> {
        self.convert(key, |value| value.parse::<i64>().map_err(ValueError::from))
    }

    pub fn get_int_or(&self, key: &str, default: i64) -> i64 {
        self.convert_or(key, default, self.get_int(key))
    }

    /// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
    pub fn get_bool(&self, key: &str) -> Result<bool, ConfigError> {
        self.convert(key, parse_bool)
    }

    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.convert_or(key, default, self.get_bool(key))
    }

    /// See [`parse_duration`](crate::parse_duration) for the accepted syntax.
    pub fn get_duration(&self, key: &str) -> Result<Duration, ConfigError> {
        self.convert(key, |value| parse_duration(value).map_err(ValueError::from))
    }

    pub fn get_duration_or(&self, key: &str, default: Duration) -> Duration {
        self.convert_or(key, default, self.get_duration(key))
    }

    /// Comma-separated list, items trimmed, empty items dropped. An absent
    /// key yields an empty list.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Like [`get_string_list`](Self::get_string_list), returning `default`
    /// when the list comes out empty.
    pub fn get_string_list_or<S: Into<String>>(
        &self,
        key: &str,
        default: impl IntoIterator<Item = S>,
    ) -> Vec<String> {
        let list = self.get_string_list(key);
        if list.is_empty() {
            default.into_iter().map(Into::into).collect()
        } else {
            list
        }
    }

    /// The stored value; absent and empty values are both errors.
    pub fn require(&self, key: &str) -> Result<&str, ConfigError> {
        match self.get(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ConfigError::NotFound {
                key: key.to_string(),
            }),
        }
    }

    pub fn require_int(&self, key: &str) -> Result<i64, ConfigError> {
        self.get_int(key)
    }

    pub fn require_bool(&self, key: &str) -> Result<bool, ConfigError> {
        self.get_bool(key)
    }

    pub fn require_duration(&self, key: &str) -> Result<Duration, ConfigError> {
        self.get_duration(key)
    }

    /// Check that every key in `required` is present and non-empty.
    ///
    /// Missing keys are reported together, in the order given.
    pub fn validate<I, K>(&self, required: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let missing: Vec<String> = required
            .into_iter()
            .filter(|key| self.get(key.as_ref()).map_or(true, str::is_empty))
            .map(|key| key.as_ref().to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingKeys { keys: missing })
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Config {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Config {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.values
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

fn parse_bool(value: &str) -> Result<bool, ValueError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(ValueError::Bool(other.to_string())),
    }
}
