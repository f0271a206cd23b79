use std::str::FromStr;

use anyhow::{Context, anyhow};

/// Reads a required variable, rejecting blank values.
pub fn required(key: &str) -> anyhow::Result<String> {
    let value = std::env::var(key).with_context(|| format!("{} environment variable must be set", key))?;
    if value.trim().is_empty() {
        return Err(anyhow!("{} environment variable must not be empty", key));
    }
    Ok(value)
}

/// Reads and parses an optional variable, falling back to `default` when unset.
pub fn parsed_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{} has invalid value '{}': {}", key, raw, e)),
        Err(_) => Ok(default),
    }
}
