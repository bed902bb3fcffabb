/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads and parses an environment variable, falling back to `default`
///
/// A variable that is present but does not parse is logged and replaced by the
/// default rather than aborting configuration.
///
/// # Arguments
/// * `env_var` - Name of the environment variable
/// * `default` - Value used when the variable is missing or unparsable
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    get_env_or_none(env_var).unwrap_or(default)
}

/// Reads and parses an environment variable, returning `None` when it is
/// missing, empty, or unparsable
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    let raw = env::var(env_var).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            error!("Failed to parse {}: {} ({:?})", env_var, trimmed, e);
            None
        }
    }
}

/// Returns the first of `env_vars` that is set and parses, or `default`
///
/// Used to accept both the namespaced `OPENALGO_*` variables and the shorter
/// names the OpenAlgo server's own `.env` file uses.
pub fn get_first_env_or_default<T: FromStr>(env_vars: &[&str], default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    env_vars
        .iter()
        .find_map(|name| get_env_or_none(name))
        .unwrap_or(default)
}
