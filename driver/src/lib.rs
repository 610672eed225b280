use error_stack::{Report, ResultExt};
use kernel::KernelError;

pub mod database;
pub mod error;

pub(crate) fn env(key: &str) -> error_stack::Result<String, KernelError> {
    dotenvy::var(key)
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| format!("Failed to read environment variable `{key}`"))
}

/// Reads and parses `key`, falling back to `default` when the variable is not set.
pub fn env_or<T>(key: &str, default: T) -> error_stack::Result<T, KernelError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match dotenvy::var(key) {
        Ok(value) => value
            .parse::<T>()
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("Invalid value for `{key}`: {value}")),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(default),
        Err(error) => Err(Report::new(error)
            .change_context(KernelError::Internal)
            .attach_printable(format!("Failed to read environment variable `{key}`"))),
    }
}
