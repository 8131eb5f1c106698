use anyhow::anyhow;
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Environment variable overriding the location of the shared config file.
pub const CONFIG_FILE_ENV: &str = "AWS_CONFIG_FILE";

/// Resolves the config file location: explicit flag first, then the environment, then
/// `<home>/.aws/config`. A leading `~/` in the environment value is expanded.
pub fn resolve_config_path(flag: Option<&Path>, env_value: Option<OsString>, home: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = flag {
        return Some(path.to_path_buf());
    }

    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        let value = PathBuf::from(value);
        return match (value.strip_prefix("~"), home) {
            (Ok(rest), Some(home)) => Some(home.join(rest)),
            _ => Some(value),
        };
    }

    home.map(|home| home.join(".aws").join("config"))
}

/// [`resolve_config_path`] fed from the process environment.
pub fn config_path(flag: Option<&Path>) -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir();
    resolve_config_path(flag, env::var_os(CONFIG_FILE_ENV), home.as_deref())
        .ok_or_else(|| anyhow!("Could not determine home directory, use --config-file or set {CONFIG_FILE_ENV}"))
}
