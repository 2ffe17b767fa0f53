//! Credential loader
//!
//! Loads client credentials from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `MNUBO_CLIENT_ID`: OAuth client id issued by mnubo
//! - `MNUBO_CLIENT_SECRET`: OAuth client secret issued by mnubo
//! - `MNUBO_HOST`: API host, e.g. `https://rest.sandbox.mnubo.com`
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./mnubo.json` or `./mnubo.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use mnubo_domain::{ClientCredentials, MnuboError, Result};

/// Environment variable holding the client id
pub const ENV_CLIENT_ID: &str = "MNUBO_CLIENT_ID";
/// Environment variable holding the client secret
pub const ENV_CLIENT_SECRET: &str = "MNUBO_CLIENT_SECRET";
/// Environment variable holding the API host
pub const ENV_HOST: &str = "MNUBO_HOST";

const FILE_STEMS: [&str; 2] = ["mnubo", "config"];
const FILE_EXTENSIONS: [&str; 2] = ["json", "toml"];

/// Load credentials with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `MnuboError::Config` if neither source yields credentials.
pub fn load() -> Result<ClientCredentials> {
    match load_from_env() {
        Ok(credentials) => {
            tracing::info!("Credentials loaded from environment variables");
            Ok(credentials)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load credentials from environment variables
///
/// # Errors
/// Returns `MnuboError::Config` if a required variable is missing or empty.
pub fn load_from_env() -> Result<ClientCredentials> {
    Ok(ClientCredentials::new(
        env_var(ENV_CLIENT_ID)?,
        env_var(ENV_CLIENT_SECRET)?,
        env_var(ENV_HOST)?,
    ))
}

/// Load credentials from a file
///
/// If `path` is `None`, probes the standard locations. Format is detected
/// from the file extension.
///
/// # Errors
/// Returns `MnuboError::Config` if the file is missing, unreadable, in an
/// unsupported format, or lacks a field.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientCredentials> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MnuboError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            MnuboError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading credentials from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MnuboError::Config(format!("Failed to read config file: {e}")))?;

    parse_credentials(&contents, &config_path)
}

fn parse_credentials(contents: &str, path: &Path) -> Result<ClientCredentials> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let credentials: ClientCredentials = match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MnuboError::Config(format!("Invalid TOML format: {e}")))?,
        "json" => serde_json::from_str(contents)
            .map_err(|e| MnuboError::Config(format!("Invalid JSON format: {e}")))?,
        _ => return Err(MnuboError::Config(format!("Unsupported config format: {extension}"))),
    };

    if credentials.hostname.trim().is_empty() {
        return Err(MnuboError::Config("hostname must not be empty".to_string()));
    }
    Ok(credentials)
}

/// Probe the standard locations for a credentials file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| {
            FILE_STEMS.into_iter().flat_map(move |stem| {
                FILE_EXTENSIONS.into_iter().map(move |ext| root.join(format!("{stem}.{ext}")))
            })
        })
        .find(|path| path.exists())
}

/// Get a required, non-empty environment variable
fn env_var(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MnuboError::Config(format!("Missing required environment variable: {key}"))),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::Builder;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_env() {
        std::env::remove_var(ENV_CLIENT_ID);
        std::env::remove_var(ENV_CLIENT_SECRET);
        std::env::remove_var(ENV_HOST);
    }

    fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        std::env::set_var(ENV_CLIENT_ID, "env-id");
        std::env::set_var(ENV_CLIENT_SECRET, "env-secret");
        std::env::set_var(ENV_HOST, "https://rest.sandbox.mnubo.com");

        let credentials = load_from_env().expect("credentials from env");
        assert_eq!(credentials.client_id, "env-id");
        assert_eq!(credentials.client_secret, "env-secret");
        assert_eq!(credentials.hostname, "https://rest.sandbox.mnubo.com");

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_secret() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var(ENV_CLIENT_ID, "env-id");
        std::env::set_var(ENV_HOST, "https://rest.sandbox.mnubo.com");

        let err = load_from_env().unwrap_err();
        assert!(err.to_string().contains(ENV_CLIENT_SECRET));

        clear_env();
    }

    #[test]
    fn test_empty_env_var_counts_as_missing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var(ENV_CLIENT_ID, "   ");
        std::env::set_var(ENV_CLIENT_SECRET, "secret");
        std::env::set_var(ENV_HOST, "https://rest.sandbox.mnubo.com");

        assert!(matches!(load_from_env(), Err(MnuboError::Config(_))));

        clear_env();
    }

    #[test]
    fn test_parse_json_credentials() {
        let file = write_config(
            ".json",
            r#"{"client_id":"id","client_secret":"secret","hostname":"https://example.com"}"#,
        );

        let credentials = load_from_file(Some(file.path().to_path_buf())).expect("json config");
        assert_eq!(credentials, ClientCredentials::new("id", "secret", "https://example.com"));
    }

    #[test]
    fn test_parse_toml_credentials() {
        let file = write_config(
            ".toml",
            "client_id = \"id\"\nclient_secret = \"secret\"\nhostname = \"https://example.com\"\n",
        );

        let credentials = load_from_file(Some(file.path().to_path_buf())).expect("toml config");
        assert_eq!(credentials.client_secret, "secret");
    }

    #[test]
    fn test_missing_field_is_config_error() {
        let file = write_config(".json", r#"{"client_id":"id","hostname":"https://example.com"}"#);

        let err = load_from_file(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, MnuboError::Config(_)));
    }

    #[test]
    fn test_empty_hostname_is_rejected() {
        let file =
            write_config(".json", r#"{"client_id":"id","client_secret":"s","hostname":" "}"#);

        assert!(load_from_file(Some(file.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_config(".yaml", "client_id: id");

        let err = load_from_file(Some(file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("Unsupported config format"));
    }

    #[test]
    fn test_nonexistent_path() {
        let err = load_from_file(Some(PathBuf::from("/definitely/not/here/mnubo.json")))
            .unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_env_takes_precedence() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        std::env::set_var(ENV_CLIENT_ID, "from-env");
        std::env::set_var(ENV_CLIENT_SECRET, "secret");
        std::env::set_var(ENV_HOST, "https://example.com");

        assert_eq!(load().expect("credentials").client_id, "from-env");

        clear_env();
    }
}
