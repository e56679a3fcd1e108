use serde::Deserialize;

use crate::Error;

pub const DEFAULT_PATH: &str = "/etc/mailjet/mailjet.toml";
const ENV_PREFIX: &str = "MAILJET";

fn default_timeout() -> u64 {
    crate::mailjet::api::MAILJET_REQUEST_TIMEOUT
}

/// Client settings. Keys are the Mailjet API key pair.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Settings {
    pub public_key: String,
    pub private_key: String,
    /// Send every message in sandbox mode
    #[serde(default)]
    pub sandbox: bool,
    /// Request timeout, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Loads settings from a TOML file and merges them with any environment
/// variables prefixed with `MAILJET_` (e.g. `MAILJET_PUBLIC_KEY`).
///
/// A missing file is not an error as long as the environment supplies the
/// keys.
pub fn load_settings(path: Option<&str>) -> Result<Settings, Error> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path.unwrap_or(DEFAULT_PATH)).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()?;

    settings.try_deserialize::<Settings>().map_err(|e| e.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "public_key = \"pub-123\"").unwrap();
        writeln!(file, "private_key = \"priv-456\"").unwrap();
        writeln!(file, "sandbox = true").unwrap();

        let settings = load_settings(file.path().to_str()).unwrap();

        assert_eq!(settings.public_key, "pub-123");
        assert_eq!(settings.private_key, "priv-456");
        assert!(settings.sandbox);
        assert_eq!(settings.timeout_secs, 30);
    }

    #[test]
    fn test_missing_keys() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "timeout_secs = 5").unwrap();

        let result = load_settings(file.path().to_str());
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
