//! Configuration from the environment and credentials files.
//!
//! Properties are named `<SERVICE_NAME>_<PROPERTY>`, e.g.
//! `GLOBAL_CATALOG_APIKEY`, and are read from (in increasing priority)
//!
//! 1. a credentials file: `$IBM_CREDENTIALS_FILE`, else
//!    `./ibm-credentials.env`, else `$HOME/ibm-credentials.env`
//! 2. the process environment

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use global_catalog_api_v1::RetryPolicy;
use tracing::debug;

use crate::auth::{Authenticator, IamAuthenticator};
use crate::config::GlobalCatalogConfig;
use crate::error::GlobalCatalogError;

const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";
const CREDENTIALS_FILE_NAME: &str = "ibm-credentials.env";

/// Properties of one service, keyed without the service prefix.
type Properties = HashMap<String, String>;

impl GlobalCatalogConfig {
    /// Build a configuration from the external properties of `service_name`.
    ///
    /// Recognized properties are `URL`, `AUTH_TYPE` (`noauth`, `basic`,
    /// `bearerToken` or `iam`), `APIKEY`, `BEARER_TOKEN`, `USERNAME`,
    /// `PASSWORD`, `AUTH_URL`, `CLIENT_ID`, `CLIENT_SECRET`,
    /// `AUTH_DISABLE_SSL`, `DISABLE_SSL`, `ENABLE_RETRIES`, `MAX_RETRIES`
    /// and `RETRY_INTERVAL` (seconds).
    pub fn from_external(service_name: &str) -> Result<Self, GlobalCatalogError> {
        let properties = read_properties(service_name)?;
        debug!(
            service_name,
            properties = ?properties.keys().collect::<Vec<_>>(),
            "read external configuration"
        );
        Self::from_properties(&properties)
    }

    fn from_properties(properties: &Properties) -> Result<Self, GlobalCatalogError> {
        let mut config = GlobalCatalogConfig {
            authenticator: authenticator_from_properties(properties)?,
            ..Default::default()
        };

        if let Some(url) = properties.get("URL") {
            config.service_url = url.clone();
        }
        config.disable_ssl_verification = parse_bool(properties, "DISABLE_SSL")?;

        if parse_bool(properties, "ENABLE_RETRIES")? {
            let mut policy = RetryPolicy::default();
            if let Some(max_retries) = parse_number(properties, "MAX_RETRIES")? {
                policy.max_retries = max_retries;
            }
            if let Some(interval) = parse_number(properties, "RETRY_INTERVAL")? {
                policy.max_interval = Duration::from_secs(interval);
            }
            config.retries = Some(policy);
        }

        Ok(config)
    }
}

fn authenticator_from_properties(
    properties: &Properties,
) -> Result<Authenticator, GlobalCatalogError> {
    let get = |name: &str| properties.get(name).map(String::as_str);
    let require = |name: &str| {
        get(name).ok_or_else(|| GlobalCatalogError::Config(format!("{name} is not set")))
    };

    let auth_type = match get("AUTH_TYPE") {
        Some(auth_type) => auth_type.to_lowercase(),
        None if get("APIKEY").is_some() => "iam".to_string(),
        None => {
            return Err(GlobalCatalogError::Config(
                "AUTH_TYPE is not set".to_string(),
            ));
        },
    };

    match auth_type.as_str() {
        "noauth" => Ok(Authenticator::NoAuth),
        "basic" => Authenticator::basic(require("USERNAME")?, require("PASSWORD")?),
        "bearertoken" => Authenticator::bearer_token(require("BEARER_TOKEN")?),
        "iam" => {
            let mut builder = IamAuthenticator::builder(require("APIKEY")?)
                .disable_ssl_verification(parse_bool(properties, "AUTH_DISABLE_SSL")?);
            if let Some(url) = get("AUTH_URL") {
                builder = builder.url(url);
            }
            if let (Some(id), Some(secret)) = (get("CLIENT_ID"), get("CLIENT_SECRET")) {
                builder = builder.client_credentials(id, secret);
            }
            builder.build().map(Authenticator::from)
        },
        other => Err(GlobalCatalogError::Config(format!(
            "unsupported authentication type '{other}'"
        ))),
    }
}

fn parse_bool(properties: &Properties, name: &str) -> Result<bool, GlobalCatalogError> {
    match properties.get(name).map(|value| value.to_lowercase()).as_deref() {
        None | Some("false") => Ok(false),
        Some("true") => Ok(true),
        Some(other) => Err(GlobalCatalogError::Config(format!(
            "{name} must be 'true' or 'false', found '{other}'"
        ))),
    }
}

fn parse_number<T: FromStr>(
    properties: &Properties,
    name: &str,
) -> Result<Option<T>, GlobalCatalogError> {
    properties
        .get(name)
        .map(|value| {
            value.parse().map_err(|_| {
                GlobalCatalogError::Config(format!("{name} must be a number, found '{value}'"))
            })
        })
        .transpose()
}

/// Collect the properties of `service_name` from a credentials file and the
/// environment.
fn read_properties(service_name: &str) -> Result<Properties, GlobalCatalogError> {
    let prefix = format!("{}_", service_name.to_uppercase().replace('-', "_"));
    let mut properties = Properties::new();

    if let Some(path) = credentials_file() {
        let lines = dotenv::from_path_iter(&path).map_err(|e| {
            GlobalCatalogError::Config(format!(
                "could not read credentials file '{}': {e}",
                path.display()
            ))
        })?;
        properties.extend(service_properties(lines, &prefix));
    }

    properties.extend(env::vars().filter_map(|(key, value)| {
        key.strip_prefix(&prefix)
            .map(|name| (name.to_string(), value))
    }));

    Ok(properties)
}

fn credentials_file() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CREDENTIALS_FILE_ENV) {
        return Some(PathBuf::from(path));
    }
    let local = PathBuf::from(CREDENTIALS_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    let home = PathBuf::from(env::var_os("HOME")?).join(CREDENTIALS_FILE_NAME);
    home.is_file().then_some(home)
}

/// Keep the `prefix`ed entries of a dotenv style file, without the prefix.
///
/// Lines that don't parse are skipped.
fn service_properties<'a>(
    lines: impl Iterator<Item = dotenv::Result<(String, String)>> + 'a,
    prefix: &'a str,
) -> impl Iterator<Item = (String, String)> + 'a {
    lines
        .filter_map(|line| {
            line.inspect_err(|e| debug!(%e, "skipping credentials line"))
                .ok()
        })
        .filter_map(move |(key, value)| {
            key.strip_prefix(prefix)
                .map(|name| (name.to_string(), value))
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    fn credentials(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_credentials_file() {
        let content = "\
            # comment\n\
            GLOBAL_CATALOG_URL=https://example.com/api/v1\n\
            \n\
            GLOBAL_CATALOG_APIKEY=\"abc=def\"\n\
            export GLOBAL_CATALOG_AUTH_TYPE=iam\n\
            OTHER_SERVICE_APIKEY=nope\n\
            garbage\n";
        let file = credentials(content);
        let lines = dotenv::from_path_iter(file.path()).unwrap();
        let properties: Properties = service_properties(lines, "GLOBAL_CATALOG_").collect();
        assert_eq!(
            properties,
            Properties::from([
                ("URL".to_string(), "https://example.com/api/v1".to_string()),
                ("APIKEY".to_string(), "abc=def".to_string()),
                ("AUTH_TYPE".to_string(), "iam".to_string()),
            ])
        );
    }

    #[test]
    #[serial]
    fn quoted_credentials_are_unquoted() {
        let file = credentials("QUOTED_CATALOG_APIKEY=\"my-key\"\n");
        temp_env::with_vars(
            [
                (CREDENTIALS_FILE_ENV, file.path().to_str()),
                ("QUOTED_CATALOG_APIKEY", None),
            ],
            || {
                let config = GlobalCatalogConfig::from_external("quoted_catalog").unwrap();
                assert_eq!(config.authenticator.auth_type(), "iam");
            },
        );
    }

    #[test]
    fn oversized_max_retries_is_rejected() {
        let properties = Properties::from([
            ("AUTH_TYPE".to_string(), "noauth".to_string()),
            ("ENABLE_RETRIES".to_string(), "true".to_string()),
            ("MAX_RETRIES".to_string(), "4294967297".to_string()),
        ]);
        let result = GlobalCatalogConfig::from_properties(&properties);
        assert!(matches!(result, Err(GlobalCatalogError::Config(_))));
    }

    #[test]
    #[serial]
    fn environment_overrides_credentials_file() {
        let file = credentials(
            "MY_CATALOG_AUTH_TYPE=bearerToken\n\
             MY_CATALOG_BEARER_TOKEN=from-file\n\
             MY_CATALOG_URL=https://file.example.com/api/v1\n",
        );
        temp_env::with_vars(
            [
                (CREDENTIALS_FILE_ENV, file.path().to_str()),
                ("MY_CATALOG_URL", Some("https://env.example.com/api/v1")),
            ],
            || {
                let config = GlobalCatalogConfig::from_external("my-catalog").unwrap();
                assert_eq!(config.service_url, "https://env.example.com/api/v1");
                assert!(matches!(
                    config.authenticator,
                    Authenticator::BearerToken(ref token) if token == "from-file"
                ));
                assert_eq!(config.retries, None);
            },
        );
    }

    #[test]
    #[serial]
    fn apikey_without_auth_type_means_iam() {
        let file = credentials("");
        temp_env::with_vars(
            [
                (CREDENTIALS_FILE_ENV, file.path().to_str()),
                ("IAM_CATALOG_APIKEY", Some("my-key")),
                ("IAM_CATALOG_AUTH_URL", Some("https://iam.example.com")),
                ("IAM_CATALOG_ENABLE_RETRIES", Some("true")),
                ("IAM_CATALOG_MAX_RETRIES", Some("2")),
                ("IAM_CATALOG_RETRY_INTERVAL", Some("5")),
            ],
            || {
                let config = GlobalCatalogConfig::from_external("iam_catalog").unwrap();
                let Authenticator::Iam(iam) = &config.authenticator else {
                    panic!("expected IAM, got {:?}", config.authenticator);
                };
                assert_eq!(iam.url(), "https://iam.example.com");
                assert_eq!(
                    config.retries,
                    Some(RetryPolicy::new(2, Duration::from_secs(5)))
                );
            },
        );
    }

    #[test]
    fn auth_type_is_case_insensitive() {
        let properties = Properties::from([
            ("AUTH_TYPE".to_string(), "BASIC".to_string()),
            ("USERNAME".to_string(), "user".to_string()),
            ("PASSWORD".to_string(), "pass".to_string()),
            ("DISABLE_SSL".to_string(), "True".to_string()),
        ]);
        let config = GlobalCatalogConfig::from_properties(&properties).unwrap();
        assert_eq!(config.authenticator.auth_type(), "basic");
        assert!(config.disable_ssl_verification);
    }

    #[test]
    fn invalid_properties_are_config_errors() {
        let cases = [
            vec![],
            vec![("AUTH_TYPE", "kerberos")],
            vec![("AUTH_TYPE", "basic"), ("USERNAME", "user")],
            vec![("AUTH_TYPE", "bearertoken")],
            vec![("AUTH_TYPE", "noauth"), ("ENABLE_RETRIES", "yes")],
            vec![
                ("AUTH_TYPE", "noauth"),
                ("ENABLE_RETRIES", "true"),
                ("MAX_RETRIES", "many"),
            ],
        ];
        for case in cases {
            let properties = case
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Properties>();
            let result = GlobalCatalogConfig::from_properties(&properties);
            assert!(
                matches!(result, Err(GlobalCatalogError::Config(_))),
                "{case:?} should be rejected"
            );
        }
    }
}
