use config::{Config, Environment, File, FileFormat, FileSourceFile};
use qpid_domain::properties::QpidJmsProperties;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix for environment overrides, e.g. `QPIDJMS__REMOTE_URL`.
pub const ENV_PREFIX: &str = "QPIDJMS";
/// Separator between the prefix and nested keys.
pub const ENV_SEPARATOR: &str = "__";
/// Base name probed (`.toml`, `.yaml`, `.json`, ...) when no file is given.
pub const DEFAULT_PROPERTIES_FILE: &str = "qpidjms";

#[qpid_derive::qpid_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader.
///
/// Sources, lowest precedence first:
/// 1. **Properties file**: the explicit [`PropertiesLoader::path`] (required), or the
///    optional `qpidjms.*` file in the working directory.
/// 2. **Environment**: variables prefixed with `QPIDJMS__`, nested with `__`
///    (`QPIDJMS__DESERIALIZATION_POLICY__WHITE_LIST` maps to `deserialization_policy.white_list`).
///
/// The environment can be replaced with an explicit map via [`PropertiesLoader::env_source`].
#[derive(Debug, Default)]
pub struct PropertiesLoader {
    path: Option<PathBuf>,
    env: Option<config::Map<String, String>>,
}

impl PropertiesLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `path` as a required properties file.
    #[must_use]
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Reads overrides from `vars` instead of the process environment.
    #[must_use]
    pub fn env_source(mut self, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        self.env = Some(vars.into_iter().collect());
        self
    }

    /// Builds the layered sources and deserializes them into `T`.
    ///
    /// Both layers are merged key by key before deserialization, so a key must be
    /// spelled the same way in every source to be overridden.
    ///
    /// # Errors
    /// Returns [`ConfigError::Config`] if an explicit file is missing or unreadable, or
    /// if the merged values do not match the shape of `T`.
    pub fn load<T>(self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        Config::builder()
            .add_source(self.file())
            .add_source(self.environment())
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")
    }

    /// Loads [`QpidJmsProperties`], letting environment values override file values.
    ///
    /// Each layer is deserialized on its own and the records are overlaid, so a
    /// `remoteURL` file key is overridden by `QPIDJMS__REMOTE_URL` even though the
    /// spellings differ.
    ///
    /// # Errors
    /// Returns [`ConfigError::Config`] if an explicit file is missing or unreadable, or
    /// if either layer holds a value of the wrong type.
    pub fn load_properties(self) -> Result<QpidJmsProperties, ConfigError> {
        let file: QpidJmsProperties = Config::builder()
            .add_source(self.file())
            .build()
            .context("Failed to read properties file")?
            .try_deserialize()
            .context("Failed to deserialize properties file")?;

        let env: QpidJmsProperties = Config::builder()
            .add_source(self.environment())
            .build()
            .context("Failed to read environment")?
            .try_deserialize()
            .context("Failed to deserialize environment overrides")?;

        Ok(file.overlay(env))
    }

    fn file(&self) -> File<FileSourceFile, FileFormat> {
        match &self.path {
            Some(path) => {
                info!("Loading Qpid JMS properties from {}", path.display());
                File::from(path.as_path()).required(true)
            },
            None => {
                debug!("Probing optional properties file '{DEFAULT_PROPERTIES_FILE}'");
                File::with_name(DEFAULT_PROPERTIES_FILE).required(false)
            },
        }
    }

    fn environment(&self) -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .source(self.env.clone())
    }
}

/// Loads any deserializable configuration with the layering of [`PropertiesLoader`].
///
/// # Errors
/// See [`PropertiesLoader::load`].
///
/// # Example
/// ```rust,no_run
/// use qpid_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct CliSettings {
///     verbose: bool,
/// }
///
/// let settings: CliSettings = load_config(Some("cli.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let loader = PropertiesLoader::new();
    match path {
        Some(path) => loader.path(path).load(),
        None => loader.load(),
    }
}

/// Loads [`QpidJmsProperties`] from the default layered sources.
///
/// # Errors
/// See [`PropertiesLoader::load_properties`].
pub fn load_properties(path: Option<impl AsRef<Path>>) -> Result<QpidJmsProperties, ConfigError> {
    let loader = PropertiesLoader::new();
    match path {
        Some(path) => loader.path(path).load_properties(),
        None => loader.load_properties(),
    }
}
