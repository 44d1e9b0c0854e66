use config::{Environment, File, builder::DefaultState};
use serde::Deserialize;
use std::path::PathBuf;
use validator::Validate;

fn default_addr() -> String {
    "127.0.0.1:8000".into()
}

#[derive(Deserialize, Debug, Validate)]
pub struct Config {
    #[serde(default = "default_addr", alias = "ADDR")]
    pub(crate) addr: String,

    /// Fixed public base URL for the docs viewer and request rewriting.
    /// When unset, the origin of each request is used instead.
    #[serde(default, alias = "SERVER_HOST")]
    pub(crate) server_host: Option<url::Url>,

    #[serde(default, alias = "CORS")]
    pub(crate) cors: CorsConfig,

    #[serde(default, alias = "STORAGE")]
    pub(crate) storage: shashin_storage::Config,

    #[serde(default, alias = "BROWSER")]
    pub(crate) browser: shashin_capture::Config,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct CorsConfig {
    /// Origins allowed to call the API. Empty allows any origin.
    #[serde(default, alias = "ALLOWED_ORIGINS")]
    pub allowed_origins: Vec<String>,
}

/// The slice of the configuration the origin extractor needs.
#[derive(Debug, Default, Clone)]
pub struct HostConfig {
    pub server_host: Option<url::Url>,
}

impl Config {
    const NAME: &'static str = "shashin";
    const ENV: &'static str = "SHASHIN";

    pub fn new<S: AsRef<str>>(dir: Option<S>) -> crate::Result<Self> {
        let file_name = format!(
            "{}",
            PathBuf::from(
                dir.map(|s| String::from(s.as_ref()))
                    .unwrap_or("./".into())
            )
            .join(Self::NAME)
            .display()
        );

        let this: Self = config::ConfigBuilder::<DefaultState>::default()
            .add_source(File::with_name(&file_name).required(false))
            .add_source(Environment::default().prefix(Self::ENV))
            .build()?
            .try_deserialize()?;

        this.validate()?;

        Ok(this)
    }

    pub fn host(&self) -> HostConfig {
        HostConfig {
            server_host: self.server_host.clone(),
        }
    }
}
