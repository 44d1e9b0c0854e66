use std::{collections::HashMap, future::Future, path::PathBuf, pin::Pin};

pub mod chromium;
pub mod manager;

#[cfg(feature = "test")]
pub mod tst;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("browser launch error: {0}")]
    Launch(String),
    #[error("navigation error: {0}")]
    Navigation(String),
    #[error("screenshot error: {0}")]
    Capture(String),
    #[error("capture task error: {0}")]
    Task(String),

    #[error("'{url}': {source}")]
    WithUrl {
        url: String,
        #[source]
        source: Box<Self>,
    },
}

impl Error {
    pub fn with_url(url: impl Into<String>) -> impl FnOnce(Self) -> Self {
        let url = url.into();
        move |source| {
            Error::WithUrl {
                url,
                source: Box::new(source),
            }
        }
    }
}

/// Browser settings for the chromium engine. `path` overrides the binary
/// otherwise discovered on $PATH.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(alias = "WINDOW_WIDTH", default = "default_window_width")]
    pub window_width: u32,
    #[serde(alias = "WINDOW_HEIGHT", default = "default_window_height")]
    pub window_height: u32,
    #[serde(alias = "TIMEOUT_SECS", default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(alias = "SANDBOX", default)]
    pub sandbox: bool,
    #[serde(alias = "PATH", default)]
    pub path: Option<PathBuf>,
}

fn default_window_width() -> u32 {
    1920
}

fn default_window_height() -> u32 {
    1080
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            timeout_secs: default_timeout_secs(),
            sandbox: false,
            path: None,
        }
    }
}

/// A page to render, plus any extra headers to send while loading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTarget {
    pub url: String,
    pub headers: HashMap<String, String>,
}

impl CaptureTarget {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    pub fn header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

pub type BoxFuture<'e, T> = Pin<Box<dyn Future<Output = T> + Send + 'e>>;

/// Trait for engines that can render a page and hand back image bytes
pub trait CaptureEngine: Send + Sync {
    fn capture<'e>(
        &'e self,
        target: &'e CaptureTarget,
    ) -> BoxFuture<'e, Result<Vec<u8>, Error>>;
}
