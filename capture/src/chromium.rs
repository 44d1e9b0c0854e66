use crate::{BoxFuture, CaptureEngine, CaptureTarget, Config, Error};
use headless_chrome::{
    Browser, LaunchOptions, protocol::cdp::Page::CaptureScreenshotFormatOption,
};
use std::{ffi::OsStr, time::Duration};

/// Engine backed by a local chromium driven over the devtools protocol.
/// Every capture launches a fresh browser so a hung page cannot poison
/// later requests.
pub struct ChromiumEngine {
    config: Config,
}

impl ChromiumEngine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn capture_sync(
        config: &Config,
        target: &CaptureTarget,
    ) -> Result<Vec<u8>, Error> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(config.sandbox)
            .ignore_certificate_errors(true)
            .window_size(Some((config.window_width, config.window_height)))
            .idle_browser_timeout(Duration::from_secs(config.timeout_secs))
            .path(config.path.clone())
            .args(vec![OsStr::new("--disable-gpu")])
            .build()
            .map_err(|e| Error::Launch(e.to_string()))?;

        let browser = Browser::new(options).map_err(|e| Error::Launch(e.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| Error::Launch(e.to_string()))?;
        tab.set_default_timeout(Duration::from_secs(config.timeout_secs));

        if !target.headers.is_empty() {
            let headers = target
                .headers
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect();
            tab.set_extra_http_headers(headers)
                .map_err(|e| Error::Navigation(e.to_string()))?;
        }

        tab.navigate_to(&target.url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| Error::Navigation(e.to_string()))?;

        // Screenshots of a blank frame are worthless, wait for the body to render.
        tab.wait_for_element("body")
            .map_err(|e| Error::Navigation(e.to_string()))?;

        tab.capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| Error::Capture(e.to_string()))
    }
}

impl CaptureEngine for ChromiumEngine {
    fn capture<'e>(
        &'e self,
        target: &'e CaptureTarget,
    ) -> BoxFuture<'e, Result<Vec<u8>, Error>> {
        let config = self.config.clone();
        let target = target.clone();

        Box::pin(async move {
            tracing::info!("Capturing screenshot of '{}'", target.url);

            let url = target.url.clone();
            let bytes = tokio::task::spawn_blocking(move || Self::capture_sync(&config, &target))
                .await
                .map_err(|e| Error::Task(e.to_string()))?
                .map_err(Error::with_url(&url))?;

            tracing::debug!("Captured {} bytes from '{url}'", bytes.len());
            Ok(bytes)
        })
    }
}
