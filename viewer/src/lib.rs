//! Shashin Docs Viewer Bootstrap
//!
//! Configuration glue for the browser-side API-documentation widget: resolve
//! the server base URL from request query parameters, build the URL of the
//! OpenAPI document, and rewrite relative request URLs against the resolved
//! base. The widget itself (swagger-ui-dist) is externally supplied; this
//! crate only renders its bootstrap.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use shashin_viewer::{build_docs_url, resolve_base_url};
//!
//! let params = HashMap::from([("serverHost".to_string(), "https://api.example.com".to_string())]);
//! let base = resolve_base_url(&params, "http://docs.example.com");
//! assert_eq!(base, "https://api.example.com");
//! assert_eq!(build_docs_url(&base), "https://api.example.com/api-docs/swagger.json");
//! ```

use std::collections::HashMap;

/// Query parameter overriding the server base URL.
pub const SERVER_HOST_PARAM: &str = "serverHost";

/// Fixed path of the OpenAPI document, relative to the base URL.
pub const DOCS_JSON_PATH: &str = "/api-docs/swagger.json";

/// Pinned distribution of the externally supplied widget.
pub const WIDGET_DIST_URL: &str = "https://unpkg.com/swagger-ui-dist@5.17.14";

const PRESETS: &[&str] = &["SwaggerUIBundle.presets.apis", "SwaggerUIStandalonePreset"];

/// Returns the value of the [`SERVER_HOST_PARAM`] query parameter if present
/// and non-empty, otherwise the fallback. Absence is not an error, and the
/// override value is used as-is.
pub fn resolve_base_url(
    params: &HashMap<String, String>,
    fallback: &str,
) -> String {
    params
        .get(SERVER_HOST_PARAM)
        .filter(|v| !v.is_empty())
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}

/// Concatenates [`DOCS_JSON_PATH`] onto the base URL, exactly.
pub fn build_docs_url(base_url: &str) -> String {
    format!("{base_url}{DOCS_JSON_PATH}")
}

/// Whether the target already starts with a URL scheme.
pub fn has_scheme(target: &str) -> bool {
    match url::Url::parse(target) {
        Ok(_) => true,
        Err(url::ParseError::RelativeUrlWithoutBase) => false,
        // Anything else parsed far enough to find a scheme.
        Err(_) => true,
    }
}

/// Prefixes the target with the base URL when it does not already start with
/// a scheme; absolute targets pass through untouched.
pub fn rewrite_request_url(
    target: &str,
    base_url: &str,
) -> String {
    if has_scheme(target) {
        return target.to_string();
    }
    tracing::debug!("rewriting relative request url '{target}' against '{base_url}'");
    format!("{base_url}{target}")
}

/// Bootstrap configuration handed to the docs widget.
///
/// Holds the resolved base URL together with the fixed layout options the
/// widget is constructed with.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub base_url: String,
    pub docs_url: String,
    pub title: String,
    pub dom_id: String,
    pub layout: String,
    pub deep_linking: bool,
}

impl ViewerConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let docs_url = build_docs_url(&base_url);
        Self {
            base_url,
            docs_url,
            title: "API documentation".to_string(),
            dom_id: "#swagger-ui".to_string(),
            layout: "BaseLayout".to_string(),
            deep_linking: true,
        }
    }

    pub fn titled(
        mut self,
        title: impl Into<String>,
    ) -> Self {
        self.title = title.into();
        self
    }

    /// Renders the initializer script constructing the widget.
    ///
    /// The base URL and docs URL are baked in as string literals; the
    /// request interceptor performs the same relative-URL rewrite as
    /// [`rewrite_request_url`], in the browser.
    pub fn initializer_script(&self) -> String {
        let server_host = js_string(&self.base_url);
        let url = js_string(&self.docs_url);
        let dom_id = js_string(&self.dom_id);
        let layout = js_string(&self.layout);
        let presets = PRESETS.join(",\n    ");
        let deep_linking = self.deep_linking;
        format!(
            r#"const serverHost = {server_host};
const url = {url};
window.ui = SwaggerUIBundle({{
  url: url,
  dom_id: {dom_id},
  presets: [
    {presets}
  ],
  layout: {layout},
  deepLinking: {deep_linking},
  requestInterceptor: (req) => {{
    if (!/^[a-zA-Z][a-zA-Z0-9+.\-]*:/.test(req.url)) {{
      req.url = serverHost + req.url;
    }}
    return req;
  }}
}});
"#
        )
    }

    /// Renders the viewer page loading the widget distribution and the
    /// initializer. `initializer_src` is the script URL the page should
    /// load, typically with the page's own query string forwarded.
    pub fn page_html(
        &self,
        initializer_src: &str,
    ) -> String {
        let title = escape_html(&self.title);
        let dom_id = escape_html(self.dom_id.trim_start_matches('#'));
        let src = escape_html(initializer_src);
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
    <link rel="stylesheet" href="{WIDGET_DIST_URL}/swagger-ui.css" />
  </head>
  <body>
    <div id="{dom_id}"></div>
    <script src="{WIDGET_DIST_URL}/swagger-ui-bundle.js" crossorigin></script>
    <script src="{WIDGET_DIST_URL}/swagger-ui-standalone-preset.js" crossorigin></script>
    <script src="{src}"></script>
  </body>
</html>
"#
        )
    }
}

/// Quotes a string as a Javascript string literal.
fn js_string(value: &str) -> String {
    // serde_json escaping is valid in JS source.
    serde_json::to_string(value).expect("string serialization is infallible")
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
