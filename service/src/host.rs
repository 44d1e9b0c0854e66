use actix_web::{FromRequest, HttpRequest, web};
use std::collections::HashMap;

/// Base URL a request resolves to.
///
/// Resolution order: the `serverHost` query parameter of the request, the
/// configured `server_host`, then the origin the request arrived on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerHost {
    base_url: String,
}

impl ServerHost {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn docs_url(&self) -> String {
        shashin_viewer::build_docs_url(&self.base_url)
    }

    /// Rewrites a capture target against this base when it has no scheme.
    pub fn rewrite(
        &self,
        target: &str,
    ) -> String {
        shashin_viewer::rewrite_request_url(target, &self.base_url)
    }

    fn resolve(req: &HttpRequest) -> Self {
        let params = web::Query::<HashMap<String, String>>::from_query(req.query_string())
            .map(|q| q.into_inner())
            .unwrap_or_default();

        let configured = req
            .app_data::<web::Data<crate::config::HostConfig>>()
            .and_then(|host| host.server_host.as_ref())
            .map(|url| url.as_str().trim_end_matches('/').to_string());

        let fallback = match configured {
            Some(base) => base,
            None => {
                let info = req.connection_info();
                format!("{}://{}", info.scheme(), info.host())
            },
        };

        Self {
            base_url: shashin_viewer::resolve_base_url(&params, &fallback),
        }
    }
}

impl std::ops::Deref for ServerHost {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.base_url
    }
}

impl FromRequest for ServerHost {
    type Error = crate::Error;
    type Future = std::future::Ready<std::result::Result<Self, Self::Error>>;

    fn from_request(
        req: &HttpRequest,
        _: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        std::future::ready(Ok(Self::resolve(req)))
    }
}
