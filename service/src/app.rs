use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use std::sync::Arc;
use utoipa::{Modify, OpenApi, PartialSchema};
use utoipa_actix_web::AppExt;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};

use crate::routes::{self, docs, files, screenshots};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Webpage Screenshot Service",
        description = "Capture screenshots of webpages as images and serve them."
    ),
    tags(
        (name = "shashin", description = "Webpage Screenshot Service API")
    ),
    modifiers(&SharedErrorsAddon),
)]
pub struct ApiDoc;

struct SharedErrorsAddon;

impl Modify for SharedErrorsAddon {
    fn modify(
        &self,
        openapi: &mut utoipa::openapi::OpenApi,
    ) {
        let components = openapi.components.as_mut().unwrap();
        components
            .schemas
            .insert("ErrorResponse".into(), crate::ErrorResponse::schema());
    }
}

#[macro_export]
macro_rules! bind_app {
    (
        $host: ident,
        $store: ident,
        $engine: ident,
        $cors: ident,
    ) => {
        move || {
            App::new()
                .into_utoipa_app()
                .openapi(ApiDoc::openapi())
                .app_data($host.clone())
                .app_data($store.clone())
                .app_data($engine.clone())
                // API routes
                .service(routes::health)
                .service(screenshots::capture)
                .service(screenshots::capture_basic)
                .service(screenshots::capture_bearer)
                .service(files::delete_screenshot)
                // Docs
                .openapi_service(|api| Redoc::with_url("/redoc", api))
                .openapi_service(docs::swagger_json_service)
                .into_app()
                // Viewer and stored files
                .service(docs::index)
                .service(docs::swagger_root)
                .service(docs::viewer_page)
                .service(docs::initializer)
                .service(RapiDoc::new(shashin_viewer::DOCS_JSON_PATH).path("/rapidoc"))
                .service(files::get_screenshot)
                .wrap($crate::app::build_cors(&$cors))
        }
    };
}

/// Builds the CORS layer from the configured origins. An empty allowlist
/// opens the API to any origin.
pub fn build_cors(config: &crate::config::CorsConfig) -> Cors {
    if config.allowed_origins.is_empty() {
        return Cors::permissive();
    }

    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(86400);
    for origin in &config.allowed_origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}

pub async fn start_server(config: crate::config::Config) -> crate::Result<()> {
    let store = web::Data::new(shashin_storage::ScreenshotStore::new(&config.storage).await?);
    let engine = web::Data::new(shashin_capture::manager::EngineManager::new(Arc::new(
        shashin_capture::chromium::ChromiumEngine::new(config.browser.clone()),
    )));
    let host = web::Data::new(config.host());
    let cors = config.cors.clone();
    let addr = config.addr;

    tracing::info!("starting server on http://{addr}");

    let server = HttpServer::new(bind_app!(host, store, engine, cors,));

    Ok(server.bind(&addr)?.run().await?)
}
