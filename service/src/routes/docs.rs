use crate::host::ServerHost;
use actix_web::{
    HttpRequest, HttpResponse, Responder, get,
    http::{StatusCode, header::ContentType},
    web,
};
use shashin_viewer::ViewerConfig;

const PAGE_TITLE: &str = "Webpage Screenshot Service";

fn viewer_redirect(req: &HttpRequest) -> web::Redirect {
    // Keep the query so a serverHost override survives the redirect.
    let location = match req.query_string() {
        "" => "/swagger/".to_string(),
        query => format!("/swagger/?{query}"),
    };
    web::Redirect::to(location).using_status_code(StatusCode::FOUND)
}

/// Browsers landing on the root get sent to the interactive docs.
#[get("/")]
pub async fn index(req: HttpRequest) -> impl Responder {
    viewer_redirect(&req)
}

#[get("/swagger")]
pub async fn swagger_root(req: HttpRequest) -> impl Responder {
    viewer_redirect(&req)
}

/// Interactive documentation page. The page forwards its own query string
/// to the initializer script so both resolve the same base URL.
#[get("/swagger/")]
pub async fn viewer_page(
    req: HttpRequest,
    host: ServerHost,
) -> impl Responder {
    let src = match req.query_string() {
        "" => "./swagger-initializer.js".to_string(),
        query => format!("./swagger-initializer.js?{query}"),
    };

    let html = ViewerConfig::new(host.base_url())
        .titled(PAGE_TITLE)
        .page_html(&src);

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html)
}

/// Bootstrap script constructing the docs widget against the resolved base.
#[get("/swagger/swagger-initializer.js")]
pub async fn initializer(host: ServerHost) -> impl Responder {
    let script = ViewerConfig::new(host.base_url()).initializer_script();

    HttpResponse::Ok()
        .content_type("application/javascript")
        .body(script)
}

/// Serves the OpenAPI document with its server list pinned to the resolved
/// base URL, so "try it out" calls go to the right place.
pub fn swagger_json_service(api: utoipa::openapi::OpenApi) -> actix_web::Resource {
    web::resource(shashin_viewer::DOCS_JSON_PATH)
        .app_data(web::Data::new(api))
        .route(web::get().to(swagger_json))
}

async fn swagger_json(
    api: web::Data<utoipa::openapi::OpenApi>,
    host: ServerHost,
) -> crate::Result<impl Responder> {
    let mut api = api.get_ref().clone();
    api.servers = Some(vec![utoipa::openapi::Server::new(host.base_url())]);
    Ok(web::Json(api))
}
