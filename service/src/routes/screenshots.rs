use crate::{
    host::ServerHost,
    models::{BasicAuthCaptureRequest, BearerAuthCaptureRequest, CaptureRequest, CaptureResponse},
};
use actix_web::{Responder, post, web};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use secrecy::ExposeSecret;
use shashin_capture::{CaptureEngine, CaptureTarget};
use validator::Validate;

const SCREENSHOTS: &str = "screenshots";

/// Capture a screenshot of a webpage
#[utoipa::path(
    tag = SCREENSHOTS,
    request_body = CaptureRequest,
    responses(
        (status = 200, description = "Screenshot captured and stored", body = CaptureResponse),
        (status = 400, description = "Invalid request", body = crate::ErrorResponse),
        (status = 500, description = "Capture failed", body = crate::ErrorResponse),
    )
)]
#[post("/screenshot")]
pub async fn capture(
    body: web::Json<CaptureRequest>,
    engine: crate::Engine,
    store: crate::Store,
    host: ServerHost,
) -> crate::Result<impl Responder> {
    let request = body.into_inner();
    request.validate()?;

    let response = capture_and_store(&engine, &store, &host, request, None).await?;
    Ok(web::Json(response))
}

/// Capture a screenshot of a webpage behind basic auth
#[utoipa::path(
    tag = SCREENSHOTS,
    request_body = BasicAuthCaptureRequest,
    responses(
        (status = 200, description = "Screenshot captured and stored", body = CaptureResponse),
        (status = 400, description = "Invalid request", body = crate::ErrorResponse),
        (status = 500, description = "Capture failed", body = crate::ErrorResponse),
    )
)]
#[post("/screenshot/basic")]
pub async fn capture_basic(
    body: web::Json<BasicAuthCaptureRequest>,
    engine: crate::Engine,
    store: crate::Store,
    host: ServerHost,
) -> crate::Result<impl Responder> {
    let request = body.into_inner();
    request.validate()?;

    let credentials = STANDARD.encode(format!(
        "{}:{}",
        request.username,
        request.password.expose_secret()
    ));

    let response = capture_and_store(
        &engine,
        &store,
        &host,
        request.capture,
        Some(format!("Basic {credentials}")),
    )
    .await?;
    Ok(web::Json(response))
}

/// Capture a screenshot of a webpage behind a bearer token
#[utoipa::path(
    tag = SCREENSHOTS,
    request_body = BearerAuthCaptureRequest,
    responses(
        (status = 200, description = "Screenshot captured and stored", body = CaptureResponse),
        (status = 400, description = "Invalid request", body = crate::ErrorResponse),
        (status = 500, description = "Capture failed", body = crate::ErrorResponse),
    )
)]
#[post("/screenshot/bearer")]
pub async fn capture_bearer(
    body: web::Json<BearerAuthCaptureRequest>,
    engine: crate::Engine,
    store: crate::Store,
    host: ServerHost,
) -> crate::Result<impl Responder> {
    let request = body.into_inner();
    request.validate()?;

    let auth = format!("Bearer {}", request.bearer_token.expose_secret());

    let response =
        capture_and_store(&engine, &store, &host, request.capture, Some(auth)).await?;
    Ok(web::Json(response))
}

async fn capture_and_store(
    engine: &crate::Engine,
    store: &crate::Store,
    host: &ServerHost,
    request: CaptureRequest,
    auth_header: Option<String>,
) -> crate::Result<CaptureResponse> {
    let url = host.rewrite(&request.url);

    let mut target = CaptureTarget::new(url);
    for (name, value) in &request.headers {
        target = target.header(name, value);
    }
    if let Some(auth) = auth_header {
        target = target.header("Authorization", auth);
    }

    let bytes = engine.capture(&target).await?;

    let file_name = output_file_name(request.output_filename.as_deref());
    store.save(&file_name, &bytes).await?;

    Ok(CaptureResponse {
        file_url: format!("/static/{file_name}"),
    })
}

fn output_file_name(requested: Option<&str>) -> String {
    let name = match requested {
        Some(name) => name.to_string(),
        None => format!("screenshot_{}", uuid::Uuid::new_v4().simple()),
    };

    if name.ends_with(".png") {
        name
    } else {
        format!("{name}.png")
    }
}
