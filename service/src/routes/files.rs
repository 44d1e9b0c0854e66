use crate::models::DeleteResponse;
use actix_web::{HttpResponse, Responder, delete, get, web};

const FILES: &str = "files";

/// Stored screenshots, served with a type guessed from the file name.
#[get("/static/{filename}")]
pub async fn get_screenshot(
    path: web::Path<String>,
    store: crate::Store,
) -> crate::Result<impl Responder> {
    let name = path.into_inner();
    let bytes = store.read(&name).await?;
    let mime = mime_guess::from_path(&name).first_or_octet_stream();

    Ok(HttpResponse::Ok()
        .content_type(mime.as_ref())
        .body(bytes))
}

/// Delete a screenshot file
#[utoipa::path(
    tag = FILES,
    params(
        ("filename" = String, Path, description = "File name from a capture's `file_url`"),
    ),
    responses(
        (status = 200, description = "File deleted", body = DeleteResponse),
        (status = 400, description = "Invalid file name", body = crate::ErrorResponse),
        (status = 404, description = "No such file", body = crate::ErrorResponse),
    )
)]
#[delete("/static/{filename}")]
pub async fn delete_screenshot(
    path: web::Path<String>,
    store: crate::Store,
) -> crate::Result<impl Responder> {
    let name = path.into_inner();
    store.delete(&name).await?;

    Ok(web::Json(DeleteResponse {
        message: format!("File {name} deleted"),
    }))
}
