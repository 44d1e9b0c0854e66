use shashin_service::config::Config;
use tracing::Level;

#[actix_web::main]
async fn main() -> shashin_service::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();

    let c = Config::new::<&str>(None)?;

    shashin_service::app::start_server(c).await
}
