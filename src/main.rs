use actix_files as fs;
use actix_web::{web, App, HttpServer, middleware};
use env_logger::Env;
use log::info;
use dotenvy::dotenv;
use maptags::config::CONFIG;
use maptags::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Initialize logger (RUST_LOG overrides default if set)
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!(
        "Templates from {}, static files from {}",
        CONFIG.template_dir.display(),
        CONFIG.static_dir.display()
    );
    info!("Server running at http://{}", CONFIG.bind);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            // Log each incoming request with status, time, and size
            .wrap(middleware::Logger::new("%a \"%r\" %s %b %T"))
            .service(
                fs::Files::new("/static", CONFIG.static_dir.clone())
                    .prefer_utf8(true)
                    .use_etag(true)
                    .use_last_modified(true)
            )
            .configure(routes::init_routes)
            .default_service(web::route().to(routes::not_found))
    })
    .bind(CONFIG.bind.as_str())?
    .run()
    .await
}
