mod cluster;
mod index;
mod map;
mod not_found;

pub use cluster::cluster;
pub use index::index;
pub use map::map;
pub use not_found::not_found;

use actix_web::web;

// Served from the static directory.
const SAMPLE_DATA: &str = "/static/data/sample.geojson";

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/map", web::get().to(map))
        .route("/cluster", web::get().to(cluster));
}
