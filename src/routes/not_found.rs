use actix_web::{http::StatusCode, HttpResponse, Error, HttpRequest};
use log::debug;
use minijinja::context;

pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, Error> {
    debug!("No route for {}", req.path());
    crate::templates::render_template_with_status(
        StatusCode::NOT_FOUND,
        "404",
        context! {
            title => "Page not found",
            message => "The page you asked for does not exist.",
        },
    )
}
