use actix_web::{HttpResponse, Error, HttpRequest};
use minijinja::context;

use super::SAMPLE_DATA;

pub async fn map(_req: HttpRequest) -> Result<HttpResponse, Error> {
    crate::templates::render_template(
        "map",
        context! {
            title => "Simple map",
            json_url => SAMPLE_DATA,
        },
    )
}
