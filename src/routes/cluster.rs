use actix_web::{HttpResponse, Error, HttpRequest};
use minijinja::context;

use super::SAMPLE_DATA;

pub async fn cluster(_req: HttpRequest) -> Result<HttpResponse, Error> {
    crate::templates::render_template(
        "cluster",
        context! {
            title => "Clustered map",
            json_url => SAMPLE_DATA,
        },
    )
}
