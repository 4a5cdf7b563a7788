//! Map widget helpers for page templates.
//!
//! `mapbox_simple` and `mapbox_cluster` fill in default options and render a
//! map fragment. They can be called directly with any [`FragmentRenderer`] or
//! from template source once [`register`] has added them to an environment.

use log::debug;
use minijinja::{Environment, Error, State, Value};

mod functions;
mod options;

pub use functions::register;
pub use options::*;

pub const SIMPLE_FRAGMENT: &str = "mapbox_simple_map_insert.html";
pub const CLUSTER_FRAGMENT: &str = "mapbox_insert_cluster.html";

/// Fragments compiled into the binary, used when the template directory
/// does not provide its own copy.
pub fn bundled_fragment(name: &str) -> Option<&'static str> {
    match name {
        SIMPLE_FRAGMENT => Some(include_str!("../../templates/mapbox_simple_map_insert.html")),
        CLUSTER_FRAGMENT => Some(include_str!("../../templates/mapbox_insert_cluster.html")),
        _ => None,
    }
}

/// Whatever turns a fragment name and a context into markup.
pub trait FragmentRenderer {
    fn render_fragment(&self, name: &str, ctx: Value) -> Result<String, Error>;
}

impl FragmentRenderer for Environment<'_> {
    fn render_fragment(&self, name: &str, ctx: Value) -> Result<String, Error> {
        self.get_template(name)?.render(ctx)
    }
}

// Lets the template functions render through the environment they were called from.
impl FragmentRenderer for State<'_, '_> {
    fn render_fragment(&self, name: &str, ctx: Value) -> Result<String, Error> {
        self.env().get_template(name)?.render(ctx)
    }
}

pub fn mapbox_simple<R>(renderer: &R, options: &SimpleMapOptions) -> Result<String, Error>
where
    R: FragmentRenderer + ?Sized,
{
    let ctx = options.effective();
    debug!("Rendering {} with center={:?} maxZoom={}", SIMPLE_FRAGMENT, ctx.center, ctx.max_zoom);
    renderer.render_fragment(SIMPLE_FRAGMENT, Value::from_serialize(&ctx))
}

pub fn mapbox_cluster<R>(renderer: &R, options: &ClusterMapOptions) -> Result<String, Error>
where
    R: FragmentRenderer + ?Sized,
{
    let ctx = options.effective();
    debug!("Rendering {} with center={:?} icons={}", CLUSTER_FRAGMENT, ctx.center, ctx.icons.len());
    renderer.render_fragment(CLUSTER_FRAGMENT, Value::from_serialize(&ctx))
}
