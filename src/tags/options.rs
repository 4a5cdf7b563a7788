use serde::Serialize;
use serde_json::Value as JsonValue;

/// Style resource bundled under `static/map_styles`.
pub const DEFAULT_STYLE: &str = "/static/map_styles/cartodb-xyz.json";
pub const DEFAULT_MAX_ZOOM: u32 = 15;
/// `[longitude, latitude]`
pub const DEFAULT_CENTER: [f64; 2] = [-0.9307443, 50.7980974];
/// The placeholder is a JS template literal, filled in by the browser on click.
pub const DEFAULT_CLICK_URL: &str = "/Map/${features[0].properties.id}/";

/// Options for calling `mapbox_simple` from Rust. Anything left as `None` falls
/// back to its default. Template calls bypass this and forward their keyword
/// values untouched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SimpleMapOptions {
    pub style: Option<String>,
    pub links: Option<bool>,
    pub max_zoom: Option<u32>,
    pub query: Option<String>,
    /// Icon descriptors are forwarded as-is to the client script.
    pub icons: Option<Vec<JsonValue>>,
    pub center: Option<[f64; 2]>,
    pub json_url: Option<String>,
    pub click_url: Option<String>,
}

/// Options for calling `mapbox_cluster` from Rust.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClusterMapOptions {
    pub center: Option<[f64; 2]>,
    pub icons: Option<Vec<JsonValue>>,
    pub json_url: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SimpleMapContext {
    pub style: String,
    pub links: bool,
    #[serde(rename = "maxZoom")]
    pub max_zoom: u32,
    pub query: Option<String>,
    pub icons: Vec<JsonValue>,
    pub center: [f64; 2],
    pub json_url: Option<String>,
    pub click_url: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ClusterMapContext {
    pub center: [f64; 2],
    pub icons: Vec<JsonValue>,
    pub json_url: Option<String>,
}

impl SimpleMapOptions {
    pub fn effective(&self) -> SimpleMapContext {
        SimpleMapContext {
            style: self.style.clone().unwrap_or_else(|| DEFAULT_STYLE.to_string()),
            links: self.links.unwrap_or(false),
            max_zoom: self.max_zoom.unwrap_or(DEFAULT_MAX_ZOOM),
            query: self.query.clone(),
            icons: self.icons.clone().unwrap_or_default(),
            center: self.center.unwrap_or(DEFAULT_CENTER),
            json_url: self.json_url.clone(),
            click_url: self
                .click_url
                .clone()
                .unwrap_or_else(|| DEFAULT_CLICK_URL.to_string()),
        }
    }
}

impl ClusterMapOptions {
    pub fn effective(&self) -> ClusterMapContext {
        ClusterMapContext {
            center: self.center.unwrap_or(DEFAULT_CENTER),
            icons: self.icons.clone().unwrap_or_default(),
            json_url: self.json_url.clone(),
        }
    }
}
