use log::debug;
use minijinja::value::Kwargs;
use minijinja::{Environment, Error, State, Value};
use std::collections::BTreeMap;

use super::{
    ClusterMapOptions, FragmentRenderer, SimpleMapOptions, CLUSTER_FRAGMENT, DEFAULT_STYLE,
    SIMPLE_FRAGMENT,
};

const SIMPLE_KEYS: &[&str] = &[
    "style", "links", "maxZoom", "query", "icons", "center", "json_url", "click_url",
];
const CLUSTER_KEYS: &[&str] = &["center", "icons", "json_url"];

/// Adds `mapbox_simple` and `mapbox_cluster` to the environment's globals,
/// plus `map_default_style` for fragments that need the bundled style.
pub fn register(env: &mut Environment<'_>) {
    env.add_function("mapbox_simple", simple_map);
    env.add_function("mapbox_cluster", cluster_map);
    env.add_global("map_default_style", DEFAULT_STYLE);
}

fn simple_map(state: &State, kwargs: Kwargs) -> Result<Value, Error> {
    let defaults = Value::from_serialize(SimpleMapOptions::default().effective());
    let ctx = effective_from_kwargs("mapbox_simple", defaults, SIMPLE_KEYS, &kwargs)?;
    let html = state.render_fragment(SIMPLE_FRAGMENT, ctx)?;
    Ok(Value::from_safe_string(html))
}

fn cluster_map(state: &State, kwargs: Kwargs) -> Result<Value, Error> {
    let defaults = Value::from_serialize(ClusterMapOptions::default().effective());
    let ctx = effective_from_kwargs("mapbox_cluster", defaults, CLUSTER_KEYS, &kwargs)?;
    let html = state.render_fragment(CLUSTER_FRAGMENT, ctx)?;
    Ok(Value::from_safe_string(html))
}

// A supplied keyword replaces its default as-is, `none` included. Values are
// not inspected; whatever the fragment makes of them is its business.
// Every kwarg is read so none is left unconsumed.
fn effective_from_kwargs(
    tag: &str,
    defaults: Value,
    known: &[&str],
    kwargs: &Kwargs,
) -> Result<Value, Error> {
    let mut fields = BTreeMap::new();
    for key in defaults.try_iter()? {
        let value = defaults.get_item(&key)?;
        fields.insert(key.to_string(), value);
    }

    let keys: Vec<String> = kwargs.args().map(str::to_owned).collect();
    for key in keys {
        let value: Value = kwargs.get(&key)?;
        if known.contains(&key.as_str()) {
            fields.insert(key, value);
        } else {
            debug!("{} ignoring unknown option '{}'", tag, key);
        }
    }
    debug!("{} rendering with options {:?}", tag, fields.keys().collect::<Vec<_>>());
    Ok(Value::from_serialize(&fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::{AutoEscape, ErrorKind};

    // Fragments that dump the effective values as JSON instead of real markup.
    fn echo_env() -> Environment<'static> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template(
            SIMPLE_FRAGMENT,
            "{{ style|tojson }}|{{ links|tojson }}|{{ maxZoom|tojson }}|{{ query|tojson }}|\
             {{ icons|tojson }}|{{ center|tojson }}|{{ json_url|tojson }}|{{ click_url|tojson }}|\
             {{ (bogus is defined)|tojson }}",
        )
        .unwrap();
        env.add_template(
            CLUSTER_FRAGMENT,
            "{{ center|tojson }}|{{ icons|tojson }}|{{ json_url|tojson }}|{{ (maxZoom is defined)|tojson }}",
        )
        .unwrap();
        register(&mut env);
        env
    }

    #[test]
    fn no_arguments_render_defaults() {
        let env = echo_env();
        let out = env.render_str("{{ mapbox_simple() }}", ()).unwrap();
        assert_eq!(
            out,
            r#""/static/map_styles/cartodb-xyz.json"|false|15|null|[]|[-0.9307443,50.7980974]|null|"/Map/${features[0].properties.id}/"|false"#
        );
    }

    #[test]
    fn keyword_arguments_override() {
        let env = echo_env();
        let out = env
            .render_str("{{ mapbox_simple(center=[10.0, 20.0], maxZoom=10) }}", ())
            .unwrap();
        assert_eq!(
            out,
            r#""/static/map_styles/cartodb-xyz.json"|false|10|null|[]|[10.0,20.0]|null|"/Map/${features[0].properties.id}/"|false"#
        );
    }

    #[test]
    fn unknown_keywords_are_ignored() {
        let env = echo_env();
        let plain = env.render_str("{{ mapbox_simple() }}", ()).unwrap();
        let extra = env
            .render_str("{{ mapbox_simple(bogus=1, zoom=4) }}", ())
            .unwrap();
        assert_eq!(plain, extra);
    }

    #[test]
    fn cluster_takes_icons() {
        let env = echo_env();
        let out = env
            .render_str(
                "{{ mapbox_cluster(icons=['pin-a', 'pin-b'], json_url='/data.geojson', maxZoom=3) }}",
                (),
            )
            .unwrap();
        assert_eq!(
            out,
            r#"[-0.9307443,50.7980974]|["pin-a","pin-b"]|"/data.geojson"|false"#
        );
    }

    #[test]
    fn cluster_takes_center() {
        let env = echo_env();
        let out = env
            .render_str("{{ mapbox_cluster(center=[1.0, 2.0]) }}", ())
            .unwrap();
        assert_eq!(out, "[1.0,2.0]|[]|null|false");
    }

    #[test]
    fn explicit_none_replaces_default() {
        let env = echo_env();
        let out = env
            .render_str("{{ mapbox_simple(style=none, click_url=none) }}", ())
            .unwrap();
        assert!(out.starts_with("null|false|15|"));
        assert!(out.ends_with("|null|null|false"));

        let out = env
            .render_str("{{ mapbox_cluster(center=none) }}", ())
            .unwrap();
        assert_eq!(out, "null|[]|null|false");
    }

    #[test]
    fn malformed_values_reach_the_fragment() {
        let env = echo_env();
        let out = env
            .render_str("{{ mapbox_simple(maxZoom='far', links=1, center='here') }}", ())
            .unwrap();
        assert!(out.starts_with(r#""/static/map_styles/cartodb-xyz.json"|1|"far"|null|[]|"here"|"#));

        let out = env.render_str("{{ mapbox_simple(maxZoom=-1) }}", ()).unwrap();
        assert!(out.contains("|-1|"));
    }

    #[test]
    fn output_is_not_escaped() {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template(CLUSTER_FRAGMENT, "<div id=\"map\"></div>").unwrap();
        register(&mut env);
        let out = env.render_str("{{ mapbox_cluster() }}", ()).unwrap();
        assert_eq!(out, "<div id=\"map\"></div>");
    }

    #[test]
    fn default_style_is_a_global() {
        let env = echo_env();
        let out = env.render_str("{{ map_default_style }}", ()).unwrap();
        assert_eq!(out, DEFAULT_STYLE);
    }

    #[test]
    fn missing_fragment_propagates() {
        let mut env = Environment::new();
        register(&mut env);
        let err = env.render_str("{{ mapbox_simple() }}", ()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TemplateNotFound);
    }
}
