//! Page location helpers

use game_panel_core::PanelConfig;

/// Value of `name` in a `?a=b&c=d` query string, still percent-encoded
pub fn query_value(search: &str, name: &str) -> Option<String> {
    search
        .strip_prefix('?')
        .unwrap_or(search)
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

pub fn get_query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let raw = query_value(&search, name)?;
    js_sys::decode_uri_component(&raw).ok().map(String::from)
}

pub fn get_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Backend on the page's own origin unless `?api=` points elsewhere
pub fn config_from_location() -> PanelConfig {
    let base_url = get_query_param("api")
        .or_else(get_origin)
        .unwrap_or_default();
    PanelConfig::with_base_url(base_url)
}
