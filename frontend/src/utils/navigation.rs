//! Full-page navigation helpers. Off-browser builds turn these into no-ops so
//! view models stay testable on the host.

#[cfg(target_arch = "wasm32")]
pub fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to(path: &str) {
    log::debug!("redirect to {} skipped outside the browser", path);
}

#[cfg(target_arch = "wasm32")]
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn reload_page() {}

#[cfg(target_arch = "wasm32")]
pub fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_path() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn current_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_origin() -> String {
    "http://localhost:8080".to_string()
}

pub fn redirect_to_login_if_needed() {
    if current_path().as_deref() == Some("/login") {
        return;
    }
    redirect_to("/login");
}

#[cfg(target_arch = "wasm32")]
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_search() -> String {
    String::new()
}

/// Decodes a `?a=1&b=two` query string. `+` is treated as a space.
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_encoding::percent_decode_str(&spaced)
        .decode_utf8_lossy()
        .into_owned()
}

pub fn query_value(search: &str, name: &str) -> Option<String> {
    parse_query(search)
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

pub fn query_param(name: &str) -> Option<String> {
    query_value(&current_search(), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_query_decodes_pairs() {
        let pairs = parse_query("?code=4%2F0Ab&scope=read+activity&empty");
        assert_eq!(
            pairs,
            vec![
                ("code".to_string(), "4/0Ab".to_string()),
                ("scope".to_string(), "read activity".to_string()),
                ("empty".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn query_value_finds_first_match() {
        assert_eq!(
            query_value("error=access_denied&error=other", "error").as_deref(),
            Some("access_denied")
        );
        assert!(query_value("", "code").is_none());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn host_navigation_is_inert() {
        assert!(current_path().is_none());
        assert!(query_param("code").is_none());
        redirect_to("/dashboard");
        redirect_to_login_if_needed();
    }
}
