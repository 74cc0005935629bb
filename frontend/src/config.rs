use web_sys::window;

pub fn get_api_base_url() -> String {
    // A build-time override wins, e.g. WHEEL_API_URL=https://api.example.org trunk build
    if let Some(url) = option_env!("WHEEL_API_URL") {
        if !url.is_empty() {
            return url.trim_end_matches('/').to_string();
        }
    }

    // Otherwise talk to the origin that served the mini-app
    if let Some(window) = window() {
        if let (Ok(protocol), Ok(host)) = (window.location().protocol(), window.location().host()) {
            if !host.is_empty() {
                return format!("{}//{}", protocol, host);
            }
        }
    }

    // Relative URLs as a last resort
    String::new()
}

pub fn get_api_url(path: &str) -> String {
    format!("{}{}", get_api_base_url(), path)
}
