use js_sys::{Array, Function, Reflect};
use shared::constants::INIT_DATA_PARAM;
use shared::{Identity, RendererError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, UrlSearchParams};

// Bridge to the messaging platform's `window.Telegram.WebApp` object.

fn platform_error(err: JsValue) -> RendererError {
    RendererError::Platform(format!("{:?}", err))
}

fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn web_app() -> Option<JsValue> {
    let window = window()?;
    let telegram = property(&window, "Telegram")?;
    property(&telegram, "WebApp")
}

fn call_method(target: &JsValue, name: &str, args: &[JsValue]) -> Result<JsValue, RendererError> {
    let method = property(target, name)
        .ok_or_else(|| RendererError::Platform(format!("{} is not available", name)))?;
    let function = method
        .dyn_into::<Function>()
        .map_err(|_| RendererError::Platform(format!("{} is not a function", name)))?;

    let arguments = Array::new();
    for arg in args {
        arguments.push(arg);
    }
    function.apply(target, &arguments).map_err(platform_error)
}

/// Session data injected by the host when the widget is opened inside the app.
pub fn platform_init_data() -> Option<String> {
    web_app()
        .and_then(|app| property(&app, "initData"))
        .and_then(|value| value.as_string())
}

/// Same token passed on the URL, for opening the widget in a plain browser tab.
pub fn query_init_data() -> Option<String> {
    let search = window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(INIT_DATA_PARAM)
}

pub fn resolve_identity() -> Option<Identity> {
    let identity = Identity::resolve(platform_init_data(), query_init_data());
    if identity.is_none() {
        log::info!("no session data found, spinning is disabled");
    }
    identity
}

/// Tells the host the widget is ready and asks for the full-height viewport.
pub fn announce_ready() {
    let Some(app) = web_app() else {
        log::debug!("not running inside the platform web view");
        return;
    };

    for method in ["ready", "expand"] {
        if let Err(err) = call_method(&app, method, &[]) {
            log::debug!("WebApp.{} failed: {}", method, err);
        }
    }
}

pub fn haptic_success() -> Result<(), RendererError> {
    let app = web_app().ok_or_else(|| RendererError::Platform("WebApp is not available".to_string()))?;
    let feedback = property(&app, "HapticFeedback")
        .ok_or_else(|| RendererError::Platform("HapticFeedback is not available".to_string()))?;
    call_method(&feedback, "notificationOccurred", &[JsValue::from_str("success")])?;
    Ok(())
}
