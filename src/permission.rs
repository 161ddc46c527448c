//! Browser side of the sensor permission prompt.

use crate::constants::REQUEST_PERMISSION_FN;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorSupport {
    Unsupported,
    /// `requestPermission` exists and must be called from a user gesture.
    NeedsPermission,
    Available,
}

fn sensor_api(api: &str) -> Option<JsValue> {
    let window = web::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(api))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

pub fn sensor_support(api: &str) -> SensorSupport {
    let Some(ctor) = sensor_api(api) else {
        return SensorSupport::Unsupported;
    };
    let needs_prompt = js_sys::Reflect::get(&ctor, &JsValue::from_str(REQUEST_PERMISSION_FN))
        .map(|f| f.is_function())
        .unwrap_or(false);
    if needs_prompt {
        SensorSupport::NeedsPermission
    } else {
        SensorSupport::Available
    }
}

/// Call `<api>.requestPermission()`. Must run synchronously inside the user
/// gesture; only the returned promise may be awaited later.
pub fn request_permission(api: &str) -> anyhow::Result<js_sys::Promise> {
    let ctor = sensor_api(api).ok_or_else(|| anyhow::anyhow!("{api} not available"))?;
    let request: js_sys::Function =
        js_sys::Reflect::get(&ctor, &JsValue::from_str(REQUEST_PERMISSION_FN))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("{api}.{REQUEST_PERMISSION_FN} is not a function"))?;
    request
        .call0(&ctor)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| anyhow::anyhow!("{api}.{REQUEST_PERMISSION_FN} did not return a promise"))
}

/// Await a permission promise; `Ok(true)` only for `"granted"`.
pub async fn await_permission(promise: js_sys::Promise) -> anyhow::Result<bool> {
    let response = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(response
        .as_string()
        .map(|s| parallax_core::is_granted(&s))
        .unwrap_or(false))
}
