// Browser console logging. Only call these from browser glue; on native
// targets the underlying web_sys calls are unavailable.

macro_rules! console_log {
    ($($t:tt)*) => {
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&format!($($t)*)))
    };
}

macro_rules! console_warn {
    ($($t:tt)*) => {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&format!($($t)*)))
    };
}
