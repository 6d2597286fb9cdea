//! Clock and timer helpers that work in the browser and in native tests.

use std::time::Duration;

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    let _ = duration;
}

#[cfg(target_arch = "wasm32")]
pub fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    format!("{h:02}:{m:02}")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_time() -> String {
    "00:00".to_string()
}

/// Today's date as `YYYY-MM-DD`, the format of date inputs.
#[cfg(target_arch = "wasm32")]
pub fn today() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        date.get_full_year(),
        date.get_month() + 1,
        date.get_date()
    )
}

#[cfg(not(target_arch = "wasm32"))]
pub fn today() -> String {
    "1970-01-01".to_string()
}

#[cfg(target_arch = "wasm32")]
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_year() -> u32 {
    1970
}
