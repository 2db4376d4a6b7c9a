#![cfg(target_arch = "wasm32")]

//! Lắng nghe sự kiện `resize` của window trong phạm vi một component.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, Window};

const RESIZE_EVENT: &str = "resize";

/// Listener gắn vào `window`; bị gỡ khi giá trị này bị drop.
pub struct ResizeSubscription {
    window: Window,
    handler: Closure<dyn FnMut(Event)>,
}

impl ResizeSubscription {
    /// Đăng ký `on_width` và gọi ngay một lần với chiều rộng hiện tại.
    pub fn subscribe<F>(window: Window, mut on_width: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) + 'static,
    {
        if let Some(width) = inner_width(&window) {
            on_width(width);
        }

        let source = window.clone();
        let handler = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            if let Some(width) = inner_width(&source) {
                on_width(width);
            }
        });
        window.add_event_listener_with_callback(RESIZE_EVENT, handler.as_ref().unchecked_ref())?;

        Ok(Self { window, handler })
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(RESIZE_EVENT, self.handler.as_ref().unchecked_ref())
        {
            log::warn!("Không gỡ được listener resize: {err:?}");
        }
    }
}

fn inner_width(window: &Window) -> Option<f64> {
    window.inner_width().ok().and_then(|value| value.as_f64())
}
