//! Bridge WASM <-> JavaScript trung lập framework cho nội dung trang ứng tuyển.

use apply_core::{
    timeline_steps as catalog, ApplyError, LinkKind, PageConfig, PageOverrides, StepContent,
    PAGE_COPY,
};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Serialize, Debug, PartialEq)]
struct JsStepContent {
    description: &'static str,
    button: &'static str,
    link: &'static str,
    link_kind: LinkKind,
    has_button: bool,
}

impl From<StepContent> for JsStepContent {
    fn from(content: StepContent) -> Self {
        Self {
            description: content.description,
            button: content.button,
            link: content.link,
            link_kind: content.link_kind(),
            has_button: content.has_button(),
        }
    }
}

/// Danh sách năm bước theo thứ tự hiển thị.
#[wasm_bindgen]
pub fn timeline_steps() -> Result<JsValue, JsValue> {
    install_panic_hook();
    to_value(&catalog())
        .map_err(|err| JsValue::from_str(&format!("Không serialize timeline: {err}")))
}

/// Tra cứu nội dung theo tiêu đề; tiêu đề lạ trả về bản ghi mặc định.
#[wasm_bindgen]
pub fn step_content(title: &str) -> Result<JsValue, JsValue> {
    install_panic_hook();
    to_value(&JsStepContent::from(StepContent::for_title(title)))
        .map_err(|err| JsValue::from_str(&format!("Không serialize nội dung bước: {err}")))
}

/// Trả về `"narrow"` hoặc `"wide"` cho chiều rộng đã cho.
#[wasm_bindgen]
pub fn classify_viewport(width: f64, options: Option<JsValue>) -> Result<String, JsValue> {
    install_panic_hook();
    let overrides = match options {
        Some(js_options) => Some(
            from_value::<PageOverrides>(js_options)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được options: {err}")))?,
        ),
        None => None,
    };

    let config = resolve_config(overrides)
        .map_err(|err| JsValue::from_str(&format_apply_error(err)))?;
    Ok(config.classify(width).as_str().to_string())
}

/// Tiêu đề, mô tả meta, đoạn giới thiệu và liên kết chương trình.
#[wasm_bindgen]
pub fn page_copy() -> Result<JsValue, JsValue> {
    install_panic_hook();
    to_value(&PAGE_COPY)
        .map_err(|err| JsValue::from_str(&format!("Không serialize nội dung trang: {err}")))
}

fn resolve_config(overrides: Option<PageOverrides>) -> Result<PageConfig, ApplyError> {
    let config = overrides.map(PageConfig::from).unwrap_or_default();
    config.validate()?;
    Ok(config)
}

fn install_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

fn format_apply_error(err: ApplyError) -> String {
    format!("Apply timeline error: {err}")
}
