#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-apply-ui]";

/// Default CSS for the page along with easy-to-override design tokens.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --apply-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --apply-mono-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace;
  --apply-text: #18181b;
  --apply-muted: #52525b;
  --apply-rail: #e5e7eb;
  --apply-accent: #2563eb;
  --apply-accent-text: #ffffff;
  --apply-surface: #ffffff;
  --apply-panel-bg: rgba(161, 161, 170, 0.2);
  --apply-radius: 24px;
}

@media (prefers-color-scheme: dark) {
  :root {
    --apply-text: #f4f4f5;
    --apply-muted: #a1a1aa;
    --apply-rail: #374151;
    --apply-surface: #27272a;
    --apply-panel-bg: rgba(255, 255, 255, 0.7);
  }
}

.apply-root {
  font-family: var(--apply-font-family);
  color: var(--apply-text);
  margin: 80px auto 112px;
  max-width: 1024px;
  padding: 0 24px;
}

.apply-intro {
  margin-top: 20px;
  color: var(--apply-muted);
  font-family: var(--apply-mono-family);
  font-size: 1.125rem;
  line-height: 1.75rem;
}

.apply-steps {
  position: relative;
  list-style: none;
  margin: 64px 0 0;
  padding: 0 0 0 24px;
  border-left: 2px solid var(--apply-rail);
}

.apply-step {
  margin-bottom: 24px;
}

.apply-step-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 12px;
}

.apply-step-title {
  margin: 0;
  font-size: 1.125rem;
  font-weight: 700;
}

.apply-step-toggle {
  color: var(--apply-accent);
  background: var(--apply-surface);
  border: 1px solid var(--apply-accent);
  border-radius: 8px;
  padding: 8px 16px;
  cursor: pointer;
  transition: background 0.3s ease, color 0.3s ease;
}

.apply-step-toggle:hover,
.apply-step-toggle:focus-visible {
  background: var(--apply-accent);
  color: var(--apply-accent-text);
  outline: none;
}

.apply-step-body {
  margin-top: 8px;
}

.apply-step-body.is-collapsed {
  display: none;
}

.timeline-element-description {
  margin: 0 0 12px;
  color: var(--apply-muted);
  line-height: 1.6;
}

.timeline-element-action {
  display: inline-flex;
  align-items: center;
  padding: 8px 16px;
  border-radius: 8px;
  background: var(--apply-accent);
  color: var(--apply-accent-text);
  font-weight: 600;
  text-decoration: none;
}

.program-panel {
  position: relative;
  display: block;
  margin-top: 80px;
  padding: 32px 32px 64px;
  border-radius: var(--apply-radius);
  background: var(--apply-panel-bg);
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.program-logo {
  display: block;
  max-width: 100%;
  height: auto;
  margin: 0 auto;
}

.program-links {
  display: flex;
  justify-content: center;
  gap: 24px;
  margin-top: 40px;
}

.program-link {
  display: inline-flex;
  align-items: center;
  border-radius: 8px;
  padding: 12px 32px;
  background: var(--apply-surface);
  color: var(--apply-text);
  font-family: var(--apply-mono-family);
  font-weight: 600;
  text-align: center;
  text-decoration: none;
}

@media (max-width: 767px) {
  .apply-root {
    margin-top: 48px;
    padding: 0 16px;
  }

  .apply-steps {
    padding-left: 16px;
  }

  .program-links {
    flex-direction: column;
    align-items: stretch;
  }

  .program-link {
    justify-content: center;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-apply-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.dyn_into::<Node>()?)?;

    Ok(())
}

/// Đặt `<title>` và `<meta name="description">`, tạo thẻ meta nếu chưa có.
pub fn ensure_head_metadata(
    document: &Document,
    title: &str,
    description: &str,
) -> Result<(), JsValue> {
    document.set_title(title);

    let meta = match document.query_selector("meta[name=\"description\"]")? {
        Some(meta) => meta,
        None => {
            let head = document
                .head()
                .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;
            let meta = document.create_element("meta")?;
            meta.set_attribute("name", "description")?;
            head.append_child(&meta.clone().dyn_into::<Node>()?)?;
            meta
        }
    };
    meta.set_attribute("content", description)?;

    Ok(())
}
