use std::fs;

use apply_core::{step_views, timeline_steps, ExpandedSections, StepContent, Viewport};
use serde_json::Value;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn golden_steps() -> Value {
    let expected = fs::read_to_string(fixture_path("timeline_steps.json"))
        .expect("Không đọc được golden timeline");
    serde_json::from_str(&expected).expect("Golden không hợp lệ")
}

#[test]
fn timeline_steps_match_golden() {
    let actual = serde_json::to_value(timeline_steps()).expect("Không serialize timeline");
    assert_eq!(actual, golden_steps());
}

#[test]
fn title_lookups_match_golden() {
    let golden = golden_steps();
    let entries = golden.as_array().expect("Golden phải là mảng");
    assert_eq!(entries.len(), 5);

    for entry in entries {
        let title = entry["title"].as_str().expect("thiếu title");
        let content = StepContent::for_title(title);
        assert_eq!(entry["description"], content.description, "description cho {title}");
        assert_eq!(entry["button"], content.button, "button cho {title}");
        assert_eq!(entry["link"], content.link, "link cho {title}");
    }
}

#[test]
fn every_golden_step_is_visible_on_wide_screens() {
    let titles: Vec<_> = step_views(Viewport::Wide, &ExpandedSections::default())
        .into_iter()
        .filter(|view| view.body_visible && !view.show_toggle)
        .map(|view| Value::from(view.step.title))
        .collect();
    let golden: Vec<_> = golden_steps()
        .as_array()
        .expect("Golden phải là mảng")
        .iter()
        .map(|entry| entry["title"].clone())
        .collect();

    assert_eq!(titles, golden);
}

#[test]
fn partial_options_deserialize_over_defaults() {
    let overrides: apply_core::PageOverrides =
        serde_json::from_str(r#"{ "logo_src": "/static/gsoc.svg" }"#).expect("options hợp lệ");
    let config = apply_core::PageConfig::from(overrides);

    assert_eq!(config.narrow_breakpoint, apply_core::DEFAULT_NARROW_BREAKPOINT);
    assert_eq!(config.logo_src, "/static/gsoc.svg");
    assert!(config.validate().is_ok());
}
