#![cfg(target_arch = "wasm32")]

use apply_core::{LinkKind, PLACEHOLDER_LINK};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimelineElementProps {
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub button: AttrValue,
    #[prop_or_else(placeholder_link)]
    pub link: AttrValue,
}

fn placeholder_link() -> AttrValue {
    AttrValue::Static(PLACEHOLDER_LINK)
}

/// Thẻ chi tiết của một bước: mô tả và nút hành động (nếu có).
#[function_component(TimelineElement)]
pub fn timeline_element(props: &TimelineElementProps) -> Html {
    let action = if props.button.is_empty() {
        Html::default()
    } else {
        render_action(&props.title, &props.button, &props.link)
    };

    html! {
        <div class="timeline-element">
            <p class="timeline-element-description">{ props.description.clone() }</p>
            { action }
        </div>
    }
}

fn render_action(title: &AttrValue, label: &AttrValue, link: &AttrValue) -> Html {
    let aria_label = format!("{label}: {title}");
    match LinkKind::of(link) {
        LinkKind::External => html! {
            <a
                class="timeline-element-action"
                href={link.clone()}
                target="_blank"
                rel="noreferrer"
                aria-label={aria_label}
            >
                { label.clone() }
            </a>
        },
        LinkKind::Internal | LinkKind::Placeholder => html! {
            <a class="timeline-element-action" href={link.clone()} aria-label={aria_label}>
                { label.clone() }
            </a>
        },
    }
}
