//! Trang "Application Timeline" dựng bằng Yew cho môi trường WebAssembly.

#[cfg(target_arch = "wasm32")]
mod element;
#[cfg(target_arch = "wasm32")]
mod resize;
#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use crate::element::TimelineElement;
    use crate::resize::ResizeSubscription;
    use crate::styles;
    use apply_core::{
        step_views, ExpandedSections, PageConfig, PageOverrides, SectionAction, StepId, StepView,
        Viewport, PAGE_COPY,
    };
    use std::rc::Rc;
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, Window};
    use yew::prelude::*;

    #[derive(Properties, PartialEq)]
    pub struct ApplyPageProps {
        pub config: PageConfig,
    }

    /// Cờ mở rộng giữ trong reducer để mỗi thao tác áp lên trạng thái mới nhất.
    #[derive(Default, PartialEq)]
    struct ExpandedState(ExpandedSections);

    impl Reducible for ExpandedState {
        type Action = SectionAction;

        fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
            Rc::new(Self(self.0.reduce(action)))
        }
    }

    #[function_component(ApplyPage)]
    fn apply_page(props: &ApplyPageProps) -> Html {
        let config = &props.config;

        use_effect_with((), |_| {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                if let Err(err) = styles::ensure_styles(&document) {
                    log::error!("Không chèn được stylesheet: {err:?}");
                }
                if let Err(err) = styles::ensure_head_metadata(
                    &document,
                    PAGE_COPY.title,
                    PAGE_COPY.meta_description,
                ) {
                    log::error!("Không cập nhật được thẻ <head>: {err:?}");
                }
            }
            || ()
        });

        let viewport = use_state_eq(Viewport::default);
        let expanded = use_reducer(ExpandedState::default);

        {
            let viewport = viewport.clone();
            use_effect_with(config.narrow_breakpoint, move |&breakpoint| {
                let mut last = None;
                let subscription = web_sys::window().and_then(|window| {
                    ResizeSubscription::subscribe(window, move |width| {
                        let next = Viewport::classify(width, breakpoint);
                        if last != Some(next) {
                            log::debug!("Viewport {} (width={width})", next.as_str());
                            last = Some(next);
                            viewport.set(next);
                        }
                    })
                    .map_err(|err| log::error!("Không đăng ký được listener resize: {err:?}"))
                    .ok()
                });
                move || drop(subscription)
            });
        }

        let on_toggle = {
            let expanded = expanded.dispatcher();
            Callback::from(move |id: StepId| {
                expanded.dispatch(SectionAction::Toggle(id));
            })
        };

        let views = step_views(*viewport, &expanded.0);

        html! {
            <div class="apply-root">
                <p class="apply-intro">
                    { PAGE_COPY.intro[0] }
                    <br />
                    { PAGE_COPY.intro[1] }
                </p>
                <ol class="apply-steps" data-viewport={viewport.as_str()}>
                    { for views.into_iter().enumerate().map(|(index, view)| render_step(index, view, &on_toggle)) }
                </ol>
                { render_program_panel(&config.logo_src) }
            </div>
        }
    }

    fn render_step(index: usize, view: StepView, on_toggle: &Callback<StepId>) -> Html {
        let StepView {
            step,
            expanded,
            show_toggle,
            body_visible,
            toggle_label,
        } = view;
        let body_id = format!("apply-step-body-{index}");

        let toggle = if show_toggle {
            let id = step.id;
            html! {
                <button
                    type="button"
                    class="apply-step-toggle"
                    aria-expanded={expanded.to_string()}
                    aria-controls={body_id.clone()}
                    onclick={on_toggle.reform(move |_: MouseEvent| id)}
                >
                    { toggle_label }
                </button>
            }
        } else {
            Html::default()
        };

        html! {
            <li key={step.title} class="apply-step">
                <div class="apply-step-header">
                    <h3 class="apply-step-title">{ step.title }</h3>
                    { toggle }
                </div>
                <div id={body_id} class={classes!("apply-step-body", (!body_visible).then_some("is-collapsed"))}>
                    <TimelineElement
                        title={step.title}
                        description={step.description}
                        button={step.button}
                        link={step.link}
                    />
                </div>
            </li>
        }
    }

    fn render_program_panel(logo_src: &str) -> Html {
        html! {
            <div class="program-panel">
                <img class="program-logo" src={logo_src.to_string()} width="700" alt={PAGE_COPY.logo_alt} />
                <div class="program-links">
                    {
                        for PAGE_COPY.program_links.iter().map(|link| html! {
                            <a class="program-link" href={link.href}>{ link.label }</a>
                        })
                    }
                </div>
            </div>
        }
    }

    fn init_logging() {
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        if console_log::init_with_level(level).is_err() {
            log::debug!("Logger đã được khởi tạo trước đó");
        }
    }

    #[wasm_bindgen]
    pub fn mount_apply_page(selector: &str, options: Option<JsValue>) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        init_logging();

        let window: Window =
            web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))?;

        let config = match options {
            Some(js_options) => {
                let overrides: PageOverrides = from_value(js_options)
                    .map_err(|err| JsValue::from_str(&format!("Không đọc được options: {err}")))?;
                PageConfig::from(overrides)
            }
            None => PageConfig::default(),
        };
        config
            .validate()
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        log::info!("Gắn trang {} vào {selector}", PAGE_COPY.title);
        yew::Renderer::<ApplyPage>::with_root_and_props(target, ApplyPageProps { config })
            .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_apply_page;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_apply_page(
    _: &str,
    _: Option<wasm_bindgen::JsValue>,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "apply-ui chỉ hỗ trợ biên dịch target wasm32",
    ))
}
