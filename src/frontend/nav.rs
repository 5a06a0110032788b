use gloo_events::EventListener;
use std::rc::Rc;
use web_sys::window;
use yew::prelude::*;

use super::dom;
use crate::config::RuntimeConfig;
use crate::logging::{log_event, LogLevel};
use crate::scroll_spy::{ScrollSpy, Section, SectionBounds};
use crate::theme::Theme;

#[derive(Clone, PartialEq)]
struct SpyModel(ScrollSpy);

enum SpyAction {
    Scrolled {
        scroll_y: f64,
        measured: Vec<(Section, SectionBounds)>,
    },
    Selected(Section),
}

impl Reducible for SpyModel {
    type Action = SpyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut spy = self.0;
        let changed = match action {
            SpyAction::Scrolled { scroll_y, measured } => spy.observe(scroll_y, &measured),
            SpyAction::Selected(section) => {
                let changed = spy.active() != section;
                spy.select(section);
                changed
            }
        };

        if changed {
            Rc::new(Self(spy))
        } else {
            self
        }
    }
}

/// Scroll-spy state shared by every control that navigates the page. Returns
/// the highlighted section and a callback that highlights, logs and scrolls.
#[hook]
pub fn use_scroll_spy(config: Rc<RuntimeConfig>) -> (Section, Callback<Section>) {
    let spy = {
        let look_ahead = config.scroll_offset;
        use_reducer(move || SpyModel(ScrollSpy::new(look_ahead)))
    };

    {
        let dispatcher = spy.dispatcher();
        use_effect_with((), move |_| {
            let observe = move || {
                dispatcher.dispatch(SpyAction::Scrolled {
                    scroll_y: dom::scroll_y(),
                    measured: dom::measure_sections(),
                });
            };
            observe();

            let listener = window().map(|win| EventListener::new(&win, "scroll", move |_| observe()));
            move || drop(listener)
        });
    }

    let go_to = {
        let dispatcher = spy.dispatcher();
        Callback::from(move |section: Section| {
            dispatcher.dispatch(SpyAction::Selected(section));
            log_event(
                &config,
                LogLevel::Info,
                "section_selected",
                serde_json::json!({ "section": section.id() }),
            );

            if !dom::scroll_to_section(section.id()) {
                log_event(
                    &config,
                    LogLevel::Debug,
                    "section_target_missing",
                    serde_json::json!({ "section": section.id() }),
                );
            }
        })
    };

    (spy.0.active(), go_to)
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
    pub active: Section,
    pub on_navigate: Callback<Section>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let go_to = props.on_navigate.clone();
    let active = props.active;
    let palette = props.theme.palette();

    let items = Section::ALL
        .into_iter()
        .map(|section| {
            let onclick = {
                let go_to = go_to.clone();
                Callback::from(move |_: MouseEvent| go_to.emit(section))
            };
            let is_active = section == active;

            html! {
                <button
                    key={section.id()}
                    type="button"
                    class={classes!("nav-item", is_active.then_some("is-active"))}
                    aria-current={is_active.then_some("true")}
                    style={(!is_active).then(|| format!("color: {};", palette.text_subtle))}
                    onclick={onclick}
                >
                    {section.label()}
                </button>
            }
        })
        .collect::<Html>();

    let on_toggle = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let on_talk = {
        let go_to = go_to.clone();
        Callback::from(move |_: MouseEvent| go_to.emit(Section::Contact))
    };

    html! {
        <nav class="site-nav" aria-label="Primary">
            <div class="nav-inner">
                <div class="nav-logo" aria-hidden="true">{"TO"}</div>

                <div class="nav-items" style={format!("border-color: {};", palette.border)}>
                    {items}
                </div>

                <div class="nav-actions">
                    <button
                        class="theme-toggle"
                        type="button"
                        aria-label={props.theme.toggle_label()}
                        aria-pressed={props.theme.pressed().to_string()}
                        onclick={on_toggle}
                    >
                        <span aria-hidden="true">{props.theme.icon()}</span>
                    </button>
                    <button class="nav-cta" type="button" onclick={on_talk}>
                        {"Let's Talk"}
                    </button>
                </div>
            </div>
        </nav>
    }
}
