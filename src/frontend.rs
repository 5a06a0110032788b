mod dom;
mod lightbox;
mod modal;
mod nav;
mod projects;
mod sections;

use gloo_events::EventListener;
use js_sys::{Function, Reflect};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element, MouseEvent};
use yew::prelude::*;

use crate::catalog::Catalog;
use crate::config::RuntimeConfig;
use crate::logging::{log_event, LogLevel};
use crate::theme::{glow_layers, Theme};

use nav::{use_scroll_spy, NavBar};
use projects::ProjectsSection;
use sections::{AboutSection, ContactSection, Footer, Hero, SkillsSection};

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    // The browser invokes the callback after this function returns.
    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<RuntimeConfig>,
    catalog: Rc<Catalog>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let theme = use_state(Theme::default);
    let pointer = use_state(|| None::<(f64, f64)>);
    let (active_section, on_navigate) = use_scroll_spy(props.config.clone());

    {
        let current = *theme;
        let config = props.config.clone();
        let project_count = props.catalog.projects.len();
        use_effect_with((), move |_| {
            apply_theme(current);
            log_event(
                &config,
                LogLevel::Info,
                "app_mounted",
                serde_json::json!({
                    "theme": current.as_str(),
                    "projects": project_count,
                }),
            );
            || ()
        });
    }

    {
        let pointer = pointer.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        pointer.set(Some((f64::from(event.client_x()), f64::from(event.client_y()))));
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        let config = props.config.clone();
        Callback::from(move |_: ()| {
            let next = (*theme).toggled();
            apply_theme_with_transition(next);
            log_event(
                &config,
                LogLevel::Info,
                "theme_toggled",
                serde_json::json!({ "theme": next.as_str() }),
            );
            theme.set(next);
        })
    };

    let palette = theme.palette();
    let glow = (*pointer).map(|(x, y)| {
        glow_layers(*theme)
            .iter()
            .map(|layer| html! { <div class="cursor-glow" aria-hidden="true" style={layer.style(x, y)} /> })
            .collect::<Html>()
    });

    html! {
        <div class={classes!("page", format!("theme-{}", theme.as_str()))} style={palette.css_variables()}>
            {glow.unwrap_or_default()}
            <div class="ambient-orbs" aria-hidden="true">
                <div class="orb orb-1" />
                <div class="orb orb-2" />
                <div class="orb orb-3" />
                <div class="orb orb-4" />
                <div class="orb orb-5" />
            </div>

            <NavBar
                theme={*theme}
                on_toggle_theme={on_toggle_theme}
                active={active_section}
                on_navigate={on_navigate.clone()}
            />

            <main>
                <Hero theme={*theme} on_navigate={on_navigate} />
                <ProjectsSection theme={*theme} catalog={props.catalog.clone()} config={props.config.clone()} />
                <SkillsSection theme={*theme} catalog={props.catalog.clone()} />
                <AboutSection theme={*theme} />
                <ContactSection theme={*theme} />
            </main>

            <Footer theme={*theme} />
        </div>
    }
}

fn load_catalog(config: &RuntimeConfig) -> Catalog {
    match Catalog::bundled() {
        Ok(catalog) => {
            log_event(
                config,
                LogLevel::Info,
                "catalog_loaded",
                serde_json::json!({
                    "projects": catalog.projects.len(),
                    "skills": catalog.skills.len(),
                }),
            );
            catalog
        }
        Err(error) => {
            log_event(
                config,
                LogLevel::Warn,
                "catalog_invalid",
                serde_json::json!({ "message": error.to_string() }),
            );
            Catalog::default()
        }
    }
}

fn config_from_mount(root: &Element) -> RuntimeConfig {
    RuntimeConfig::from_lookup(|name| root.get_attribute(name))
}

pub fn run() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"));
    let config = root.as_ref().map(config_from_mount).unwrap_or_default();
    let catalog = load_catalog(&config);
    let props = AppProps {
        config: Rc::new(config),
        catalog: Rc::new(catalog),
    };

    match root {
        Some(root) => yew::Renderer::<App>::with_root_and_props(root, props).render(),
        None => yew::Renderer::<App>::with_props(props).render(),
    };
}
