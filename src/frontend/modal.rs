use std::rc::Rc;
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;

use super::dom;
use crate::catalog::{Project, ProjectAction};
use crate::config::RuntimeConfig;
use crate::logging::{log_event, LogLevel};
use crate::overlay::ShowcaseAction;

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub project: Project,
    pub images: Vec<AttrValue>,
    pub traps_focus: bool,
    pub on_action: Callback<ShowcaseAction>,
    pub config: Rc<RuntimeConfig>,
}

fn action_link(action: &ProjectAction, accent: &str) -> Html {
    let primary = matches!(action, ProjectAction::Live(_) | ProjectAction::Fallback);
    let class = classes!("modal-action", primary.then_some("primary"));
    let style = primary.then(|| format!("background: {accent};"));
    let body = html! {
        <>
            {action.label()}
            <span class="modal-action-glyph" aria-hidden="true">{action.glyph()}</span>
        </>
    };

    match action.href() {
        Some(href) => html! {
            <a class={class} style={style} href={href.to_string()} target="_blank" rel="noopener noreferrer">
                {body}
            </a>
        },
        None => html! {
            <button class={class} style={style} type="button">{body}</button>
        },
    }
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let project = &props.project;
    let dialog_ref = use_node_ref();
    let close_ref = use_node_ref();
    let video_failed = use_state(|| false);

    {
        let close_ref = close_ref.clone();
        use_effect_with((), move |_| {
            let previous = dom::active_element();
            if let Some(close) = close_ref.cast::<HtmlElement>() {
                let _ = close.focus();
            }

            move || {
                if let Some(previous) = previous {
                    let _ = previous.focus();
                }
            }
        });
    }

    let close = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(ShowcaseAction::CloseModal))
    };

    let onkeydown = {
        let dialog_ref = dialog_ref.clone();
        let traps_focus = props.traps_focus;
        Callback::from(move |event: KeyboardEvent| {
            if !traps_focus || event.key() != "Tab" {
                return;
            }
            if let Some(dialog) = dialog_ref.cast::<Element>() {
                if dom::cycle_focus(&dialog, event.shift_key()) {
                    event.prevent_default();
                }
            }
        })
    };

    let open_lightbox = |index: usize| {
        let on_action = props.on_action.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_action.emit(ShowcaseAction::OpenLightbox(index));
        })
    };

    let on_video_error = {
        let video_failed = video_failed.clone();
        let config = props.config.clone();
        let slug = project.slug.clone();
        Callback::from(move |_: Event| {
            log_event(
                &config,
                LogLevel::Warn,
                "preview_video_failed",
                serde_json::json!({ "project": slug.as_str(), "surface": "modal" }),
            );
            video_failed.set(true);
        })
    };

    let preview = match (project.video(), props.images.first()) {
        (Some(src), _) if !*video_failed => html! {
            <div class="modal-preview video">
                <video autoplay=true muted=true loop=true playsinline=true onerror={on_video_error}>
                    <source src={src.to_string()} type="video/mp4" />
                </video>
            </div>
        },
        (_, Some(first)) => html! {
            <button
                class="modal-preview image"
                type="button"
                aria-label="Open image viewer"
                onclick={open_lightbox(0)}
            >
                <img src={first.clone()} alt={format!("{} preview", project.title)} />
                <span class="modal-preview-zoom" aria-hidden="true">{"⤢"}</span>
            </button>
        },
        _ => Html::default(),
    };

    let thumbnails = (props.images.len() > 1).then(|| {
        html! {
            <div class="modal-thumbnails">
                {for props.images.iter().enumerate().map(|(index, src)| html! {
                    <button
                        key={index}
                        class="modal-thumbnail"
                        type="button"
                        aria-label={format!("Open image {}", index + 1)}
                        onclick={open_lightbox(index)}
                    >
                        <img src={src.clone()} alt="" />
                    </button>
                })}
            </div>
        }
    });

    let status = project.status.map(|status| {
        html! {
            <span class={classes!("status-badge", status.css_class())}>
                <span class={classes!("status-dot", status.pulses().then_some("pulse"))} aria-hidden="true" />
                {status.label()}
            </span>
        }
    });

    let metrics = (!project.metrics.is_empty()).then(|| {
        html! {
            <div class="modal-metrics">
                {for project.metrics.iter().map(|metric| html! {
                    <div key={metric.label.clone()} class="metric-tile">
                        <span class="metric-value">{metric.value.clone()}</span>
                        <span class="metric-label">{metric.label.clone()}</span>
                    </div>
                })}
            </div>
        }
    });

    let features = (!project.features.is_empty()).then(|| {
        html! {
            <div class="modal-features">
                <h4>{"Key Features"}</h4>
                <ul>
                    {for project.features.iter().map(|feature| html! {
                        <li key={feature.title.clone()} class="feature-tile">
                            {for feature.icon.iter().map(|icon| html! {
                                <span class="feature-icon" aria-hidden="true">{icon.clone()}</span>
                            })}
                            <div>
                                <p class="feature-title">{feature.title.clone()}</p>
                                <p class="feature-description">{feature.description.clone()}</p>
                            </div>
                        </li>
                    })}
                </ul>
            </div>
        }
    });

    let accent = project.accent.css_gradient(90);
    let actions = project.actions();
    let stop_propagation = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div
            class="modal-backdrop"
            role="dialog"
            aria-modal="true"
            aria-labelledby="modal-title"
            onclick={close.clone()}
        >
            <div
                ref={dialog_ref}
                class="modal-panel"
                style={format!("--modal-accent: {};", project.accent.color)}
                onclick={stop_propagation}
                onkeydown={onkeydown}
            >
                <button ref={close_ref} class="modal-close" type="button" aria-label="Close modal" onclick={close}>
                    {"×"}
                </button>

                <header class="modal-header">
                    <p class="modal-eyebrow">{project.eyebrow().to_string()}</p>
                    <h3 id="modal-title">{project.title.clone()}</h3>
                    {for project.role.iter().map(|role| html! { <p class="modal-role">{role.clone()}</p> })}
                    {status.unwrap_or_default()}
                </header>

                {preview}
                {thumbnails.unwrap_or_default()}

                <p class="modal-description">{project.long_text().to_string()}</p>

                {metrics.unwrap_or_default()}
                {features.unwrap_or_default()}

                <ul class="tag-list">
                    {for project.display_tags().iter().map(|tag| html! { <li key={tag.clone()} class="tag">{tag.clone()}</li> })}
                </ul>

                <div class="modal-actions">
                    {for actions.iter().map(|action| action_link(action, &accent))}
                </div>
            </div>
        </div>
    }
}
