use gloo_events::EventListener;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlVideoElement, KeyboardEvent};
use yew::prelude::*;

use super::dom::{self, ScrollLock};
use super::lightbox::ImageLightbox;
use super::modal::ProjectModal;
use crate::catalog::{Catalog, Project};
use crate::config::RuntimeConfig;
use crate::logging::{log_event, LogLevel};
use crate::overlay::{Key, Layer, Showcase, ShowcaseAction};
use crate::theme::Theme;

#[derive(Clone, Default, PartialEq)]
struct ShowcaseModel(Showcase);

impl Reducible for ShowcaseModel {
    type Action = ShowcaseAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut showcase = self.0;
        showcase.apply(action);

        if showcase == self.0 {
            self
        } else {
            Rc::new(Self(showcase))
        }
    }
}

fn activation_keydown(on_select: Callback<()>) -> Callback<KeyboardEvent> {
    Callback::from(move |event: KeyboardEvent| {
        if Key::from_name(&event.key()).is_some_and(Key::activates) {
            event.prevent_default();
            on_select.emit(());
        }
    })
}

fn on_play_rejected(config: &Rc<RuntimeConfig>, slug: &str) -> impl FnOnce() + 'static {
    let config = config.clone();
    let slug = slug.to_string();
    move || {
        log_event(
            &config,
            LogLevel::Debug,
            "preview_video_play_rejected",
            serde_json::json!({ "project": slug }),
        );
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    theme: Theme,
    on_select: Callback<()>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let palette = props.theme.palette();
    let onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(()))
    };
    let onkeydown = activation_keydown(props.on_select.clone());

    html! {
        <div
            class="project-card"
            role="button"
            tabindex="0"
            aria-label={format!("View {} project details", project.title)}
            style={format!("--card-accent: {}; --card-gradient: {}; border-color: {};", project.accent.color, project.accent.css_gradient(135), palette.border)}
            onclick={onclick}
            onkeydown={onkeydown}
        >
            <div class="project-card-header">
                <div>
                    <p class="project-card-subtitle" style={format!("color: {};", palette.text_subtle)}>{project.subtitle.clone()}</p>
                    <h3>{project.title.clone()}</h3>
                </div>
                <span class="project-card-arrow" aria-hidden="true">{"↗"}</span>
            </div>
            <p class="project-card-description" style={format!("color: {};", palette.text_muted)}>{project.description.clone()}</p>
            <ul class="tag-list">
                {for project.tags.iter().map(|tag| html! { <li key={tag.clone()} class="tag">{tag.clone()}</li> })}
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FeaturedProjectCardProps {
    project: Project,
    theme: Theme,
    on_select: Callback<()>,
    config: Rc<RuntimeConfig>,
}

#[function_component(FeaturedProjectCard)]
fn featured_project_card(props: &FeaturedProjectCardProps) -> Html {
    let project = &props.project;
    let palette = props.theme.palette();
    let video_ref = use_node_ref();
    let video_failed = use_state(|| false);

    let onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(()))
    };
    let onkeydown = activation_keydown(props.on_select.clone());

    let onmouseenter = {
        let video_ref = video_ref.clone();
        let config = props.config.clone();
        let slug = project.slug.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                dom::play_muted(&video, on_play_rejected(&config, &slug));
            }
        })
    };

    let onmouseleave = {
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                dom::pause_and_rewind(&video);
            }
        })
    };

    let on_frame_click = {
        let video_ref = video_ref.clone();
        let config = props.config.clone();
        let slug = project.slug.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            let Some(video) = video_ref.cast::<HtmlVideoElement>() else {
                return;
            };
            if video.paused() {
                dom::play_muted(&video, on_play_rejected(&config, &slug));
            } else {
                let _ = video.pause();
            }
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
                serde_json::json!({ "project": slug.as_str(), "surface": "featured_card" }),
            );
            video_failed.set(true);
        })
    };

    let phone = project.video().filter(|_| !*video_failed).map(|src| {
        html! {
            <div class="phone-mockup" onclick={on_frame_click}>
                <div class="phone-frame">
                    <div class="phone-notch" aria-hidden="true" />
                    <div class="phone-screen">
                        <video ref={video_ref.clone()} muted=true loop=true playsinline=true preload="metadata" onerror={on_video_error}>
                            <source src={src.to_string()} type="video/mp4" />
                        </video>
                        <div class="phone-play-overlay" aria-hidden="true">
                            <span>{"▶"}</span>
                        </div>
                    </div>
                </div>
                <div class="phone-glow" style={format!("background: {};", project.accent.css_gradient(135))} aria-hidden="true" />
            </div>
        }
    });

    html! {
        <div
            class="project-card featured"
            role="button"
            tabindex="0"
            aria-label={format!("View {} project details", project.title)}
            style={format!("--card-accent: {}; --card-gradient: {}; border-color: {};", project.accent.color, project.accent.css_gradient(135), palette.border)}
            onclick={onclick}
            onkeydown={onkeydown}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <div class="featured-copy">
                <span class="featured-badge">
                    <span class="pulse-dot" aria-hidden="true" />
                    {"Featured Project"}
                </span>
                <p class="project-card-subtitle" style={format!("color: {};", palette.text_subtle)}>{project.subtitle.clone()}</p>
                <h3>{project.title.clone()}</h3>
                <p class="project-card-description" style={format!("color: {};", palette.text_muted)}>{project.long_text().to_string()}</p>
                <ul class="tag-list">
                    {for project.tags.iter().map(|tag| html! { <li key={tag.clone()} class="tag">{tag.clone()}</li> })}
                </ul>
                <span class="featured-cta" style={format!("color: {};", palette.eyebrow)}>
                    {"View Case Study"}
                    <span aria-hidden="true">{"→"}</span>
                </span>
            </div>
            {phone.unwrap_or_default()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsSectionProps {
    pub theme: Theme,
    pub catalog: Rc<Catalog>,
    pub config: Rc<RuntimeConfig>,
}

#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsSectionProps) -> Html {
    let showcase = use_reducer(ShowcaseModel::default);
    let state = showcase.0;

    use_effect_with(state.scroll_locked(), |locked| {
        let guard = if *locked { ScrollLock::acquire() } else { None };
        move || drop(guard)
    });

    {
        let dispatcher = showcase.dispatcher();
        use_effect_with(!state.stack().is_empty(), move |active| {
            let listener = if *active {
                window().map(|win| {
                    EventListener::new(&win, "keydown", move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        match Key::from_name(&event.key()) {
                            Some(key @ (Key::Escape | Key::ArrowLeft | Key::ArrowRight)) => {
                                dispatcher.dispatch(ShowcaseAction::Key(key));
                            }
                            _ => {}
                        }
                    })
                })
            } else {
                None
            };
            move || drop(listener)
        });
    }

    {
        let config = props.config.clone();
        let stack = state.stack();
        use_effect_with((stack.top(), stack.depth()), move |(top, depth)| {
            log_event(
                &config,
                LogLevel::Info,
                "overlay_changed",
                serde_json::json!({
                    "top": top.map(Layer::as_str),
                    "depth": depth,
                }),
            );
            || ()
        });
    }

    {
        let config = props.config.clone();
        let position = state.lightbox().map(|lightbox| lightbox.current_index());
        use_effect_with(position, move |position| {
            if let Some(index) = position {
                log_event(
                    &config,
                    LogLevel::Debug,
                    "lightbox_navigated",
                    serde_json::json!({ "index": index }),
                );
            }
            || ()
        });
    }

    let select = {
        let dispatcher = showcase.dispatcher();
        let config = props.config.clone();
        move |project: &Project| {
            let dispatcher = dispatcher.clone();
            let config = config.clone();
            let project_id = project.id;
            let image_count = project.image_set().len();
            let slug = project.slug.clone();
            Callback::from(move |_: ()| {
                log_event(
                    &config,
                    LogLevel::Info,
                    "project_selected",
                    serde_json::json!({ "project": slug.as_str() }),
                );
                dispatcher.dispatch(ShowcaseAction::Select {
                    project_id,
                    image_count,
                });
            })
        }
    };

    let featured_slug = props.config.featured_slug.as_str();
    let featured = props.catalog.featured(featured_slug).map(|project| {
        html! {
            <FeaturedProjectCard
                key={project.slug.clone()}
                project={project.clone()}
                theme={props.theme}
                on_select={select(project)}
                config={props.config.clone()}
            />
        }
    });

    let others = props
        .catalog
        .others(featured_slug)
        .map(|project| {
            html! {
                <ProjectCard
                    key={project.slug.clone()}
                    project={project.clone()}
                    theme={props.theme}
                    on_select={select(project)}
                />
            }
        })
        .collect::<Html>();

    let overlays = state
        .selection()
        .and_then(|selection| props.catalog.find(selection.project_id).map(|project| (selection, project)))
        .map(|(selection, project)| {
            let on_action = {
                let dispatcher = showcase.dispatcher();
                Callback::from(move |action: ShowcaseAction| dispatcher.dispatch(action))
            };
            let images: Vec<AttrValue> = project
                .image_set()
                .into_iter()
                .map(|src| AttrValue::from(src.to_string()))
                .collect();
            let lightbox = selection
                .lightbox
                .is_open()
                .then(|| html! {
                    <ImageLightbox
                        images={images.clone()}
                        alt={AttrValue::from(format!("{} preview", project.title))}
                        lightbox={selection.lightbox}
                        on_action={on_action.clone()}
                    />
                });

            html! {
                <>
                    <ProjectModal
                        key={project.slug.clone()}
                        project={project.clone()}
                        images={images}
                        traps_focus={state.stack().traps_focus(Layer::ProjectModal)}
                        on_action={on_action}
                        config={props.config.clone()}
                    />
                    {lightbox.unwrap_or_default()}
                </>
            }
        });

    let palette = props.theme.palette();

    html! {
        <section id="work" class="projects">
            <header class="section-header">
                <div>
                    <p class="eyebrow" style={format!("color: {};", palette.eyebrow)}>{"// Selected Work"}</p>
                    <h2>{"Featured Projects"}</h2>
                </div>
                <p class="section-blurb" style={format!("color: {};", palette.text_subtle)}>
                    {"A collection of projects I've built with passion and attention to detail."}
                </p>
            </header>

            <div class="project-grid">
                {featured.unwrap_or_default()}
                {others}
            </div>

            {overlays.unwrap_or_default()}
        </section>
    }
}
