use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;

use super::dom;
use crate::lightbox::Lightbox;
use crate::overlay::ShowcaseAction;

#[derive(Properties, PartialEq)]
pub struct ImageLightboxProps {
    pub images: Vec<AttrValue>,
    pub alt: AttrValue,
    pub lightbox: Lightbox,
    pub on_action: Callback<ShowcaseAction>,
}

#[function_component(ImageLightbox)]
pub fn image_lightbox(props: &ImageLightboxProps) -> Html {
    let backdrop_ref = use_node_ref();
    let close_ref = use_node_ref();

    {
        let close_ref = close_ref.clone();
        use_effect_with((), move |_| {
            let opener = dom::active_element();
            if let Some(close) = close_ref.cast::<HtmlElement>() {
                let _ = close.focus();
            }

            move || {
                if let Some(opener) = opener {
                    let _ = opener.focus();
                }
            }
        });
    }

    let onkeydown = {
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() != "Tab" {
                return;
            }
            if let Some(backdrop) = backdrop_ref.cast::<Element>() {
                if dom::cycle_focus(&backdrop, event.shift_key()) {
                    event.prevent_default();
                }
            }
        })
    };

    let lightbox = props.lightbox;
    let index = lightbox.current_index();
    let Some(src) = props.images.get(index).cloned() else {
        return Html::default();
    };

    let emit = |action: ShowcaseAction| {
        let on_action = props.on_action.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_action.emit(action);
        })
    };

    let onload = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: Event| on_action.emit(ShowcaseAction::ImageLoaded(index)))
    };

    let onerror = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: Event| on_action.emit(ShowcaseAction::ImageFailed(index)))
    };

    let navigation = lightbox.has_navigation().then(|| {
        html! {
            <>
                <span class="lightbox-counter">{lightbox.counter_label()}</span>
                <button class="lightbox-nav prev" type="button" aria-label="Previous image" onclick={emit(ShowcaseAction::Prev)}>
                    {"‹"}
                </button>
                <button class="lightbox-nav next" type="button" aria-label="Next image" onclick={emit(ShowcaseAction::Next)}>
                    {"›"}
                </button>
            </>
        }
    });

    let thumbnails = lightbox.shows_thumbnails().then(|| {
        html! {
            <div class="lightbox-thumbnails" onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}>
                {for props.images.iter().enumerate().map(|(position, thumb)| html! {
                    <button
                        key={position}
                        type="button"
                        class={classes!("lightbox-thumbnail", (position == index).then_some("is-current"))}
                        aria-label={format!("Show image {}", position + 1)}
                        aria-current={(position == index).then_some("true")}
                        onclick={emit(ShowcaseAction::Jump(position))}
                    >
                        <img src={thumb.clone()} alt={format!("Thumbnail {}", position + 1)} />
                    </button>
                })}
            </div>
        }
    });

    let hint = lightbox.has_navigation().then(|| {
        html! { <p class="lightbox-hint">{"Use ← → to navigate · Esc to close"}</p> }
    });

    html! {
        <div
            ref={backdrop_ref}
            class="lightbox-backdrop"
            role="dialog"
            aria-modal="true"
            aria-label="Image viewer"
            onclick={emit(ShowcaseAction::CloseLightbox)}
            onkeydown={onkeydown}
        >
            <button ref={close_ref} class="lightbox-close" type="button" aria-label="Close image viewer" onclick={emit(ShowcaseAction::CloseLightbox)}>
                {"×"}
            </button>

            {navigation.unwrap_or_default()}

            <div class="lightbox-stage" onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}>
                if lightbox.is_loading() {
                    <div class="lightbox-spinner" role="status" aria-label="Loading image" />
                }
                <div class="lightbox-frame">
                    <img
                        key={index}
                        class={classes!("lightbox-image", lightbox.is_loading().then_some("is-loading"))}
                        src={src}
                        alt={format!("{} {}", props.alt, index + 1)}
                        onload={onload}
                        onerror={onerror}
                    />
                </div>
            </div>

            {thumbnails.unwrap_or_default()}
            {hint.unwrap_or_default()}
        </div>
    }
}
