use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    window, Element, HtmlElement, HtmlMediaElement, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::scroll_spy::{Section, SectionBounds};

const FOCUSABLE_SELECTOR: &str =
    "a[href], button:not([disabled]), [tabindex]:not([tabindex='-1'])";

fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Suspends page scrolling until dropped. Restores whatever `overflow` value
/// the body had before.
pub struct ScrollLock {
    previous: String,
}

impl ScrollLock {
    pub fn acquire() -> Option<Self> {
        let style = body()?.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        let _ = style.set_property("overflow", "hidden");
        Some(Self { previous })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let Some(body) = body() else {
            return;
        };
        let style = body.style();

        if self.previous.is_empty() {
            let _ = style.remove_property("overflow");
        } else {
            let _ = style.set_property("overflow", &self.previous);
        }
    }
}

fn element_by_id(id: &str) -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Smooth-scrolls to the element with `id`. Returns false when it does not exist.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(element) = element_by_id(id) else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn measure_sections() -> Vec<(Section, SectionBounds)> {
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let element = element_by_id(section.id())?;
            Some((
                section,
                SectionBounds {
                    offset_top: f64::from(element.offset_top()),
                    offset_height: f64::from(element.offset_height()),
                },
            ))
        })
        .collect()
}

pub fn active_element() -> Option<HtmlElement> {
    window()?
        .document()?
        .active_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn focusable_within(container: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Moves focus one step through the focusable elements of `container`,
/// wrapping at either end.
pub fn cycle_focus(container: &Element, backwards: bool) -> bool {
    let focusable = focusable_within(container);
    let current = active_element()
        .and_then(|active| focusable.iter().position(|candidate| *candidate == active));

    match crate::overlay::focus_cycle(current, focusable.len(), backwards) {
        Some(next) => {
            let _ = focusable[next].focus();
            true
        }
        None => false,
    }
}

/// Starts muted playback. `on_rejected` runs when the browser refuses to play.
pub fn play_muted(media: &HtmlMediaElement, on_rejected: impl FnOnce() + 'static) {
    media.set_muted(true);

    match media.play() {
        Ok(promise) => spawn_local(async move {
            if JsFuture::from(promise).await.is_err() {
                on_rejected();
            }
        }),
        Err(_) => on_rejected(),
    }
}

pub fn pause_and_rewind(media: &HtmlMediaElement) {
    let _ = media.pause();
    media.set_current_time(0.0);
}
