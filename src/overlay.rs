//! Project modal and lightbox layered as a stack. Keys always go to the top
//! layer, so one Escape press never closes both.

use crate::catalog::Project;
use crate::lightbox::Lightbox;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
}

impl Key {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Escape" | "Esc" => Some(Self::Escape),
            "ArrowLeft" | "Left" => Some(Self::ArrowLeft),
            "ArrowRight" | "Right" => Some(Self::ArrowRight),
            "Enter" => Some(Self::Enter),
            " " | "Spacebar" => Some(Self::Space),
            _ => None,
        }
    }

    /// Keys that activate a focused card.
    pub fn activates(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Layer {
    ProjectModal,
    Lightbox,
}

impl Layer {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProjectModal => "project_modal",
            Self::Lightbox => "lightbox",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct OverlayStack {
    layers: Vec<Layer>,
}

impl OverlayStack {
    pub fn top(&self) -> Option<Layer> {
        self.layers.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn contains(&self, layer: Layer) -> bool {
        self.layers.contains(&layer)
    }

    /// Only the top layer keeps Tab focus inside itself.
    pub fn traps_focus(&self, layer: Layer) -> bool {
        self.top() == Some(layer)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Selection {
    pub project_id: u32,
    pub lightbox: Lightbox,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShowcaseAction {
    Select { project_id: u32, image_count: usize },
    CloseModal,
    OpenLightbox(usize),
    CloseLightbox,
    Next,
    Prev,
    Jump(usize),
    ImageLoaded(usize),
    ImageFailed(usize),
    Key(Key),
}

/// What the gallery has open: nothing, a project modal, or a modal with its
/// lightbox on top.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Showcase {
    selection: Option<Selection>,
}

impl Showcase {
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selection.map(|selection| selection.project_id)
    }

    pub fn lightbox(&self) -> Option<&Lightbox> {
        self.selection
            .as_ref()
            .map(|selection| &selection.lightbox)
            .filter(|lightbox| lightbox.is_open())
    }

    pub fn stack(&self) -> OverlayStack {
        let mut layers = Vec::with_capacity(2);

        if let Some(selection) = &self.selection {
            layers.push(Layer::ProjectModal);
            if selection.lightbox.is_open() {
                layers.push(Layer::Lightbox);
            }
        }

        OverlayStack { layers }
    }

    /// Page scrolling is suspended while any overlay is showing.
    pub fn scroll_locked(&self) -> bool {
        self.selection.is_some()
    }

    pub fn select(&mut self, project: &Project) {
        self.apply(ShowcaseAction::Select {
            project_id: project.id,
            image_count: project.image_set().len(),
        });
    }

    /// Closes the top layer only. Returns the layer that was closed.
    pub fn dismiss_top(&mut self) -> Option<Layer> {
        let top = self.stack().top()?;
        match top {
            Layer::Lightbox => {
                if let Some(selection) = self.selection.as_mut() {
                    selection.lightbox.close();
                }
            }
            Layer::ProjectModal => self.selection = None,
        }
        Some(top)
    }

    pub fn apply(&mut self, action: ShowcaseAction) {
        match action {
            ShowcaseAction::Select {
                project_id,
                image_count,
            } => {
                self.selection = Some(Selection {
                    project_id,
                    lightbox: Lightbox::new(image_count),
                });
            }
            ShowcaseAction::CloseModal => self.selection = None,
            ShowcaseAction::OpenLightbox(index) => {
                self.with_lightbox(|lightbox| {
                    lightbox.open(index);
                });
            }
            ShowcaseAction::CloseLightbox => {
                self.with_lightbox(|lightbox| {
                    lightbox.close();
                });
            }
            ShowcaseAction::Next => {
                self.with_lightbox(|lightbox| {
                    lightbox.next();
                });
            }
            ShowcaseAction::Prev => {
                self.with_lightbox(|lightbox| {
                    lightbox.prev();
                });
            }
            ShowcaseAction::Jump(index) => {
                self.with_lightbox(|lightbox| {
                    lightbox.jump(index);
                });
            }
            ShowcaseAction::ImageLoaded(index) => {
                self.with_lightbox(|lightbox| lightbox.image_loaded(index));
            }
            ShowcaseAction::ImageFailed(index) => {
                self.with_lightbox(|lightbox| lightbox.image_failed(index));
            }
            ShowcaseAction::Key(key) => self.route_key(key),
        }
    }

    fn route_key(&mut self, key: Key) {
        match (self.stack().top(), key) {
            (Some(_), Key::Escape) => {
                self.dismiss_top();
            }
            (Some(Layer::Lightbox), Key::ArrowRight) => self.apply(ShowcaseAction::Next),
            (Some(Layer::Lightbox), Key::ArrowLeft) => self.apply(ShowcaseAction::Prev),
            _ => {}
        }
    }

    fn with_lightbox(&mut self, update: impl FnOnce(&mut Lightbox)) {
        if let Some(selection) = self.selection.as_mut() {
            update(&mut selection.lightbox);
        }
    }
}

/// Next focus position when Tab wraps inside a dialog with `count` focusable
/// elements. Focus outside the dialog enters at the first (or last) element.
pub fn focus_cycle(current: Option<usize>, count: usize, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let last = count - 1;
    let next = match (current, backwards) {
        (None, false) => 0,
        (None, true) => last,
        (Some(index), false) if index >= last => 0,
        (Some(index), false) => index + 1,
        (Some(0), true) => last,
        (Some(index), true) => index.min(count) - 1,
    };

    Some(next)
}
