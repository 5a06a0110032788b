//! Navigation state for the full-screen image viewer.

/// Image count from which the lightbox shows a thumbnail strip.
pub const THUMBNAIL_STRIP_MIN_IMAGES: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LightboxView {
    #[default]
    Closed,
    Open { index: usize, loading: bool },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Lightbox {
    count: usize,
    view: LightboxView,
}

impl Lightbox {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            view: LightboxView::Closed,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn view(&self) -> LightboxView {
        self.view
    }

    pub fn is_open(&self) -> bool {
        matches!(self.view, LightboxView::Open { .. })
    }

    pub fn current_index(&self) -> usize {
        match self.view {
            LightboxView::Open { index, .. } => index,
            LightboxView::Closed => 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, LightboxView::Open { loading: true, .. })
    }

    pub fn has_navigation(&self) -> bool {
        self.count > 1
    }

    pub fn shows_thumbnails(&self) -> bool {
        self.count >= THUMBNAIL_STRIP_MIN_IMAGES
    }

    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.current_index() + 1, self.count)
    }

    /// Refuses to open on an empty sequence or an out-of-range index.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }

        self.view = LightboxView::Open {
            index,
            loading: true,
        };
        true
    }

    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.view = LightboxView::Closed;
        was_open
    }

    pub fn next(&mut self) -> bool {
        self.step(|index, count| (index + 1) % count)
    }

    pub fn prev(&mut self) -> bool {
        self.step(|index, count| (index + count - 1) % count)
    }

    /// Thumbnail click. Jumping to the image already shown is a no-op since no
    /// new load event would arrive for it.
    pub fn jump(&mut self, target: usize) -> bool {
        match self.view {
            LightboxView::Open { index, .. } if index != target && target < self.count => {
                self.view = LightboxView::Open {
                    index: target,
                    loading: true,
                };
                true
            }
            _ => false,
        }
    }

    /// Load completion for the image at `index`. Completions for an index that
    /// is no longer displayed are ignored.
    pub fn image_loaded(&mut self, loaded: usize) {
        self.finish_loading(loaded);
    }

    /// A failed image ends loading the same way, so the viewer never waits on
    /// a resource that will not arrive. Stale failures are ignored.
    pub fn image_failed(&mut self, failed: usize) {
        self.finish_loading(failed);
    }

    fn finish_loading(&mut self, finished: usize) {
        if let LightboxView::Open { index, loading } = &mut self.view {
            if *index == finished {
                *loading = false;
            }
        }
    }

    fn step(&mut self, advance: impl Fn(usize, usize) -> usize) -> bool {
        if !self.has_navigation() {
            return false;
        }

        match self.view {
            LightboxView::Open { index, .. } => {
                self.view = LightboxView::Open {
                    index: advance(index, self.count),
                    loading: true,
                };
                true
            }
            LightboxView::Closed => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened(count: usize, index: usize) -> Lightbox {
        let mut lightbox = Lightbox::new(count);
        assert!(lightbox.open(index), "index {index} should open over {count} images");
        lightbox
    }

    #[test]
    fn empty_sequence_never_opens() {
        let mut lightbox = Lightbox::new(0);
        assert!(!lightbox.open(0));
        assert!(!lightbox.is_open());
        assert!(!lightbox.next());
    }

    #[test]
    fn out_of_range_open_is_refused() {
        let mut lightbox = Lightbox::new(2);
        assert!(!lightbox.open(2));
        assert_eq!(lightbox.view(), LightboxView::Closed);
    }

    #[test]
    fn opening_always_starts_loading() {
        let mut lightbox = opened(3, 1);
        lightbox.image_loaded(1);
        assert!(!lightbox.is_loading());

        lightbox.close();
        assert!(lightbox.open(1));
        assert!(lightbox.is_loading());
    }

    #[test]
    fn next_cycles_back_after_count_steps() {
        for count in 1..=6 {
            for start in 0..count {
                let mut lightbox = opened(count, start);
                for _ in 0..count {
                    lightbox.next();
                }
                assert_eq!(lightbox.current_index(), start, "count {count} start {start}");
            }
        }
    }

    #[test]
    fn prev_undoes_next() {
        let mut lightbox = opened(4, 0);

        lightbox.prev();
        assert_eq!(lightbox.current_index(), 3);
        lightbox.next();
        assert_eq!(lightbox.current_index(), 0);

        lightbox.next();
        lightbox.next();
        lightbox.prev();
        assert_eq!(lightbox.current_index(), 1);
    }

    #[test]
    fn single_image_has_no_navigation() {
        let mut lightbox = opened(1, 0);

        assert!(!lightbox.has_navigation());
        assert!(!lightbox.next());
        assert!(!lightbox.prev());
        assert_eq!(lightbox.current_index(), 0);
    }

    #[test]
    fn every_index_change_restarts_loading() {
        let mut lightbox = opened(3, 0);
        lightbox.image_loaded(0);

        assert!(lightbox.next());
        assert!(lightbox.is_loading());
        lightbox.image_loaded(1);

        assert!(lightbox.jump(2));
        assert!(lightbox.is_loading());
        assert_eq!(lightbox.current_index(), 2);
    }

    #[test]
    fn stale_load_event_does_not_clear_loading() {
        let mut lightbox = opened(3, 0);
        lightbox.next();

        lightbox.image_loaded(0);
        assert!(lightbox.is_loading());

        lightbox.image_loaded(1);
        assert!(!lightbox.is_loading());
    }

    #[test]
    fn failed_image_ends_loading_for_current_index_only() {
        let mut lightbox = opened(3, 0);
        lightbox.next();

        lightbox.image_failed(0);
        assert!(lightbox.is_loading());

        lightbox.image_failed(1);
        assert!(!lightbox.is_loading());
        assert_eq!(lightbox.current_index(), 1);

        lightbox.next();
        assert!(lightbox.is_loading());
    }

    #[test]
    fn failure_on_a_closed_lightbox_is_ignored() {
        let mut lightbox = Lightbox::new(2);
        lightbox.image_failed(0);
        assert_eq!(lightbox.view(), LightboxView::Closed);
    }

    #[test]
    fn jump_to_current_or_missing_image_is_ignored() {
        let mut lightbox = opened(3, 1);
        lightbox.image_loaded(1);

        assert!(!lightbox.jump(1));
        assert!(!lightbox.is_loading());
        assert!(!lightbox.jump(9));
        assert_eq!(lightbox.current_index(), 1);
    }

    #[test]
    fn thumbnail_strip_needs_three_images() {
        assert!(!Lightbox::new(2).shows_thumbnails());
        assert!(Lightbox::new(3).shows_thumbnails());
    }

    #[test]
    fn counter_is_one_based() {
        let mut lightbox = opened(5, 0);
        lightbox.prev();
        assert_eq!(lightbox.counter_label(), "5 / 5");
    }

    #[test]
    fn closed_lightbox_reports_index_zero() {
        let mut lightbox = opened(4, 3);
        assert!(lightbox.close());
        assert_eq!(lightbox.current_index(), 0);
        assert!(!lightbox.close());
    }
}
