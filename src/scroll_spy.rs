//! Maps the vertical scroll offset onto the section the nav bar highlights.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Section {
    #[default]
    Home,
    Work,
    About,
    Contact,
}

impl Section {
    /// Document order.
    pub const ALL: [Section; 4] = [Self::Home, Self::Work, Self::About, Self::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Work => "Work",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionBounds {
    pub offset_top: f64,
    pub offset_height: f64,
}

impl SectionBounds {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.offset_top && position < self.offset_top + self.offset_height
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScrollSpy {
    active: Section,
    look_ahead: f64,
}

impl ScrollSpy {
    pub fn new(look_ahead: f64) -> Self {
        Self {
            active: Section::default(),
            look_ahead,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// First section in document order whose bounds contain the probe point.
    /// Sections missing from `measured` are skipped.
    pub fn locate(&self, scroll_y: f64, measured: &[(Section, SectionBounds)]) -> Option<Section> {
        let probe = scroll_y + self.look_ahead;

        Section::ALL.into_iter().find(|section| {
            measured
                .iter()
                .any(|(candidate, bounds)| candidate == section && bounds.contains(probe))
        })
    }

    /// Returns true when the highlighted section changed. A miss keeps the
    /// previous section highlighted.
    pub fn observe(&mut self, scroll_y: f64, measured: &[(Section, SectionBounds)]) -> bool {
        match self.locate(scroll_y, measured) {
            Some(section) if section != self.active => {
                self.active = section;
                true
            }
            _ => false,
        }
    }

    /// Optimistic highlight for a nav click; the next scroll event reconciles it.
    pub fn select(&mut self, section: Section) {
        self.active = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(offset_top: f64, offset_height: f64) -> SectionBounds {
        SectionBounds {
            offset_top,
            offset_height,
        }
    }

    fn page() -> Vec<(Section, SectionBounds)> {
        vec![
            (Section::Home, bounds(0.0, 800.0)),
            (Section::Work, bounds(800.0, 1200.0)),
            (Section::About, bounds(2400.0, 600.0)),
            (Section::Contact, bounds(3000.0, 500.0)),
        ]
    }

    #[test]
    fn look_ahead_activates_section_before_its_top_edge() {
        let mut spy = ScrollSpy::new(100.0);

        assert!(spy.observe(700.0, &page()));
        assert_eq!(spy.active(), Section::Work);

        assert!(spy.observe(699.0, &page()));
        assert_eq!(spy.active(), Section::Home);
    }

    #[test]
    fn range_is_half_open() {
        let spy = ScrollSpy::new(100.0);
        assert_eq!(spy.locate(2900.0, &page()), Some(Section::Contact));
        assert_eq!(spy.locate(2899.0, &page()), Some(Section::About));
    }

    #[test]
    fn gap_between_sections_keeps_previous_highlight() {
        let measured = vec![
            (Section::Home, bounds(0.0, 500.0)),
            (Section::Work, bounds(1000.0, 500.0)),
        ];
        let mut spy = ScrollSpy::new(100.0);
        spy.observe(1000.0, &measured);
        assert_eq!(spy.active(), Section::Work);

        assert!(!spy.observe(5000.0, &measured));
        assert_eq!(spy.active(), Section::Work);
    }

    #[test]
    fn missing_targets_are_ignored() {
        let measured = vec![(Section::Contact, bounds(0.0, 100.0))];
        let mut spy = ScrollSpy::new(100.0);

        assert_eq!(spy.locate(-50.0, &measured), Some(Section::Contact));
        assert!(!spy.observe(5_000.0, &[]));
        assert_eq!(spy.active(), Section::Home);
    }

    #[test]
    fn exactly_one_section_is_active_for_every_offset() {
        let mut spy = ScrollSpy::new(100.0);
        let measured = page();

        for step in 0..400 {
            let scroll_y = f64::from(step) * 10.0;
            let expected = measured
                .iter()
                .filter(|(_, bounds)| bounds.contains(scroll_y + 100.0))
                .map(|(section, _)| *section)
                .last();

            spy.observe(scroll_y, &measured);

            if let Some(expected) = expected {
                assert_eq!(spy.active(), expected, "scroll_y = {scroll_y}");
            }
        }
    }

    #[test]
    fn overlapping_sections_resolve_to_first_in_document_order() {
        let measured = vec![
            (Section::About, bounds(0.0, 1000.0)),
            (Section::Work, bounds(0.0, 1000.0)),
        ];
        let spy = ScrollSpy::new(0.0);
        assert_eq!(spy.locate(10.0, &measured), Some(Section::Work));
    }

    #[test]
    fn selecting_work_highlights_it_before_any_scroll_event() {
        let mut spy = ScrollSpy::new(100.0);
        spy.observe(0.0, &page());
        assert_eq!(spy.active(), Section::Home);

        spy.select(Section::Work);
        assert_eq!(spy.active(), Section::Work);

        assert!(!spy.observe(800.0, &page()));
        assert_eq!(spy.active(), Section::Work);
    }

    #[test]
    fn selection_is_optimistic_until_next_scroll() {
        let mut spy = ScrollSpy::new(100.0);
        spy.select(Section::Contact);
        assert_eq!(spy.active(), Section::Contact);

        spy.observe(0.0, &page());
        assert_eq!(spy.active(), Section::Home);
    }
}
