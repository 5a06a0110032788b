#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                background: "#030305",
                glow_outer: "rgba(139,92,246,0.35)",
                glow_inner: "rgba(167,139,250,0.5)",
                eyebrow: "#a78bfa",
                text_muted: "#d1d5db",
                text_subtle: "#9ca3af",
                border: "rgba(255,255,255,0.1)",
                surface: "rgba(255,255,255,0.05)",
            },
            Self::Light => Palette {
                background: "#7c3aed",
                glow_outer: "rgba(255,255,255,0.4)",
                glow_inner: "rgba(255,255,255,0.6)",
                eyebrow: "rgba(255,255,255,0.7)",
                text_muted: "rgba(255,255,255,0.8)",
                text_subtle: "rgba(255,255,255,0.7)",
                border: "rgba(255,255,255,0.2)",
                surface: "rgba(255,255,255,0.1)",
            },
        }
    }
}

/// Colour tokens that differ between the two themes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    pub background: &'static str,
    pub glow_outer: &'static str,
    pub glow_inner: &'static str,
    pub eyebrow: &'static str,
    pub text_muted: &'static str,
    pub text_subtle: &'static str,
    pub border: &'static str,
    pub surface: &'static str,
}

impl Palette {
    pub fn css_variables(&self) -> String {
        format!(
            "--page-bg: {}; --eyebrow: {}; --text-muted: {}; --text-subtle: {}; --border: {}; --surface: {}; background-color: var(--page-bg);",
            self.background, self.eyebrow, self.text_muted, self.text_subtle, self.border, self.surface
        )
    }
}

/// One radial glow disc centred on the pointer.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GlowLayer {
    pub diameter: f64,
    pub color: &'static str,
    pub blur_px: Option<f64>,
}

impl GlowLayer {
    pub fn style(&self, pointer_x: f64, pointer_y: f64) -> String {
        let radius = self.diameter / 2.0;
        let blur = self
            .blur_px
            .map(|blur| format!(" filter: blur({blur}px);"))
            .unwrap_or_default();

        format!(
            "width: {d}px; height: {d}px; left: {left}px; top: {top}px; background: radial-gradient(circle, {color} 0%, transparent 70%);{blur}",
            d = self.diameter,
            left = pointer_x - radius,
            top = pointer_y - radius,
            color = self.color,
        )
    }
}

pub fn glow_layers(theme: Theme) -> [GlowLayer; 2] {
    let palette = theme.palette();
    [
        GlowLayer {
            diameter: 600.0,
            color: palette.glow_outer,
            blur_px: Some(20.0),
        },
        GlowLayer {
            diameter: 200.0,
            color: palette.glow_inner,
            blur_px: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_is_the_default_theme() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(Theme::default().pressed());
    }

    #[test]
    fn toggling_twice_returns_to_start() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    }

    #[test]
    fn palettes_differ_per_theme() {
        assert_eq!(Theme::Dark.palette().background, "#030305");
        assert_eq!(Theme::Light.palette().background, "#7c3aed");
        assert!(Theme::Light
            .palette()
            .css_variables()
            .contains("--page-bg: #7c3aed;"));
    }

    #[test]
    fn glow_layers_are_centred_on_pointer() {
        let [outer, inner] = glow_layers(Theme::Dark);

        let outer_style = outer.style(400.0, 350.0);
        assert!(outer_style.contains("left: 100px; top: 50px;"));
        assert!(outer_style.contains("filter: blur(20px);"));

        let inner_style = inner.style(400.0, 350.0);
        assert!(inner_style.contains("left: 300px; top: 250px;"));
        assert!(!inner_style.contains("filter"));
    }
}
