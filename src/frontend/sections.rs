use std::rc::Rc;
use yew::prelude::*;

use crate::catalog::Catalog;
use crate::scroll_spy::Section;
use crate::theme::Theme;

const RESUME_HREF: &str = "/resume.pdf";

struct ContactLink {
    name: &'static str,
    icon: &'static str,
    gradient: &'static str,
    href: &'static str,
}

const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        name: "Email",
        icon: "✉",
        gradient: "linear-gradient(135deg, #8b5cf6, #6366f1)",
        href: "mailto:thomasosayi@gmail.com",
    },
    ContactLink {
        name: "LinkedIn",
        icon: "in",
        gradient: "linear-gradient(135deg, #3b82f6, #06b6d4)",
        href: "https://www.linkedin.com/in/thomas-osayi",
    },
    ContactLink {
        name: "GitHub",
        icon: "◆",
        gradient: "linear-gradient(135deg, #6b7280, #9ca3af)",
        href: "https://github.com/ThomasOsayi",
    },
];

const ABOUT_DETAILS: [(&str, &str, &str); 3] = [
    ("Location", "Los Angeles, CA", "📍"),
    ("University", "Loyola Marymount", "🎓"),
    ("Focus", "Full-Stack & Product", "💻"),
];

#[derive(Properties, PartialEq)]
pub struct ThemedProps {
    pub theme: Theme,
}

#[derive(Properties, PartialEq)]
struct EyebrowProps {
    theme: Theme,
    text: AttrValue,
}

#[function_component(Eyebrow)]
fn eyebrow(props: &EyebrowProps) -> Html {
    html! {
        <p class="eyebrow" style={format!("color: {};", props.theme.palette().eyebrow)}>
            {format!("// {}", props.text)}
        </p>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub theme: Theme,
    pub on_navigate: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let palette = props.theme.palette();
    let on_view_work = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Work))
    };

    html! {
        <section id="home" class="hero">
            <div class="hero-inner">
                <div class="availability-badge">
                    <span class="pulse-dot" aria-hidden="true" />
                    <span style={format!("color: {};", palette.text_muted)}>
                        {"Available for new opportunities"}
                    </span>
                </div>

                <h1 class="hero-name">
                    <span class="hero-first">{"Thomas"}</span>
                    <span class="hero-last gradient-text">{"Osayi"}</span>
                </h1>

                <p class="hero-roles">
                    <span class="gradient-text">{"Software Engineer"}</span>
                    <span class="hero-separator" style={format!("color: {};", palette.text_subtle)}>{"×"}</span>
                    <span class="gradient-text">{"Product Designer"}</span>
                </p>

                <p class="hero-summary" style={format!("color: {};", palette.text_muted)}>
                    {"CS student at LMU crafting digital experiences at the intersection of "}
                    <strong>{"engineering excellence"}</strong>
                    {" and "}
                    <strong>{"thoughtful design"}</strong>
                    {"."}
                </p>

                <div class="hero-actions">
                    <button class="button-primary" type="button" onclick={on_view_work}>
                        {"View My Work"}
                        <span aria-hidden="true">{"→"}</span>
                    </button>
                    <a class="button-outline" href={RESUME_HREF} target="_blank" rel="noopener noreferrer">
                        {"Download Resume"}
                    </a>
                </div>

                <div class="scroll-indicator" aria-hidden="true">
                    <div class="scroll-indicator-dot" />
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillsSectionProps {
    pub theme: Theme,
    pub catalog: Rc<Catalog>,
}

#[function_component(SkillsSection)]
pub fn skills_section(props: &SkillsSectionProps) -> Html {
    let palette = props.theme.palette();

    html! {
        <section class="skills">
            <header class="section-header centered">
                <Eyebrow theme={props.theme} text="Expertise" />
                <h2>{"Tech Stack"}</h2>
            </header>
            <ul class="skill-list">
                {for props.catalog.skills.iter().map(|skill| html! {
                    <li key={skill.name.clone()} class="skill-chip" style={format!("border-color: {};", palette.border)}>
                        <span class="skill-icon" aria-hidden="true">{skill.icon.clone()}</span>
                        <span style={format!("color: {};", palette.text_muted)}>{skill.name.clone()}</span>
                    </li>
                })}
            </ul>
        </section>
    }
}

#[function_component(AboutSection)]
pub fn about_section(props: &ThemedProps) -> Html {
    let palette = props.theme.palette();

    html! {
        <section id="about" class="about">
            <div class="about-panel" style={format!("border-color: {};", palette.border)}>
                <div class="about-copy">
                    <Eyebrow theme={props.theme} text="About Me" />
                    <h2>
                        {"Building products"}
                        <span class="gradient-text">{"that matter"}</span>
                    </h2>
                    <p style={format!("color: {};", palette.text_muted)}>
                        {"I'm a Computer Science student at LMU with a passion for turning ideas into reality. \
                          Currently leading development on the NOM startup app with LMU's Tech & Digital Ventures team, \
                          where I blend technical implementation with user-centered design thinking."}
                    </p>
                    <p style={format!("color: {};", palette.text_subtle)}>
                        {"My aspiration is to become a software engineer and product innovator, eventually founding \
                          or leading a tech company that combines strong engineering with meaningful product design."}
                    </p>
                </div>

                <ul class="about-details">
                    {for ABOUT_DETAILS.iter().map(|(label, value, icon)| html! {
                        <li key={*label} class="about-detail" style={format!("background: {}; border-color: {};", palette.surface, palette.border)}>
                            <span class="about-detail-icon" aria-hidden="true">{*icon}</span>
                            <div>
                                <p class="about-detail-label" style={format!("color: {};", palette.text_subtle)}>{*label}</p>
                                <p class="about-detail-value">{*value}</p>
                            </div>
                        </li>
                    })}
                </ul>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ThemedProps) -> Html {
    let palette = props.theme.palette();

    html! {
        <section id="contact" class="contact">
            <Eyebrow theme={props.theme} text="Get In Touch" />
            <h2>
                {"Let's create something"}
                <span class="gradient-text">{"amazing together"}</span>
            </h2>
            <p style={format!("color: {};", palette.text_subtle)}>
                {"Always open to new opportunities and interesting conversations about tech, startups, and product design."}
            </p>

            <ul class="contact-links">
                {for CONTACT_LINKS.iter().map(|link| html! {
                    <li key={link.name}>
                        <a
                            class="contact-link"
                            href={link.href}
                            target="_blank"
                            rel="noopener noreferrer"
                            style={format!("border-color: {};", palette.border)}
                        >
                            <span class="contact-icon" style={format!("background: {};", link.gradient)} aria-hidden="true">
                                {link.icon}
                            </span>
                            <span style={format!("color: {};", palette.text_muted)}>{link.name}</span>
                        </a>
                    </li>
                })}
            </ul>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer(props: &ThemedProps) -> Html {
    let palette = props.theme.palette();
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer" style={format!("border-color: {}; color: {};", palette.border, palette.text_subtle)}>
            <span>{format!("© {year} Thomas Osayi")}</span>
            <span>
                {"Designed & Built with "}
                <span style={format!("color: {};", palette.eyebrow)}>{"♥"}</span>
            </span>
        </footer>
    }
}
