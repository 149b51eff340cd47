use std::borrow::Cow;

use chrono::{Datelike, Utc};

use crate::app::Model;
use crate::content::{
    Section, CAREER, CONTACTS, OWNER_NAME, PAGE_DESCRIPTION, PAGE_TITLE, PLACEHOLDER_IMAGE, ROLE,
    SKILLS, TAGLINE,
};
use crate::feed::{FilterState, RepositorySummary};
use crate::palette::PaletteAction;
use crate::theme::ThemeSetting;

const STYLESHEET: &str = include_str!("../assets/portfolio.css");
const FOOTER_NOTE: &str = "Ready for Vercel";

/// Inputs to rendering that do not live in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewContext {
    pub year: i32,
}

impl ViewContext {
    pub fn now() -> Self {
        Self { year: Utc::now().year() }
    }
}

/// Renders the whole page as a standalone HTML document.
///
/// Interactive elements carry `data-*` hooks (`data-action`, `data-filter`,
/// `data-palette`) that the host maps back to messages.
pub fn render(model: &Model, context: &ViewContext) -> String {
    let mut body = String::new();
    if model.palette.is_open() {
        body.push_str(&render_palette());
    }
    body.push_str(&render_header(model.theme));
    body.push_str(&render_hero(model));
    body.push_str(&render_stats(model));
    body.push_str(&render_skills(model));
    body.push_str(&render_projects(model));
    body.push_str(&render_career(model));
    body.push_str(&render_contact(model));
    body.push_str(&format!("<footer>© {} – {FOOTER_NOTE}</footer>", context.year));

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\" class=\"{theme}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<meta name=\"description\" content=\"{description}\">\n\
         <style>\n{STYLESHEET}</style>\n</head>\n<body>\n<div class=\"container\">\n{body}</div>\n</body>\n</html>\n",
        theme = model.theme,
        title = escape(PAGE_TITLE),
        description = escape(PAGE_DESCRIPTION),
    )
}

fn render_palette() -> String {
    let actions: String = PaletteAction::ALL
        .iter()
        .map(|action| {
            format!(
                "<button data-action=\"{}\">{}</button>",
                action_hook(*action),
                escape(action.label())
            )
        })
        .collect();

    format!(
        "<div class=\"palette\" data-palette=\"overlay\">\
         <div class=\"palette-box\" data-palette=\"panel\">{actions}</div></div>\n"
    )
}

fn action_hook(action: PaletteAction) -> &'static str {
    match action {
        PaletteAction::ToggleTheme => "toggle-theme",
        PaletteAction::GoToProjects => "go-to-projects",
        PaletteAction::GoToContact => "go-to-contact",
    }
}

fn render_header(theme: ThemeSetting) -> String {
    let links: String = [Section::Skills, Section::Work, Section::Career, Section::Contact]
        .iter()
        .map(|section| {
            let id = section.id();
            let mut label = id.to_string();
            label[..1].make_ascii_uppercase();
            format!("<a href=\"#{id}\">{label}</a>")
        })
        .collect();

    let toggle_icon = match theme {
        ThemeSetting::Dark => "☀️",
        ThemeSetting::Light => "🌙",
    };

    format!(
        "<header><h1>{}</h1><nav>{links}<button data-action=\"toggle-theme\">{toggle_icon}</button></nav></header>\n",
        escape(OWNER_NAME)
    )
}

fn section_open(model: &Model, section: Section, extra_class: &str) -> String {
    let mut class = String::from(extra_class);
    if !class.is_empty() {
        class.push(' ');
    }
    class.push_str("reveal");
    if model.reveal.is_visible(section) {
        class.push_str(" visible");
    }
    format!("<section id=\"{}\" class=\"{class}\">", section.id())
}

fn render_hero(model: &Model) -> String {
    format!(
        "{}<div><h2>{}</h2><p>{}</p><a href=\"#contact\" class=\"cta\">Contact Me</a></div>\
         <div class=\"avatar-wrapper\"><div class=\"avatar-ring\"></div>\
         <img src=\"{}\" alt=\"profile\" class=\"avatar\" data-fallback=\"{}\"></div></section>\n",
        section_open(model, Section::Hero, "hero"),
        escape(ROLE),
        escape(TAGLINE),
        escape(model.avatar.url()),
        escape(PLACEHOLDER_IMAGE),
    )
}

fn render_stats(model: &Model) -> String {
    format!(
        "{}<div class=\"stat-item\"><strong>{}</strong><span>Repositories</span></div>\
         <div class=\"stat-item\"><strong>{}</strong><span>Stars</span></div></section>\n",
        section_open(model, Section::Stats, "stats"),
        model.stats.repository_count,
        model.stats.total_stars,
    )
}

fn render_skills(model: &Model) -> String {
    let skills: String = SKILLS
        .iter()
        .map(|skill| format!("<span>{}</span>", escape(skill)))
        .collect();

    format!(
        "{}<h3>Skills</h3><div class=\"skills-list\">{skills}</div></section>\n",
        section_open(model, Section::Skills, "section-gap"),
    )
}

fn render_projects(model: &Model) -> String {
    let filters: String = model
        .filter_options()
        .iter()
        .map(|option| render_filter_button(option, &model.filter))
        .collect();

    let cards: String = model
        .visible_repositories()
        .into_iter()
        .map(render_card)
        .collect();

    format!(
        "{}<h3>Projects</h3><div class=\"filters\">{filters}</div><div class=\"grid\">{cards}</div></section>\n",
        section_open(model, Section::Work, "section-gap"),
    )
}

fn render_filter_button(option: &FilterState, active: &FilterState) -> String {
    let class = if option == active { " class=\"active\"" } else { "" };
    format!(
        "<button data-filter=\"{}\"{class}>{}</button>",
        escape(&option.to_string()),
        escape(option.label())
    )
}

fn render_card(repository: &RepositorySummary) -> String {
    let description = repository.description.as_deref().unwrap_or("No description");
    let languages = if repository.languages.is_empty() {
        "Unknown".to_string()
    } else {
        repository.languages.iter().cloned().collect::<Vec<_>>().join(", ")
    };

    format!(
        "<a class=\"card\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\"><h4>{}</h4><p>{}</p><small>{}</small></a>",
        escape(&repository.url),
        escape(&repository.name),
        escape(description),
        escape(&languages),
    )
}

fn render_career(model: &Model) -> String {
    let entries: String = CAREER
        .iter()
        .map(|entry| format!("<div><span>{}</span> {}</div>", entry.year, escape(entry.title)))
        .collect();

    format!(
        "{}<h3>Career</h3>{entries}</section>\n",
        section_open(model, Section::Career, "timeline section-gap"),
    )
}

fn render_contact(model: &Model) -> String {
    let links: String = CONTACTS
        .iter()
        .map(|link| {
            let target = if link.kind.opens_new_tab() {
                " target=\"_blank\" rel=\"noreferrer\""
            } else {
                ""
            };
            format!(
                "<a href=\"{}\"{target} aria-label=\"{}\" class=\"icon {}\">{}</a>",
                escape(link.href),
                link.kind.label(),
                link.kind.css_class(),
                link.kind.icon(),
            )
        })
        .collect();

    format!(
        "{}<h3>Contact</h3><div class=\"contact-icons\">{links}</div></section>\n",
        section_open(model, Section::Contact, ""),
    )
}

fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
