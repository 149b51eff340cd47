pub const OWNER_NAME: &str = "Ismail Laakoubi";
pub const ROLE: &str = "Cloud Architect";
pub const TAGLINE: &str = "Designing scalable, secure cloud infrastructures.";

pub const PAGE_TITLE: &str = "Ismail Laakoubi – Cloud Architect";
pub const PAGE_DESCRIPTION: &str =
    "Cloud Architect portfolio – scalable, secure cloud & DevOps projects.";

pub const PROFILE_IMAGE: &str = "/profile.jpg";
pub const PLACEHOLDER_IMAGE: &str =
    "https://dummyimage.com/300x300/0b1020/38bdf8&text=Your+Photo";

pub const SKILLS: [&str; 14] = [
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "GitHub Actions",
    "Linux",
    "Nginx",
    "Networking",
    "Security",
    "Terraform",
    "Bash",
    "Git",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerEntry {
    pub year: u16,
    pub title: &'static str,
}

pub const CAREER: [CareerEntry; 3] = [
    CareerEntry { year: 2025, title: "Cloud Architect – Advanced architectures" },
    CareerEntry { year: 2024, title: "DevOps Engineer – Kubernetes & CI/CD" },
    CareerEntry { year: 2023, title: "Linux & Networking Foundations" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    LinkedIn,
    Instagram,
}

impl ContactKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::LinkedIn => "LinkedIn",
            ContactKind::Instagram => "Instagram",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ContactKind::Email => "email",
            ContactKind::LinkedIn => "linkedin",
            ContactKind::Instagram => "instagram",
        }
    }

    /// Inline SVG markup for the contact button.
    pub fn icon(&self) -> &'static str {
        match self {
            ContactKind::Email => concat!(
                r#"<svg viewBox="0 0 24 24" width="22" height="22" fill="none" stroke="currentColor" stroke-width="2">"#,
                r#"<path d="M4 4h16v16H4z"/><path d="M22 6l-10 7L2 6"/></svg>"#,
            ),
            ContactKind::LinkedIn => concat!(
                r#"<svg viewBox="0 0 24 24" width="22" height="22" fill="currentColor">"#,
                r#"<path d="M4.98 3.5C4.98 4.88 3.86 6 2.49 6S0 4.88 0 3.5 1.12 1 2.49 1s2.49 1.12 2.49 2.5zM0 8h5v16H0zM8 8h4.8v2.2h.1c.7-1.3 2.4-2.7 4.9-2.7 5.2 0 6.2 3.4 6.2 7.8V24h-5V16.1c0-1.9 0-4.4-2.7-4.4s-3.1 2.1-3.1 4.2V24H8z"/></svg>"#,
            ),
            ContactKind::Instagram => concat!(
                r#"<svg viewBox="0 0 24 24" width="22" height="22" fill="none" stroke="currentColor" stroke-width="2">"#,
                r#"<rect x="2" y="2" width="20" height="20" rx="5"/><circle cx="12" cy="12" r="4"/><circle cx="18" cy="6" r="1"/></svg>"#,
            ),
        }
    }

    /// Mail links stay in the current tab, profile links open a new one.
    pub fn opens_new_tab(&self) -> bool {
        !matches!(self, ContactKind::Email)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub href: &'static str,
}

pub const CONTACTS: [ContactLink; 3] = [
    ContactLink { kind: ContactKind::Email, href: "mailto:you@email.com" },
    ContactLink { kind: ContactKind::LinkedIn, href: "https://linkedin.com" },
    ContactLink { kind: ContactKind::Instagram, href: "https://instagram.com" },
];

/// Page sections, in document order. Every one of them is tagged for reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Hero,
    Stats,
    Skills,
    Work,
    Career,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Stats,
        Section::Skills,
        Section::Work,
        Section::Career,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Stats => "stats",
            Section::Skills => "skills",
            Section::Work => "work",
            Section::Career => "career",
            Section::Contact => "contact",
        }
    }
}

/// Which image the hero avatar shows. Falls back once and never switches back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvatarSource {
    #[default]
    Primary,
    Placeholder,
}

impl AvatarSource {
    pub fn url(&self) -> &'static str {
        match self {
            AvatarSource::Primary => PROFILE_IMAGE,
            AvatarSource::Placeholder => PLACEHOLDER_IMAGE,
        }
    }
}
