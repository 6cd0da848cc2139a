//! Static page content: skill categories, technology logos, contact links and
//! the script typed out in the hero's code editor card.

pub const DEVELOPER_NAME: &str = "Hoeun Pichet";
pub const ROLE: &str = "Full Stack Developer";
pub const EMAIL: &str = "hoeunpichet@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/HoeunPichet";
pub const GITHUB_HANDLE: &str = "github.com/HoeunPichet";

/// In-page anchors. The sitemap and the "jump to section" links both read
/// from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Glyph shown in a skill card's icon tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code,
    Palette,
    Server,
    Cloud,
    Database,
    Terminal,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Code => "</>",
            Icon::Palette => "🎨",
            Icon::Server => "🖥",
            Icon::Cloud => "☁",
            Icon::Database => "🗄",
            Icon::Terminal => "⌨",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub skills: &'static [&'static str],
    /// Tailwind gradient token, e.g. `from-orange-500 to-red-500`.
    pub color: &'static str,
}

/// Number of skills a category card lists before collapsing the rest
/// behind "View Details".
pub const SKILL_PREVIEW_LEN: usize = 3;

impl SkillCategory {
    pub fn preview(&self) -> &'static [&'static str] {
        &self.skills[..self.skills.len().min(SKILL_PREVIEW_LEN)]
    }

    pub fn hidden_count(&self) -> usize {
        self.skills.len().saturating_sub(SKILL_PREVIEW_LEN)
    }

    pub fn has_details(&self) -> bool {
        self.hidden_count() > 0
    }
}

pub static SKILL_CATEGORIES: [SkillCategory; 6] = [
    SkillCategory {
        title: "JAVA",
        icon: Icon::Code,
        skills: &[
            "J2SE (Basic Java and OOP concepts)",
            "J2EE (Maven and MVC pattern)",
        ],
        color: "from-orange-500 to-red-500",
    },
    SkillCategory {
        title: "WEB",
        icon: Icon::Palette,
        skills: &[
            "HTML",
            "CSS",
            "JavaScript",
            "CSS Flexbox",
            "Tailwind CSS",
            "JSON",
            "Next.js",
            "React",
            "TypeScript",
            "jQuery",
        ],
        color: "from-blue-500 to-cyan-500",
    },
    SkillCategory {
        title: "SPRING",
        icon: Icon::Server,
        skills: &[
            "Spring Boot",
            "MyBatis Data Access",
            "Spring RESTful Web Service",
            "Spring Security",
            "JSON Web Token",
            "Thymeleaf Engine",
        ],
        color: "from-green-500 to-emerald-500",
    },
    SkillCategory {
        title: "SPRING Microservices",
        icon: Icon::Cloud,
        skills: &[
            "ORM with JPA and Hibernate",
            "Spring Data JPA",
            "OAuth2 Authentication",
            "Reactive Spring",
            "Spring Cloud",
            "Service Discovery",
            "API Gateway",
            "Config Server",
            "Load Balancer",
            "Message Queue",
            "Service Resiliency",
            "Service Availability",
        ],
        color: "from-purple-500 to-pink-500",
    },
    SkillCategory {
        title: "Database",
        icon: Icon::Database,
        skills: &["Data Modeling", "PostgreSQL", "SQL (Basic SQL)"],
        color: "from-indigo-500 to-blue-500",
    },
    SkillCategory {
        title: "Additional Technologies",
        icon: Icon::Terminal,
        skills: &[
            "Docker",
            "Version Control (GitHub)",
            "UI/UX (Figma)",
            "Laravel",
        ],
        color: "from-teal-500 to-cyan-500",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub src: &'static str,
    pub alt: &'static str,
    pub color: &'static str,
}

const fn tech(
    name: &'static str,
    src: &'static str,
    alt: &'static str,
    color: &'static str,
) -> Technology {
    Technology {
        name,
        src,
        alt,
        color,
    }
}

pub static TECHNOLOGIES: [Technology; 13] = [
    tech("Java", "/images/language/java.png", "Java", "from-orange-500 to-red-500"),
    tech("JavaScript", "/images/language/javascript.png", "JavaScript", "from-yellow-400 to-yellow-600"),
    tech("TypeScript", "/images/language/typescript.png", "TypeScript", "from-blue-500 to-blue-700"),
    tech("React", "/images/language/react.png", "React", "from-cyan-400 to-blue-500"),
    tech("Next.js", "/images/language/nextjs.png", "Next.js", "from-gray-800 to-gray-900"),
    tech("HTML", "/images/language/html-5.png", "HTML5", "from-orange-500 to-orange-600"),
    tech("CSS", "/images/language/css.png", "CSS", "from-blue-500 to-blue-600"),
    tech("Laravel", "/images/language/laravel.png", "Laravel", "from-red-500 to-red-600"),
    tech("PostgreSQL", "/images/language/postgre.png", "PostgreSQL", "from-blue-600 to-blue-800"),
    tech("Git", "/images/language/git.png", "Git", "from-orange-600 to-red-600"),
    tech("Kafka", "/images/language/kafka.png", "Apache Kafka", "from-black to-gray-800"),
    tech("RabbitMQ", "/images/language/rabbitmq.webp", "RabbitMQ", "from-orange-500 to-orange-600"),
    tech("JSON", "/images/language/json.webp", "JSON", "from-yellow-500 to-yellow-600"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    GitHub,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub lines: &'static [&'static str],
    pub href: Option<&'static str>,
    /// Opens in a new browsing context.
    pub external: bool,
    pub aria_label: &'static str,
}

impl ContactLink {
    pub fn glyph(&self) -> &'static str {
        match self.kind {
            ContactKind::Email => "✉",
            ContactKind::GitHub => "🐙",
            ContactKind::Location => "📍",
        }
    }
}

pub static CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        kind: ContactKind::Email,
        label: "Email",
        lines: &[EMAIL],
        href: Some("mailto:hoeunpichet@gmail.com"),
        external: false,
        aria_label: "Send email to hoeunpichet@gmail.com",
    },
    ContactLink {
        kind: ContactKind::GitHub,
        label: "GitHub",
        lines: &[GITHUB_HANDLE],
        href: Some(GITHUB_URL),
        external: true,
        aria_label: "Visit GitHub profile (opens in new tab)",
    },
    ContactLink {
        kind: ContactKind::Location,
        label: "Location",
        lines: &["Teuk Thlar, Tuol Kork", "Phnom Penh"],
        href: None,
        external: false,
        aria_label: "Location",
    },
];

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

/// Typed out line by line in the hero's code editor card.
pub static DEVELOPER_SCRIPT: [&str; 11] = [
    "const developer = {",
    "  name: \"Hoeun Pichet\",",
    "  role: \"Full Stack Developer\",",
    "  skills: [",
    "    \"React\",",
    "    \"Next.js\",",
    "    \"TypeScript\",",
    "    \"Java\",",
    "    \"Spring Boot\"",
    "  ]",
    "};",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_non_empty() {
        assert!(!SKILL_CATEGORIES.is_empty());
        assert!(!TECHNOLOGIES.is_empty());
        assert!(!DEVELOPER_SCRIPT.is_empty());
        for category in SKILL_CATEGORIES.iter() {
            assert!(!category.skills.is_empty(), "{} has no skills", category.title);
        }
    }

    #[test]
    fn test_skill_preview() {
        let java = &SKILL_CATEGORIES[0];
        assert_eq!(java.preview().len(), 2);
        assert_eq!(java.hidden_count(), 0);
        assert!(!java.has_details());

        let web = &SKILL_CATEGORIES[1];
        assert_eq!(web.preview(), &["HTML", "CSS", "JavaScript"]);
        assert_eq!(web.hidden_count(), 7);
        assert!(web.has_details());

        // exactly three skills collapses nothing
        let database = &SKILL_CATEGORIES[4];
        assert_eq!(database.preview().len(), 3);
        assert!(!database.has_details());
    }

    #[test]
    fn test_section_anchors() {
        let hrefs = Section::ALL.iter().map(|s| s.href()).collect::<Vec<_>>();
        assert_eq!(hrefs, vec!["#about", "#skills", "#projects", "#contact"]);
    }

    #[test]
    fn test_contact_links() {
        assert_eq!(CONTACT_LINKS[0].href, Some(mailto().as_str()));
        let github = CONTACT_LINKS
            .iter()
            .find(|c| c.kind == ContactKind::GitHub)
            .expect("github link");
        assert!(github.external);
        assert_eq!(github.href, Some(GITHUB_URL));
        assert!(CONTACT_LINKS
            .iter()
            .filter(|c| c.kind == ContactKind::Location)
            .all(|c| c.href.is_none()));
    }

    #[test]
    fn test_technology_images_are_under_language_dir() {
        for tech in TECHNOLOGIES.iter() {
            assert!(tech.src.starts_with("/images/language/"), "{}", tech.name);
            assert!(!tech.alt.is_empty());
        }
    }
}
