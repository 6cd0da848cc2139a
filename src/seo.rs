//! Search engine metadata: site base URL, sitemap, robots.txt and the
//! JSON-LD person record embedded in the page head.

use http::Uri;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use thiserror::Error;

use crate::content::{Section, DEVELOPER_NAME, EMAIL, GITHUB_URL, ROLE};

pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";
pub const SITE_URL_ENV: &str = "SITE_URL";

/// Captured by build.rs.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub const SITE_NAME: &str = "Hoeun Pichet - Full Stack Developer";
pub const DESCRIPTION: &str = "Full Stack Developer specializing in React, Next.js, TypeScript, Java, and Spring Boot. Building modern, scalable web applications with cutting-edge technologies. Explore my portfolio, projects, and technical expertise.";
pub const KEYWORDS: [&str; 23] = [
    "Hoeun Pichet",
    "Full Stack Developer",
    "Web Developer",
    "React Developer",
    "Next.js Developer",
    "TypeScript Developer",
    "Java Developer",
    "Spring Boot Developer",
    "Frontend Developer",
    "Backend Developer",
    "Software Engineer",
    "Portfolio",
    "Web Development",
    "React",
    "Next.js",
    "TypeScript",
    "Java",
    "Spring Boot",
    "Microservices",
    "PostgreSQL",
    "Laravel",
    "Phnom Penh",
    "Cambodia",
];
pub const LOGO_PATH: &str = "/images/logo/pichet.png";
pub const THEME_COLOR: &str = "#0ea5e9";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("invalid site URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
    #[error("site URL {0:?} must use http or https")]
    UnsupportedScheme(String),
    #[error("couldn't render sitemap: {0}")]
    Sitemap(String),
}

/// Where the site is hosted. Only used to build absolute URLs for metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn parse(raw: &str) -> Result<Self, SiteError> {
        let trimmed = raw.trim().trim_end_matches('/');
        let uri = trimmed
            .parse::<Uri>()
            .map_err(|e| SiteError::InvalidBaseUrl {
                value: raw.to_string(),
                reason: e.to_string(),
            })?;
        match uri.scheme_str() {
            Some("http") | Some("https") => {}
            Some(_) => return Err(SiteError::UnsupportedScheme(raw.to_string())),
            None => {
                return Err(SiteError::InvalidBaseUrl {
                    value: raw.to_string(),
                    reason: "missing scheme".to_string(),
                })
            }
        }
        if uri.host().is_none_or(str::is_empty) {
            return Err(SiteError::InvalidBaseUrl {
                value: raw.to_string(),
                reason: "missing host".to_string(),
            });
        }
        // paths get appended to the base, so it can't carry a query
        if uri.query().is_some() {
            return Err(SiteError::InvalidBaseUrl {
                value: raw.to_string(),
                reason: "query strings are not allowed".to_string(),
            });
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Reads `SITE_URL`, falling back to the default when it is unset.
    pub fn from_env() -> Result<Self, SiteError> {
        match std::env::var(SITE_URL_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::parse(&raw),
            _ => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn section_url(&self, section: Section) -> String {
        format!("{}/#{}", self.base_url, section.anchor())
    }

    pub fn logo_url(&self) -> String {
        self.url(LOGO_PATH)
    }
}

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// One `<url>` element of the sitemap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    #[serde(rename = "loc")]
    pub url: String,
    #[serde(rename = "lastmod")]
    pub last_modified: String,
    #[serde(rename = "changefreq")]
    pub change_frequency: &'static str,
    #[serde(serialize_with = "one_decimal")]
    pub priority: f32,
}

fn one_decimal<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{value:.1}"))
}

fn section_priority(section: Section) -> f32 {
    match section {
        Section::About => 0.9,
        Section::Skills | Section::Projects => 0.8,
        Section::Contact => 0.7,
    }
}

pub fn sitemap(config: &SiteConfig, last_modified: &str) -> Vec<SitemapEntry> {
    let entry = |url: String, priority: f32| SitemapEntry {
        url,
        last_modified: last_modified.to_string(),
        change_frequency: "monthly",
        priority,
    };
    std::iter::once(entry(config.base_url().to_string(), 1.0))
        .chain(
            Section::ALL
                .iter()
                .map(|&s| entry(config.section_url(s), section_priority(s))),
        )
        .collect()
}

fn sitemap_error(err: impl std::fmt::Display) -> SiteError {
    SiteError::Sitemap(err.to_string())
}

pub fn render_sitemap(entries: &[SitemapEntry]) -> Result<String, SiteError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(sitemap_error)?;
    writer
        .write_event(Event::Start(
            BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)]),
        ))
        .map_err(sitemap_error)?;
    for entry in entries {
        writer
            .write_serializable("url", entry)
            .map_err(sitemap_error)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new("urlset")))
        .map_err(sitemap_error)?;

    String::from_utf8(writer.into_inner()).map_err(sitemap_error)
}

const DISALLOWED: [&str; 3] = ["/api/", "/pkg/", "/admin/"];

pub fn robots_txt(config: &SiteConfig) -> String {
    let mut out = String::from("User-Agent: *\nAllow: /\n");
    for path in DISALLOWED {
        out.push_str(&format!("Disallow: {path}\n"));
    }
    out.push_str(&format!("\nSitemap: {}\n", config.url("sitemap.xml")));
    out
}

pub fn person_json_ld(config: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": DEVELOPER_NAME,
        "jobTitle": ROLE,
        "description": DESCRIPTION,
        "url": format!("{}/", config.base_url()),
        "image": config.logo_url(),
        "email": format!("mailto:{EMAIL}"),
        "sameAs": [GITHUB_URL],
        "knowsAbout": [
            "React",
            "Next.js",
            "TypeScript",
            "Java",
            "Spring Boot",
            "JavaScript",
            "Web Development",
            "Full Stack Development",
            "Microservices",
            "PostgreSQL",
            "Laravel",
        ],
        "address": {
            "@type": "PostalAddress",
            "addressLocality": "Phnom Penh",
            "addressCountry": "KH",
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_site_url() {
        let config = SiteConfig::parse("https://pichet.dev/").expect("valid url");
        assert_eq!(config.base_url(), "https://pichet.dev");
        assert_eq!(config.url("/sitemap.xml"), "https://pichet.dev/sitemap.xml");
        assert_eq!(config.section_url(Section::Skills), "https://pichet.dev/#skills");
    }

    #[test]
    fn test_parse_rejects_bad_urls() {
        assert!(matches!(
            SiteConfig::parse("ftp://pichet.dev"),
            Err(SiteError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            SiteConfig::parse("pichet.dev"),
            Err(SiteError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            SiteConfig::parse("http://exa mple.com"),
            Err(SiteError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            SiteConfig::parse("https://pichet.dev/?ref=x"),
            Err(SiteError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_default_site_url() {
        assert_eq!(SiteConfig::default().base_url(), DEFAULT_SITE_URL);
    }

    #[test]
    fn test_sitemap_entries() {
        let config = SiteConfig::default();
        let entries = sitemap(&config, "2026-01-01T00:00:00+00:00");
        let urls = entries.iter().map(|e| e.url.as_str()).collect::<Vec<_>>();
        assert_eq!(
            urls,
            vec![
                "http://localhost:3000",
                "http://localhost:3000/#about",
                "http://localhost:3000/#skills",
                "http://localhost:3000/#projects",
                "http://localhost:3000/#contact",
            ]
        );
        let priorities = entries.iter().map(|e| e.priority).collect::<Vec<_>>();
        assert_eq!(priorities, vec![1.0, 0.9, 0.8, 0.8, 0.7]);
        assert!(entries.iter().all(|e| e.change_frequency == "monthly"));
    }

    #[test]
    fn test_render_sitemap() {
        let config = SiteConfig::parse("https://pichet.dev").expect("valid url");
        let xml = render_sitemap(&sitemap(&config, "2026-01-01T00:00:00+00:00")).expect("renders");
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.trim_end().ends_with("</urlset>"));
        assert_eq!(xml.matches("<url>").count(), 5);
        assert!(xml.contains("<loc>https://pichet.dev/#skills</loc>"));
        assert!(xml.contains("<lastmod>2026-01-01T00:00:00+00:00</lastmod>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<priority>0.7</priority>"));
    }

    #[test]
    fn test_render_sitemap_escapes_text() {
        let xml = render_sitemap(&sitemap(&SiteConfig::default(), "a<b&c")).expect("renders");
        assert!(xml.contains("<lastmod>a&lt;b&amp;c</lastmod>"));
        assert!(!xml.contains("a<b"));
    }

    #[test]
    fn test_robots_txt() {
        let robots = robots_txt(&SiteConfig::default());
        assert!(robots.contains("Allow: /\n"));
        assert!(robots.contains("Disallow: /pkg/\n"));
        assert!(robots.ends_with("Sitemap: http://localhost:3000/sitemap.xml\n"));
    }

    #[test]
    fn test_person_json_ld() {
        let ld = person_json_ld(&SiteConfig::default());
        assert_eq!(ld["@type"], "Person");
        assert_eq!(ld["name"], DEVELOPER_NAME);
        assert_eq!(ld["image"], "http://localhost:3000/images/logo/pichet.png");
        assert_eq!(ld["sameAs"][0], GITHUB_URL);
    }
}
