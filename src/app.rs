mod contact;
mod hero;
mod reveal;
mod skills;
mod tech_scroll;
mod typewriter;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::DEVELOPER_NAME;
use crate::seo::{self, SiteConfig};

use contact::ContactSection;
use hero::HeroSection;
use skills::SkillsSection;

// `property` has no typed attribute method, so set it as a custom attribute.
fn og_meta(property: &'static str, content: impl Into<String>) -> impl IntoView {
    leptos::html::meta()
        .attr("property", property)
        .content(content.into())
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let site = use_context::<SiteConfig>().unwrap_or_default();
    let json_ld = seo::person_json_ld(&site).to_string();
    let logo = site.logo_url();
    let canonical = format!("{}/", site.base_url());
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta
                    name="viewport"
                    content="width=device-width, initial-scale=1, maximum-scale=5, viewport-fit=cover"
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="theme-color" content=seo::THEME_COLOR />
                <meta name="description" content=seo::DESCRIPTION />
                <meta name="keywords" content=seo::KEYWORDS.join(", ") />
                <meta name="author" content=DEVELOPER_NAME />
                <meta name="robots" content="index, follow" />
                <link rel="canonical" href=canonical.clone() />
                <link rel="icon" href=seo::LOGO_PATH />
                <link rel="apple-touch-icon" href=seo::LOGO_PATH />
                <link rel="manifest" href="/manifest.json" />
                <meta property="og:type" content="website" />
                <meta property="og:locale" content="en_US" />
                {og_meta("og:url", canonical)}
                {og_meta("og:site_name", DEVELOPER_NAME)}
                {og_meta("og:title", seo::SITE_NAME)}
                {og_meta("og:description", seo::DESCRIPTION)}
                {og_meta("og:image", logo.clone())}
                <meta name="twitter:card" content="summary_large_image" />
                <meta name="twitter:title" content=seo::SITE_NAME />
                <meta name="twitter:description" content=seo::DESCRIPTION />
                <meta name="twitter:image" content=logo />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <script type="application/ld+json" inner_html=json_ld></script>
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("{title} | {DEVELOPER_NAME}") />

        <Router>
            <main class="grid w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

/// The whole portfolio: every section lives on this one page.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Full Stack Developer" />
        <HeroSection />
        <SkillsSection />
        <ContactSection />
    }
}
