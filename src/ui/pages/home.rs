//! The single-page marketing site
//!
//! Mounts every section in visual order and owns the page-wide scroll
//! tracker that feeds the nav bar.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::{BUSINESS, SECTIONS};
use crate::core::sections::SectionList;
use crate::ui::floating_buttons::FloatingButtons;
use crate::ui::footer::Footer;
use crate::ui::navbar::Navbar;
use crate::ui::scroll_tracker::use_scroll_tracker;
use crate::ui::sections::{About, Contact, Hero, Sectors, Services};
use crate::ui::theme::use_theme_context;

const DESCRIPTION: &str = "EMA licensed electricians in Singapore. Re-wiring, DB box, lighting, ceiling fans, water heaters and 24/7 emergency repairs for HDB, condo, landed and commercial properties.";

/// Canonical page URL, provided by the server from its configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalUrl(pub String);

/// Title, description, canonical link and structured data
#[component]
fn SeoMeta() -> impl IntoView {
    let canonical = use_context::<CanonicalUrl>()
        .map(|url| url.0)
        .unwrap_or_else(|| BUSINESS.canonical.to_string());
    let json_ld = BUSINESS.json_ld(&canonical).to_string();
    let title = format!("{} | {} in Singapore", BUSINESS.name, BUSINESS.tagline);

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=DESCRIPTION />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=canonical.clone() />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=DESCRIPTION />

        <Link rel="canonical" href=canonical />

        // JSON-LD Structured Data (inline script)
        <script type="application/ld+json" inner_html=json_ld></script>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme_context();

    let tracker = match SectionList::new(&SECTIONS) {
        Ok(sections) => Some(use_scroll_tracker(sections)),
        Err(err) => {
            tracing::error!(%err, "invalid section list, nav highlighting disabled");
            None
        }
    };

    view! {
        <SeoMeta />

        <div class=move || {
            let palette = theme.palette();
            format!("min-h-screen {} {} transition-colors duration-300", palette.bg, palette.text)
        }>
            {tracker.map(|tracker| view! { <Navbar tracker=tracker /> })}
            <main>
                <Hero />
                <About />
                <Sectors />
                <Services />
                <Contact />
            </main>
            <Footer />
            <FloatingButtons />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_meta::provide_meta_context;

    use crate::ui::theme::provide_theme_context;

    fn render_home() -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_meta_context();
            provide_theme_context();
            view! { <HomePage /> }.to_html()
        })
    }

    #[test]
    fn test_sections_render_in_order() {
        let html = render_home();

        let positions: Vec<usize> = ["home", "about", "sectors", "services", "contact"]
            .iter()
            .map(|id| {
                html.find(&format!(r#"id="{id}""#))
                    .unwrap_or_else(|| panic!("section {id} missing"))
            })
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_page_has_chrome() {
        let html = render_home();
        assert!(html.contains("Main navigation"));
        assert!(html.contains("Chat on WhatsApp"));
        assert!(html.contains("UEN: "));
    }
}
