use std::fmt::Write as _;

use serde::Deserialize;

use crate::trim_site_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteRoute {
    pub url: String,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

impl SiteRoute {
    pub fn new(url: &str, changefreq: ChangeFreq, priority: f32) -> Self {
        Self { url: url.to_string(), changefreq, priority }
    }
}

/// Public pages of the site.
pub fn default_routes() -> Vec<SiteRoute> {
    vec![
        SiteRoute::new("/", ChangeFreq::Weekly, 1.0),
        SiteRoute::new("/about", ChangeFreq::Monthly, 0.8),
        SiteRoute::new("/services", ChangeFreq::Monthly, 0.9),
        SiteRoute::new("/projects", ChangeFreq::Weekly, 0.9),
        SiteRoute::new("/contact", ChangeFreq::Yearly, 0.7),
    ]
}

pub fn render_sitemap(site_url: &str, routes: &[SiteRoute]) -> String {
    let base = trim_site_url(site_url);
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for route in routes {
        let path = if route.url.starts_with('/') { route.url.clone() } else { format!("/{}", route.url) };
        let loc = escape_xml(&format!("{base}{path}"));
        let priority = route.priority.clamp(0.0, 1.0);
        // infallible: writing into a String
        let _ = write!(
            xml,
            "  <url>\n    <loc>{loc}</loc>\n    <changefreq>{}</changefreq>\n    <priority>{priority:.1}</priority>\n  </url>\n",
            route.changefreq.as_str()
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
