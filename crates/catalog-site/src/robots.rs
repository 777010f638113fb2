use crate::trim_site_url;

/// robots.txt that lets every crawler in and points at the sitemap.
pub fn render_robots(site_name: &str, site_url: &str) -> String {
    let site_url = trim_site_url(site_url);
    format!(
        "# robots.txt for {site_name}\n\
         # Allow all search engines to crawl the entire site\n\
         \n\
         User-agent: *\n\
         Allow: /\n\
         \n\
         # Sitemap location\n\
         Sitemap: {site_url}/sitemap.xml\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_at_sitemap_without_double_slash() {
        let robots = render_robots("AL IMTIYAZ", "https://example.com/");
        assert!(robots.starts_with("# robots.txt for AL IMTIYAZ\n"));
        assert!(robots.contains("User-agent: *\nAllow: /\n"));
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml\n"));
    }
}
