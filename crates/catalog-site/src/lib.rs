//! catalog-site
//!
//! Static files published next to the rendered pages: `robots.txt` and
//! `sitemap.xml`.

pub mod robots;
pub mod sitemap;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use catalog_core::error::{Error, Result};

pub use robots::render_robots;
pub use sitemap::{default_routes, render_sitemap, ChangeFreq, SiteRoute};

pub const DEFAULT_SITE_URL: &str = "https://punith-mithra.github.io";
pub const DEFAULT_SITE_NAME: &str = "Website";

/// `[site]` section of the config.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_routes")]
    pub routes: Vec<SiteRoute>,
}

fn default_url() -> String {
    DEFAULT_SITE_URL.to_string()
}

fn default_name() -> String {
    DEFAULT_SITE_NAME.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { url: default_url(), name: default_name(), routes: default_routes() }
    }
}

/// Write `robots.txt` and `sitemap.xml` into `out_dir`, creating it if needed.
pub fn write_assets(out_dir: &Path, site: &SiteConfig) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|e| Error::io(out_dir, e))?;

    let robots_path = out_dir.join("robots.txt");
    fs::write(&robots_path, render_robots(&site.name, &site.url)).map_err(|e| Error::io(&robots_path, e))?;

    let sitemap_path = out_dir.join("sitemap.xml");
    fs::write(&sitemap_path, render_sitemap(&site.url, &site.routes)).map_err(|e| Error::io(&sitemap_path, e))?;

    info!(dir = %out_dir.display(), routes = site.routes.len(), "wrote robots.txt and sitemap.xml");
    Ok(vec![robots_path, sitemap_path])
}

pub(crate) fn trim_site_url(url: &str) -> &str {
    url.trim_end_matches('/')
}
