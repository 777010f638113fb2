//! Shared setup for the catalog binaries.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use catalog_core::config::Config;
use catalog_core::{Catalog, CatalogLoader};
use catalog_site::SiteConfig;

/// Log to stderr, level from `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

pub fn load_catalog(config: &Config) -> anyhow::Result<Catalog> {
    let path = config.catalog_path();
    tracing::debug!(path = %path.display(), "resolved catalog path");
    CatalogLoader::new()
        .load(&path)
        .with_context(|| format!("loading catalog from {}", path.display()))
}

pub fn site_config(config: &Config) -> SiteConfig {
    config.get_or("site", SiteConfig::default())
}

/// One line typed into `catalog-interactive`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    Quit,
    Help,
    Clear,
    /// `/c <category>`; a bare `/c` selects `"All"`.
    Category(&'a str),
    Query(&'a str),
}

pub fn parse_repl_line(line: &str) -> ReplCommand<'_> {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.trim() {
        "/quit" | "/exit" => ReplCommand::Quit,
        "/help" => ReplCommand::Help,
        "/clear" => ReplCommand::Clear,
        "/c" => ReplCommand::Category(catalog_core::ALL_CATEGORY),
        cmd if cmd.starts_with("/c ") => ReplCommand::Category(cmd["/c ".len()..].trim()),
        _ => ReplCommand::Query(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_category_command_selects_all() {
        assert_eq!(parse_repl_line("/c\n"), ReplCommand::Category("All"));
        assert_eq!(parse_repl_line("  /c  "), ReplCommand::Category("All"));
    }

    #[test]
    fn category_command_takes_the_rest_of_the_line() {
        assert_eq!(parse_repl_line("/c Cooking Equipment\n"), ReplCommand::Category("Cooking Equipment"));
    }

    #[test]
    fn other_lines_are_queries_with_whitespace_kept() {
        assert_eq!(parse_repl_line(" oven\r\n"), ReplCommand::Query(" oven"));
        assert_eq!(parse_repl_line("/combi"), ReplCommand::Query("/combi"));
        assert_eq!(parse_repl_line("/clear\n"), ReplCommand::Clear);
        assert_eq!(parse_repl_line("/exit"), ReplCommand::Quit);
    }
}
