use std::env;
use std::path::PathBuf;

use catalog_cli::{init_logging, load_catalog, site_config};
use catalog_core::config::Config;
use catalog_core::EquipmentRecord;
use catalog_search::CatalogSession;
use catalog_site::write_assets;

const USAGE: &str = "Usage: catalog-cli <search|categories|show|assets> [args...]\n\
  search \"<query>\" [category]   ranked products, optionally within one category\n\
  categories [\"<query>\"]        filter choices with counts\n\
  show <slug|id>                 one product in full\n\
  assets [out_dir]               write robots.txt and sitemap.xml";

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() { eprintln!("{USAGE}"); std::process::exit(1); }
    let cmd = args.remove(0);
    (cmd, args)
}

fn print_record(rank: usize, record: &EquipmentRecord, score: Option<u32>) {
    match score {
        Some(score) => println!("\n  {}. {}  (score={}, id={}, slug={})", rank, record.equipment_name, score, record.id, record.slug),
        None => println!("\n  {}. {}  (id={}, slug={})", rank, record.equipment_name, record.id, record.slug),
    }
    println!("     🏷  {}", record.categories.join(", "));
    if !record.professional_description.is_empty() { println!("     📝 {}", record.professional_description); }
    for (key, value) in record.spec_preview(2) { println!("     • {key}: {value}"); }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let (cmd, args) = parse_args();
    match cmd.as_str() {
        "search" => {
            let query = args.first().cloned().unwrap_or_default();
            let category = args.get(1).cloned().unwrap_or_else(|| catalog_core::ALL_CATEGORY.to_string());
            let limit: usize = config.get_or("search.default_limit", 20);

            let mut session = CatalogSession::new(load_catalog(&config)?);
            session.set_query(query.as_str());
            session.set_selected_category(category.as_str());

            let scores: std::collections::HashMap<u64, u32> =
                session.scored_results().into_iter().map(|(r, s)| (r.id, s)).collect();
            let shown = session.displayed_records();
            println!("🔍 \"{}\" in {}: {} products", query, category, shown.len());
            if shown.is_empty() {
                println!("\nNo products found. Try adjusting your search or filter.");
            }
            for (i, record) in shown.iter().take(limit).enumerate() {
                let score = session.is_query_active().then(|| scores.get(&record.id).copied().unwrap_or(0));
                print_record(i + 1, record, score);
            }
            if shown.len() > limit { println!("\n  … {} more", shown.len() - limit); }

            println!("\n📊 Category counts:");
            let counts = session.category_counts();
            for label in session.visible_categories() { println!("  {}: {}", label, counts.get(&label)); }
        }
        "categories" => {
            let query = args.first().cloned().unwrap_or_default();
            let mut session = CatalogSession::new(load_catalog(&config)?);
            session.set_query(query);
            if session.is_query_active() {
                let counts = session.category_counts();
                for label in session.visible_categories() { println!("{}\t{}", label, counts.get(&label)); }
            } else {
                for (label, count) in session.category_overview() { println!("{}\t{} products", label, count); }
            }
        }
        "show" => {
            let key = args.first().cloned().unwrap_or_else(|| {
                eprintln!("Usage: catalog-cli show <slug|id>"); std::process::exit(1)
            });
            let catalog = load_catalog(&config)?;
            let record = catalog
                .by_slug(&key)
                .or_else(|| key.parse::<u64>().ok().and_then(|id| catalog.by_id(id)))
                .ok_or_else(|| catalog_core::Error::NotFound(format!("product '{key}'")))?;
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        "assets" => {
            let out_dir = args.first().map(PathBuf::from).unwrap_or_else(|| {
                let dir: String = config.get("site.out_dir").unwrap_or_else(|_| "dist".to_string());
                catalog_core::config::resolve_with_base(config.base_dir(), dir)
            });
            let site = site_config(&config);
            for path in write_assets(&out_dir, &site)? { println!("✅ Generated {}", path.display()); }
        }
        _ => { eprintln!("Unknown command: {}\n{USAGE}", cmd); std::process::exit(1); }
    }
    Ok(())
}
