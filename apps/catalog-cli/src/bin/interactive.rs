use std::io::{self, BufRead, Write};

use catalog_cli::{init_logging, load_catalog, parse_repl_line, ReplCommand};
use catalog_core::config::Config;
use catalog_search::CatalogSession;

fn print_help() {
    println!("💡 Commands:");
    println!("  <text>          search by name, category, or specifications");
    println!("  /c <category>   narrow to one category (bare /c resets to All)");
    println!("  /clear          clear search and category");
    println!("  /quit           exit");
}

fn render(session: &CatalogSession) {
    let view = session.snapshot();
    println!();
    println!("Query: \"{}\"   Category: {}", view.query, view.selected_category);
    print!("Categories:");
    for label in &view.visible_categories {
        if session.is_query_active() {
            print!("  {} ({})", label, view.counts.get(label));
        } else {
            print!("  {label}");
        }
    }
    println!();
    if view.records.is_empty() {
        println!("No products found. Try /clear.");
        return;
    }
    for (i, record) in view.records.iter().enumerate() {
        println!("  {:>3}. {:<40} [{}]", i + 1, record.equipment_name, record.categories.join(", "));
    }
}

/// Interactive search over the product catalog
fn main() -> anyhow::Result<()> {
    init_logging();
    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let catalog = load_catalog(&config)?;

    println!("🔍 Interactive Catalog Search");
    println!("=============================");
    println!("📊 {} products across {} categories", catalog.len(), catalog.categories().len() - 1);
    print_help();

    let mut session = CatalogSession::new(catalog);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("\n> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match parse_repl_line(&line) {
            ReplCommand::Quit => break,
            ReplCommand::Help => {
                print_help();
                continue;
            }
            ReplCommand::Clear => session.clear_all(),
            ReplCommand::Category(category) => session.set_selected_category(category),
            ReplCommand::Query(query) => session.set_query(query),
        }
        render(&session);
    }
    println!("👋 Bye");
    Ok(())
}
