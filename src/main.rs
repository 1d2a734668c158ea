// src/main.rs
// =============================================================================
// Entry point of the skills-catalog CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build Settings (environment first, then CLI flags on top)
// 3. Run the requested catalog query
// 4. Print the result as a table or as JSON
// 5. Exit with 0 on success, 2 on an unexpected error
//
// An empty result is not an error: with remote access off (the default for
// local runs) every listing simply comes back empty.
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use cli::{Cli, Commands};
use skills_catalog::aggregate::{CategoryShare, KeywordCount, OwnerShare, PopularityEntry};
use skills_catalog::{logging, Catalog, CatalogItem, ItemDetail, MetricsSummary, Settings};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let mut settings = Settings::from_env().context("invalid environment configuration")?;
    if cli.allow_remote {
        settings.allow_remote = true;
    }
    if let Some(base) = cli.base_url.as_deref() {
        settings = settings.with_base_url(base)?;
    }

    if !settings.remote_allowed() {
        tracing::info!("remote access disabled; pass --allow-remote or set SKILLS_ALLOW_REMOTE=1");
    }

    let catalog = Catalog::from_settings(&settings)?;

    match cli.command {
        Commands::All { json } => print_items(&catalog.all_items().await, json)?,
        Commands::Trending { json } => print_items(&catalog.trending_items().await, json)?,
        Commands::Hot { json } => print_items(&catalog.hot_items().await, json)?,
        Commands::Detail { owner, collection, name, json } => {
            let detail = catalog.item_detail(&owner, &collection, &name).await;
            print_with(&detail, json, print_detail)?;
        }
        Commands::Metrics { json } => {
            let metrics = catalog.metrics_summary().await;
            print_with(&metrics, json, print_metrics)?;
        }
        Commands::Top { limit, json } => {
            let top = catalog.top_by_popularity(limit).await;
            print_with(&top, json, |entries| print_top(entries))?;
        }
        Commands::Owners { limit, json } => {
            let owners = catalog.owner_distribution(limit).await;
            print_with(&owners, json, |shares| print_owners(shares))?;
        }
        Commands::Categories { json } => {
            let categories = catalog.category_breakdown().await;
            print_with(&categories, json, |shares| print_categories(shares))?;
        }
        Commands::Keywords { limit, json } => {
            let keywords = catalog.keywords(limit).await;
            print_with(&keywords, json, |words| print_keywords(words))?;
        }
        Commands::Search { query, limit } => {
            let results = catalog.search(&query, limit).await?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(0)
}

// Prints `value` as pretty JSON, or hands it to `table` for the human view
fn print_with<T, F>(value: &T, json: bool, table: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T),
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        table(value);
    }
    Ok(())
}

fn print_items(items: &[CatalogItem], json: bool) -> Result<()> {
    print_with(items, json, |items| {
        if items.is_empty() {
            println!("No skills found");
            return;
        }

        println!("{:<6} {:<40} {:<24} {:<10}", "RANK", "SKILL", "OWNER", "INSTALLS");
        println!("{}", "=".repeat(82));
        for item in items {
            println!(
                "{:<6} {:<40} {:<24} {:<10}",
                item.rank,
                truncate(&item.name, 40),
                truncate(&item.owner, 24),
                item.popularity
            );
        }
        println!();
        println!("{} skill(s)", items.len());
    })
}

fn print_detail(detail: &ItemDetail) {
    println!("{}/{}/{}", detail.owner, detail.collection, detail.name);
    println!("  URL:     {}", detail.canonical_url);
    println!("  Install: {}", detail.install_command);
    println!();
    println!("{}", detail.description);
}

fn print_metrics(metrics: &MetricsSummary) {
    println!("Total skills:    {}", metrics.total_count);
    println!("Trending (24h):  {}", metrics.trending_count);
    println!("Top trending:    {}", metrics.trending_top_name);
    println!(
        "Hottest:         {} ({})",
        metrics.hottest_top_name, metrics.hottest_top_popularity
    );
}

fn print_top(entries: &[PopularityEntry]) {
    println!("{:<40} {:>12} {:>10}", "SKILL", "INSTALLS", "DISPLAY");
    println!("{}", "=".repeat(64));
    for entry in entries {
        println!(
            "{:<40} {:>12.0} {:>10}",
            truncate(&entry.name, 40),
            entry.popularity,
            entry.popularity_formatted
        );
    }
}

fn print_owners(shares: &[OwnerShare]) {
    println!("{:<30} {:>6} {:>6}", "OWNER", "SKILLS", "SHARE");
    println!("{}", "=".repeat(44));
    for share in shares {
        println!(
            "{:<30} {:>6} {:>5}%",
            truncate(&share.owner, 30),
            share.count,
            share.percentage
        );
    }
}

fn print_categories(shares: &[CategoryShare]) {
    for share in shares {
        println!(
            "{:<10} {:>6} {:>5}%",
            share.label, share.count, share.display_percentage
        );
    }
}

fn print_keywords(words: &[KeywordCount]) {
    let line: Vec<String> = words
        .iter()
        .map(|k| format!("{} ({})", k.word, k.count))
        .collect();
    println!("{}", line.join(", "));
}

// Cuts long names so table columns stay aligned
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-very-long-skill-name", 10), "a-very-...");
    }
}
