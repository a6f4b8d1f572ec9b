//! Communication Centre walkthrough
//!
//! This example demonstrates:
//! - Building a portal over fixture data
//! - Searching, filtering and sorting each list page
//! - Sort-header toggling on the orders page
//! - Request-style parameters with pagination
//! - Assembling a custom loadout and showing rank progress

use wolfpack::prelude::*;
use wolfpack::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    println!("🐺 Wolfpack Communication Centre");
    println!("================================\n");

    let portal = Portal::with_fixtures();
    let (orders, loadouts, commendations) = portal.load_all().await?;
    println!("✅ Loaded {} orders", orders.store().len());
    println!("✅ Loaded {} loadouts", loadouts.store().len());
    println!("✅ Loaded {} commendations\n", commendations.store().len());

    // Orders: most recent first, then a header click on price
    let mut query = Query::new().filter("type", "outgoing");
    println!("📦 Outgoing orders (newest first):");
    for order in orders.view(&query)?.iter() {
        println!("   {} {:<20} {:>8.2} {}", order.id, order.item, order.price, order.status);
    }

    query.toggle_sort("price", orders.engine().schema());
    println!("\n📦 Outgoing orders by price:");
    for order in orders.view(&query)?.iter() {
        println!("   {} {:<20} {:>8.2}", order.id, order.item, order.price);
    }

    // Loadouts: the three search / filter scenarios of the loadouts page
    println!("\n🎒 Loadouts:");
    let scenarios = [
        ("urban terrain", Query::new().filter("terrain", "urban")),
        ("search 'recon'", Query::new().search("recon")),
        (
            "assault missions by name",
            Query::new()
                .filter("mission", "assault")
                .sort("name", SortDirection::Ascending),
        ),
        ("jungle + assault", Query::new().filter("terrain", "jungle").filter("mission", "assault")),
    ];
    for (label, query) in &scenarios {
        let view = loadouts.view(query)?;
        if view.has_no_matches() {
            println!("   {label}: no loadouts match your filters");
        } else {
            let names: Vec<&str> = view.iter().map(|l| l.name.as_str()).collect();
            println!("   {label}: {}", names.join(", "));
        }
    }

    // Unknown category values are rejected, not silently ignored
    match loadouts.view(&Query::new().filter("terrain", "swamp")) {
        Ok(_) => println!("   unexpected: 'swamp' accepted"),
        Err(e) => println!("   ⚠️  {} ({})", e, e.error_code()),
    }

    // Commendations: request-style parameters, two per page
    let params = QueryParams {
        limit: 2,
        filter: Some(r#"{"category": "achievement"}"#.to_string()),
        ..Default::default()
    };
    let page = commendations.view_params(&params)?;
    println!(
        "\n🏅 Achievements (page {}/{}):",
        page.pagination.page, page.pagination.total_pages
    );
    for commendation in &page.data {
        println!("   {} ({})", commendation.name, commendation.date_earned);
    }

    // Custom loadout builder
    let mut custom = CustomLoadout::new();
    for item in LoadoutItem::catalog().into_iter().take(3) {
        custom.add(item);
    }
    println!(
        "\n🛠️  Custom loadout: {} items ({} weapons, {} armor)",
        custom.items().len(),
        custom.count_of(ItemKind::Weapon),
        custom.count_of(ItemKind::Armor)
    );

    let progress = RankProgress::compute(Rank::Sergeant, 2250);
    match progress.next_rank {
        Some(next) => println!(
            "🎖️  {} → {}: {:.0}% ({} / {} XP)",
            progress.rank,
            next,
            progress.percent,
            progress.experience,
            progress.experience_to_next.unwrap_or_default()
        ),
        None => println!("🎖️  {}: maximum rank", progress.rank),
    }

    Ok(())
}
