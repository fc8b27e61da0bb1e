//! Terminal entry point: renders the inventory listing, or one item when an
//! id is given.

use anyhow::Context;

use armory_app::views::{self, DetailView, ListingView};
use armory_client::{ClientConfig, InventoryClient};
use armory_core::ItemId;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    armory_observability::init();

    // Resolved once; the base URL never changes for the process lifetime.
    let config = ClientConfig::from_env();
    tracing::info!(base_url = config.base_url(), "starting armory client");
    let client = InventoryClient::new(config);

    match std::env::args().nth(1) {
        Some(raw) => {
            let id: ItemId = raw.parse().context("item id must be an integer")?;
            show_item(&client, id).await;
        }
        None => show_listing(&client).await,
    }

    Ok(())
}

async fn show_listing(client: &InventoryClient) {
    match ListingView::load(client).await {
        ListingView::Loaded { items, stats } => {
            println!(
                "{} items ({} weapons, {} armor, {} consumables)",
                stats.total, stats.weapons, stats.armor, stats.consumables
            );
            for item in &items {
                println!(
                    "#{:<5} {:<24} {:<12} {:<10} x{:<5} {:>8.2}",
                    item.id, item.name, item.category, item.rarity, item.quantity, item.price
                );
            }
        }
        ListingView::Failed => println!("failed to load"),
    }
}

async fn show_item(client: &InventoryClient, id: ItemId) {
    match DetailView::load(client, id).await {
        DetailView::Loaded(item) => {
            println!("#{} {} [{} / {}]", item.id, item.name, item.category, item.rarity);
            println!("{}", item.description_text());
            println!("quantity {}   price {:.2}", item.quantity, item.price);
            println!(
                "image {}",
                views::display_image(&item, views::PLACEHOLDER_IMAGE_DETAIL)
            );
        }
        DetailView::Failed => println!("failed to load"),
    }
}
