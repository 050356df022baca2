use anyhow::Context;
use shared::PageToken;
use std::sync::Arc;
use stroy_core::catalog::{ImageResolver, ServiceOptions};
use stroy_core::{CartStore, CatalogService, KeyValueStore, RedbStore, SessionPrefs, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, work dir, logging)
    let config = setup_environment()?;
    tracing::info!(api = %config.api_url, mode = ?config.source_mode(), "🏗️ Stroy storefront starting...");

    // 2. Persistent slots
    let store: Arc<dyn KeyValueStore> = Arc::new(
        RedbStore::open(config.store_path())
            .with_context(|| format!("opening {}", config.store_path().display()))?,
    );
    let prefs = SessionPrefs::new(store.clone());
    let cart = CartStore::load(store);

    // 3. Catalog
    let client = Arc::new(config.client_config().build_http_client()?);
    let service = CatalogService::new(
        client.clone(),
        client,
        ImageResolver::new(&config.images_base_url, &config.placeholder_image),
        ServiceOptions {
            page_size: config.page_size,
            prefetch: config.prefetch_next_page,
        },
    );
    service.warmup().await?;

    let tree = service.tree().await?;
    for (id, department) in &tree.departments {
        println!("{id:>8}  {} ({} sections)", department.name, department.sections.len());
    }

    // 4. Listing: search term from the command line, else the last one used
    let search = std::env::args().nth(1).unwrap_or_else(|| prefs.search_query());
    let request = service
        .request()
        .with_selector(prefs.selected_category().unwrap_or_default())
        .with_search(search.clone())
        .with_page(prefs.page());
    prefs.set_search_query(&search)?;

    if let Some(page) = service.list(request).await?.current() {
        let info = page.pagination;
        let (first, last) = info.item_range();
        println!(
            "\nItems {first}-{last} of {} (page {} of {})",
            info.total_items, info.page, info.total_pages
        );
        for product in &page.data {
            let price = product
                .retail_price
                .map(|p| format!("{p:.2}"))
                .unwrap_or_else(|| "price on request".to_string());
            println!("{:>8}  {}  {}", product.material_id, product.material_name, price);
        }

        let pager: Vec<String> = info
            .window(5)
            .into_iter()
            .map(|token| match token {
                PageToken::Page(n) if n == info.page => format!("[{n}]"),
                PageToken::Page(n) => n.to_string(),
                PageToken::Ellipsis => "…".to_string(),
            })
            .collect();
        println!("{}", pager.join(" "));
    }

    println!("\nCart: {} items, total {:.2}", cart.items_count(), cart.total());
    Ok(())
}
