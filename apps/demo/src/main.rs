//! # Bazaar Demo
//!
//! Drives a scripted storefront session against the catalog provider and the
//! state store, the same sequence a browser session would produce:
//!
//! 1. Fetch categories and products concurrently (home page load)
//! 2. Search the catalog
//! 3. Add/update/remove cart lines
//! 4. Login, logout, register
//!
//! State survives runs: the store snapshots to `BAZAAR_SNAPSHOT_PATH` after
//! every mutation and rehydrates on startup, so a second run starts from the
//! previous session's cart.

mod config;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bazaar_catalog::{Catalog, FixtureCatalog};
use bazaar_core::CartItem;
use bazaar_store::{FileBackend, Store};

use config::DemoConfig;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = DemoConfig::from_env();
    info!(?config, "starting bazaar demo session");

    let catalog: Arc<dyn Catalog> = Arc::new(FixtureCatalog::with_delay(config.fetch_delay));
    let store = Arc::new(Store::new(FileBackend::new(&config.snapshot_dir)));

    if store.total_items() > 0 {
        info!(
            total_items = store.total_items(),
            total_price = %store.total_price(),
            "rehydrated cart from previous session"
        );
    }

    let subscription = {
        let observer = Arc::clone(&store);
        store.subscribe(move |event| {
            info!(
                ?event,
                total_items = observer.total_items(),
                total_price = %observer.total_price(),
                "store changed"
            );
        })
    };

    // Home page: categories and the full product list fetched in parallel.
    let (categories, products) = tokio::join!(catalog.list_categories(), catalog.list_products(None));
    info!(
        categories = categories.len(),
        products = products.len(),
        "home page data loaded"
    );

    // Category page plus a text search.
    let electronics = catalog.list_products(Some(1)).await;
    info!(count = electronics.len(), "electronics category loaded");

    let hits = catalog.search("phone", None).await;
    for product in &hits {
        info!(id = product.id, name = %product.name, price = %product.price(), "search hit");
    }

    // A fetch whose result arrives after the user navigated away: interest
    // is dropped and the late result discarded, since queries cannot be
    // cancelled.
    let interested = Arc::new(AtomicBool::new(true));
    let abandoned = {
        let catalog = Arc::clone(&catalog);
        let interested = Arc::clone(&interested);
        tokio::spawn(async move {
            let product = catalog.get_product(2).await;
            if interested.load(Ordering::SeqCst) {
                info!(?product, "product detail loaded");
            } else {
                info!("discarding late product fetch, consumer navigated away");
            }
        })
    };
    interested.store(false, Ordering::SeqCst);

    // Cart session: two smartphones, a t-shirt, then adjustments.
    if let Some(smartphone) = products.iter().find(|p| p.id == 1) {
        store.add_to_cart(CartItem::from_product(smartphone));
        store.add_to_cart(CartItem::from_product(smartphone));
    }
    if let Some(shirt) = products.iter().find(|p| p.id == 4) {
        store.add_to_cart(CartItem::from_product(shirt));
    }
    store.update_quantity(4, 3);
    store.remove_from_cart(1);

    // Auth session: admin login, logout (cart survives), registration.
    store.login("alice", "123$%&");
    match store.current_user() {
        Some(user) => info!(username = %user.username, is_admin = user.is_admin, "logged in"),
        None => warn!("login did not produce a user"),
    }

    store.logout();
    info!(
        authenticated = store.is_authenticated(),
        total_items = store.total_items(),
        "logged out, cart untouched"
    );

    store.register("bob", "bob@example.com", "secret");

    if abandoned.await.is_err() {
        warn!("abandoned fetch task panicked");
    }

    store.unsubscribe(subscription);
    info!(snapshot = ?store.snapshot(), "session complete");
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
