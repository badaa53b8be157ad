//! Admin Walkthrough - drive both workflows with in-memory adapters
//!
//! Walks the two core flows end to end:
//! 1. Create a product with a freshly picked photo
//! 2. Edit the price without touching the photo (no re-upload)
//! 3. Customer selects a size and adds the product to the cart
//!
//! Run: cargo run -p comanda-app --example admin_walkthrough

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use comanda_app::catalog::{EditorMode, EditorPorts, ProductEditor};
use comanda_app::config::CatalogConfig;
use comanda_app::menu::SelectionComposer;
use comanda_app::ports::{
    CartAggregator, ConfirmDialog, ImageFileReader, ImagePicker, ImageStorage, Navigator,
    ProductRepository,
};
use shared::error::AppResult;
use shared::models::{CartEntry, Product, ProductCreate, ProductUpdate, SizeVariant};

/// In-memory product store
#[derive(Default)]
struct InMemoryCatalog {
    products: Mutex<HashMap<i64, Product>>,
    next_id: AtomicI64,
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        Ok(self.products.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, payload: ProductCreate) -> AppResult<Product> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let product = Product {
            id: Some(id),
            name: payload.name,
            price: payload.price,
            image: payload.image,
            created_at: None,
        };
        self.products.lock().unwrap().insert(id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, payload: ProductUpdate) -> AppResult<Product> {
        let product = Product {
            id: Some(id),
            name: payload.name,
            price: payload.price,
            image: payload.image,
            created_at: None,
        };
        self.products.lock().unwrap().insert(id, product.clone());
        Ok(product)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.products.lock().unwrap().remove(&id);
        Ok(())
    }
}

/// In-memory object storage counting uploads
#[derive(Default)]
struct InMemoryBucket {
    upload_count: AtomicI64,
}

#[async_trait]
impl ImageStorage for InMemoryBucket {
    async fn upload(
        &self,
        collection: &str,
        filename: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> AppResult<String> {
        self.upload_count.fetch_add(1, Ordering::SeqCst);
        println!("   [bucket] stored {} bytes as {collection}/{filename}", bytes.len());
        Ok(format!("{collection}/{filename}"))
    }
}

/// Picker that always selects the same device file
struct ScriptedPicker;

#[async_trait]
impl ImagePicker for ScriptedPicker {
    async fn pick(&self) -> Option<PathBuf> {
        Some(PathBuf::from("/device/DCIM/margherita.png"))
    }
}

/// Reader handing back a tiny scripted photo for any path
struct ScriptedFileReader;

#[async_trait]
impl ImageFileReader for ScriptedFileReader {
    async fn read_base64(&self, _path: &Path) -> AppResult<String> {
        Ok(BASE64.encode([0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]))
    }
}

/// Dialog that always takes the destructive choice
struct AutoConfirm;

#[async_trait]
impl ConfirmDialog for AutoConfirm {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        println!("   [dialog] {title}: {message} -> Delete");
        true
    }
}

/// Navigator that narrates transitions
struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn go_back(&self) {
        println!("   [nav] back");
    }

    fn replace_with_root(&self) {
        println!("   [nav] replace with catalog root");
    }

    fn push_cart(&self) {
        println!("   [nav] push cart");
    }
}

/// Cart that narrates entries
struct PrintingCart;

impl CartAggregator for PrintingCart {
    fn add_entry(&self, entry: CartEntry) {
        println!(
            "   [cart] {} x1, size {} ({:.2})",
            entry.product.name, entry.size, entry.product.price
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("=== Admin Walkthrough ===\n");

    let repository = Arc::new(InMemoryCatalog::default());
    let bucket = Arc::new(InMemoryBucket::default());
    let navigator = Arc::new(LoggingNavigator);
    let ports = EditorPorts {
        repository: repository.clone(),
        storage: bucket.clone(),
        picker: Arc::new(ScriptedPicker),
        file_reader: Arc::new(ScriptedFileReader),
        dialog: Arc::new(AutoConfirm),
        navigator: navigator.clone(),
    };

    // === 1. Create a product with a photo ===
    println!("1. Creating product...");
    let mut editor = ProductEditor::new(EditorMode::Create, CatalogConfig::default(), ports.clone());
    editor.draft_mut().name = "Margherita".to_string();
    editor.draft_mut().price = "9.99".to_string();
    editor.pick_image().await;

    let outcome = editor.submit().await?;
    let id = outcome.product.id.expect("created product has an id");
    println!("   Created product {id} ({}).\n", outcome.product.name);

    // === 2. Edit the price; the stored photo is reused, not re-uploaded ===
    println!("2. Updating price...");
    let mut editor = ProductEditor::new(
        EditorMode::Update { id },
        CatalogConfig::default(),
        ports.clone(),
    );
    editor.load().await?;
    editor.draft_mut().price = "10.50".to_string();
    let outcome = editor.submit().await?;
    println!(
        "   Price is now {:.2}; total uploads so far: {} (unchanged photo reused).\n",
        outcome.product.price,
        bucket.upload_count.load(Ordering::SeqCst)
    );

    // === 3. Customer picks a size and adds to cart ===
    println!("3. Customer selection...");
    let mut composer = SelectionComposer::new(repository, Arc::new(PrintingCart), navigator);
    composer.load(id).await;
    composer.select_size(SizeVariant::Xl);
    composer.confirm();

    println!("\nDone.");
    Ok(())
}
