//! Recording fakes for the collaborator ports

use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::task::{Context, Poll, Waker};

use async_trait::async_trait;
use shared::error::{AppError, AppResult};
use shared::models::{CartEntry, Product, ProductCreate, ProductUpdate};

use crate::ports::{
    CartAggregator, ConfirmDialog, ImageFileReader, ImagePicker, ImageStorage, Navigator,
    ProductRepository,
};

/// Poll a future exactly once without a runtime.
///
/// Used to park a submit in flight and then abandon it.
pub fn poll_once<F: Future>(fut: Pin<&mut F>) -> Poll<F::Output> {
    let waker = Waker::noop();
    let mut cx = Context::from_waker(waker);
    fut.poll(&mut cx)
}

// ========================================================================
// Product repository
// ========================================================================

/// In-memory repository recording every mutation it receives.
#[derive(Default)]
pub struct FakeRepository {
    products: Mutex<HashMap<i64, Product>>,
    next_id: AtomicI64,
    created: Mutex<Vec<ProductCreate>>,
    updated: Mutex<Vec<(i64, ProductUpdate)>>,
    deleted: Mutex<Vec<i64>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FakeRepository {
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let repo = Self::default();
        {
            let mut map = repo.products.lock().unwrap();
            for product in products {
                let id = product.id.expect("seeded products need an id");
                map.insert(id, product);
            }
        }
        repo.next_id.store(1000, Ordering::SeqCst);
        repo
    }

    /// Make every read fail with a database error.
    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    /// Make every mutation fail with a database error.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn created(&self) -> Vec<ProductCreate> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<(i64, ProductUpdate)> {
        self.updated.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<i64> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.created.lock().unwrap().len()
            + self.updated.lock().unwrap().len()
            + self.deleted.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductRepository for FakeRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::database("read failed"));
        }
        Ok(self.products.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, payload: ProductCreate) -> AppResult<Product> {
        self.created.lock().unwrap().push(payload.clone());
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::database("create failed"));
        }
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
        self.updated.lock().unwrap().push((id, payload.clone()));
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::database("update failed"));
        }
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
        self.deleted.lock().unwrap().push(id);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::database("delete failed"));
        }
        self.products.lock().unwrap().remove(&id);
        Ok(())
    }
}

/// Repository whose calls never resolve; parks a submit in flight.
#[derive(Default)]
pub struct StallingRepository;

#[async_trait]
impl ProductRepository for StallingRepository {
    async fn find_by_id(&self, _id: i64) -> AppResult<Option<Product>> {
        std::future::pending().await
    }

    async fn create(&self, _payload: ProductCreate) -> AppResult<Product> {
        std::future::pending().await
    }

    async fn update(&self, _id: i64, _payload: ProductUpdate) -> AppResult<Product> {
        std::future::pending().await
    }

    async fn delete(&self, _id: i64) -> AppResult<()> {
        std::future::pending().await
    }
}

// ========================================================================
// Object storage
// ========================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct UploadRecord {
    pub collection: String,
    pub filename: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Storage fake returning `{collection}/{filename}` as the stored path.
#[derive(Default)]
pub struct FakeStorage {
    uploads: Mutex<Vec<UploadRecord>>,
    fail: AtomicBool,
}

impl FakeStorage {
    /// Make every upload fail.
    pub fn fail_uploads(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn uploads(&self) -> Vec<UploadRecord> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStorage for FakeStorage {
    async fn upload(
        &self,
        collection: &str,
        filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> AppResult<String> {
        self.uploads.lock().unwrap().push(UploadRecord {
            collection: collection.to_string(),
            filename: filename.to_string(),
            bytes,
            content_type: content_type.to_string(),
        });
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::storage("bucket unavailable"));
        }
        Ok(format!("{collection}/{filename}"))
    }
}

// ========================================================================
// Picker, file reader, dialog
// ========================================================================

/// Picker fake; cancels unless a selection is preset.
#[derive(Default)]
pub struct FakePicker {
    selection: Mutex<Option<PathBuf>>,
}

impl FakePicker {
    pub fn with_selection(path: impl Into<PathBuf>) -> Self {
        Self {
            selection: Mutex::new(Some(path.into())),
        }
    }
}

#[async_trait]
impl ImagePicker for FakePicker {
    async fn pick(&self) -> Option<PathBuf> {
        self.selection.lock().unwrap().clone()
    }
}

/// File reader backed by an in-memory map of base64 contents.
#[derive(Default)]
pub struct FakeFileReader {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl FakeFileReader {
    pub fn with_file(path: impl Into<PathBuf>, base64: impl Into<String>) -> Self {
        let reader = Self::default();
        reader
            .files
            .lock()
            .unwrap()
            .insert(path.into(), base64.into());
        reader
    }
}

#[async_trait]
impl ImageFileReader for FakeFileReader {
    async fn read_base64(&self, path: &Path) -> AppResult<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::file_read(format!("no such file: {}", path.display())))
    }
}

/// Dialog fake with a fixed answer, recording every prompt.
pub struct FakeDialog {
    answer: bool,
    prompts: Mutex<Vec<(String, String)>>,
}

impl FakeDialog {
    pub fn accepting() -> Self {
        Self {
            answer: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn declining() -> Self {
        Self {
            answer: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmDialog for FakeDialog {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        self.prompts
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
        self.answer
    }
}

// ========================================================================
// Navigation and cart
// ========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Back,
    ReplaceRoot,
    PushCart,
}

#[derive(Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<NavEvent>>,
}

impl RecordingNavigator {
    pub fn events(&self) -> Vec<NavEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_back(&self) {
        self.events.lock().unwrap().push(NavEvent::Back);
    }

    fn replace_with_root(&self) {
        self.events.lock().unwrap().push(NavEvent::ReplaceRoot);
    }

    fn push_cart(&self) {
        self.events.lock().unwrap().push(NavEvent::PushCart);
    }
}

#[derive(Default)]
pub struct RecordingCart {
    entries: Mutex<Vec<CartEntry>>,
}

impl RecordingCart {
    pub fn entries(&self) -> Vec<CartEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl CartAggregator for RecordingCart {
    fn add_entry(&self, entry: CartEntry) {
        self.entries.lock().unwrap().push(entry);
    }
}
