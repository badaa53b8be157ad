//! Product detail selection workflow

use std::sync::Arc;

use shared::error::{AppError, ErrorCode};
use shared::models::{CartEntry, Product, SizeVariant};

use crate::ports::{CartAggregator, Navigator, ProductRepository};

/// Load state of the viewed product.
///
/// The surface renders a loading indication until `Ready`, and a
/// blocking failure indication on `Failed`; a partial product is never
/// rendered.
#[derive(Debug, Clone)]
pub enum ProductLoad {
    Loading,
    Ready(Product),
    Failed(AppError),
}

impl ProductLoad {
    pub fn is_loading(&self) -> bool {
        matches!(self, ProductLoad::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ProductLoad::Failed(_))
    }

    /// The loaded product, once available
    pub fn product(&self) -> Option<&Product> {
        match self {
            ProductLoad::Ready(product) => Some(product),
            _ => None,
        }
    }
}

/// Customer-facing size selection for a product detail view.
pub struct SelectionComposer {
    product: ProductLoad,
    selected_size: SizeVariant,
    repository: Arc<dyn ProductRepository>,
    cart: Arc<dyn CartAggregator>,
    navigator: Arc<dyn Navigator>,
}

impl SelectionComposer {
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        cart: Arc<dyn CartAggregator>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            product: ProductLoad::Loading,
            selected_size: SizeVariant::default(),
            repository,
            cart,
            navigator,
        }
    }

    /// Fetch the product for display.
    pub async fn load(&mut self, id: i64) {
        self.product = ProductLoad::Loading;
        self.product = match self.repository.find_by_id(id).await {
            Ok(Some(product)) => ProductLoad::Ready(product),
            Ok(None) => ProductLoad::Failed(AppError::with_message(
                ErrorCode::ProductNotFound,
                format!("Product {id} not found"),
            )),
            Err(err) => {
                tracing::warn!(error = %err, id, "Product fetch failed");
                ProductLoad::Failed(err)
            }
        };
    }

    pub fn product(&self) -> &ProductLoad {
        &self.product
    }

    pub fn selected_size(&self) -> SizeVariant {
        self.selected_size
    }

    /// Set the selected size; any member of the fixed set is valid.
    pub fn select_size(&mut self, size: SizeVariant) {
        self.selected_size = size;
    }

    /// Hand the configured selection to the cart and open the cart view.
    ///
    /// Silently a no-op until the product is loaded; confirming mutates
    /// neither the product nor the selection, so repeat confirms produce
    /// identical entries. Returns whether an entry was handed off.
    pub fn confirm(&self) -> bool {
        let ProductLoad::Ready(product) = &self.product else {
            return false;
        };

        let entry = CartEntry::new(product.clone(), self.selected_size);
        tracing::info!(id = ?entry.product.id, size = %entry.size, "Selection added to cart");
        self.cart.add_entry(entry);
        self.navigator.push_cart();
        true
    }
}

impl std::fmt::Debug for SelectionComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionComposer")
            .field("product", &self.product)
            .field("selected_size", &self.selected_size)
            .finish()
    }
}
