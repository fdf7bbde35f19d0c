//! Storefront state: product browsing, cart edits, checkout.

use crate::domain::{aggregates, CartLine, Collection, Product, ValidationError};

/// Pages of the storefront app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopPage {
    Storefront,
    Cart,
}

/// State for the storefront demo.
///
/// The catalog is fixed at construction; the cart only changes through the
/// named operations below, each of which swaps in a fresh collection
/// snapshot.
#[derive(Debug)]
pub struct ShopApp {
    pub products: Collection<Product>,
    pub cart: Collection<CartLine>,
    pub page: ShopPage,
    /// Active category filter; `None` shows every product.
    pub category: Option<String>,
    pub selected_product: usize,
    pub selected_line: usize,
    pub status_message: Option<String>,
}

impl ShopApp {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into_iter().collect(),
            cart: Collection::new(),
            page: ShopPage::Storefront,
            category: None,
            selected_product: 0,
            selected_line: 0,
            status_message: None,
        }
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for product in self.products.iter() {
            if !seen.contains(&product.category) {
                seen.push(product.category.clone());
            }
        }
        seen
    }

    /// Products matching the active category filter.
    pub fn visible_products(&self) -> Vec<&Product> {
        match &self.category {
            Some(category) => self
                .products
                .find_all(|product| &product.category == category),
            None => self.products.iter().collect(),
        }
    }

    /// Advances the category filter: all, then each category in order.
    pub fn cycle_category(&mut self) {
        let categories = self.categories();
        self.category = match &self.category {
            None => categories.first().cloned(),
            Some(current) => categories
                .iter()
                .position(|category| category == current)
                .and_then(|index| categories.get(index + 1))
                .cloned(),
        };
        self.selected_product = 0;
    }

    pub fn select_next_product(&mut self) {
        let count = self.visible_products().len();
        if count > 0 && self.selected_product < count - 1 {
            self.selected_product += 1;
        }
    }

    pub fn select_previous_product(&mut self) {
        self.selected_product = self.selected_product.saturating_sub(1);
    }

    /// Puts one unit of the highlighted product in the cart. Repeat adds of
    /// the same product merge into a single line.
    pub fn add_selected_to_cart(&mut self) {
        let Some(product) = self.visible_products().get(self.selected_product).copied() else {
            return;
        };
        let line = CartLine::for_product(product, 1);
        let name = product.name.clone();
        self.cart = self.cart.add(line);
        self.status_message = Some(format!("{} added to cart", name));
    }

    pub fn open_cart(&mut self) {
        self.page = ShopPage::Cart;
        self.selected_line = 0;
        self.status_message = None;
    }

    pub fn back_to_storefront(&mut self) {
        self.page = ShopPage::Storefront;
        self.status_message = None;
    }

    pub fn select_next_line(&mut self) {
        if self.cart.len() > 0 && self.selected_line < self.cart.len() - 1 {
            self.selected_line += 1;
        }
    }

    pub fn select_previous_line(&mut self) {
        self.selected_line = self.selected_line.saturating_sub(1);
    }

    pub fn increment_selected_line(&mut self) {
        if let Some(id) = self.selected_line_id() {
            self.cart = self.cart.update(&id, |line| CartLine {
                quantity: line.quantity + 1,
                ..line.clone()
            });
        }
    }

    /// Drops the highlighted line's quantity by one; reaching zero removes
    /// the line entirely.
    pub fn decrement_selected_line(&mut self) {
        if let Some(id) = self.selected_line_id() {
            self.cart = self.cart.update(&id, |line| CartLine {
                quantity: line.quantity.saturating_sub(1),
                ..line.clone()
            });
            self.clamp_line_cursor();
        }
    }

    pub fn remove_selected_line(&mut self) {
        if let Some(id) = self.selected_line_id() {
            self.cart = self.cart.remove(&id);
            self.clamp_line_cursor();
        }
    }

    pub fn clear_cart(&mut self) {
        self.cart = self.cart.clear();
        self.selected_line = 0;
    }

    /// Places the order: reports the total, empties the cart, and returns to
    /// the storefront. An empty cart is rejected before the store is touched.
    pub fn checkout(&mut self) {
        if self.cart.is_empty() {
            self.status_message = Some(ValidationError::EmptyCart.to_string());
            return;
        }
        let total = self.cart_total();
        self.cart = self.cart.clear();
        self.selected_line = 0;
        self.page = ShopPage::Storefront;
        self.status_message = Some(format!("Order placed, total ${:.2}", total));
    }

    pub fn cart_total(&self) -> f64 {
        aggregates::total_value(&self.cart)
    }

    pub fn cart_count(&self) -> u32 {
        aggregates::total_count(&self.cart)
    }

    fn selected_line_id(&self) -> Option<String> {
        self.cart
            .get(self.selected_line)
            .map(|line| line.product_id.clone())
    }

    fn clamp_line_cursor(&mut self) {
        if self.selected_line >= self.cart.len() {
            self.selected_line = self.cart.len().saturating_sub(1);
        }
    }
}
