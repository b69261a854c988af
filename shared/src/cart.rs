//! Shopping cart kept in key/value storage.
//!
//! The cart is a list of `{ id, quantity }` lines, unique per product id.
//! Every mutation reads the whole list, changes it and writes it back.

use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};

use crate::storage::{load_json_list, save_json_list, KeyValueStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product id
    pub id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Increment the line for `product_id`, or append a new line with quantity 1
    pub fn add(&mut self, product_id: &str) {
        match self.lines.iter_mut().find(|line| line.id == product_id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine {
                id: product_id.to_string(),
                quantity: 1,
            }),
        }
    }

    /// Sum of all line quantities
    pub fn total_quantity(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |sum, line| sum.saturating_add(line.quantity))
    }
}

/// Persists the cart under a fixed storage key
pub struct CartRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CartRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Missing or malformed data is an empty cart
    pub fn load(&self) -> Cart {
        Cart::from_lines(load_json_list(&self.store, &self.key))
    }

    pub fn save(&self, cart: &Cart) -> Result<()> {
        save_json_list(&self.store, &self.key, cart.lines())
    }
}

/// Cart operations behind the shop's add-to-cart button and count badge
pub struct CartService<S> {
    repository: CartRepository<S>,
}

impl<S: KeyValueStore> CartService<S> {
    pub fn new(repository: CartRepository<S>) -> Self {
        Self { repository }
    }

    /// Add one unit of `product_id` and return the new total quantity
    pub fn add_to_cart(&self, product_id: &str) -> Result<u32> {
        let mut cart = self.repository.load();
        cart.add(product_id);
        self.repository.save(&cart)?;

        let count = cart.total_quantity();
        info!("Added '{}' to cart, {} item(s) in cart", product_id, count);
        Ok(count)
    }

    /// Total quantity currently persisted
    pub fn cart_count(&self) -> u32 {
        self.repository.load().total_quantity()
    }

    pub fn cart(&self) -> Cart {
        self.repository.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn create_service(store: &MemoryStore) -> CartService<&MemoryStore> {
        CartService::new(CartRepository::new(store, "cart"))
    }

    #[test]
    fn test_add_twice_increments_single_line() {
        let store = MemoryStore::new();
        let service = create_service(&store);

        assert_eq!(service.add_to_cart("sku-x").unwrap(), 1);
        assert_eq!(service.add_to_cart("sku-x").unwrap(), 2);

        let cart = service.cart();
        assert_eq!(
            cart.lines(),
            &[CartLine {
                id: "sku-x".to_string(),
                quantity: 2,
            }]
        );
    }

    #[test]
    fn test_count_is_sum_of_quantities() {
        let store = MemoryStore::new();
        let service = create_service(&store);

        service.add_to_cart("sku-x").unwrap();
        service.add_to_cart("sku-y").unwrap();
        service.add_to_cart("sku-x").unwrap();
        let count = service.add_to_cart("sku-z").unwrap();

        assert_eq!(count, 4);
        assert_eq!(service.cart_count(), 4);
        assert_eq!(service.cart().lines().len(), 3);
    }

    #[test]
    fn test_persisted_shape() {
        let store = MemoryStore::new();
        let service = create_service(&store);
        service.add_to_cart("ssd-01").unwrap();
        service.add_to_cart("ssd-01").unwrap();

        let raw = store.get_item("cart").unwrap().unwrap();
        assert_eq!(raw, r#"[{"id":"ssd-01","quantity":2}]"#);
    }

    #[test]
    fn test_existing_lines_are_preserved() {
        let store = MemoryStore::new();
        store
            .set_item("cart", r#"[{"id":"ram-01","quantity":3}]"#)
            .unwrap();
        let service = create_service(&store);

        assert_eq!(service.cart_count(), 3);
        assert_eq!(service.add_to_cart("ssd-01").unwrap(), 4);
        let cart = service.cart();
        assert_eq!(cart.lines()[0].id, "ram-01");
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.lines()[1].id, "ssd-01");
    }

    #[test]
    fn test_corrupt_cart_counts_as_empty() {
        let store = MemoryStore::new();
        store.set_item("cart", "{broken").unwrap();
        let service = create_service(&store);

        assert_eq!(service.cart_count(), 0);
        assert_eq!(service.add_to_cart("sku-x").unwrap(), 1);
    }

    #[test]
    fn test_separate_keys_do_not_interfere() {
        let store = MemoryStore::new();
        let main = CartService::new(CartRepository::new(&store, "cart"));
        let demo = CartService::new(CartRepository::new(&store, "demo-cart"));

        main.add_to_cart("a").unwrap();
        assert_eq!(demo.cart_count(), 0);
    }
}
