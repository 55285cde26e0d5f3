//! In-memory cart store
//!
//! The cart lives on a single logical thread (the UI), so there is no
//! locking here. Lines are keyed by catalog item id; adding an existing
//! item increments its quantity. Quantities are clamped to
//! [`MAX_LINE_QUANTITY`] and a quantity of zero or less removes the line.

use rust_decimal::Decimal;

use shared::models::{CartLine, MAX_LINE_QUANTITY, MenuItem};

/// Storefront cart
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of an orderable catalog item.
    ///
    /// Items without a price are not orderable and are ignored.
    pub fn add_item(&mut self, item: &MenuItem) {
        let Some(price) = item.price else {
            return;
        };

        if let Some(line) = self.lines.iter_mut().find(|l| l.id == item.id) {
            line.quantity = (line.quantity + 1).min(MAX_LINE_QUANTITY);
            return;
        }

        self.lines.push(CartLine {
            id: item.id.clone(),
            name: item.name.clone(),
            price,
            quantity: 1,
            image: item.image_url.clone(),
        });
    }

    /// Set the quantity of a line; zero or less removes it
    pub fn update_quantity(&mut self, id: &str, quantity: i32) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = quantity.min(MAX_LINE_QUANTITY);
        }
    }

    /// Remove a line; removing an absent id is a no-op
    pub fn remove_item(&mut self, id: &str) {
        self.lines.retain(|l| l.id != id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total units across all lines
    pub fn total_item_count(&self) -> i32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Exact cart total (SAR)
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(|l| l.subtotal()).sum()
    }

    /// Cart total rounded to 2 decimal places for display
    pub fn display_total(&self) -> Decimal {
        self.total_price().round_dp(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_item(id: &str, name: &str, price: Option<&str>) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            category: "Mains".to_string(),
            price: price.map(|p| p.parse().unwrap()),
            image_url: None,
            icon_name: "utensils".to_string(),
            is_popular: false,
            is_signature: false,
            display_order: 0,
        }
    }

    #[test]
    fn adding_same_item_increments_quantity() {
        let mut cart = Cart::new();
        let biryani = menu_item("menu_item:biryani", "Biryani", Some("45.00"));

        cart.add_item(&biryani);
        cart.add_item(&biryani);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total_item_count(), 2);
    }

    #[test]
    fn unpriced_items_are_not_addable() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("menu_item:special", "Chef Special", None));
        assert!(cart.is_empty());
    }

    #[test]
    fn total_is_exact() {
        let mut cart = Cart::new();
        let biryani = menu_item("menu_item:biryani", "Biryani", Some("45.00"));
        let naan = menu_item("menu_item:naan", "Naan", Some("8.00"));

        cart.add_item(&biryani);
        cart.add_item(&biryani);
        cart.add_item(&naan);

        assert_eq!(cart.total_price(), "98.00".parse::<Decimal>().unwrap());
        assert_eq!(cart.display_total(), "98.00".parse::<Decimal>().unwrap());
        assert_eq!(cart.total_item_count(), 3);
    }

    #[test]
    fn zero_quantity_removes_the_line() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("menu_item:naan", "Naan", Some("8.00")));

        cart.update_quantity("menu_item:naan", 0);
        assert!(cart.is_empty());

        cart.add_item(&menu_item("menu_item:naan", "Naan", Some("8.00")));
        cart.update_quantity("menu_item:naan", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn quantity_clamps_to_the_cap() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("menu_item:naan", "Naan", Some("8.00")));

        cart.update_quantity("menu_item:naan", 1000);
        assert_eq!(cart.lines()[0].quantity, MAX_LINE_QUANTITY);

        // incrementing at the cap stays at the cap
        cart.add_item(&menu_item("menu_item:naan", "Naan", Some("8.00")));
        assert_eq!(cart.lines()[0].quantity, MAX_LINE_QUANTITY);
    }

    #[test]
    fn removal_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("menu_item:naan", "Naan", Some("8.00")));

        cart.remove_item("menu_item:naan");
        cart.remove_item("menu_item:naan");
        cart.remove_item("menu_item:never-existed");
        assert!(cart.is_empty());
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("menu_item:biryani", "Biryani", Some("45.00")));
        cart.add_item(&menu_item("menu_item:naan", "Naan", Some("8.00")));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }
}
