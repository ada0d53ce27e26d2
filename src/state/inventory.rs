//! State for the live inventory modal, including the client-side search.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use crate::net::types::InventoryItem;

#[derive(Clone, Debug, Default)]
pub struct InventoryState {
    pub items: Vec<InventoryItem>,
    pub open: bool,
    pub loading: bool,
    pub search: String,
}

impl InventoryState {
    /// Items matching the current search term, in server order.
    ///
    /// Matches are case-insensitive substring hits on make, model, year,
    /// stock number, VIN, or color. A blank search returns everything.
    pub fn filtered(&self) -> Vec<&InventoryItem> {
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return self.items.iter().collect();
        }
        self.items
            .iter()
            .filter(|car| {
                car.make.to_lowercase().contains(&term)
                    || car.model.to_lowercase().contains(&term)
                    || car.year.to_string().contains(&term)
                    || car.stock_number.to_lowercase().contains(&term)
                    || car.vin.to_lowercase().contains(&term)
                    || car
                        .color
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&term))
            })
            .collect()
    }
}
