use serde::{Deserialize, Serialize};

use picnic_core::{CategoryId, ItemId};

/// A menu item.
///
/// `inventory` is the only shared mutable counter in the system. It is
/// decremented exclusively by the order payment-confirmation path and is
/// clamped at zero there; nothing else writes it outside admin edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub ingredients: Vec<String>,
    /// Price in smallest currency unit (e.g., cents).
    pub price_cents: u64,
    pub inventory: u32,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    pub show_qty: bool,
}

/// Fields required to create an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub price_cents: u64,
    pub inventory: u32,
    pub is_active: bool,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    /// Defaults to true when omitted.
    #[serde(default)]
    pub show_qty: Option<bool>,
}

/// Partial update for an item; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub price_cents: Option<u64>,
    #[serde(default)]
    pub inventory: Option<u32>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub show_qty: Option<bool>,
}

impl Item {
    pub fn create(new: NewItem) -> Self {
        Self {
            id: ItemId::new(),
            name: new.name,
            ingredients: new.ingredients,
            price_cents: new.price_cents,
            inventory: new.inventory,
            is_active: new.is_active,
            category_id: new.category_id,
            description: new.description,
            image: new.image,
            emoji: new.emoji,
            show_qty: new.show_qty.unwrap_or(true),
        }
    }

    /// Decrement inventory by `qty`, clamping at zero. Overselling is
    /// resolved here at fulfillment time, never rejected earlier.
    pub fn decrement_inventory(&mut self, qty: u32) {
        self.inventory = self.inventory.saturating_sub(qty);
    }

    pub fn apply_patch(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(ingredients) = patch.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(price_cents) = patch.price_cents {
            self.price_cents = price_cents;
        }
        if let Some(inventory) = patch.inventory {
            self.inventory = inventory;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = Some(category_id);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
        if let Some(emoji) = patch.emoji {
            self.emoji = Some(emoji);
        }
        if let Some(show_qty) = patch.show_qty {
            self.show_qty = show_qty;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_item() -> Item {
        Item::create(NewItem {
            name: "Classic Club".to_string(),
            ingredients: vec!["Turkey".to_string(), "Bacon".to_string()],
            price_cents: 1299,
            inventory: 20,
            is_active: true,
            category_id: None,
            description: None,
            image: None,
            emoji: None,
            show_qty: None,
        })
    }

    #[test]
    fn show_qty_defaults_to_true() {
        assert!(base_item().show_qty);
    }

    #[test]
    fn decrement_clamps_at_zero() {
        let mut item = base_item();
        item.decrement_inventory(25);
        assert_eq!(item.inventory, 0);
    }

    proptest::proptest! {
        #[test]
        fn decrement_never_goes_negative_and_is_exact_otherwise(
            inventory in 0u32..10_000,
            qty in 0u32..10_000,
        ) {
            let mut item = base_item();
            item.inventory = inventory;
            item.decrement_inventory(qty);
            if qty > inventory {
                proptest::prop_assert_eq!(item.inventory, 0);
            } else {
                proptest::prop_assert_eq!(item.inventory, inventory - qty);
            }
        }
    }

    #[test]
    fn patch_touches_only_present_fields() {
        let mut item = base_item();
        item.apply_patch(ItemPatch {
            price_cents: Some(1399),
            is_active: Some(false),
            ..ItemPatch::default()
        });
        assert_eq!(item.price_cents, 1399);
        assert!(!item.is_active);
        assert_eq!(item.name, "Classic Club");
        assert_eq!(item.inventory, 20);
    }
}
