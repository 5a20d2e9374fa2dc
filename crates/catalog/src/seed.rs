//! Demo menu for seeding an empty store.

use crate::item::NewItem;

fn entry(name: &str, ingredients: &[&str], price_cents: u64, inventory: u32, description: &str) -> NewItem {
    NewItem {
        name: name.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        price_cents,
        inventory,
        is_active: true,
        category_id: None,
        description: Some(description.to_string()),
        image: None,
        emoji: None,
        show_qty: None,
    }
}

/// The demo menu inserted by the admin seed operation.
pub fn demo_menu() -> Vec<NewItem> {
    vec![
        entry(
            "Classic Club",
            &["Turkey", "Bacon", "Lettuce", "Tomato", "Mayo"],
            1299,
            20,
            "A triple-decker delight with turkey, bacon, and fresh vegetables.",
        ),
        entry(
            "Italian Sub",
            &["Salami", "Pepperoni", "Provolone", "Lettuce", "Tomato", "Italian Dressing"],
            1199,
            15,
            "Authentic Italian flavors with premium deli meats.",
        ),
        entry(
            "Veggie Delight",
            &["Cucumber", "Bell Peppers", "Avocado", "Spinach", "Hummus"],
            999,
            25,
            "Fresh and healthy vegetarian option packed with vegetables.",
        ),
        entry(
            "BBQ Pulled Pork",
            &["Pulled Pork", "BBQ Sauce", "Coleslaw", "Pickles"],
            1399,
            10,
            "Slow-cooked pork with tangy BBQ sauce and crunchy coleslaw.",
        ),
        entry(
            "Chicken Caesar",
            &["Grilled Chicken", "Romaine Lettuce", "Parmesan", "Caesar Dressing", "Croutons"],
            1099,
            18,
            "Classic Caesar salad in sandwich form with grilled chicken.",
        ),
        entry(
            "Reuben",
            &["Corned Beef", "Sauerkraut", "Swiss Cheese", "Russian Dressing"],
            1499,
            12,
            "Traditional Reuben with tender corned beef and tangy sauerkraut.",
        ),
    ]
}
