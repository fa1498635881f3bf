//! Shared test utilities.
//!
//! This module provides helpers for setting up in-memory stores, building rows
//! with sensible defaults, and seeding a small household for repository tests.

use crate::{
    core::{DeliveryQueue, Dispatcher, delivery_channel},
    entities::{
        Chore, ChoreEntry, Location, Product, ProductBarcode, ProductGroup, QuantityUnit,
        QuantityUnitConversionResolved, Recipe, RecipeNestingResolved, RecipePosition,
        RecipePositionResolved, ShoppingList, ShoppingListItem, StockItem, StockLocation, Task,
        TaskCategory, User, chore, chore_entry, location, pending_product,
        pending_product_barcode, product, product_barcode, product_group, quantity_unit,
        quantity_unit_conversion_resolved, recipe, recipe_nesting_resolved, recipe_position,
        recipe_position_resolved, shopping_list, shopping_list_item, stock_item, stock_location,
        task, task_category, user,
    },
    errors::Result,
    store::Store,
};
use sea_orm::{NotSet, Set};
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to the test harness. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory store with all tables initialized.
/// This is the standard setup for store and repository tests.
pub async fn setup_test_store() -> Result<Store> {
    init_test_tracing();
    Store::in_memory().await
}

/// In-memory store plus a dispatcher on the test runtime.
/// Keep the queue alive for as long as callbacks are expected.
pub async fn setup_test_app() -> Result<(Store, Dispatcher, DeliveryQueue)> {
    let store = setup_test_store().await?;
    let (delivery, queue) = delivery_channel();
    Ok((store, Dispatcher::current(delivery), queue))
}

/// Product row with the given server id and name.
///
/// # Defaults
/// * units: 1 for purchase and stock
/// * `min_stock_amount`: 0
/// * active, no group or location
pub fn product_row(id: i64, name: &str) -> product::ActiveModel {
    product::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        description: Set(None),
        product_group_id: Set(None),
        location_id: Set(None),
        shopping_location_id: Set(None),
        qu_id_purchase: Set(1),
        qu_id_stock: Set(1),
        min_stock_amount: Set(0.0),
        default_best_before_days: Set(0),
        active: Set(true),
        picture_file_name: Set(None),
    }
}

pub fn location_row(id: i64, name: &str) -> location::ActiveModel {
    location::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        description: Set(None),
        is_freezer: Set(false),
    }
}

pub fn stock_item_row(product_id: i64, amount: f64) -> stock_item::ActiveModel {
    stock_item::ActiveModel {
        product_id: Set(product_id),
        amount: Set(amount),
        amount_aggregated: Set(amount),
        value: Set(0.0),
        best_before_date: Set(None),
        amount_opened: Set(0.0),
        is_aggregated_amount: Set(false),
    }
}

pub fn recipe_row(id: i64, name: &str) -> recipe::ActiveModel {
    recipe::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        description: Set(None),
        base_servings: Set(1.0),
        desired_servings: Set(1.0),
        not_check_shoppinglist: Set(false),
        product_id: Set(None),
    }
}

pub fn recipe_position_row(id: i64, recipe_id: i64, product_id: i64) -> recipe_position::ActiveModel {
    recipe_position::ActiveModel {
        id: Set(id),
        recipe_id: Set(recipe_id),
        product_id: Set(product_id),
        amount: Set(1.0),
        qu_id: Set(Some(1)),
        note: Set(None),
        only_check_single_unit_in_stock: Set(false),
        not_check_stock_fulfillment: Set(false),
    }
}

/// Pending product without an id, so the store generates one.
pub fn pending_product_draft(name: &str) -> pending_product::ActiveModel {
    pending_product::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        created_at: Set(chrono::Utc::now().naive_utc()),
    }
}

pub fn pending_barcode_draft(
    pending_product_id: i64,
    barcode: &str,
) -> pending_product_barcode::ActiveModel {
    pending_product_barcode::ActiveModel {
        id: NotSet,
        pending_product_id: Set(Some(pending_product_id)),
        product_id: Set(None),
        barcode: Set(barcode.to_string()),
        amount: Set(None),
        qu_id: Set(None),
        note: Set(None),
    }
}

/// Free-text shopping list item without an id.
pub fn shopping_list_item_draft(
    shopping_list_id: i64,
    note: &str,
) -> shopping_list_item::ActiveModel {
    shopping_list_item::ActiveModel {
        id: NotSet,
        shopping_list_id: Set(shopping_list_id),
        product_id: Set(None),
        note: Set(Some(note.to_string())),
        amount: Set(1.0),
        qu_id: Set(None),
        done: Set(false),
    }
}

/// Seeds a small pantry:
/// * products 1 Apples, 2 Bread, 3 Milk; one product group; units 1 Piece, 2 Pack
/// * one resolved conversion (Pack -> 6 Piece for Milk)
/// * stock for Apples and Bread, split over locations 1 Fridge and 2 Pantry
/// * one barcode for Milk, one shopping list with Milk on it
pub async fn seed_pantry(store: &Store) -> Result<()> {
    store
        .table::<Product>()
        .insert_many([
            product_row(1, "Apples"),
            product_row(2, "Bread"),
            product_row(3, "Milk"),
        ])
        .await?;
    store
        .table::<ProductGroup>()
        .insert(product_group::ActiveModel {
            id: Set(1),
            name: Set("Basics".to_string()),
            description: Set(None),
        })
        .await?;
    store
        .table::<QuantityUnit>()
        .insert_many([
            quantity_unit::ActiveModel {
                id: Set(1),
                name: Set("Piece".to_string()),
                name_plural: Set(Some("Pieces".to_string())),
                description: Set(None),
            },
            quantity_unit::ActiveModel {
                id: Set(2),
                name: Set("Pack".to_string()),
                name_plural: Set(Some("Packs".to_string())),
                description: Set(None),
            },
        ])
        .await?;
    store
        .table::<QuantityUnitConversionResolved>()
        .insert(quantity_unit_conversion_resolved::ActiveModel {
            id: Set(1),
            product_id: Set(Some(3)),
            from_qu_id: Set(2),
            to_qu_id: Set(1),
            factor: Set(6.0),
        })
        .await?;
    store
        .table::<StockItem>()
        .insert_many([stock_item_row(1, 6.0), stock_item_row(2, 1.0)])
        .await?;
    store
        .table::<Location>()
        .insert_many([location_row(1, "Fridge"), location_row(2, "Pantry")])
        .await?;
    store
        .table::<StockLocation>()
        .insert_many([
            stock_location::ActiveModel {
                id: Set(1),
                product_id: Set(1),
                location_id: Set(1),
                amount: Set(6.0),
            },
            stock_location::ActiveModel {
                id: Set(2),
                product_id: Set(2),
                location_id: Set(2),
                amount: Set(1.0),
            },
        ])
        .await?;
    store
        .table::<ProductBarcode>()
        .insert(product_barcode::ActiveModel {
            id: Set(1),
            product_id: Set(3),
            barcode: Set("4001234567890".to_string()),
            qu_id: Set(Some(2)),
            amount: Set(Some(1.0)),
            shopping_location_id: Set(None),
            note: Set(None),
        })
        .await?;
    store
        .table::<ShoppingList>()
        .insert(shopping_list::ActiveModel {
            id: Set(1),
            name: Set("Weekly".to_string()),
            notes: Set(None),
        })
        .await?;
    store
        .table::<ShoppingListItem>()
        .insert(shopping_list_item::ActiveModel {
            id: Set(1),
            shopping_list_id: Set(1),
            product_id: Set(Some(3)),
            note: Set(None),
            amount: Set(2.0),
            qu_id: Set(Some(2)),
            done: Set(false),
        })
        .await?;
    Ok(())
}

/// Seeds recipes 1 Pancakes (two positions, includes recipe 2) and 2 Syrup.
/// Expects [`seed_pantry`] to have run.
pub async fn seed_recipes(store: &Store) -> Result<()> {
    store
        .table::<Recipe>()
        .insert_many([recipe_row(1, "Pancakes"), recipe_row(2, "Syrup")])
        .await?;
    store
        .table::<RecipePosition>()
        .insert_many([recipe_position_row(1, 1, 1), recipe_position_row(2, 1, 3)])
        .await?;

    let resolved = |id: i64, recipe_id: i64, product_id: i64, fulfilled: bool| {
        recipe_position_resolved::ActiveModel {
            id: Set(id),
            recipe_id: Set(recipe_id),
            recipe_pos_id: Set(id),
            product_id: Set(product_id),
            recipe_amount: Set(1.0),
            stock_amount: Set(if fulfilled { 1.0 } else { 0.0 }),
            need_fulfilled: Set(fulfilled),
            missing_amount: Set(if fulfilled { 0.0 } else { 1.0 }),
            amount_on_shopping_list: Set(0.0),
            need_fulfilled_with_shopping_list: Set(fulfilled),
            qu_id: Set(Some(1)),
        }
    };
    store
        .table::<RecipePositionResolved>()
        .insert_many([resolved(1, 1, 1, true), resolved(2, 1, 3, true), resolved(3, 2, 2, false)])
        .await?;
    store
        .table::<RecipeNestingResolved>()
        .insert(recipe_nesting_resolved::ActiveModel {
            id: Set(1),
            recipe_id: Set(1),
            includes_recipe_id: Set(2),
            servings: Set(1.0),
        })
        .await?;
    Ok(())
}

/// Seeds users 1 and 2, one weekly chore assigned to user 2, and two tasks in
/// one category.
pub async fn seed_household(store: &Store) -> Result<()> {
    store
        .table::<User>()
        .insert_many([
            user::ActiveModel {
                id: Set(1),
                username: Set("admin".to_string()),
                first_name: Set(None),
                last_name: Set(None),
                display_name: Set("admin".to_string()),
            },
            user::ActiveModel {
                id: Set(2),
                username: Set("sam".to_string()),
                first_name: Set(Some("Sam".to_string())),
                last_name: Set(None),
                display_name: Set("Sam".to_string()),
            },
        ])
        .await?;
    store
        .table::<Chore>()
        .insert(chore::ActiveModel {
            id: Set(4),
            name: Set("Water plants".to_string()),
            description: Set(None),
            period_type: Set("weekly".to_string()),
            period_days: Set(Some(7)),
            track_date_only: Set(true),
            assignment_type: Set(Some("in-alphabetical-order".to_string())),
        })
        .await?;
    store
        .table::<ChoreEntry>()
        .insert(chore_entry::ActiveModel {
            chore_id: Set(4),
            chore_name: Set("Water plants".to_string()),
            last_tracked_time: Set(None),
            next_estimated_execution_time: Set(None),
            next_execution_assigned_to_user_id: Set(Some(2)),
        })
        .await?;
    store
        .table::<TaskCategory>()
        .insert(task_category::ActiveModel {
            id: Set(1),
            name: Set("Errands".to_string()),
            description: Set(None),
        })
        .await?;
    store
        .table::<Task>()
        .insert_many([
            task::ActiveModel {
                id: Set(1),
                name: Set("Descale kettle".to_string()),
                description: Set(None),
                due_date: Set(None),
                done: Set(false),
                category_id: Set(Some(1)),
                assigned_to_user_id: Set(Some(1)),
            },
            task::ActiveModel {
                id: Set(2),
                name: Set("Return bottles".to_string()),
                description: Set(None),
                due_date: Set(None),
                done: Set(false),
                category_id: Set(Some(1)),
                assigned_to_user_id: Set(None),
            },
        ])
        .await?;
    Ok(())
}
