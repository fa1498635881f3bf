//! Recipe position entity - One ingredient line of a recipe.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Recipe position database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipe_positions")]
pub struct Model {
    /// Server id of the position
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Recipe this position belongs to
    pub recipe_id: i64,
    /// Ingredient product
    pub product_id: i64,
    /// Amount needed for the recipe's base servings
    pub amount: f64,
    /// Unit of `amount`
    pub qu_id: Option<i64>,
    /// Note shown next to the ingredient
    pub note: Option<String>,
    /// Only require one unit in stock, whatever `amount` says
    pub only_check_single_unit_in_stock: bool,
    /// Exclude this ingredient from fulfillment checks
    pub not_check_stock_fulfillment: bool,
}

/// Defines relationships between `RecipePosition` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each position belongs to one recipe
    #[sea_orm(
        belongs_to = "super::recipe::Entity",
        from = "Column::RecipeId",
        to = "super::recipe::Column::Id"
    )]
    Recipe,
}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipe.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
