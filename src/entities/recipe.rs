//! Recipe entity - A recipe with its servings; ingredients are recipe positions.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Recipe database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    /// Server id of the recipe
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Recipe name
    pub name: String,
    /// Preparation text (rich text from the editor)
    pub description: Option<String>,
    /// Servings the ingredient amounts are written for
    pub base_servings: f64,
    /// Servings the user wants to cook
    pub desired_servings: f64,
    /// Ignore the shopping list when computing fulfillment
    pub not_check_shoppinglist: bool,
    /// Product produced by cooking this recipe, if any
    pub product_id: Option<i64>,
}

/// Defines relationships between Recipe and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One recipe has many positions
    #[sea_orm(has_many = "super::recipe_position::Entity")]
    Positions,
}

impl Related<super::recipe_position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Positions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
