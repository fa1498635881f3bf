//! Resolved recipe nesting - Flattened "recipe includes recipe" closure.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Resolved recipe nesting database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipe_nestings_resolved")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub recipe_id: i64,
    pub includes_recipe_id: i64,
    pub servings: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
