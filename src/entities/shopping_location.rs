//! Shopping location entity - A store where products are bought.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shopping location database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shopping_locations")]
pub struct Model {
    /// Server id of the shopping location
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Store name (e.g., "Farmers Market")
    pub name: String,
    /// Optional description
    pub description: Option<String>,
}

/// `ShoppingLocation` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
