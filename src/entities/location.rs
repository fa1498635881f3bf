//! Location entity - A place inside the household where stock is kept.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Location database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    /// Server id of the location
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Location name (e.g., "Fridge", "Pantry")
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Freezer locations change best-before handling on transfer
    pub is_freezer: bool,
}

/// `Location` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
