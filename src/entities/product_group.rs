//! Product group entity - Named grouping of products (e.g., "Dairy").

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product group database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_groups")]
pub struct Model {
    /// Server id of the group
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Group name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
}

/// `ProductGroup` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
