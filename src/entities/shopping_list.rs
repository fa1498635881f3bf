//! Shopping list entity - A named list; items live in `shopping_list_items`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shopping list database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shopping_lists")]
pub struct Model {
    /// Server id of the list
    #[sea_orm(primary_key)]
    pub id: i64,
    /// List name
    pub name: String,
    /// Notes shown above the list
    pub notes: Option<String>,
}

/// `ShoppingList` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
