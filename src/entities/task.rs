//! Task entity - A one-off to-do item.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Task database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    /// Server id of the task
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Task title
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Due date, if any
    pub due_date: Option<Date>,
    /// Completed tasks stay in the table until synced away
    pub done: bool,
    /// Category, if any
    pub category_id: Option<i64>,
    /// Assigned user, if any
    pub assigned_to_user_id: Option<i64>,
}

/// `Task` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
