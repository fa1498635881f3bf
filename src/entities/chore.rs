//! Chore entity - A recurring household chore definition.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Chore database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "chores")]
pub struct Model {
    /// Server id of the chore
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Chore name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Recurrence kind: `"manually"`, `"daily"`, `"weekly"`, `"monthly"`, ...
    pub period_type: String,
    /// Interval for the recurrence kinds that take one
    pub period_days: Option<i32>,
    /// Track executions by date only, without time of day
    pub track_date_only: bool,
    /// How the next assignee is picked, if assignments are used
    pub assignment_type: Option<String>,
}

/// `Chore` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
