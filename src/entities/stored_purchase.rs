//! Stored purchase entity - A purchase recorded offline, awaiting confirmation.
//!
//! Points either at an existing product or at a pending one.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stored purchase database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stored_purchases")]
pub struct Model {
    /// Locally generated id
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Purchased product, if it already exists on the server
    pub product_id: Option<i64>,
    /// Purchased pending product otherwise
    pub pending_product_id: Option<i64>,
    /// Purchased amount in the stock unit
    pub amount: f64,
    /// Day of purchase
    pub purchased_date: Date,
    /// Best-before date entered at purchase
    pub best_before_date: Option<Date>,
    /// Price per unit
    pub price: Option<f64>,
    /// Where it was bought
    pub shopping_location_id: Option<i64>,
    /// Where it will be stored
    pub location_id: Option<i64>,
    /// Barcode scanned for this purchase, if any
    pub barcode: Option<String>,
}

/// `StoredPurchase` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
