//! Purchase screen and the offline drafted purchase flow.
//!
//! Purchases recorded without a server connection are stored locally as
//! [`StoredPurchase`] rows. A purchase of a product that does not exist yet
//! creates a [`PendingProduct`] first; scanned codes for it are kept as
//! [`PendingProductBarcode`] rows. All three stay local until the user confirms
//! them, after which they are deleted here.

use super::ScreenRepository;
use super::write::{submit_delete, submit_insert};
use crate::core::{Dispatcher, join_into};
use crate::entities::{
    Location, LocationModel, PendingProduct, PendingProductBarcode, PendingProductBarcodeModel,
    PendingProductModel, Product, ProductBarcode, ProductBarcodeModel, ProductModel, QuantityUnit,
    QuantityUnitConversionResolved, QuantityUnitConversionResolvedModel, QuantityUnitModel,
    ShoppingListItem, ShoppingListItemModel, ShoppingLocation, ShoppingLocationModel,
    StoredPurchase, StoredPurchaseModel, pending_product, pending_product_barcode,
    stored_purchase,
};
use crate::errors::{Error, Result};
use crate::store::Store;
use chrono::NaiveDate;
use sea_orm::{NotSet, Set};
use std::future::Future;

bundle! {
    /// Purchase screen, including drafts waiting for confirmation.
    PurchaseBundle {
        products: ProductModel,
        pending_products: PendingProductModel,
        pending_product_barcodes: PendingProductBarcodeModel,
        product_barcodes: ProductBarcodeModel,
        quantity_units: QuantityUnitModel,
        unit_conversions: QuantityUnitConversionResolvedModel,
        shopping_locations: ShoppingLocationModel,
        locations: LocationModel,
        stored_purchases: StoredPurchaseModel,
        shopping_list_items: ShoppingListItemModel,
    }
}

/// A purchase entered offline, before it becomes a [`StoredPurchase`] row.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseDraft {
    /// Purchased product, when it already exists on the server
    pub product_id: Option<i64>,
    /// Purchased pending product otherwise
    pub pending_product_id: Option<i64>,
    /// Amount in the stock unit
    pub amount: f64,
    /// Day of purchase
    pub purchased_date: NaiveDate,
    /// Best-before date, if known
    pub best_before_date: Option<NaiveDate>,
    /// Price per unit, if entered
    pub price: Option<f64>,
    /// Where it was bought
    pub shopping_location_id: Option<i64>,
    /// Where it will be stored
    pub location_id: Option<i64>,
    /// Barcode scanned for this purchase
    pub barcode: Option<String>,
}

impl PurchaseDraft {
    /// Checks the draft and turns it into an insertable row.
    ///
    /// # Errors
    /// Returns `Error::Config` if:
    /// - neither or both of `product_id` and `pending_product_id` are set
    /// - the amount is not a positive finite number
    /// - the price is negative or not finite
    pub fn into_active_model(self) -> Result<stored_purchase::ActiveModel> {
        if self.product_id.is_some() == self.pending_product_id.is_some() {
            return Err(Error::Config {
                message: "A purchase needs exactly one of product or pending product".to_string(),
            });
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::Config {
                message: format!("Purchase amount must be positive, got {}", self.amount),
            });
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err(Error::Config {
                    message: format!("Purchase price cannot be negative, got {price}"),
                });
            }
        }

        Ok(stored_purchase::ActiveModel {
            id: NotSet,
            product_id: Set(self.product_id),
            pending_product_id: Set(self.pending_product_id),
            amount: Set(self.amount),
            purchased_date: Set(self.purchased_date),
            best_before_date: Set(self.best_before_date),
            price: Set(self.price),
            shopping_location_id: Set(self.shopping_location_id),
            location_id: Set(self.location_id),
            barcode: Set(self.barcode.filter(|code| !code.trim().is_empty())),
        })
    }
}

/// Builds a pending product row from a user-entered name.
///
/// # Errors
/// Returns `Error::Config` if the name is empty or whitespace-only.
pub fn new_pending_product(name: &str) -> Result<pending_product::ActiveModel> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Pending product name cannot be empty".to_string(),
        });
    }
    Ok(pending_product::ActiveModel {
        id: NotSet,
        name: Set(name.trim().to_string()),
        created_at: Set(chrono::Utc::now().naive_utc()),
    })
}

/// Loads [`PurchaseBundle`] and manages drafted purchases.
#[derive(Clone, Debug)]
pub struct PurchaseRepository {
    store: Store,
    dispatcher: Dispatcher,
}

impl PurchaseRepository {
    /// Binds the repository to a store and a dispatcher.
    #[must_use]
    pub const fn new(store: Store, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }

    /// Creates a pending product and returns its generated id.
    pub async fn create_pending_product(&self, name: &str) -> Result<i64> {
        let model = new_pending_product(name)?;
        self.store.table::<PendingProduct>().insert(model).await
    }

    /// Stores a drafted purchase and returns its generated id.
    pub async fn store_purchase(&self, draft: PurchaseDraft) -> Result<i64> {
        let model = draft.into_active_model()?;
        self.store.table::<StoredPurchase>().insert(model).await
    }

    /// Callback form of [`create_pending_product`](Self::create_pending_product).
    /// An invalid name is reported through `on_error` like any store failure.
    pub fn insert_pending_product<S, E>(&self, name: String, on_success: S, on_error: E)
    where
        S: FnOnce(i64) + Send + 'static,
        E: FnOnce(Error) + Send + 'static,
    {
        let table = self.store.table::<PendingProduct>();
        self.dispatcher.submit(
            async move { table.insert(new_pending_product(&name)?).await },
            on_success,
            on_error,
        );
    }

    /// Deletes a pending product once it has been confirmed or discarded.
    pub fn delete_pending_product<S, E>(&self, id: i64, on_success: S, on_error: E)
    where
        S: FnOnce(()) + Send + 'static,
        E: FnOnce(Error) + Send + 'static,
    {
        submit_delete(
            &self.dispatcher,
            self.store.table::<PendingProduct>(),
            id,
            on_success,
            on_error,
        );
    }

    /// Records a barcode scanned for a pending (or not yet uploaded) product.
    pub fn insert_pending_product_barcode<S, E>(
        &self,
        barcode: pending_product_barcode::ActiveModel,
        on_success: S,
        on_error: E,
    ) where
        S: FnOnce(i64) + Send + 'static,
        E: FnOnce(Error) + Send + 'static,
    {
        submit_insert(
            &self.dispatcher,
            self.store.table::<PendingProductBarcode>(),
            barcode,
            on_success,
            on_error,
        );
    }

    /// Deletes a pending barcode.
    pub fn delete_pending_product_barcode<S, E>(&self, id: i64, on_success: S, on_error: E)
    where
        S: FnOnce(()) + Send + 'static,
        E: FnOnce(Error) + Send + 'static,
    {
        submit_delete(
            &self.dispatcher,
            self.store.table::<PendingProductBarcode>(),
            id,
            on_success,
            on_error,
        );
    }

    /// Callback form of [`store_purchase`](Self::store_purchase).
    pub fn insert_stored_purchase<S, E>(&self, draft: PurchaseDraft, on_success: S, on_error: E)
    where
        S: FnOnce(i64) + Send + 'static,
        E: FnOnce(Error) + Send + 'static,
    {
        let table = self.store.table::<StoredPurchase>();
        self.dispatcher.submit(
            async move { table.insert(draft.into_active_model()?).await },
            on_success,
            on_error,
        );
    }

    /// Deletes a stored purchase once it has been booked or discarded.
    pub fn delete_stored_purchase<S, E>(&self, id: i64, on_success: S, on_error: E)
    where
        S: FnOnce(()) + Send + 'static,
        E: FnOnce(Error) + Send + 'static,
    {
        submit_delete(
            &self.dispatcher,
            self.store.table::<StoredPurchase>(),
            id,
            on_success,
            on_error,
        );
    }
}

impl ScreenRepository for PurchaseRepository {
    type Bundle = PurchaseBundle;

    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn load(&self) -> impl Future<Output = Result<PurchaseBundle>> + Send + 'static {
        join_into((
            self.store.all::<Product>(),
            self.store.all::<PendingProduct>(),
            self.store.all::<PendingProductBarcode>(),
            self.store.all::<ProductBarcode>(),
            self.store.all::<QuantityUnit>(),
            self.store.all::<QuantityUnitConversionResolved>(),
            self.store.all::<ShoppingLocation>(),
            self.store.all::<Location>(),
            self.store.all::<StoredPurchase>(),
            self.store.all::<ShoppingListItem>(),
        ))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    #![allow(clippy::panic)]
    use super::*;
    use crate::test_utils::*;
    use std::sync::{Arc, Mutex};

    fn draft_for_pending(pending_product_id: i64) -> PurchaseDraft {
        PurchaseDraft {
            product_id: None,
            pending_product_id: Some(pending_product_id),
            amount: 2.0,
            purchased_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            best_before_date: None,
            price: Some(1.25),
            shopping_location_id: None,
            location_id: Some(1),
            barcode: Some("4006381333931".to_string()),
        }
    }

    #[test]
    fn test_purchase_draft_validation() {
        let mut draft = draft_for_pending(1);
        draft.product_id = Some(5);
        assert!(matches!(
            draft.into_active_model().unwrap_err(),
            Error::Config { message: _ }
        ));

        let mut draft = draft_for_pending(1);
        draft.pending_product_id = None;
        assert!(draft.into_active_model().is_err());

        for amount in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut draft = draft_for_pending(1);
            draft.amount = amount;
            assert!(draft.into_active_model().is_err(), "amount {amount} accepted");
        }

        let mut draft = draft_for_pending(1);
        draft.price = Some(-0.5);
        assert!(draft.into_active_model().is_err());

        assert!(draft_for_pending(1).into_active_model().is_ok());
    }

    #[test]
    fn test_pending_product_name_validation() {
        assert!(new_pending_product("").is_err());
        assert!(new_pending_product("   ").is_err());
        let model = new_pending_product("  Seitan ").unwrap();
        assert_eq!(model.name.unwrap(), "Seitan");
    }

    #[tokio::test]
    async fn test_drafted_purchase_flow() -> Result<()> {
        let (store, dispatcher, _queue) = setup_test_app().await?;
        seed_pantry(&store).await?;
        let repository = PurchaseRepository::new(store, dispatcher);

        let pending_id = repository.create_pending_product("Seitan").await?;
        let purchase_id = repository.store_purchase(draft_for_pending(pending_id)).await?;

        let bundle = repository.load().await?;
        assert_eq!(bundle.pending_products().len(), 1);
        assert_eq!(bundle.pending_products()[0].id, pending_id);
        assert_eq!(bundle.stored_purchases().len(), 1);
        assert_eq!(bundle.stored_purchases()[0].id, purchase_id);
        assert_eq!(bundle.stored_purchases()[0].pending_product_id, Some(pending_id));
        assert_eq!(bundle.stored_purchases()[0].amount, 2.0);
        assert_eq!(bundle.products().len(), 3);
        assert_eq!(bundle.locations().len(), 2);
        assert!(bundle.pending_product_barcodes().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_insert_pending_product_reports_generated_id() -> Result<()> {
        let (store, dispatcher, mut queue) = setup_test_app().await?;
        let repository = PurchaseRepository::new(store.clone(), dispatcher);

        let generated = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&generated);
        repository.insert_pending_product(
            "Tempeh".to_string(),
            move |id| *slot.lock().unwrap() = Some(id),
            |err| panic!("insert failed: {err}"),
        );
        assert!(queue.deliver_next().await);

        let id = generated.lock().unwrap().unwrap();
        let row = store.table::<PendingProduct>().find(id).await?.unwrap();
        assert_eq!(row.name, "Tempeh");
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_name_goes_to_on_error() -> Result<()> {
        let (store, dispatcher, mut queue) = setup_test_app().await?;
        let repository = PurchaseRepository::new(store.clone(), dispatcher);

        let failure = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&failure);
        repository.insert_pending_product(
            "  ".to_string(),
            |id| panic!("unexpected id {id}"),
            move |err| *slot.lock().unwrap() = Some(err),
        );
        assert!(queue.deliver_next().await);

        assert!(matches!(
            failure.lock().unwrap().take(),
            Some(Error::Config { message: _ })
        ));
        assert!(store.table::<PendingProduct>().all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_pending_barcode_and_purchase_callbacks() -> Result<()> {
        let (store, dispatcher, mut queue) = setup_test_app().await?;
        let repository = PurchaseRepository::new(store.clone(), dispatcher);
        let pending_id = repository.create_pending_product("Seitan").await?;

        let ids = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&ids);
        repository.insert_pending_product_barcode(
            pending_barcode_draft(pending_id, "2000000000015"),
            move |id| sink.lock().unwrap().push(id),
            |err| panic!("barcode insert failed: {err}"),
        );
        let sink = Arc::clone(&ids);
        repository.insert_stored_purchase(
            draft_for_pending(pending_id),
            move |id| sink.lock().unwrap().push(id),
            |err| panic!("purchase insert failed: {err}"),
        );
        assert!(queue.deliver_next().await);
        assert!(queue.deliver_next().await);
        assert_eq!(ids.lock().unwrap().len(), 2);

        let bundle = repository.load().await?;
        let barcode_id = bundle.pending_product_barcodes()[0].id;
        let purchase_id = bundle.stored_purchases()[0].id;

        // Confirmation removes all drafts again.
        repository.delete_pending_product_barcode(barcode_id, |()| {}, |err| panic!("{err}"));
        repository.delete_stored_purchase(purchase_id, |()| {}, |err| panic!("{err}"));
        repository.delete_pending_product(pending_id, |()| {}, |err| panic!("{err}"));
        for _ in 0..3 {
            assert!(queue.deliver_next().await);
        }

        let bundle = repository.load().await?;
        assert!(bundle.pending_products().is_empty());
        assert!(bundle.pending_product_barcodes().is_empty());
        assert!(bundle.stored_purchases().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_pending_product_reports_failure() -> Result<()> {
        let (store, dispatcher, mut queue) = setup_test_app().await?;
        let repository = PurchaseRepository::new(store, dispatcher);

        let failure = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&failure);
        repository.delete_pending_product(
            77,
            |()| panic!("deleting a missing row must not succeed"),
            move |err| *slot.lock().unwrap() = Some(err),
        );
        assert!(queue.deliver_next().await);

        assert!(matches!(
            failure.lock().unwrap().take(),
            Some(Error::NotFound { .. })
        ));
        Ok(())
    }
}
