//! The inventory store: sole owner of every `Product`.
//!
//! Lookups are linear scans over an insertion-ordered `Vec`; the store targets
//! small, single-session datasets.

use stockroom_core::{DomainError, DomainResult, Entity};

use crate::product::{Product, ProductId};

/// Field-level changes requested by `Inventory::update`.
///
/// `None` leaves the field untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProductUpdate {
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}

impl ProductUpdate {
    pub fn quantity(quantity: i64) -> Self {
        Self {
            quantity: Some(quantity),
            price: None,
        }
    }

    pub fn price(price: f64) -> Self {
        Self {
            quantity: None,
            price: Some(price),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.price.is_none()
    }
}

/// Mutable product attribute touched by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Quantity,
    Price,
}

impl ProductField {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductField::Quantity => "quantity",
            ProductField::Price => "price",
        }
    }
}

/// Outcome of an update on a product that exists.
///
/// Fields are attempted independently, so one field can be rejected while the
/// other is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateReport {
    pub applied: Vec<ProductField>,
    pub rejected: Vec<DomainError>,
}

impl UpdateReport {
    /// `true` when no requested field was rejected.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }

    /// `true` when nothing was requested at all.
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty() && self.rejected.is_empty()
    }

    fn record(&mut self, field: ProductField, result: DomainResult<()>) {
        match result {
            Ok(()) => self.applied.push(field),
            Err(e) => self.rejected.push(e),
        }
    }
}

/// Read-only view returned by `Inventory::list_all`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Listing<'a> {
    /// The store holds no products. A display signal, not an error.
    Empty,
    /// Every product, in insertion order.
    Records(&'a [Product]),
}

impl<'a> Listing<'a> {
    pub fn records(self) -> &'a [Product] {
        match self {
            Listing::Empty => &[],
            Listing::Records(records) => records,
        }
    }
}

/// In-memory, insertion-ordered product store.
#[derive(Debug, Default)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Create a product and append it.
    ///
    /// Fails with `DuplicateId` when the id is taken and with `InvalidValue`
    /// for a negative quantity or price; the store is unchanged on failure.
    pub fn add(
        &mut self,
        id: impl Into<ProductId>,
        name: impl Into<String>,
        quantity: i64,
        price: f64,
    ) -> DomainResult<&Product> {
        let id = id.into();
        if self.position(&id).is_some() {
            tracing::warn!(product_id = %id, "rejected add: duplicate id");
            return Err(DomainError::duplicate_id(id.as_str()));
        }

        let product = Product::new(id, name, quantity, price).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected add: invalid value");
        })?;
        tracing::debug!(product_id = %product.id(), "product added");

        self.products.push(product);
        Ok(&self.products[self.products.len() - 1])
    }

    /// Remove the product with `id`, handing it back to the caller.
    pub fn remove(&mut self, id: &ProductId) -> DomainResult<Product> {
        let Some(index) = self.position(id) else {
            tracing::warn!(product_id = %id, "rejected remove: not found");
            return Err(DomainError::not_found(id.as_str()));
        };

        let removed = self.products.remove(index);
        tracing::debug!(product_id = %id, "product removed");
        Ok(removed)
    }

    /// Apply the present fields of `update` to the product with `id`.
    ///
    /// Returns `NotFound` only when the id is unknown. Otherwise the result is
    /// `Ok`, and the report says which fields were applied and which were
    /// rejected by validation.
    pub fn update(&mut self, id: &ProductId, update: ProductUpdate) -> DomainResult<UpdateReport> {
        let Some(product) = self.products.iter_mut().find(|p| p.id() == id) else {
            tracing::warn!(product_id = %id, "rejected update: not found");
            return Err(DomainError::not_found(id.as_str()));
        };

        let mut report = UpdateReport::default();
        if let Some(quantity) = update.quantity {
            report.record(ProductField::Quantity, product.set_quantity(quantity));
        }
        if let Some(price) = update.price {
            report.record(ProductField::Price, product.set_price(price));
        }

        if report.is_complete() {
            tracing::debug!(product_id = %id, applied = report.applied.len(), "product updated");
        } else {
            tracing::warn!(
                product_id = %id,
                applied = report.applied.len(),
                rejected = report.rejected.len(),
                "product partially updated"
            );
        }
        Ok(report)
    }

    pub fn find_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Case-insensitive substring search over names, in store order.
    pub fn find_by_name(&self, fragment: &str) -> Vec<&Product> {
        let needle = fragment.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn list_all(&self) -> Listing<'_> {
        if self.products.is_empty() {
            Listing::Empty
        } else {
            Listing::Records(&self.products)
        }
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut inventory = Inventory::new();
        inventory.add("A1", "Bolt", 10, 0.5).unwrap();
        inventory.add("A2", "Nut", 5, 0.25).unwrap();

        assert_eq!(inventory.len(), 2);
        let listed: Vec<&str> = inventory.iter().map(|p| p.name()).collect();
        assert_eq!(listed, vec!["Bolt", "Nut"]);
    }

    #[test]
    fn add_rejects_duplicate_id_and_keeps_existing_record() {
        let mut inventory = Inventory::new();
        inventory.add("A1", "Bolt", 10, 0.5).unwrap();

        let err = inventory.add("A1", "Other", 1, 9.0).unwrap_err();
        assert_eq!(err, DomainError::duplicate_id("A1"));
        assert_eq!(inventory.len(), 1);

        let existing = inventory.find_by_id(&id("A1")).unwrap();
        assert_eq!(existing.name(), "Bolt");
        assert_eq!(existing.quantity(), 10);
    }

    #[test]
    fn add_rejects_negative_values_without_inserting() {
        let mut inventory = Inventory::new();
        let err = inventory.add("A1", "Bolt", -5, 0.5).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { field: "quantity", .. }));

        let err = inventory.add("A1", "Bolt", 5, -0.5).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { field: "price", .. }));

        assert!(inventory.is_empty());
    }

    #[test]
    fn ids_are_compared_exactly() {
        let mut inventory = Inventory::new();
        inventory.add("a1", "Bolt", 1, 1.0).unwrap();
        inventory.add("A1", "Nut", 1, 1.0).unwrap();
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn remove_existing_decrements_and_returns_the_record() {
        let mut inventory = Inventory::new();
        inventory.add("A1", "Bolt", 10, 0.5).unwrap();
        inventory.add("A2", "Nut", 5, 0.25).unwrap();

        let removed = inventory.remove(&id("A1")).unwrap();
        assert_eq!(removed.name(), "Bolt");
        assert_eq!(inventory.len(), 1);
        assert!(inventory.find_by_id(&id("A1")).is_none());
        assert!(inventory.find_by_id(&id("A2")).is_some());
    }

    #[test]
    fn remove_unknown_reports_not_found() {
        let mut inventory = Inventory::new();
        inventory.add("A1", "Bolt", 10, 0.5).unwrap();

        let err = inventory.remove(&id("Z9")).unwrap_err();
        assert_eq!(err, DomainError::not_found("Z9"));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut inventory = Inventory::new();
        inventory.add("A1", "Bolt", 10, 0.5).unwrap();
        inventory.add("A2", "Nut", 5, 0.25).unwrap();

        let report = inventory.update(&id("A1"), ProductUpdate::quantity(7)).unwrap();
        assert!(report.is_complete());
        assert_eq!(report.applied, vec![ProductField::Quantity]);

        let bolt = inventory.find_by_id(&id("A1")).unwrap();
        assert_eq!(bolt.quantity(), 7);
        assert_eq!(bolt.price(), 0.5);

        let listed: Vec<&str> = inventory.list_all().records().iter().map(|p| p.name()).collect();
        assert_eq!(listed, vec!["Bolt", "Nut"]);
    }

    #[test]
    fn update_with_no_fields_succeeds_without_mutation() {
        let mut inventory = Inventory::new();
        inventory.add("A1", "Bolt", 10, 0.5).unwrap();
        let before = inventory.find_by_id(&id("A1")).cloned();

        let report = inventory.update(&id("A1"), ProductUpdate::default()).unwrap();
        assert!(report.is_noop());
        assert!(report.is_complete());
        assert_eq!(inventory.find_by_id(&id("A1")).cloned(), before);
    }

    #[test]
    fn update_fields_are_independent_attempts() {
        let mut inventory = Inventory::new();
        inventory.add("A1", "Bolt", 10, 0.5).unwrap();

        let report = inventory
            .update(
                &id("A1"),
                ProductUpdate {
                    quantity: Some(-3),
                    price: Some(0.75),
                },
            )
            .unwrap();

        assert!(!report.is_complete());
        assert_eq!(report.applied, vec![ProductField::Price]);
        assert_eq!(report.rejected, vec![DomainError::invalid_value("quantity", -3)]);

        let bolt = inventory.find_by_id(&id("A1")).unwrap();
        assert_eq!(bolt.quantity(), 10);
        assert_eq!(bolt.price(), 0.75);
    }

    #[test]
    fn update_unknown_reports_not_found() {
        let mut inventory = Inventory::new();
        let err = inventory.update(&id("A1"), ProductUpdate::price(1.0)).unwrap_err();
        assert_eq!(err, DomainError::not_found("A1"));
    }

    #[test]
    fn find_by_name_is_case_insensitive_substring() {
        let mut inventory = Inventory::new();
        inventory.add("W1", "Widget", 1, 1.0).unwrap();
        inventory.add("G1", "gadget", 1, 1.0).unwrap();

        assert_eq!(names(&inventory.find_by_name("widg")), vec!["Widget"]);
        assert_eq!(names(&inventory.find_by_name("get")), vec!["gadget"]);
        assert_eq!(names(&inventory.find_by_name("GADGET")), vec!["gadget"]);
        assert!(inventory.find_by_name("sprocket").is_empty());
    }

    #[test]
    fn find_by_name_empty_fragment_matches_everything_in_order() {
        let mut inventory = Inventory::new();
        inventory.add("W1", "Widget", 1, 1.0).unwrap();
        inventory.add("G1", "gadget", 1, 1.0).unwrap();

        assert_eq!(names(&inventory.find_by_name("")), vec!["Widget", "gadget"]);
    }

    #[test]
    fn list_all_signals_empty_store() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.list_all(), Listing::Empty);
        assert!(inventory.list_all().records().is_empty());

        inventory.add("A1", "Bolt", 10, 0.5).unwrap();
        match inventory.list_all() {
            Listing::Records(records) => assert_eq!(records.len(), 1),
            Listing::Empty => panic!("Expected records after add"),
        }

        inventory.remove(&id("A1")).unwrap();
        assert_eq!(inventory.list_all(), Listing::Empty);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::collection::hash_set;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: every distinct-id add is findable and counted.
            #[test]
            fn distinct_adds_are_all_findable(
                ids in hash_set("[A-Z][0-9]{1,4}", 0..32),
            ) {
                let mut inventory = Inventory::new();
                for id in &ids {
                    inventory.add(id.as_str(), format!("item {id}"), 1, 1.0).unwrap();
                }

                prop_assert_eq!(inventory.len(), ids.len());
                for id in &ids {
                    let found = inventory.find_by_id(&ProductId::new(id.as_str()));
                    prop_assert!(found.is_some());
                    prop_assert_eq!(found.unwrap().id().as_str(), id.as_str());
                }
            }

            /// Property: a duplicate add never changes size or the stored record.
            #[test]
            fn duplicate_add_is_rejected(
                quantity in 0i64..1_000,
                other_quantity in 0i64..1_000,
                name in "[A-Za-z]{1,12}",
            ) {
                let mut inventory = Inventory::new();
                inventory.add("A1", name.clone(), quantity, 1.0).unwrap();

                let err = inventory.add("A1", "replacement", other_quantity, 2.0).unwrap_err();
                prop_assert_eq!(err, DomainError::duplicate_id("A1"));
                prop_assert_eq!(inventory.len(), 1);

                let stored = inventory.find_by_id(&ProductId::new("A1")).unwrap();
                prop_assert_eq!(stored.name(), name.as_str());
                prop_assert_eq!(stored.quantity(), quantity);
            }

            /// Property: negative updates never overwrite the prior values.
            #[test]
            fn negative_updates_keep_prior_values(
                quantity in 0i64..1_000,
                price in 0.0f64..1_000.0,
                bad_quantity in i64::MIN..0,
                bad_price in -1_000.0f64..-0.001,
            ) {
                let mut inventory = Inventory::new();
                inventory.add("A1", "Bolt", quantity, price).unwrap();

                let report = inventory
                    .update(
                        &ProductId::new("A1"),
                        ProductUpdate { quantity: Some(bad_quantity), price: Some(bad_price) },
                    )
                    .unwrap();
                prop_assert!(report.applied.is_empty());
                prop_assert_eq!(report.rejected.len(), 2);

                let stored = inventory.find_by_id(&ProductId::new("A1")).unwrap();
                prop_assert_eq!(stored.quantity(), quantity);
                prop_assert_eq!(stored.price(), price);
            }

            /// Property: search is insensitive to the case of the query.
            #[test]
            fn search_ignores_query_case(name in "[A-Za-z]{1,12}", start in 0usize..12, len in 1usize..12) {
                let mut inventory = Inventory::new();
                inventory.add("A1", name.clone(), 1, 1.0).unwrap();

                let start = start.min(name.len() - 1);
                let end = (start + len).min(name.len());
                let fragment = &name[start..end];

                prop_assert_eq!(inventory.find_by_name(&fragment.to_uppercase()).len(), 1);
                prop_assert_eq!(inventory.find_by_name(&fragment.to_lowercase()).len(), 1);
            }
        }
    }
}
