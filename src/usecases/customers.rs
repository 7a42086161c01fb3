//! Customer Use Case - Customer registry.

use tracing::{info, instrument};

use crate::domain::error::StoreResult;
use crate::domain::model::Customer;
use crate::ports::ids::CUSTOMER_PREFIX;
use crate::ports::storage::KeyValueStorage;

use super::store::Store;

impl<S: KeyValueStorage> Store<S> {
    /// All customers, most recently created first.
    pub async fn list_customers(&self) -> StoreResult<Vec<Customer>> {
        Ok(self.load_document().await?.customers)
    }

    /// Register a customer at the front of the registry.
    ///
    /// Field contents are not validated here.
    #[instrument(skip(self, phone, address))]
    pub async fn create_customer(
        &self,
        name: &str,
        phone: &str,
        address: &str,
    ) -> StoreResult<Customer> {
        let mut doc = self.load_document().await?;

        let customer = Customer {
            id: self.ids.next_id(CUSTOMER_PREFIX),
            name: name.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        };
        doc.customers.insert(0, customer.clone());

        self.save_document(&doc).await?;
        info!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use crate::usecases::test_support::test_store;

    #[tokio::test]
    async fn test_fresh_store_lists_seed_customers() {
        let store = test_store();
        let ids: Vec<_> = store
            .list_customers()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["C001", "C002"]);
    }

    #[tokio::test]
    async fn test_new_customer_listed_first() {
        let store = test_store();
        let first = store
            .create_customer("Lin", "0900000001", "Taichung")
            .await
            .unwrap();
        let second = store
            .create_customer("Wu", "0900000002", "Tainan")
            .await
            .unwrap();
        assert_eq!(first.id, "C-00000001");
        assert_ne!(first.id, second.id);

        let customers = store.list_customers().await.unwrap();
        assert_eq!(customers.len(), 4);
        assert_eq!(customers[0], second);
        assert_eq!(customers[1], first);
        assert_eq!(customers[2].id, "C001");
    }

    #[tokio::test]
    async fn test_no_validation_at_store_layer() {
        let store = test_store();
        let c = store.create_customer("", "", "").await.unwrap();
        assert!(c.name.is_empty());
    }
}
