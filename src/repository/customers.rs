//! Customers repository
//!
//! Same shape as the books store: an ordered `Vec` behind a single
//! `RwLock`, ids from a monotonic counter that never reuses a deleted id.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::customer::{Customer, UpdateCustomer},
};

/// First id handed out by a store that has never held a record
const FIRST_ID: i32 = 1;

struct Store {
    customers: Vec<Customer>,
    next_id: i32,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            customers: Vec::new(),
            next_id: FIRST_ID,
        }
    }
}

#[derive(Clone)]
pub struct CustomersRepository {
    store: Arc<RwLock<Store>>,
}

impl CustomersRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::default())),
        }
    }

    /// Replace the store contents with the sample customers.
    ///
    /// Fixture data carried over from the original service; five records
    /// with ids 1 through 5.
    pub async fn seed_sample_customers(&self) {
        let customers = sample_customers();
        let next_id = customers.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let mut store = self.store.write().await;
        store.customers = customers;
        store.next_id = next_id;
    }

    /// List all customers in insertion order
    pub async fn list(&self) -> AppResult<Vec<Customer>> {
        let store = self.store.read().await;
        Ok(store.customers.clone())
    }

    /// Get a customer by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Customer> {
        let store = self.store.read().await;
        store
            .customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))
    }

    /// Append a new customer, assigning the next available id
    pub async fn create(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        phone: String,
        address: String,
        membership_id: Option<String>,
    ) -> AppResult<Customer> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;

        let customer = Customer {
            id,
            first_name,
            last_name,
            email,
            phone,
            address,
            membership_id,
        };
        store.customers.push(customer.clone());
        Ok(customer)
    }

    /// Apply a partial update to a customer. Absent fields keep their
    /// prior value; the id is never touched.
    pub async fn update(&self, id: i32, changes: UpdateCustomer) -> AppResult<Customer> {
        let mut store = self.store.write().await;
        let customer = store
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))?;

        if let Some(first_name) = changes.first_name {
            customer.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            customer.last_name = last_name;
        }
        if let Some(email) = changes.email {
            customer.email = email;
        }
        if let Some(phone) = changes.phone {
            customer.phone = phone;
        }
        if let Some(address) = changes.address {
            customer.address = address;
        }
        if let Some(membership_id) = changes.membership_id {
            customer.membership_id = Some(membership_id);
        }

        Ok(customer.clone())
    }

    /// Remove a customer by ID. The id is not reused afterwards.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut store = self.store.write().await;
        let position = store
            .customers
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))?;
        store.customers.remove(position);
        Ok(())
    }

    /// Scan for customers whose first name, last name or email contains
    /// `query` (already lowercased) as a substring. Results keep
    /// insertion order.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Customer>> {
        let store = self.store.read().await;
        Ok(store
            .customers
            .iter()
            .filter(|c| c.matches(query))
            .cloned()
            .collect())
    }
}

impl Default for CustomersRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed sample customers used to seed the store at startup
fn sample_customers() -> Vec<Customer> {
    let customer = |id,
                    first_name: &str,
                    last_name: &str,
                    email: &str,
                    phone: &str,
                    address: &str,
                    membership_id: &str| Customer {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        membership_id: Some(membership_id.to_string()),
    };

    vec![
        customer(
            1,
            "John",
            "Doe",
            "john.doe@email.com",
            "555-0101",
            "123 Main St, Anytown, USA",
            "MEM001",
        ),
        customer(
            2,
            "Jane",
            "Smith",
            "jane.smith@email.com",
            "555-0102",
            "456 Oak Ave, Somewhere, USA",
            "MEM002",
        ),
        customer(
            3,
            "Bob",
            "Johnson",
            "bob.johnson@email.com",
            "555-0103",
            "789 Pine Rd, Anywhere, USA",
            "MEM003",
        ),
        customer(
            4,
            "Alice",
            "Williams",
            "alice.williams@email.com",
            "555-0104",
            "321 Elm St, Nowhere, USA",
            "MEM004",
        ),
        customer(
            5,
            "Charlie",
            "Brown",
            "charlie.brown@email.com",
            "555-0105",
            "654 Maple Dr, Everywhere, USA",
            "MEM005",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> CustomersRepository {
        let repo = CustomersRepository::new();
        repo.seed_sample_customers().await;
        repo
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let repo = seeded().await;
        let customers = repo.list().await.unwrap();
        assert_eq!(customers.len(), 5);
        assert_eq!(customers[0].first_name, "John");
        assert_eq!(customers[4].last_name, "Brown");
    }

    #[tokio::test]
    async fn get_by_id_unknown_is_not_found() {
        let repo = seeded().await;
        assert!(matches!(
            repo.get_by_id(9999).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn create_assigns_strictly_increasing_ids() {
        let repo = seeded().await;
        let created = repo
            .create(
                "Test".to_string(),
                "Customer".to_string(),
                "test@email.com".to_string(),
                "555-0199".to_string(),
                "1 Test St".to_string(),
                None,
            )
            .await
            .unwrap();
        assert_eq!(created.id, 6);
        assert_eq!(repo.list().await.unwrap().last().unwrap(), &created);
    }

    #[tokio::test]
    async fn deleted_ids_are_never_reused() {
        let repo = seeded().await;
        repo.delete(5).await.unwrap();
        let created = repo
            .create(
                "New".to_string(),
                "Person".to_string(),
                "new@email.com".to_string(),
                "555-0200".to_string(),
                "2 New St".to_string(),
                None,
            )
            .await
            .unwrap();
        assert_eq!(created.id, 6);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let repo = seeded().await;
        repo.delete(3).await.unwrap();
        assert!(matches!(
            repo.get_by_id(3).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_applies_only_supplied_fields() {
        let repo = seeded().await;
        let updated = repo
            .update(
                2,
                UpdateCustomer {
                    phone: Some("555-0999".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.first_name, "Jane");
        assert_eq!(updated.phone, "555-0999");
        assert_eq!(updated.membership_id.as_deref(), Some("MEM002"));
    }

    #[tokio::test]
    async fn search_covers_name_and_email() {
        let repo = seeded().await;
        let hits = repo.search("smith").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Jane");

        let hits = repo.search("email.com").await.unwrap();
        assert_eq!(hits.len(), 5);
    }
}
