//! Customers service
//!
//! Validation rules for the customer collection; storage itself lives in
//! the repository. Every error leaves the collection unchanged, since
//! validation happens before any write reaches the store.

use crate::{
    error::{AppError, AppResult},
    models::customer::{CreateCustomer, Customer, CustomerSearchQuery, UpdateCustomer},
    repository::Repository,
};

#[derive(Clone)]
pub struct CustomersService {
    repository: Repository,
}

impl CustomersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all customers in insertion order
    pub async fn list(&self) -> AppResult<Vec<Customer>> {
        self.repository.customers.list().await
    }

    /// Get a customer by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Customer> {
        self.repository.customers.get_by_id(id).await
    }

    /// Create a customer. First name, last name, email, phone and address
    /// are required; name and email must be non-empty. A membership id is
    /// optional.
    pub async fn create(&self, data: CreateCustomer) -> AppResult<Customer> {
        let first_name = required("first_name", data.first_name)?;
        let last_name = required("last_name", data.last_name)?;
        let email = required("email", data.email)?;
        let phone = required("phone", data.phone)?;
        let address = required("address", data.address)?;

        validate_non_empty("first_name", &first_name)?;
        validate_non_empty("last_name", &last_name)?;
        validate_non_empty("email", &email)?;

        self.repository
            .customers
            .create(first_name, last_name, email, phone, address, data.membership_id)
            .await
    }

    /// Apply a partial update. Supplied name/email values must be
    /// non-empty; absent fields keep their prior value.
    pub async fn update(&self, id: i32, data: UpdateCustomer) -> AppResult<Customer> {
        if let Some(ref first_name) = data.first_name {
            validate_non_empty("first_name", first_name)?;
        }
        if let Some(ref last_name) = data.last_name {
            validate_non_empty("last_name", last_name)?;
        }
        if let Some(ref email) = data.email {
            validate_non_empty("email", email)?;
        }

        self.repository.customers.update(id, data).await
    }

    /// Delete a customer by ID
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.customers.delete(id).await
    }

    /// Search customers by first name, last name or email.
    ///
    /// An absent or empty query means "no filter" and returns the full
    /// list; an empty result set is a normal outcome.
    pub async fn search(&self, query: &CustomerSearchQuery) -> AppResult<Vec<Customer>> {
        match query.q.as_deref().map(str::trim) {
            None | Some("") => self.repository.customers.list().await,
            Some(q) => self.repository.customers.search(&q.to_lowercase()).await,
        }
    }
}

fn required<T>(field: &str, value: Option<T>) -> AppResult<T> {
    value.ok_or_else(|| AppError::Validation(format!("Missing required field: {}", field)))
}

fn validate_non_empty(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "Customer {} cannot be empty",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded_service() -> CustomersService {
        let repository = Repository::new();
        repository.customers.seed_sample_customers().await;
        CustomersService::new(repository)
    }

    fn valid_create() -> CreateCustomer {
        CreateCustomer {
            first_name: Some("Test".to_string()),
            last_name: Some("Customer".to_string()),
            email: Some("test.customer@email.com".to_string()),
            phone: Some("555-0199".to_string()),
            address: Some("1 Test St, Testville, USA".to_string()),
            membership_id: None,
        }
    }

    #[tokio::test]
    async fn created_customer_is_retrievable() {
        let service = seeded_service().await;
        let created = service.create(valid_create()).await.unwrap();
        let fetched = service.get_by_id(created.id).await.unwrap();
        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn create_with_missing_email_names_the_field() {
        let service = seeded_service().await;
        let err = service
            .create(CreateCustomer {
                email: None,
                ..valid_create()
            })
            .await
            .unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Missing required field: email"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_with_empty_first_name_leaves_collection_unchanged() {
        let service = seeded_service().await;
        let err = service
            .create(CreateCustomer {
                first_name: Some("   ".to_string()),
                ..valid_create()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(service.list().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn update_with_empty_email_leaves_record_unchanged() {
        let service = seeded_service().await;
        let before = service.get_by_id(2).await.unwrap();
        let err = service
            .update(
                2,
                UpdateCustomer {
                    email: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(service.get_by_id(2).await.unwrap(), before);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let service = seeded_service().await;
        let result = service
            .update(
                9999,
                UpdateCustomer {
                    phone: Some("555-0000".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn empty_query_returns_the_full_list() {
        let service = seeded_service().await;
        let all = service.list().await.unwrap();

        let absent = service
            .search(&CustomerSearchQuery::default())
            .await
            .unwrap();
        assert_eq!(absent, all);
    }

    #[tokio::test]
    async fn search_finds_by_last_name_case_insensitively() {
        let service = seeded_service().await;
        let hits = service
            .search(&CustomerSearchQuery {
                q: Some("WILLIAMS".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Alice");
    }

    #[tokio::test]
    async fn search_with_no_hits_is_an_empty_list() {
        let service = seeded_service().await;
        let hits = service
            .search(&CustomerSearchQuery {
                q: Some("nonexistent".to_string()),
            })
            .await
            .unwrap();
        assert!(hits.is_empty());
    }
}
