//! Customer record model and request/query types.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Full customer record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    /// Unique identifier, assigned by the store, immutable after creation
    pub id: i32,
    /// First name of the customer
    pub first_name: String,
    /// Last name of the customer
    pub last_name: String,
    /// Email address of the customer
    pub email: String,
    /// Phone number of the customer
    pub phone: String,
    /// Postal address of the customer
    pub address: String,
    /// Library membership identifier, when assigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_id: Option<String>,
}

impl Customer {
    /// Case-insensitive substring match of `query` against first name,
    /// last name and email. `query` must already be lowercased.
    pub fn matches(&self, query: &str) -> bool {
        self.first_name.to_lowercase().contains(query)
            || self.last_name.to_lowercase().contains(query)
            || self.email.to_lowercase().contains(query)
    }
}

/// Creation payload.
///
/// Fields are optional at the serde level so that a missing field surfaces
/// as a validation error naming it, not as a body rejection; the customers
/// service enforces which ones are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub membership_id: Option<String>,
}

/// Partial update payload: absent fields keep their prior value.
/// The record id is never part of the payload and cannot be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub membership_id: Option<String>,
}

/// Customer search query parameters (API)
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct CustomerSearchQuery {
    /// Free-text query, matched case-insensitively as a substring of
    /// first name, last name or email
    pub q: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Customer {
        Customer {
            id: 1,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            phone: "555-0101".to_string(),
            address: "123 Main St, Anytown, USA".to_string(),
            membership_id: Some("MEM001".to_string()),
        }
    }

    #[test]
    fn matches_name_and_email_case_insensitively() {
        let customer = sample();
        assert!(customer.matches("john"));
        assert!(customer.matches("doe"));
        assert!(customer.matches("john.doe@email.com"));
        assert!(!customer.matches("smith"));
    }

    #[test]
    fn does_not_match_phone_or_address() {
        let customer = sample();
        assert!(!customer.matches("555-0101"));
        assert!(!customer.matches("anytown"));
    }
}
