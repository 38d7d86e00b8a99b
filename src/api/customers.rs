//! Customer endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::customer::{CreateCustomer, Customer, CustomerSearchQuery, UpdateCustomer},
};

/// List all customers in insertion order
#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    responses(
        (status = 200, description = "List of customers", body = Vec<Customer>)
    )
)]
pub async fn list_customers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.services.customers.list().await?;
    Ok(Json(customers))
}

/// Get customer details by ID
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customers",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer details", body = Customer),
        (status = 404, description = "Customer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_customer(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Customer>> {
    let customer = state.services.customers.get_by_id(id).await?;
    Ok(Json(customer))
}

/// Create a new customer
#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    request_body = CreateCustomer,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_customer(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateCustomer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let created = state.services.customers.create(data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing customer (partial semantics: absent fields are kept)
#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "customers",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Customer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_customer(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateCustomer>,
) -> AppResult<Json<Customer>> {
    let updated = state.services.customers.update(id, data).await?;
    Ok(Json(updated))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "customers",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_customer(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.customers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Search customers by first name, last name or email
#[utoipa::path(
    get,
    path = "/customers/search",
    tag = "customers",
    params(CustomerSearchQuery),
    responses(
        (status = 200, description = "Matching customers (empty query returns all)", body = Vec<Customer>)
    )
)]
pub async fn search_customers(
    State(state): State<crate::AppState>,
    Query(query): Query<CustomerSearchQuery>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.services.customers.search(&query).await?;
    Ok(Json(customers))
}
