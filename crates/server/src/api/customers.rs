use axum::{
    extract::{Path, Query, State},
    Json,
};
use rolodex_core::{
    Customer, CustomerFields, CustomerFilter, CustomerId, CustomerPage, PageRequest, RecordKey,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::body::JsonBody;
use super::error::{store_error, ApiError};
use super::ApiState;

#[derive(Debug, Default, Deserialize)]
pub struct CustomerListQuery {
    #[serde(rename = "_page")]
    pub page: Option<String>,
    #[serde(rename = "_limit")]
    pub limit: Option<String>,
    pub search: Option<String>,
    #[serde(rename = "filterName")]
    pub filter_name: Option<String>,
    #[serde(rename = "filterCity")]
    pub filter_city: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedCustomer {
    pub id: CustomerId,
}

pub async fn create_customer(
    State(state): State<ApiState>,
    JsonBody(fields): JsonBody<CustomerFields>,
) -> Result<Json<CreatedCustomer>, ApiError> {
    let id = state
        .customers
        .create(&fields)
        .await
        .map_err(store_error("customer.create", "Error creating customer."))?;

    info!(event_name = "api.customer.created", customer_id = id.0, "customer created");
    Ok(Json(CreatedCustomer { id }))
}

pub async fn list_customers(
    State(state): State<ApiState>,
    Query(query): Query<CustomerListQuery>,
) -> Result<Json<CustomerPage>, ApiError> {
    // Non-numeric paging is reported like any other failed listing.
    let page = PageRequest::parse(query.page.as_deref(), query.limit.as_deref())
        .map_err(store_error("customer.list", "Error fetching customers."))?;
    let filter = CustomerFilter::new(query.search, query.filter_name, query.filter_city);

    let result = state
        .customers
        .list(&filter, page)
        .await
        .map_err(store_error("customer.list", "Error fetching customers."))?;

    debug!(
        event_name = "api.customer.listed",
        page = page.page,
        limit = page.limit,
        filtered = !filter.is_empty(),
        returned = result.customers.len(),
        total = result.total,
        "customer page fetched"
    );
    Ok(Json(result))
}

pub async fn get_customer(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    state
        .customers
        .find_by_id(&RecordKey::new(id))
        .await
        .map_err(store_error("customer.get", "Error fetching customer."))?
        .map(Json)
        .ok_or(ApiError::NotFound("Customer not found."))
}

pub async fn update_customer(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<CustomerFields>,
) -> Result<&'static str, ApiError> {
    let id = RecordKey::new(id);
    let rows = state
        .customers
        .update(&id, &fields)
        .await
        .map_err(store_error("customer.update", "Error updating customer."))?;

    debug!(event_name = "api.customer.updated", customer_id = %id, rows, "customer update applied");
    Ok("Customer updated successfully.")
}

pub async fn delete_customer(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    let id = RecordKey::new(id);
    let deletion = state
        .customers
        .delete(&id)
        .await
        .map_err(store_error("customer.delete", "Error deleting customer."))?;

    info!(
        event_name = "api.customer.deleted",
        customer_id = %id,
        customers = deletion.customers,
        addresses = deletion.addresses,
        "customer delete applied"
    );
    Ok("Customer deleted successfully.")
}
