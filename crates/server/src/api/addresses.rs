use axum::{
    extract::{Path, State},
    Json,
};
use rolodex_core::{Address, AddressUpdate, NewAddress, RecordKey};
use tracing::{debug, info};

use super::body::JsonBody;
use super::error::{store_error, ApiError};
use super::ApiState;

pub async fn create_address(
    State(state): State<ApiState>,
    JsonBody(address): JsonBody<NewAddress>,
) -> Result<&'static str, ApiError> {
    address.validate()?;

    let id = state
        .addresses
        .create(&address)
        .await
        .map_err(store_error("address.create", "Error creating address."))?;

    info!(
        event_name = "api.address.created",
        address_id = id.0,
        customer_id = ?address.customer_id,
        "address created"
    );
    Ok("Address created successfully.")
}

pub async fn list_customer_addresses(
    State(state): State<ApiState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Vec<Address>>, ApiError> {
    let addresses = state
        .addresses
        .list_for_customer(&RecordKey::new(customer_id))
        .await
        .map_err(store_error("address.list", "Error fetching addresses."))?;

    Ok(Json(addresses))
}

pub async fn update_address(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    JsonBody(update): JsonBody<AddressUpdate>,
) -> Result<&'static str, ApiError> {
    let id = RecordKey::new(id);
    let rows = state
        .addresses
        .update_line(&id, &update)
        .await
        .map_err(store_error("address.update", "Error updating address."))?;

    debug!(event_name = "api.address.updated", address_id = %id, rows, "address update applied");
    Ok("Address updated successfully.")
}

pub async fn delete_address(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    let id = RecordKey::new(id);
    let rows = state
        .addresses
        .delete(&id)
        .await
        .map_err(store_error("address.delete", "Error deleting address."))?;

    debug!(event_name = "api.address.deleted", address_id = %id, rows, "address delete applied");
    Ok("Address deleted successfully.")
}
