//! Customer and address HTTP API.
//!
//! - `POST   /customers`: create a customer, returns `{id}`
//! - `GET    /customers`: paged, filtered listing with an unfiltered `total`
//! - `GET    /customers/{id}`: one customer or 404
//! - `PUT    /customers/{id}`: replace the four customer fields
//! - `DELETE /customers/{id}`: delete a customer and then its addresses
//! - `POST   /addresses`: create an address (address text required)
//! - `GET    /addresses/{customerId}`: addresses of one customer
//! - `PUT    /addresses/{id}`: replace the address text
//! - `DELETE /addresses/{id}`: delete one address

pub mod addresses;
mod body;
pub mod customers;
pub mod error;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use axum::http::header::InvalidHeaderValue;
use rolodex_db::repositories::{
    AddressRepository, CustomerRepository, SqlAddressRepository, SqlCustomerRepository,
};
use rolodex_db::DbPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct ApiState {
    customers: Arc<dyn CustomerRepository>,
    addresses: Arc<dyn AddressRepository>,
}

impl ApiState {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            customers: Arc::new(SqlCustomerRepository::new(db_pool.clone())),
            addresses: Arc::new(SqlAddressRepository::new(db_pool)),
        }
    }
}

pub fn router(db_pool: DbPool, cors_allowed_origin: &str) -> Result<Router, InvalidHeaderValue> {
    let cors = cors_layer(cors_allowed_origin)?;

    Ok(routes().layer(cors).layer(TraceLayer::new_for_http()).with_state(ApiState::new(db_pool)))
}

fn routes() -> Router<ApiState> {
    Router::new()
        .route("/customers", get(customers::list_customers).post(customers::create_customer))
        .route(
            "/customers/{id}",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
        .route("/addresses", post(addresses::create_address))
        // GET reads the segment as a customer id, PUT/DELETE as an address id.
        .route(
            "/addresses/{id}",
            get(addresses::list_customer_addresses)
                .put(addresses::update_address)
                .delete(addresses::delete_address),
        )
}

fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(allowed_origin)?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}
