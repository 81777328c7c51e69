use async_trait::async_trait;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::Sqlite;
use thiserror::Error;

use rolodex_core::domain::address::{Address, AddressId, AddressUpdate, NewAddress};
use rolodex_core::domain::customer::{
    Customer, CustomerDeletion, CustomerFields, CustomerFilter, CustomerId, CustomerPage,
    PageRequest,
};
use rolodex_core::domain::value::{FieldValue, RecordKey};

pub mod address;
pub mod customer;

pub use address::SqlAddressRepository;
pub use customer::SqlCustomerRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create(&self, fields: &CustomerFields) -> Result<CustomerId, RepositoryError>;

    async fn find_by_id(&self, id: &RecordKey) -> Result<Option<Customer>, RepositoryError>;

    async fn list(
        &self,
        filter: &CustomerFilter,
        page: PageRequest,
    ) -> Result<CustomerPage, RepositoryError>;

    /// Full replace of the writable columns. Returns the number of rows
    /// changed, zero when `id` matches no row.
    async fn update(
        &self,
        id: &RecordKey,
        fields: &CustomerFields,
    ) -> Result<u64, RepositoryError>;

    /// Deletes the customer row and then every address that references it.
    async fn delete(&self, id: &RecordKey) -> Result<CustomerDeletion, RepositoryError>;
}

#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn create(&self, address: &NewAddress) -> Result<AddressId, RepositoryError>;

    async fn list_for_customer(
        &self,
        customer_id: &RecordKey,
    ) -> Result<Vec<Address>, RepositoryError>;

    async fn update_line(
        &self,
        id: &RecordKey,
        update: &AddressUpdate,
    ) -> Result<u64, RepositoryError>;

    async fn delete(&self, id: &RecordKey) -> Result<u64, RepositoryError>;
}

pub(crate) type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Binds a request scalar with its own storage class; the column's affinity
/// converts it on write.
pub(crate) fn bind_field<'q>(
    query: SqliteQuery<'q>,
    value: &'q Option<FieldValue>,
) -> SqliteQuery<'q> {
    match value {
        None => query.bind(None::<String>),
        Some(FieldValue::Integer(value)) => query.bind(*value),
        Some(FieldValue::Real(value)) => query.bind(*value),
        Some(FieldValue::Text(value)) => query.bind(value.as_str()),
        Some(FieldValue::Bool(value)) => query.bind(*value),
    }
}

pub(crate) fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
{
    use sqlx::Row;

    row.try_get(name).map_err(|e| RepositoryError::Decode(format!("{name}: {e}")))
}

/// Reads a column whose storage class varies per row.
pub(crate) fn scalar_column(
    row: &SqliteRow,
    name: &str,
) -> Result<Option<FieldValue>, RepositoryError> {
    if let Ok(value) = column::<Option<i64>>(row, name) {
        return Ok(value.map(FieldValue::Integer));
    }
    if let Ok(value) = column::<Option<f64>>(row, name) {
        return Ok(value.map(FieldValue::Real));
    }
    column::<Option<String>>(row, name).map(|value| value.map(FieldValue::Text))
}
