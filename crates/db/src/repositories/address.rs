use rolodex_core::domain::address::{Address, AddressId, AddressUpdate, NewAddress};
use rolodex_core::domain::value::RecordKey;

use super::{bind_field, column, scalar_column, AddressRepository, RepositoryError};
use crate::DbPool;

#[derive(Clone)]
pub struct SqlAddressRepository {
    pool: DbPool,
}

impl SqlAddressRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_address(row: &sqlx::sqlite::SqliteRow) -> Result<Address, RepositoryError> {
    Ok(Address {
        id: AddressId(column(row, "id")?),
        customer_id: scalar_column(row, "customer_id")?,
        address: column(row, "address")?,
        city: column(row, "city")?,
        state: column(row, "state")?,
    })
}

#[async_trait::async_trait]
impl AddressRepository for SqlAddressRepository {
    async fn create(&self, address: &NewAddress) -> Result<AddressId, RepositoryError> {
        let insert = sqlx::query(
            "INSERT INTO address (customer_id, address, city, state) VALUES (?, ?, ?, ?)",
        );
        let result = [&address.customer_id, &address.address, &address.city, &address.state]
            .into_iter()
            .fold(insert, bind_field)
            .execute(&self.pool)
            .await?;

        Ok(AddressId(result.last_insert_rowid()))
    }

    async fn list_for_customer(
        &self,
        customer_id: &RecordKey,
    ) -> Result<Vec<Address>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, customer_id, address, city, state FROM address WHERE customer_id = ?",
        )
        .bind(customer_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_address).collect()
    }

    async fn update_line(
        &self,
        id: &RecordKey,
        update: &AddressUpdate,
    ) -> Result<u64, RepositoryError> {
        let result =
            bind_field(sqlx::query("UPDATE address SET address = ? WHERE id = ?"), &update.address)
                .bind(id.as_str())
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &RecordKey) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM address WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
