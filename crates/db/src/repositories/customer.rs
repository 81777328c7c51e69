use sqlx::{QueryBuilder, Sqlite};

use rolodex_core::domain::customer::{
    Customer, CustomerDeletion, CustomerFields, CustomerFilter, CustomerId, CustomerPage,
    CustomerSummary, PageRequest,
};
use rolodex_core::domain::value::{FieldValue, RecordKey};

use super::{bind_field, column, CustomerRepository, RepositoryError};
use crate::DbPool;

#[derive(Clone)]
pub struct SqlCustomerRepository {
    pool: DbPool,
}

impl SqlCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn writable_columns(fields: &CustomerFields) -> [&Option<FieldValue>; 4] {
    [&fields.first_name, &fields.last_name, &fields.phone_number, &fields.email]
}

fn row_to_customer(row: &sqlx::sqlite::SqliteRow) -> Result<Customer, RepositoryError> {
    Ok(Customer {
        id: CustomerId(column(row, "id")?),
        first_name: column(row, "first_name")?,
        last_name: column(row, "last_name")?,
        phone_number: column(row, "phone_number")?,
        email: column(row, "email")?,
    })
}

fn row_to_summary(row: &sqlx::sqlite::SqliteRow) -> Result<CustomerSummary, RepositoryError> {
    Ok(CustomerSummary {
        id: CustomerId(column(row, "id")?),
        first_name: column(row, "first_name")?,
        last_name: column(row, "last_name")?,
        email: column(row, "email")?,
        city: column(row, "city")?,
    })
}

/// LIKE pattern for "contains". `%` and `_` inside the term stay wildcards.
fn contains_pattern(term: &str) -> String {
    format!("%{term}%")
}

fn push_name_match(builder: &mut QueryBuilder<'_, Sqlite>, term: &str) {
    let pattern = contains_pattern(term);
    builder.push(" AND (customer.first_name LIKE ");
    builder.push_bind(pattern.clone());
    builder.push(" OR customer.last_name LIKE ");
    builder.push_bind(pattern);
    builder.push(")");
}

fn build_list_query<'a>(filter: &CustomerFilter, page: PageRequest) -> QueryBuilder<'a, Sqlite> {
    let mut builder = QueryBuilder::new(
        "SELECT customer.id, customer.first_name, customer.last_name, customer.email, address.city
         FROM customer
         LEFT JOIN address ON customer.id = address.customer_id
         WHERE 1=1",
    );

    if let Some(term) = &filter.search {
        push_name_match(&mut builder, term);
    }
    if let Some(term) = &filter.name {
        push_name_match(&mut builder, term);
    }
    if let Some(city) = &filter.city {
        builder.push(" AND address.city LIKE ");
        builder.push_bind(contains_pattern(city));
    }

    builder.push(" GROUP BY customer.id LIMIT ");
    builder.push_bind(page.limit);
    builder.push(" OFFSET ");
    builder.push_bind(page.offset());
    builder
}

#[async_trait::async_trait]
impl CustomerRepository for SqlCustomerRepository {
    async fn create(&self, fields: &CustomerFields) -> Result<CustomerId, RepositoryError> {
        let insert = sqlx::query(
            "INSERT INTO customer (first_name, last_name, phone_number, email)
             VALUES (?, ?, ?, ?)",
        );
        let result = writable_columns(fields)
            .into_iter()
            .fold(insert, bind_field)
            .execute(&self.pool)
            .await?;

        Ok(CustomerId(result.last_insert_rowid()))
    }

    async fn find_by_id(&self, id: &RecordKey) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, phone_number, email FROM customer WHERE id = ?",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(ref r) => Ok(Some(row_to_customer(r)?)),
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        filter: &CustomerFilter,
        page: PageRequest,
    ) -> Result<CustomerPage, RepositoryError> {
        let mut query = build_list_query(filter, page);
        let rows = query.build().fetch_all(&self.pool).await?;
        let customers = rows.iter().map(row_to_summary).collect::<Result<Vec<_>, _>>()?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT customer.id) FROM customer")
            .fetch_one(&self.pool)
            .await?;

        Ok(CustomerPage { customers, total })
    }

    async fn update(
        &self,
        id: &RecordKey,
        fields: &CustomerFields,
    ) -> Result<u64, RepositoryError> {
        let update = sqlx::query(
            "UPDATE customer
             SET first_name = ?, last_name = ?, phone_number = ?, email = ?
             WHERE id = ?",
        );
        let result = writable_columns(fields)
            .into_iter()
            .fold(update, bind_field)
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &RecordKey) -> Result<CustomerDeletion, RepositoryError> {
        // Two independent statements; a failure in the second leaves the
        // customer gone and its addresses in place.
        let customers = sqlx::query("DELETE FROM customer WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        let addresses = sqlx::query("DELETE FROM address WHERE customer_id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(CustomerDeletion { customers, addresses })
    }
}
