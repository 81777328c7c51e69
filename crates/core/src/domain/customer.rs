use serde::{Deserialize, Serialize};

use crate::domain::value::FieldValue;
use crate::errors::DomainError;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub i64);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

/// The four writable customer columns. Used for both create and full-replace
/// update; absent fields are stored as NULL. Any JSON scalar is accepted and
/// stored by the `TEXT` columns as text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerFields {
    pub first_name: Option<FieldValue>,
    pub last_name: Option<FieldValue>,
    pub phone_number: Option<FieldValue>,
    pub email: Option<FieldValue>,
}

/// One row of the customer listing: a customer joined with one of its
/// address cities (or none).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub id: CustomerId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, limit: DEFAULT_PAGE_SIZE }
    }
}

impl PageRequest {
    /// Parses raw `_page` / `_limit` query values. Absent values take the
    /// defaults. Present values are read up to the first non-digit, so
    /// `"2.5"` is page 2; a value with no leading digits is an error.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Result<Self, DomainError> {
        Ok(Self {
            page: parse_param("_page", page, DEFAULT_PAGE)?,
            limit: parse_param("_limit", limit, DEFAULT_PAGE_SIZE)?,
        })
    }

    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    pub search: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
}

impl CustomerFilter {
    /// Builds a filter where empty terms count as "not filtering".
    pub fn new(search: Option<String>, name: Option<String>, city: Option<String>) -> Self {
        Self { search: non_empty(search), name: non_empty(name), city: non_empty(city) }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.name.is_none() && self.city.is_none()
    }
}

/// A page of customer rows. `total` counts every customer in the store and
/// ignores the filter that produced `customers`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPage {
    pub customers: Vec<CustomerSummary>,
    pub total: i64,
}

/// Row counts touched by a customer delete, which also removes the
/// customer's addresses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CustomerDeletion {
    pub customers: u64,
    pub addresses: u64,
}

fn parse_param(
    parameter: &'static str,
    raw: Option<&str>,
    default: i64,
) -> Result<i64, DomainError> {
    match raw {
        None => Ok(default),
        Some(value) => leading_integer(value)
            .ok_or_else(|| DomainError::InvalidPagination { parameter, value: value.to_string() }),
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let digits = unsigned.len() - unsigned.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let end = trimmed.len() - unsigned.len() + digits;
    trimmed[..end].parse().ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|term| !term.is_empty())
}
