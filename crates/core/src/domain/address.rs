use serde::{Deserialize, Serialize};

use crate::domain::value::FieldValue;
use crate::errors::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressId(pub i64);

/// `customer_id` is whatever the column holds: an integer for ids sent as
/// numbers or numeric strings, text otherwise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub customer_id: Option<FieldValue>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewAddress {
    pub customer_id: Option<FieldValue>,
    pub address: Option<FieldValue>,
    pub city: Option<FieldValue>,
    pub state: Option<FieldValue>,
}

impl NewAddress {
    /// The address line is the only field checked before insert. It must be
    /// present and not blank; whitespace counts as content.
    pub fn validate(&self) -> Result<(), DomainError> {
        match &self.address {
            Some(line) if !line.is_blank() => Ok(()),
            _ => Err(DomainError::MissingField { field: "address" }),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressUpdate {
    pub address: Option<FieldValue>,
}
