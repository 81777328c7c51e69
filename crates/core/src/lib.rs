pub mod config;
pub mod domain;
pub mod errors;

pub use domain::address::{Address, AddressId, AddressUpdate, NewAddress};
pub use domain::customer::{
    Customer, CustomerDeletion, CustomerFields, CustomerFilter, CustomerId, CustomerPage,
    CustomerSummary, PageRequest,
};
pub use domain::value::{FieldValue, RecordKey};
pub use errors::DomainError;
