use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("invalid pagination parameter `{parameter}`: `{value}`")]
    InvalidPagination { parameter: &'static str, value: String },
}

impl DomainError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingField { field: "address" } => "Address is required.",
            Self::MissingField { .. } => "A required field is missing.",
            Self::InvalidPagination { .. } => "Pagination parameters must be integers.",
        }
    }
}
