use std::fmt;

use crate::beer::BeerId;

/// Error type for beer stock operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockError {
    /// Creation with a name that is already stored.
    AlreadyRegistered(String),
    /// No record with this id.
    NotFound(BeerId),
    /// No record with this name.
    NotFoundByName(String),
    /// Increment would push the quantity past `max`.
    StockExceeded { id: BeerId, amount: i64 },
    /// Decrement would drop the quantity below zero.
    StockBelowZero { id: BeerId, amount: i64 },
    /// A request field failed validation.
    InvalidField(&'static str),
    /// Repository lock poisoned.
    LockPoisoned(&'static str),
}

impl fmt::Display for StockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockError::AlreadyRegistered(name) => {
                write!(f, "Beer with name {} already registered in the system.", name)
            }
            StockError::NotFound(id) => {
                write!(f, "Beer with id {} not found in the system.", id)
            }
            StockError::NotFoundByName(name) => {
                write!(f, "Beer with name {} not found in the system.", name)
            }
            StockError::StockExceeded { id, amount } => write!(
                f,
                "Increment of {} exceeds the max stock capacity of beer {}.",
                amount, id
            ),
            StockError::StockBelowZero { id, amount } => write!(
                f,
                "Decrement of {} drops the stock of beer {} below zero.",
                amount, id
            ),
            StockError::InvalidField(field) => write!(f, "Invalid value for field {}.", field),
            StockError::LockPoisoned(operation) => {
                write!(f, "repository lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StockError {}

impl StockError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            StockError::AlreadyRegistered(_) => 400,
            StockError::NotFound(_) => 404,
            StockError::NotFoundByName(_) => 404,
            StockError::StockExceeded { .. } => 400,
            StockError::StockBelowZero { .. } => 400,
            StockError::InvalidField(_) => 400,
            StockError::LockPoisoned(_) => 500,
        }
    }
}
