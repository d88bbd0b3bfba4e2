use crate::beer::{Beer, BeerId, NewBeer};
use crate::error::StockError;

/// Storage seam for beer records.
///
/// `create`, `increment` and `decrement` are check-then-set operations and
/// must be atomic per record: the duplicate-name check and the stock bound
/// checks run inside whatever lock the implementation holds for the write.
pub trait BeerRepository {
    /// Assign a fresh id and store the record. Fails with `AlreadyRegistered`
    /// if a record with the same name exists.
    fn create(&self, draft: NewBeer) -> Result<Beer, StockError>;

    fn find_by_id(&self, id: BeerId) -> Result<Option<Beer>, StockError>;

    fn find_by_name(&self, name: &str) -> Result<Option<Beer>, StockError>;

    /// All stored records, in no particular order.
    fn list(&self) -> Result<Vec<Beer>, StockError>;

    /// Remove the record. Returns `false` if the id was absent.
    fn delete(&self, id: BeerId) -> Result<bool, StockError>;

    /// Raise the record's quantity, rejecting results above `max`.
    fn increment(&self, id: BeerId, amount: i64) -> Result<Beer, StockError>;

    /// Lower the record's quantity, rejecting results below zero.
    fn decrement(&self, id: BeerId, amount: i64) -> Result<Beer, StockError>;
}
