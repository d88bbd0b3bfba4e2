//! Domain operations over a [`BeerRepository`] — what the HTTP handlers call.

use tracing::{debug, warn};

use crate::beer::{Beer, BeerId, NewBeer};
use crate::error::StockError;
use crate::repository::BeerRepository;

/// Beer stock operations, generic over the repository type.
pub struct BeerService<R> {
    repo: R,
}

impl<R: BeerRepository> BeerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Validate the draft and store it. Fails with `AlreadyRegistered` on a
    /// duplicate name and `InvalidField` on out-of-range fields.
    pub fn create(&self, draft: NewBeer) -> Result<Beer, StockError> {
        validate(&draft)?;
        let beer = self.repo.create(draft)?;
        debug!(id = beer.id, name = %beer.name, "beer registered");
        Ok(beer)
    }

    pub fn find_by_name(&self, name: &str) -> Result<Beer, StockError> {
        self.repo
            .find_by_name(name)?
            .ok_or_else(|| StockError::NotFoundByName(name.to_string()))
    }

    pub fn list(&self) -> Result<Vec<Beer>, StockError> {
        self.repo.list()
    }

    pub fn delete(&self, id: BeerId) -> Result<(), StockError> {
        if self.repo.delete(id)? {
            debug!(id, "beer deleted");
            Ok(())
        } else {
            Err(StockError::NotFound(id))
        }
    }

    pub fn increment(&self, id: BeerId, amount: i64) -> Result<Beer, StockError> {
        if amount < 0 {
            return Err(StockError::InvalidField("quantity"));
        }
        let beer = self.repo.increment(id, amount)?;
        debug!(id, amount, quantity = beer.quantity, "stock incremented");
        Ok(beer)
    }

    pub fn decrement(&self, id: BeerId, amount: i64) -> Result<Beer, StockError> {
        if amount < 0 {
            return Err(StockError::InvalidField("quantity"));
        }
        let beer = self.repo.decrement(id, amount)?;
        debug!(id, amount, quantity = beer.quantity, "stock decremented");
        Ok(beer)
    }
}

fn validate(draft: &NewBeer) -> Result<(), StockError> {
    if draft.name.trim().is_empty() {
        return Err(StockError::InvalidField("name"));
    }
    if draft.max <= 0 {
        return Err(StockError::InvalidField("max"));
    }
    if draft.quantity < 0 || draft.quantity > draft.max {
        warn!(
            quantity = draft.quantity,
            max = draft.max,
            "creation rejected: quantity out of range"
        );
        return Err(StockError::InvalidField("quantity"));
    }
    Ok(())
}
