use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::beer::{Beer, BeerId, NewBeer};
use crate::error::StockError;
use crate::repository::BeerRepository;
use crate::stock;

/// In-memory beer store backed by a `HashMap` behind an `RwLock`.
///
/// Ids start at 1 and increase monotonically.
pub struct HashMapRepository {
    storage: Arc<RwLock<HashMap<BeerId, Beer>>>,
    next_id: AtomicU64,
}

impl HashMapRepository {
    pub fn new() -> Self {
        HashMapRepository {
            storage: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for HashMapRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BeerRepository for HashMapRepository {
    fn create(&self, draft: NewBeer) -> Result<Beer, StockError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StockError::LockPoisoned("create"))?;

        // Duplicate check and insert under the same write lock.
        if storage.values().any(|beer| beer.name == draft.name) {
            return Err(StockError::AlreadyRegistered(draft.name));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let beer = draft.into_beer(id);
        storage.insert(id, beer.clone());
        Ok(beer)
    }

    fn find_by_id(&self, id: BeerId) -> Result<Option<Beer>, StockError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StockError::LockPoisoned("read"))?;
        Ok(storage.get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Beer>, StockError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StockError::LockPoisoned("read"))?;
        Ok(storage.values().find(|beer| beer.name == name).cloned())
    }

    fn list(&self) -> Result<Vec<Beer>, StockError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StockError::LockPoisoned("read"))?;
        Ok(storage.values().cloned().collect())
    }

    fn delete(&self, id: BeerId) -> Result<bool, StockError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StockError::LockPoisoned("delete"))?;
        Ok(storage.remove(&id).is_some())
    }

    fn increment(&self, id: BeerId, amount: i64) -> Result<Beer, StockError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StockError::LockPoisoned("increment"))?;
        let beer = storage.get_mut(&id).ok_or(StockError::NotFound(id))?;
        beer.quantity = stock::increment(id, beer.quantity, beer.max, amount)?;
        Ok(beer.clone())
    }

    fn decrement(&self, id: BeerId, amount: i64) -> Result<Beer, StockError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StockError::LockPoisoned("decrement"))?;
        let beer = storage.get_mut(&id).ok_or(StockError::NotFound(id))?;
        beer.quantity = stock::decrement(id, beer.quantity, amount)?;
        Ok(beer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beer::BeerType;

    fn skol() -> NewBeer {
        NewBeer {
            name: "Skol".to_string(),
            brand: "Ambev".to_string(),
            max: 50,
            quantity: 10,
            beer_type: BeerType::Lager,
        }
    }

    #[test]
    fn create_assigns_increasing_ids() {
        let repo = HashMapRepository::new();
        let first = repo.create(skol()).unwrap();
        let second = repo
            .create(NewBeer {
                name: "Brahma".to_string(),
                ..skol()
            })
            .unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn create_rejects_duplicate_name() {
        let repo = HashMapRepository::new();
        repo.create(skol()).unwrap();

        // Other fields differ but the name collides.
        let duplicate = NewBeer {
            brand: "Heineken".to_string(),
            max: 99,
            quantity: 0,
            ..skol()
        };
        assert_eq!(
            repo.create(duplicate),
            Err(StockError::AlreadyRegistered("Skol".to_string()))
        );
    }

    #[test]
    fn increment_rejection_leaves_quantity_untouched() {
        let repo = HashMapRepository::new();
        let beer = repo.create(skol()).unwrap();

        assert!(repo.increment(beer.id, 45).is_err());
        let stored = repo.find_by_id(beer.id).unwrap().unwrap();
        assert_eq!(stored.quantity, 10);
    }

    #[test]
    fn adjustments_round_trip() {
        let repo = HashMapRepository::new();
        let beer = repo.create(skol()).unwrap();

        assert_eq!(repo.increment(beer.id, 15).unwrap().quantity, 25);
        assert_eq!(repo.decrement(beer.id, 5).unwrap().quantity, 20);
    }

    #[test]
    fn adjust_unknown_id_is_not_found() {
        let repo = HashMapRepository::new();
        assert_eq!(repo.increment(7, 1), Err(StockError::NotFound(7)));
        assert_eq!(repo.decrement(7, 1), Err(StockError::NotFound(7)));
    }
}
