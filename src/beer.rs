use serde::{Deserialize, Serialize};

/// Identifier assigned to a beer record when it is created.
pub type BeerId = u64;

/// Beer style tag. Serialized in uppercase on the wire (`"LAGER"`, `"IPA"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BeerType {
    Lager,
    Malzbier,
    Witbier,
    Weiss,
    Ale,
    Ipa,
    Stout,
}

/// A stored beer record.
///
/// Invariant: `0 <= quantity <= max`. Requests that would violate it are
/// rejected, never clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    pub id: BeerId,
    pub name: String,
    pub brand: String,
    pub max: i64,
    pub quantity: i64,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

/// Payload for beer creation — everything but the id, which the repository
/// assigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBeer {
    pub name: String,
    pub brand: String,
    pub max: i64,
    pub quantity: i64,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

impl NewBeer {
    pub fn into_beer(self, id: BeerId) -> Beer {
        Beer {
            id,
            name: self.name,
            brand: self.brand,
            max: self.max,
            quantity: self.quantity,
            beer_type: self.beer_type,
        }
    }
}
