use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A person of the catalog, acting in and/or directing movies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    /// Storage-assigned identifier
    pub id: i64,

    pub name: String,

    pub birthdate: Option<NaiveDate>,
}

/// Star fields before the storage layer assigned an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStar {
    pub name: String,
    pub birthdate: Option<NaiveDate>,
}

impl NewStar {
    pub fn new(name: impl Into<String>, birthdate: Option<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            birthdate,
        }
    }
}

impl Star {
    /// Attach the id assigned on insert
    pub fn from_new(id: i64, star: NewStar) -> Self {
        Self {
            id,
            name: star.name,
            birthdate: star.birthdate,
        }
    }
}
