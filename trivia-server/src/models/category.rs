//! Category records and the `{id: type}` mapping the frontend expects

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use sqlx::FromRow;

/// Question category, e.g. "Science"
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Categories serialized as a JSON object keyed by id, in list order.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap(pub Vec<Category>);

impl From<Vec<Category>> for CategoryMap {
    fn from(categories: Vec<Category>) -> Self {
        Self(categories)
    }
}

impl Serialize for CategoryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.id.to_string(), &category.kind)?;
        }
        map.end()
    }
}
