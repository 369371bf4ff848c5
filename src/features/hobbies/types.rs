use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One hobby as served by `/api/hobbies/`. Decodes from a JSON object only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Hobby {
    pub id: i64,
    pub name: String,
}

impl TryFrom<Map<String, Value>> for Hobby {
    type Error = String;

    fn try_from(body: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = body
            .get("id")
            .ok_or("missing field `id`")?
            .as_i64()
            .ok_or("`id` must be an integer")?;
        let name = body
            .get("name")
            .ok_or("missing field `name`")?
            .as_str()
            .ok_or("`name` must be a string")?;

        Ok(Self {
            id,
            name: name.to_string(),
        })
    }
}

/// Shared view of the hobby collection. `hobbies` keeps server order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectionState {
    pub hobbies: Vec<Hobby>,
    pub is_loading: bool,
}
