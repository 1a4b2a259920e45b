//! The Extended JSON object mapping, `{"$numberDecimal": "<string>"}`.

use core::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dec128::Decimal128;

const KEY: &str = "$numberDecimal";

impl Serialize for Decimal128 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(KEY, &self.to_string())?;
        map.end()
    }
}

struct Dec128Visitor;

impl<'de> Visitor<'de> for Dec128Visitor {
    type Value = Decimal128;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map with the single key {KEY:?}")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let Some((key, value)) = map.next_entry::<String, String>()? else {
            return Err(de::Error::invalid_length(0, &self));
        };
        if key != KEY {
            return Err(de::Error::unknown_field(&key, &[KEY]));
        }
        if map.next_key::<String>()?.is_some() {
            return Err(de::Error::custom("expected a single-key map"));
        }
        Decimal128::parse(&value).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Decimal128 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(Dec128Visitor)
    }
}
