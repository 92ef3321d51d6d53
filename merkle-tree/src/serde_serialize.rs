pub mod u256_number_or_string {
    use crate::weight::{RawWeight, MAX_SAFE_INTEGER};
    use alloy_primitives::U256;
    use serde::{self, Deserialize, Deserializer, Serializer};

    /// Numbers a JavaScript consumer can read back exactly are written as JSON numbers,
    /// larger values as decimal strings.
    pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match u64::try_from(*value) {
            Ok(small) if small <= MAX_SAFE_INTEGER => serializer.serialize_u64(small),
            _ => serializer.serialize_str(&value.to_string()),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawWeight::deserialize(deserializer)?;
        raw.to_u256().map_err(serde::de::Error::custom)
    }
}

pub mod option_u256_number_or_string {
    use super::u256_number_or_string;
    use alloy_primitives::U256;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<U256>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Helper<'a>(#[serde(with = "u256_number_or_string")] &'a U256);

        value.as_ref().map(Helper).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<U256>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper(#[serde(with = "u256_number_or_string")] U256);

        let helper = Option::deserialize(deserializer)?;
        Ok(helper.map(|Helper(external)| external))
    }
}

/// JSON object kept as a list of entries in document order.
/// Repeated keys are kept as separate entries for the caller to judge.
pub mod ordered_map_conversion {
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::Serialize;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::fmt;
    use std::marker::PhantomData;

    pub fn serialize<S, V: Serialize>(
        entries: &[(String, V)],
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (k, v) in entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D, V: Deserialize<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, V)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor::new())
    }

    struct OrderedMapVisitor<V> {
        marker: PhantomData<fn() -> Vec<(String, V)>>,
    }

    impl<V> OrderedMapVisitor<V> {
        fn new() -> Self {
            OrderedMapVisitor {
                marker: PhantomData,
            }
        }
    }

    impl<'de, V> Visitor<'de> for OrderedMapVisitor<V>
    where
        V: Deserialize<'de>,
    {
        type Value = Vec<(String, V)>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map of String keys and V values")
        }

        fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, V>()? {
                entries.push((key, value));
            }

            Ok(entries)
        }
    }
}
