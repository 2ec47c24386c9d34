use serde::{Deserialize, Deserializer, de::Error};

/// Helper type for values the API sends either as strings or as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::I64(i) => i.to_string(),
            StringOrNumber::U64(u) => u.to_string(),
            StringOrNumber::F64(f) => f.to_string(),
            StringOrNumber::Bool(b) => b.to_string(),
        }
    }
}

pub(crate) fn deserialize_to_option_string<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(String::from))
}

pub(crate) fn deserialize_to_option_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        Some(StringOrNumber::I64(i)) => Some(i),
        Some(StringOrNumber::String(s)) if s.is_empty() => None,
        Some(StringOrNumber::String(s)) => Some(s.parse().map_err(D::Error::custom)?),
        Some(other) => {
            let s = String::from(other);
            Some(s.parse().map_err(D::Error::custom)?)
        }
        None => None,
    })
}

pub(crate) fn deserialize_to_option_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        Some(StringOrNumber::Bool(b)) => Some(b),
        Some(StringOrNumber::I64(i)) => Some(i != 0),
        Some(StringOrNumber::U64(u)) => Some(u != 0),
        Some(StringOrNumber::String(s)) => match s.as_str() {
            "" => None,
            "1" | "true" | "yes" => Some(true),
            "0" | "false" | "no" => Some(false),
            _ => return Err(D::Error::custom(format!("invalid boolean: {s:?}"))),
        },
        Some(StringOrNumber::F64(f)) => Some(f != 0.0),
        None => None,
    })
}
