use std::fmt::Display;

/// Form parameters to send to the DNSPod API.
///
/// Keys are unique and keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    params: Vec<(String, String)>,
}

impl Payload {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the given key-value pair, replacing any previous value for the key.
    pub fn add<T: Display>(mut self, key: &str, value: T) -> Self {
        self.insert(key, value.to_string());
        self
    }

    /// In the case that `value` is some, adds the key-value pair.
    ///
    /// Zero values are kept, only `None` is skipped.
    pub fn add_if_some<T: Display>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.add(key, value),
            None => self,
        }
    }

    /// In the case that `value` is some and not empty, adds the key-value pair.
    pub fn add_if_not_empty<S: AsRef<str>>(self, key: &str, value: Option<S>) -> Self {
        match value {
            Some(value) if !value.as_ref().is_empty() => self.add(key, value.as_ref()),
            _ => self,
        }
    }

    /// Gets the value for the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the payload holds the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over the key-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    fn insert(&mut self, key: &str, value: String) {
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.params.push((key.to_string(), value)),
        }
    }
}

impl From<Payload> for Vec<(String, String)> {
    fn from(value: Payload) -> Self {
        value.params
    }
}

impl serde::Serialize for Payload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.params, serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suppresses_unset_and_empty() {
        let payload = Payload::new()
            .add("domain", "example.com")
            .add_if_not_empty("sub_domain", Some(""))
            .add_if_not_empty("value", None::<&str>)
            .add_if_not_empty("ttl", Some("600"))
            .add_if_some("weight", None::<i64>);

        assert_eq!(payload.get("domain"), Some("example.com"));
        assert_eq!(payload.get("ttl"), Some("600"));
        assert!(!payload.contains_key("sub_domain"));
        assert!(!payload.contains_key("value"));
        assert!(!payload.contains_key("weight"));
        assert_eq!(payload.len(), 2);
    }

    #[test]
    fn keeps_zero() {
        let payload = Payload::new().add_if_some("weight", Some(0));
        assert_eq!(payload.get("weight"), Some("0"));
    }

    #[test]
    fn replaces_existing_key_in_place() {
        let payload = Payload::new()
            .add("format", "xml")
            .add("lang", "en")
            .add("format", "json");

        let pairs: Vec<_> = payload.iter().collect();
        assert_eq!(pairs, vec![("format", "json"), ("lang", "en")]);
    }
}
