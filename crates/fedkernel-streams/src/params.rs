//! Raw request parameters, as they arrive from a query string.
//!
//! A query string may repeat a key, so every name maps to zero or more
//! values, in the order they were supplied.

use std::collections::{BTreeMap, HashMap};

/// Multi-valued request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    values: BTreeMap<String, Vec<String>>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` query string.
    ///
    /// `+` decodes to a space and `%XX` escapes are decoded. A key without
    /// `=` gets an empty value.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }

    /// Append a value for `name`.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.entry(name.into()).or_default().push(value.into());
    }

    /// Builder-style [`add`](Self::add).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(name, value);
        self
    }

    /// All values supplied for `name`. Empty if absent.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check if no parameters were supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = RequestParams::new();
        for (name, value) in iter {
            params.add(name, value);
        }
        params
    }
}

impl From<BTreeMap<String, Vec<String>>> for RequestParams {
    fn from(values: BTreeMap<String, Vec<String>>) -> Self {
        Self { values }
    }
}

impl From<HashMap<String, Vec<String>>> for RequestParams {
    fn from(values: HashMap<String, Vec<String>>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_keys_keep_order() {
        let params: RequestParams = [("dir", "f"), ("limit", "5"), ("dir", "b")]
            .into_iter()
            .collect();
        assert_eq!(params.get_all("dir"), ["f", "b"]);
        assert_eq!(params.get_all("limit"), ["5"]);
        assert!(params.get_all("from").is_empty());
    }

    #[test]
    fn test_query_string_decoding() {
        let params = RequestParams::from_query_string("?from=s1_2&to=t1-2_0&note=a+b%21&flag");
        assert_eq!(params.get_all("from"), ["s1_2"]);
        assert_eq!(params.get_all("to"), ["t1-2_0"]);
        assert_eq!(params.get_all("note"), ["a b!"]);
        assert_eq!(params.get_all("flag"), [""]);
    }

    #[test]
    fn test_empty_query_string() {
        assert!(RequestParams::from_query_string("").is_empty());
    }

    #[test]
    fn test_from_hash_map() {
        let mut map = HashMap::new();
        map.insert("limit".to_string(), vec!["1".to_string(), "2".to_string()]);
        let params = RequestParams::from(map);
        assert_eq!(params.get_all("limit").len(), 2);
    }
}
