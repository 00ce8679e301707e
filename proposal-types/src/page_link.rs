use std::fmt;

use indexmap::IndexMap;

/// Query parameter holding the current page index.
pub const PAGE_PARAM: &str = "page";

/// A shareable reference to the current page, e.g. a URL query string.
///
/// Navigation publishes every new index here so a session can be resumed from
/// the link; on resume the stored value is read back.
pub trait PageLink {
    /// The raw page value currently stored, if any.
    fn page(&self) -> Option<&str>;

    /// Store a new page index.
    fn publish(&mut self, index: usize);
}

/// Simple `key=value&key=value` query parameters.
///
/// Values are stored verbatim; no percent-decoding is performed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: IndexMap<String, String>,
}

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without a leading `?`.
    ///
    /// Pairs without `=` are kept with an empty value. Later duplicates win.
    pub fn parse(query: &str) -> Self {
        let query = query.trim();
        let query = query.rsplit_once('?').map_or(query, |(_, q)| q);
        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((k, v)) => (k.to_string(), v.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect();
        Self { params }
    }

    /// Get a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Set a parameter value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Remove a parameter.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.params.shift_remove(key)
    }

    /// Check if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Render as `?key=value&...`, or an empty string when there are none.
    pub fn to_query_string(&self) -> String {
        self.to_string()
    }
}

impl PageLink for QueryParams {
    fn page(&self) -> Option<&str> {
        self.get(PAGE_PARAM)
    }

    fn publish(&mut self, index: usize) {
        self.set(PAGE_PARAM, index.to_string());
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{k}={v}")?;
        }
        Ok(())
    }
}
