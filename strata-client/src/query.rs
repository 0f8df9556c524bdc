use std::collections::BTreeMap;

use serde_json::Value;

/// Query parameters for list endpoints.
///
/// Collected as strings; the transport renders them as URL query
/// parameters on GET.
#[derive(Debug, Clone, Default)]
pub struct Query {
    params: BTreeMap<String, String>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one parameter. Non-string values go through their `ToString`
    /// rendering, matching how the server expects numbers and booleans.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(name.into(), value.to_string());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Renders the parameters as a JSON object payload.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.params
                .iter()
                .map(|(name, value)| (name.clone(), Value::String(value.clone())))
                .collect(),
        )
    }
}
