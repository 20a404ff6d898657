//! Request/query types (Deserialize)

use serde::Deserialize;

/// Prefix of invocation form fields: `p.msg=hi` sets parameter `msg`.
pub const PARAM_FIELD_PREFIX: &str = "p.";

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Category id of the active filter; absent or unknown means "All".
    pub category: Option<String>,
    #[serde(default)]
    pub q: String,
}

/// Parsed `/invoke` query. Parameter values keep their order of appearance.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InvokeQuery {
    pub path: String,
    pub submit: bool,
    pub values: Vec<(String, String)>,
}

impl InvokeQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, String> {
        let mut path = None;
        let mut submit = false;
        let mut values = Vec::new();
        for (key, value) in pairs {
            if key == "path" {
                path = Some(value);
            } else if key == "submit" {
                submit = !value.is_empty() && value != "0";
            } else if let Some(name) = key.strip_prefix(PARAM_FIELD_PREFIX) {
                values.push((name.to_owned(), value));
            }
        }
        let path = path.filter(|p| !p.is_empty()).ok_or_else(|| "missing 'path' query parameter".to_owned())?;
        Ok(Self { path, submit, values })
    }
}
