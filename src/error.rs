use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, PartialEq)]
pub enum NavigationError {
    #[error("no browser window available")]
    NoWindow,
    #[error("browser rejected navigation: {0}")]
    Rejected(String),
}

impl From<JsValue> for NavigationError {
    fn from(value: JsValue) -> Self {
        NavigationError::Rejected(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
