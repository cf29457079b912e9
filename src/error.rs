use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("unparseable date `{0}`")]
    InvalidDate(String),
    #[error("browser call failed: {0}")]
    Dom(String),
    #[error("no document attached to window")]
    MissingDocument,
}

pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        if let Some(error) = value.dyn_ref::<js_sys::Error>() {
            return Self::Dom(error.message().into());
        }

        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
