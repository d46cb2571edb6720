use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("no element matches `{selector}`")]
    MissingElement { selector: String },

    #[error("carousel has no slides")]
    NoSlides,

    #[error("dom call failed: {0}")]
    Js(String),

    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for BehaviorError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        BehaviorError::Js(message)
    }
}

pub type Result<T> = std::result::Result<T, BehaviorError>;
