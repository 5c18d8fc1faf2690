//! Errors raised at the browser boundary

use wasm_bindgen::JsValue;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("No global window")]
    NoWindow,

    #[error("No document on window")]
    NoDocument,

    #[error("Canvas #{0} not found")]
    CanvasNotFound(String),

    #[error("Element #{0} is not a canvas")]
    NotACanvas(String),

    #[error("2D context unavailable")]
    ContextUnavailable,

    #[error("Canvas {width}x{height} is too small for the paddles and ball")]
    CanvasTooSmall { width: u32, height: u32 },

    #[error("JS error: {0}")]
    Js(String),
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        ClientError::Js(format!("{:?}", value))
    }
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
