use serde_json::{json, Value};

/// A single full-panel scrolling region bound to `{ticker:headline}` with an
/// `onScrollEnd` hook on `{ticker:advance}`.
pub fn scrolling_layout() -> Value {
    json!({
        "version": "1.0.0",
        "objects": [
            {
                "type": "ScrollingTextbox",
                "x": "0px", "y": "0px", "width": "100%", "height": "100%",
                "text": "{ticker:headline}",
                "onScrollEnd": "{ticker:advance}"
            }
        ]
    })
}

/// A single static textbox across the whole panel.
pub fn static_layout(text: &str, text_align: &str) -> Value {
    json!({
        "version": "1.0.0",
        "objects": [
            {
                "type": "Textbox",
                "x": "0px", "y": "0px", "width": "100%", "height": "100%",
                "textAlign": text_align,
                "text": text
            }
        ]
    })
}
