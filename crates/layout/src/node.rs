//! The declarative layout tree, as produced by the external schema validator.
//!
//! A layout document is a JSON object with a `version` and an ordered list of
//! `objects`. Each object is either a `Group` holding further objects or a
//! drawable leaf. Geometry stays string-encoded here; it is resolved against
//! the parent box by the flattener, not at deserialization time.

use crate::LayoutError;
use marquee_style::{HorizontalAnchor, ObjectStyle, TextAlign, VerticalAnchor};
use serde::Deserialize;

/// Major schema line this engine understands. Full schema validation is the
/// loader's job; this only rejects documents from a different line outright.
const SUPPORTED_MAJOR_VERSION: &str = "1";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument {
    pub version: String,
    pub objects: Vec<LayoutNode>,
}

impl LayoutDocument {
    pub fn check_version(&self) -> Result<(), LayoutError> {
        let major = self.version.split('.').next().unwrap_or("");
        if major == SUPPORTED_MAJOR_VERSION {
            Ok(())
        } else {
            Err(LayoutError::UnsupportedVersion(self.version.clone()))
        }
    }
}

/// String-encoded box geometry, relative to the immediate parent.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,
    #[serde(default)]
    pub horizontal: HorizontalAnchor,
    #[serde(default)]
    pub vertical: VerticalAnchor,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum LayoutNode {
    Group(GroupNode),
    Textbox(LeafNode),
    ScrollingTextbox(LeafNode),
    Image(LeafNode),
    Alert(LeafNode),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GroupNode {
    #[serde(flatten)]
    pub geometry: Geometry,
    pub objects: Vec<LayoutNode>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LeafNode {
    #[serde(flatten)]
    pub geometry: Geometry,
    #[serde(flatten)]
    pub style: ObjectStyle,
    #[serde(flatten)]
    pub content: Content,
}

/// Content bindings of a leaf.
///
/// `text` is a template string (placeholders and markup allowed). A leaf with
/// no `text` may instead bind `data_source` (`provider:operation`) with an
/// optional `data_params` argument. `on_scroll_end` is a trigger template
/// fired at scroll-cycle boundaries.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Content {
    pub text: Option<String>,
    pub text_align: TextAlign,
    pub path: Option<String>,
    pub data_source: Option<String>,
    pub data_params: Option<String>,
    pub on_scroll_end: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_types::Color;

    const DOC: &str = r##"{
        "version": "1.0.0",
        "objects": [
            {
                "type": "Group",
                "x": "0px", "y": "0px", "width": "100%", "height": "50%",
                "objects": [
                    {
                        "type": "ScrollingTextbox",
                        "x": "0px", "y": "0px", "width": "100%", "height": "100%",
                        "fgColor": "#FFFF00",
                        "text": "{news:headline}",
                        "onScrollEnd": "{news:advance}"
                    }
                ]
            },
            {
                "type": "Textbox",
                "x": "50%", "y": "50%", "width": "50%", "height": "50%",
                "horizontal": "center",
                "textAlign": "right",
                "text": "Time: {time:get_24hr:America/New_York}"
            }
        ]
    }"##;

    #[test]
    fn deserializes_a_versioned_document() {
        let doc: LayoutDocument = serde_json::from_str(DOC).unwrap();
        assert_eq!(doc.version, "1.0.0");
        assert_eq!(doc.objects.len(), 2);
        doc.check_version().unwrap();
    }

    #[test]
    fn group_nests_children_in_document_order() {
        let doc: LayoutDocument = serde_json::from_str(DOC).unwrap();
        let LayoutNode::Group(group) = &doc.objects[0] else {
            panic!("expected a Group");
        };
        assert_eq!(group.objects.len(), 1);
        let LayoutNode::ScrollingTextbox(leaf) = &group.objects[0] else {
            panic!("expected a ScrollingTextbox");
        };
        assert_eq!(leaf.style.fg_color, Color::new(255, 255, 0));
        assert_eq!(leaf.content.on_scroll_end.as_deref(), Some("{news:advance}"));
    }

    #[test]
    fn leaf_anchors_and_alignment_deserialize() {
        let doc: LayoutDocument = serde_json::from_str(DOC).unwrap();
        let LayoutNode::Textbox(leaf) = &doc.objects[1] else {
            panic!("expected a Textbox");
        };
        assert_eq!(leaf.geometry.horizontal, HorizontalAnchor::Center);
        assert_eq!(leaf.geometry.vertical, VerticalAnchor::Top);
        assert_eq!(leaf.content.text_align, TextAlign::Right);
    }

    #[test]
    fn rejects_unsupported_major_version() {
        let doc = LayoutDocument {
            version: "2.0.0".to_string(),
            objects: vec![],
        };
        assert!(matches!(
            doc.check_version(),
            Err(LayoutError::UnsupportedVersion(_))
        ));
    }
}
