//! Recursive resolution of a layout tree into a flat drawable list.
//!
//! Each node's geometry resolves against its immediate parent box. Groups
//! contribute a new parent frame and recurse; leaves are emitted depth-first
//! in document order, and the emit position becomes the drawable's `index`.

use crate::elements::{Drawable, DrawableKind};
use crate::node::{Geometry, LayoutNode, LeafNode};
use crate::LayoutError;
use marquee_style::{resolve, HorizontalAnchor, VerticalAnchor};
use marquee_types::{Rect, Size};

/// Flatten `objects` into absolute draw order against a panel of `panel` size.
pub fn flatten(objects: &[LayoutNode], panel: Size) -> Result<Vec<Drawable>, LayoutError> {
    let mut out = Vec::new();
    let root = Rect::from_size(panel);
    for node in objects {
        flatten_node(node, root, &mut out)?;
    }
    Ok(out)
}

fn flatten_node(
    node: &LayoutNode,
    parent: Rect,
    out: &mut Vec<Drawable>,
) -> Result<(), LayoutError> {
    match node {
        LayoutNode::Group(group) => {
            let frame = resolve_frame(&group.geometry, parent)?;
            for child in &group.objects {
                flatten_node(child, frame, out)?;
            }
            Ok(())
        }
        LayoutNode::Textbox(leaf) => emit(DrawableKind::Textbox, leaf, parent, out),
        LayoutNode::ScrollingTextbox(leaf) => emit(DrawableKind::ScrollingTextbox, leaf, parent, out),
        LayoutNode::Image(leaf) => emit(DrawableKind::Image, leaf, parent, out),
        LayoutNode::Alert(leaf) => emit(DrawableKind::Alert, leaf, parent, out),
    }
}

fn emit(
    kind: DrawableKind,
    leaf: &LeafNode,
    parent: Rect,
    out: &mut Vec<Drawable>,
) -> Result<(), LayoutError> {
    let frame = resolve_frame(&leaf.geometry, parent)?;
    out.push(Drawable {
        index: out.len(),
        kind,
        frame,
        style: leaf.style.clone(),
        content: leaf.content.clone(),
    });
    Ok(())
}

/// Resolve a node's box against the parent frame, then shift the origin by
/// the anchor rule: `center` pulls back by half the extent (floor division),
/// `right`/`bottom` by the full extent.
fn resolve_frame(geometry: &Geometry, parent: Rect) -> Result<Rect, LayoutError> {
    let x = resolve(&geometry.x, parent.width)?;
    let y = resolve(&geometry.y, parent.height)?;
    let width = resolve(&geometry.width, parent.width)?;
    let height = resolve(&geometry.height, parent.height)?;

    let mut origin_x = parent.x + x;
    let mut origin_y = parent.y + y;

    match geometry.horizontal {
        HorizontalAnchor::Left => {}
        HorizontalAnchor::Center => origin_x -= width / 2,
        HorizontalAnchor::Right => origin_x -= width,
    }
    match geometry.vertical {
        VerticalAnchor::Top => {}
        VerticalAnchor::Center => origin_y -= height / 2,
        VerticalAnchor::Bottom => origin_y -= height,
    }

    Ok(Rect::new(origin_x, origin_y, width, height))
}
