use crate::ast::node::{RenderNode, ValidationError};
use crate::text::Line;

pub mod utils;

use utils::is_void_element;

/// Serialize a render tree to HTML.
///
/// The whole tree is written into a single `Line` and joined once, so the
/// first invariant violation aborts before any output is allocated.
pub fn serialize(node: &RenderNode) -> Result<String, ValidationError> {
    let mut line = Line::new();
    write_node(&mut line, node)?;
    Ok(line.apply())
}

fn write_node<'a>(line: &mut Line<'a>, node: &'a RenderNode) -> Result<(), ValidationError> {
    match node {
        RenderNode::Leaf {
            tag: None,
            value,
            attributes: _,
        } => {
            let value = value
                .as_deref()
                .ok_or(ValidationError::LeafMissingValue { tag: None })?;
            line.push(value);
        }
        RenderNode::Leaf {
            tag: Some(tag),
            value,
            attributes,
        } => match value {
            Some(value) => {
                line.open_tag(tag, attributes.to_html())
                    .push(value.as_str())
                    .close_tag(tag);
            }
            None if is_void_element(tag) => {
                line.open_tag(tag, attributes.to_html());
            }
            None => {
                return Err(ValidationError::LeafMissingValue {
                    tag: Some(tag.clone()),
                });
            }
        },
        RenderNode::Container {
            tag,
            children,
            attributes,
        } => {
            let tag = tag.as_deref().ok_or(ValidationError::ContainerMissingTag)?;
            let children =
                children
                    .as_deref()
                    .ok_or_else(|| ValidationError::ContainerMissingChildren {
                        tag: tag.to_string(),
                    })?;
            line.open_tag(tag, attributes.to_html());
            for child in children {
                write_node(line, child)?;
            }
            line.close_tag(tag);
        }
    }
    Ok(())
}
