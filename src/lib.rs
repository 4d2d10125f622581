//! # mdsite
//!
//! Converts a restricted Markdown dialect into a validated HTML element tree
//! and renders whole directories of pages through an HTML template.
//!
//! The core is two pieces: the inline tokenizer in [`ast::tokenize`], which
//! turns a span of text into typed [`ast::Inline`] fragments, and the
//! [`ast::RenderNode`] tree with its serializer in [`ast::writer`]. Block
//! segmentation ([`ast::parse`]) and page generation ([`site`]) sit around it.

pub mod ast;
pub mod site;
pub mod text;

pub use ast::{
    Inline, RenderNode, ValidationError, extract_title, markdown_to_html, markdown_to_html_node,
    render_node_from_fragment, serialize, tokenize,
};
pub use text::{Fragment, Line, Region};
