pub mod block;
pub mod inline;
pub mod node;
pub mod parse;
pub mod tokenize;
pub mod writer;

pub use block::{Block, BlockType, block_to_node};
pub use inline::{Inline, InlineKind, Style, inline_to_node, inlines_to_nodes};
pub use node::{Attributes, RenderNode, ValidationError};
pub use parse::{
    classify_block, extract_title, markdown_to_html, markdown_to_html_node,
    markdown_to_html_node_with, parse_markdown_to_blocks, segment_blocks,
};
pub use tokenize::{DEFAULT_STEPS, Step, Tokenizer, tokenize};
pub use writer::serialize;

/// Map one inline fragment to the leaf node that renders it.
pub fn render_node_from_fragment(fragment: &Inline) -> RenderNode {
    inline_to_node(fragment)
}
