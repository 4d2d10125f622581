use crate::ast::inline::inlines_to_nodes;
use crate::ast::node::RenderNode;
use crate::ast::tokenize::Tokenizer;
use pulldown_cmark::HeadingLevel;

/// Block level nodes. Text-bearing variants hold the raw inline source with
/// block markers already stripped; it is tokenized when the block is
/// rendered. Code content is kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Paragraph(String),
    Heading { level: HeadingLevel, text: String },
    Code(String),
    Quote(String),
    UnorderedList(Vec<String>),
    OrderedList(Vec<String>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl Block {
    pub fn block_type(&self) -> BlockType {
        match self {
            Block::Paragraph(_) => BlockType::Paragraph,
            Block::Heading { .. } => BlockType::Heading,
            Block::Code(_) => BlockType::Code,
            Block::Quote(_) => BlockType::Quote,
            Block::UnorderedList(_) => BlockType::UnorderedList,
            Block::OrderedList(_) => BlockType::OrderedList,
        }
    }
}

pub fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

fn text_to_children(text: &str, tokenizer: &Tokenizer) -> Vec<RenderNode> {
    inlines_to_nodes(&tokenizer.tokenize(text))
}

fn list_to_node(tag: &str, items: &[String], tokenizer: &Tokenizer) -> RenderNode {
    let items = items
        .iter()
        .map(|item| RenderNode::container("li", text_to_children(item, tokenizer)))
        .collect();
    RenderNode::container(tag, items)
}

/// Convert a `Block` into its container `RenderNode`.
pub fn block_to_node(b: &Block, tokenizer: &Tokenizer) -> RenderNode {
    match b {
        Block::Paragraph(text) => RenderNode::container("p", text_to_children(text, tokenizer)),
        Block::Heading { level, text } => {
            RenderNode::container(heading_tag(*level), text_to_children(text, tokenizer))
        }
        // code is never tokenized
        Block::Code(content) => {
            RenderNode::container("pre", vec![RenderNode::leaf("code", content.clone())])
        }
        Block::Quote(text) => {
            RenderNode::container("blockquote", text_to_children(text, tokenizer))
        }
        Block::UnorderedList(items) => list_to_node("ul", items, tokenizer),
        Block::OrderedList(items) => list_to_node("ol", items, tokenizer),
    }
}
