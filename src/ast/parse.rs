use crate::ast::block::{Block, block_to_node};
use crate::ast::node::{RenderNode, ValidationError};
use crate::ast::tokenize::Tokenizer;
use crate::text::Region;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser};

/// Split a document into the source text of its top-level blocks.
///
/// pulldown-cmark decides where blocks begin and end; only the byte range of
/// each depth-0 element is kept. Text the parser consumes without an event
/// (link reference definitions) is split on blank lines and kept as well.
/// Slices are trimmed and empty ones dropped.
pub fn segment_blocks(markdown: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut covered = 0usize;

    for (event, range) in Parser::new_ext(markdown, Options::empty()).into_offset_iter() {
        let top_level = match event {
            Event::Start(_) => {
                depth += 1;
                depth == 1
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                false
            }
            // rules and stray html at the top level
            _ => depth == 0,
        };
        if !top_level {
            continue;
        }
        if range.start > covered {
            push_uncovered(&markdown[covered..range.start], &mut out);
        }
        push_trimmed(&markdown[range.clone()], &mut out);
        covered = covered.max(range.end);
    }
    if covered < markdown.len() {
        push_uncovered(&markdown[covered..], &mut out);
    }
    out
}

fn push_trimmed<'a>(source: &'a str, out: &mut Vec<&'a str>) {
    let source = source.trim();
    if !source.is_empty() {
        out.push(source);
    }
}

/// Push each blank-line separated run of `gap` as its own segment.
fn push_uncovered<'a>(gap: &'a str, out: &mut Vec<&'a str>) {
    let mut offset = 0;
    let mut run_start = None;
    for line in gap.split_inclusive('\n') {
        if line.trim().is_empty() {
            if let Some(start) = run_start.take() {
                push_trimmed(&gap[start..offset], out);
            }
        } else if run_start.is_none() {
            run_start = Some(offset);
        }
        offset += line.len();
    }
    if let Some(start) = run_start {
        push_trimmed(&gap[start..], out);
    }
}

/// Classify one block's source with the restricted dialect rules and strip
/// its markers.
pub fn classify_block(source: &str) -> Block {
    if let Some(content) = code_content(source) {
        return Block::Code(content.to_string());
    }
    if let Some((level, text)) = heading(source) {
        return Block::Heading {
            level,
            text: text.to_string(),
        };
    }

    let region = Region::from_str(source).without_blank_lines();

    if let Some(quote) = region.strip_prefix_each_line(|_| ">".to_string()) {
        return Block::Quote(quote.trim_each_line().without_blank_lines().join(" "));
    }
    if region.all_lines(|_, l| l.starts_with("* ") || l.starts_with("- ")) {
        let items = region.lines().map(|l| l[2..].trim().to_string()).collect();
        return Block::UnorderedList(items);
    }
    if let Some(items) = region.strip_prefix_each_line(|i| format!("{}. ", i + 1)) {
        if !items.is_empty() {
            return Block::OrderedList(items.trim_each_line().into_lines());
        }
    }

    Block::Paragraph(region.trim_each_line().join(" "))
}

/// Body of a fenced code block: everything after the opening fence line, up
/// to a closing fence of the same length.
fn code_content(source: &str) -> Option<&str> {
    let fence_len = source.bytes().take_while(|b| *b == b'`').count();
    if fence_len < 3 {
        return None;
    }
    let fence = &source[..fence_len];
    let inner = source[fence_len..].strip_suffix(fence)?;
    Some(match inner.split_once('\n') {
        Some((_info, body)) => body,
        None => inner,
    })
}

fn heading(source: &str) -> Option<(HeadingLevel, &str)> {
    let hashes = source.bytes().take_while(|b| *b == b'#').count();
    let level = HeadingLevel::try_from(hashes).ok()?;
    let text = source[hashes..].strip_prefix(' ')?;
    Some((level, text.trim()))
}

pub fn parse_markdown_to_blocks(markdown: &str) -> Vec<Block> {
    segment_blocks(markdown)
        .into_iter()
        .map(|source| {
            let block = classify_block(source);
            log::debug!("classified {:?} block", block.block_type());
            block
        })
        .collect()
}

/// Build the root `div` for a document using the given tokenizer.
pub fn markdown_to_html_node_with(markdown: &str, tokenizer: &Tokenizer) -> RenderNode {
    let children = parse_markdown_to_blocks(markdown)
        .iter()
        .map(|b| block_to_node(b, tokenizer))
        .collect();
    RenderNode::container("div", children)
}

pub fn markdown_to_html_node(markdown: &str) -> RenderNode {
    markdown_to_html_node_with(markdown, &Tokenizer::default())
}

pub fn markdown_to_html(markdown: &str) -> Result<String, ValidationError> {
    markdown_to_html_node(markdown).to_html()
}

/// The text of the first `# ` heading line.
pub fn extract_title(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .find_map(|l| l.strip_prefix("# "))
        .map(|t| t.trim().to_string())
}
