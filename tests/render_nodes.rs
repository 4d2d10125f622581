use mdsite::ast::{Attributes, Inline, RenderNode, ValidationError, render_node_from_fragment};
use mdsite::serialize;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn leaf_to_html_p() {
    let node = RenderNode::leaf("p", "Hello, world!");
    assert_eq!(node.to_html().unwrap(), "<p>Hello, world!</p>");
}

#[test]
fn leaf_to_html_bold() {
    assert_eq!(serialize(&RenderNode::leaf("b", "hi")).unwrap(), "<b>hi</b>");
}

#[test]
fn leaf_to_html_no_tag() {
    let node = RenderNode::text("Hello, world!");
    assert_eq!(node.to_html().unwrap(), "Hello, world!");
}

#[test]
fn leaf_to_html_with_props_added_later() {
    let mut node = RenderNode::leaf("p", "Hello, world!");
    node.attributes_mut()
        .insert("class", "text")
        .insert("id", "paragraph");
    assert_eq!(
        node.to_html().unwrap(),
        "<p class=\"text\" id=\"paragraph\">Hello, world!</p>"
    );
}

#[test]
fn leaf_to_html_no_value() {
    let node = RenderNode::Leaf {
        tag: Some("p".to_string()),
        value: None,
        attributes: Attributes::new(),
    };
    assert_eq!(
        node.to_html(),
        Err(ValidationError::LeafMissingValue {
            tag: Some("p".to_string())
        })
    );
}

#[test]
fn container_with_children() {
    let parent = RenderNode::container("div", vec![RenderNode::leaf("span", "child")]);
    assert_eq!(parent.to_html().unwrap(), "<div><span>child</span></div>");
}

#[test]
fn container_with_grandchildren() {
    let child = RenderNode::container("span", vec![RenderNode::leaf("b", "grandchild")]);
    let parent = RenderNode::container("div", vec![child]);
    assert_eq!(
        parent.to_html().unwrap(),
        "<div><span><b>grandchild</b></span></div>"
    );
}

#[test]
fn container_with_props() {
    let parent = RenderNode::container("div", vec![RenderNode::leaf("span", "child")])
        .with_attribute("class", "parent")
        .with_attribute("id", "main");
    assert_eq!(
        parent.to_html().unwrap(),
        "<div class=\"parent\" id=\"main\"><span>child</span></div>"
    );
}

#[test]
fn container_multiple_children_keep_order() {
    let parent = RenderNode::container(
        "div",
        vec![RenderNode::leaf("p", "first"), RenderNode::leaf("p", "second")],
    );
    assert_eq!(
        parent.to_html().unwrap(),
        "<div><p>first</p><p>second</p></div>"
    );
}

#[test]
fn container_empty_children() {
    let parent = RenderNode::container("ul", Vec::new());
    assert_eq!(parent.to_html().unwrap(), "<ul></ul>");
}

#[test]
fn container_no_tag() {
    let parent = RenderNode::Container {
        tag: None,
        children: Some(vec![RenderNode::leaf("p", "text")]),
        attributes: Attributes::new(),
    };
    let err = parent.to_html().unwrap_err();
    assert_eq!(err, ValidationError::ContainerMissingTag);
    assert_eq!(err.to_string(), "Tag must not be null for container node");
}

#[test]
fn container_no_children() {
    let parent = RenderNode::Container {
        tag: Some("div".to_string()),
        children: None,
        attributes: Attributes::new(),
    };
    let err = parent.to_html().unwrap_err();
    assert_eq!(
        err,
        ValidationError::ContainerMissingChildren {
            tag: "div".to_string()
        }
    );
    assert_eq!(err.to_string(), "Children must not be null for container node <div>");
}

#[test]
fn serialize_twice_is_identical() {
    let tree = RenderNode::container(
        "div",
        vec![RenderNode::container("p", vec![RenderNode::text("x")])],
    );
    assert_eq!(serialize(&tree), serialize(&tree));
}

#[rstest]
#[case(Inline::plain("text"), "text")]
#[case(Inline::Bold("text".into()), "<b>text</b>")]
#[case(Inline::Italic("text".into()), "<i>text</i>")]
#[case(Inline::Code("text".into()), "<code>text</code>")]
#[case(Inline::link("text", "https://boot.dev"), "<a href=\"https://boot.dev\">text</a>")]
#[case(Inline::link("text", ""), "<a href=\"\">text</a>")]
#[case(Inline::image("alt text", "https://image.url"), "<img src=\"https://image.url\" alt=\"alt text\">")]
#[case(Inline::image("", ""), "<img src=\"\" alt=\"\">")]
fn fragment_to_html(#[case] fragment: Inline, #[case] expected: &str) {
    let node = render_node_from_fragment(&fragment);
    assert_eq!(node.to_html().unwrap(), expected);
}

#[test]
fn image_node_has_no_value_and_both_attributes() {
    let node = render_node_from_fragment(&Inline::image("a", "b"));
    assert_eq!(node.value(), None);
    assert_eq!(node.attributes().get("src"), Some("b"));
    assert_eq!(node.attributes().get("alt"), Some("a"));
    assert_eq!(node.attributes().len(), 2);
}
