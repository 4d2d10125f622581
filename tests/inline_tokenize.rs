use mdsite::ast::tokenize::{split_delimiter, split_images, split_links};
use mdsite::ast::{Inline, InlineKind, Style, Tokenizer, tokenize};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn bold(t: &str) -> Inline {
    Inline::Bold(t.to_string())
}

fn italic(t: &str) -> Inline {
    Inline::Italic(t.to_string())
}

fn code(t: &str) -> Inline {
    Inline::Code(t.to_string())
}

#[rstest]
#[case("Hello, world!")]
#[case("no special syntax here: ! [ ] ( )")]
#[case("   ")]
fn plain_text_is_identity(#[case] text: &str) {
    assert_eq!(tokenize(text), vec![Inline::plain(text)]);
}

#[test]
fn empty_input_yields_nothing() {
    assert!(tokenize("").is_empty());
}

#[rstest]
#[case("a**b**c", vec![Inline::plain("a"), bold("b"), Inline::plain("c")])]
#[case("**b**", vec![bold("b")])]
#[case("a_b_c", vec![Inline::plain("a"), italic("b"), Inline::plain("c")])]
#[case("x `y` z", vec![Inline::plain("x "), code("y"), Inline::plain(" z")])]
#[case("**a****b**", vec![bold("a"), bold("b")])]
fn delimiters_split(#[case] text: &str, #[case] expected: Vec<Inline>) {
    assert_eq!(tokenize(text), expected);
}

#[rstest]
#[case("a**b")]
#[case("a**b**c**d")]
#[case("one _two three")]
#[case("tick ` only")]
fn unmatched_delimiters_stay_literal(#[case] text: &str) {
    assert_eq!(tokenize(text), vec![Inline::plain(text)]);
}

#[test]
fn delimiters_do_not_nest() {
    assert_eq!(
        tokenize("**bold _not italic_**"),
        vec![bold("bold _not italic_")]
    );
}

#[test]
fn bold_claims_markers_inside_backticks() {
    // bold splits first, leaving each backtick unmatched in its own fragment
    assert_eq!(
        tokenize("`a **b** c`"),
        vec![Inline::plain("`a "), bold("b"), Inline::plain(" c`")]
    );
}

#[test]
fn bold_runs_before_italic() {
    assert_eq!(
        tokenize("**b** and _i_"),
        vec![bold("b"), Inline::plain(" and "), italic("i")]
    );
}

#[test]
fn lone_image() {
    assert_eq!(
        tokenize("![alt](http://x/img.png)"),
        vec![Inline::image("alt", "http://x/img.png")]
    );
}

#[test]
fn lone_link_is_never_an_image() {
    let out = tokenize("[text](http://x)");
    assert_eq!(out, vec![Inline::link("text", "http://x")]);
    assert!(out.iter().all(|f| f.kind() != InlineKind::Image));
}

#[test]
fn images_interleave_with_text() {
    let out = split_images(vec![Inline::plain(
        "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
    )]);
    assert_eq!(
        out,
        vec![
            Inline::plain("This is text with an "),
            Inline::image("image", "https://i.imgur.com/zjjcJKZ.png"),
            Inline::plain(" and another "),
            Inline::image("second image", "https://i.imgur.com/3elNhQu.png"),
        ]
    );
}

#[test]
fn links_interleave_with_text() {
    let out = split_links(vec![Inline::plain(
        "This is text with a link [to boot dev](https://www.boot.dev) and [to youtube](https://www.youtube.com/@bootdotdev) ok",
    )]);
    assert_eq!(
        out,
        vec![
            Inline::plain("This is text with a link "),
            Inline::link("to boot dev", "https://www.boot.dev"),
            Inline::plain(" and "),
            Inline::link("to youtube", "https://www.youtube.com/@bootdotdev"),
            Inline::plain(" ok"),
        ]
    );
}

#[test]
fn link_pass_alone_skips_image_syntax() {
    let input = vec![Inline::plain("![img](a.png)")];
    assert_eq!(split_links(input.clone()), input);
}

#[test]
fn bracket_passes_ignore_typed_fragments() {
    let input = vec![code("[x](y)"), bold("![a](b)")];
    assert_eq!(split_links(split_images(input.clone())), input);
}

#[test]
fn delimiter_pass_ignores_typed_fragments() {
    let input = vec![Inline::link("a**b**", "u")];
    assert_eq!(split_delimiter(input.clone(), "**", Style::Bold), input);
}

#[test]
fn full_pipeline() {
    let text = "This is **text** with an _italic_ word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
    assert_eq!(
        tokenize(text),
        vec![
            Inline::plain("This is "),
            bold("text"),
            Inline::plain(" with an "),
            italic("italic"),
            Inline::plain(" word and a "),
            code("code block"),
            Inline::plain(" and an "),
            Inline::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
            Inline::plain(" and a "),
            Inline::link("link", "https://boot.dev"),
        ]
    );
}

#[test]
fn bracket_syntax_inside_code_stays_code() {
    assert_eq!(
        tokenize("see `[x](y)` here"),
        vec![Inline::plain("see "), code("[x](y)"), Inline::plain(" here")]
    );
}

#[test]
fn tokenizer_is_deterministic() {
    let text = "**a** _b_ `c` ![d](e) [f](g)";
    let t = Tokenizer::default();
    assert_eq!(t.tokenize(text), t.tokenize(text));
}
