use alloc::{
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};

use rstest::rstest;

use crate::{JsonType, Node, ParserOptions, ROOT_KEY, parse, parse_with_options};

fn strict() -> ParserOptions {
    ParserOptions {
        panic_on_error: true,
        ..ParserOptions::default()
    }
}

fn parse_strict(text: &str) -> Node {
    parse_with_options(text, strict()).unwrap()
}

#[test]
fn object_with_one_of_each_terminal() {
    let root = parse_strict(r#"{"s": "x", "i": 42, "t": true, "f": false, "n": null}"#);

    assert_eq!(root.key(), ROOT_KEY);
    assert_eq!(root.json_type(), JsonType::Object);
    assert_eq!(root.len(), 5);

    let seen: Vec<_> = root
        .iter()
        .map(|child| (child.key(), child.json_type(), child.value()))
        .collect();
    assert_eq!(
        seen,
        vec![
            ("s", JsonType::String, "x"),
            ("i", JsonType::Integer, "42"),
            ("t", JsonType::Boolean, "true"),
            ("f", JsonType::Boolean, "false"),
            ("n", JsonType::Null, "null"),
        ]
    );
}

#[test]
fn array_root_with_nested_containers() {
    let root = parse_strict(r#"[1, [2, 3], {"k": [ ]}, "four"]"#);

    assert_eq!(root.json_type(), JsonType::Array);
    assert_eq!(root.len(), 4);
    assert_eq!(root[0].value(), "1");
    assert_eq!(root[1].len(), 2);
    assert_eq!(root[1][1].value(), "3");
    assert!(root[2].is_object());
    assert_eq!(root[2][0].key(), "k");
    assert!(root[2][0].is_array() && root[2][0].is_empty());
    assert_eq!(root[3].value(), "four");
}

#[test]
fn array_elements_have_empty_keys() {
    let root = parse_strict(r#"{"list": [true, {"a": null}, "x"]}"#);
    let list = &root[0];
    assert_eq!(list.key(), "list");
    assert!(list.iter().all(|child| child.key().is_empty()));
    assert_eq!(list[1][0].key(), "a");
}

/// Pre-order listing of a tree: depth, key, kind, value and size per node.
fn outline(node: &Node, depth: usize, out: &mut Vec<(usize, String, JsonType, String, usize)>) {
    out.push((
        depth,
        node.key().to_string(),
        node.json_type(),
        node.value().to_string(),
        node.len(),
    ));
    for child in node {
        outline(child, depth + 1, out);
    }
}

#[rstest]
#[case::single_member(
    r#"{"k":"v"}"#,
    vec![
        (0, ROOT_KEY, JsonType::Object, "", 1),
        (1, "k", JsonType::String, "v", 1),
    ]
)]
#[case::integer_array(
    "[1,2,3]",
    vec![
        (0, ROOT_KEY, JsonType::Array, "", 3),
        (1, "", JsonType::Integer, "1", 1),
        (1, "", JsonType::Integer, "2", 1),
        (1, "", JsonType::Integer, "3", 1),
    ]
)]
#[case::nested_object(
    r#"{"a":{"b":1}}"#,
    vec![
        (0, ROOT_KEY, JsonType::Object, "", 1),
        (1, "a", JsonType::Object, "", 1),
        (2, "b", JsonType::Integer, "1", 1),
    ]
)]
fn document_shapes(
    #[case] input: &str,
    #[case] expected: Vec<(usize, &str, JsonType, &str, usize)>,
) {
    let root = parse_strict(input);
    let mut actual = Vec::new();
    outline(&root, 0, &mut actual);

    let expected: Vec<_> = expected
        .into_iter()
        .map(|(depth, key, kind, value, len)| (depth, key.to_string(), kind, value.to_string(), len))
        .collect();
    assert_eq!(actual, expected, "{input}");
}

#[test]
fn parsing_twice_gives_equal_trees() {
    let text = r#"{"id": 7, "tags": ["a", "b\n"], "owner": {"name": "ada", "admin": false}, "none": null, "rows": [[1, -2], []]}"#;
    let first = parse_strict(text);
    let second = parse_strict(text);
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn children_keep_source_order_around_nested_containers() {
    let root = parse_strict(r#"{"a": 1, "b": {"c": [2, {"d": 3}], "e": 4}, "f": 5}"#);
    let keys: Vec<_> = root.iter().map(Node::key).collect();
    assert_eq!(keys, vec!["a", "b", "f"]);

    let inner: Vec<_> = root[1].iter().map(Node::key).collect();
    assert_eq!(inner, vec!["c", "e"]);
    assert_eq!(root[1][0][1][0].key(), "d");
    assert_eq!(root[1][1].value(), "4");
    assert!(root[1][0][0].children().is_empty());
}

#[rstest]
#[case::empty_object("{}", JsonType::Object)]
#[case::empty_array("[]", JsonType::Array)]
#[case::padded_object(" \t\r\n{ \n } \n", JsonType::Object)]
#[case::padded_array("\u{b}[\u{c}]", JsonType::Array)]
fn empty_roots(#[case] input: &str, #[case] kind: JsonType) {
    let root = parse_strict(input);
    assert_eq!(root.json_type(), kind);
    assert!(root.is_empty());
    assert_eq!(root.len(), 0);
    assert_eq!(root.key(), ROOT_KEY);
}

#[rstest]
#[case("[0]", "0")]
#[case("[-7]", "-7")]
#[case("[007]", "007")]
#[case("[123456789012345678901234567890]", "123456789012345678901234567890")]
fn integers_keep_their_text(#[case] input: &str, #[case] digits: &str) {
    let root = parse_strict(input);
    assert!(root[0].is_integer());
    assert_eq!(root[0].value(), digits);
}

#[test]
fn member_order_and_duplicates_are_kept() {
    let root = parse_strict(r#"{"b": 1, "a": 2, "b": 3}"#);
    let keys: Vec<_> = root.iter().map(Node::key).collect();
    assert_eq!(keys, vec!["b", "a", "b"]);
    assert_eq!(root.find("b").map(Node::value), Some("1"));
}

#[test]
fn empty_key_and_empty_string() {
    let root = parse_strict(r#"{"": ""}"#);
    assert_eq!(root[0].key(), "");
    assert!(root[0].is_string());
    assert_eq!(root[0].value(), "");
}

#[test]
fn keys_and_values_are_decoded() {
    let root = parse_strict(r#"{"tab\tkey": "café \"quoted\" 😀"}"#);
    assert_eq!(root[0].key(), "tab\tkey");
    assert_eq!(root[0].value(), "café \"quoted\" 😀");
}

#[test]
fn raw_escapes_when_decoding_is_off() {
    let options = ParserOptions {
        decode_escapes: false,
        ..strict()
    };
    let root = parse_with_options(r#"["a\nb", "\u0041"]"#, options).unwrap();
    assert_eq!(root[0].value(), r"a\nb");
    assert_eq!(root[1].value(), r"\u0041");
}

#[test]
fn multibyte_text_passes_through() {
    let root = parse_strict(r#"{"ключ": "значение", "emoji": "👍🏽"}"#);
    assert_eq!(root[0].key(), "ключ");
    assert_eq!(root[0].value(), "значение");
    assert_eq!(root[1].value(), "👍🏽");
}

#[test]
fn deep_nesting_within_the_limit() {
    let depth = ParserOptions::default().max_depth;
    let text = "[".repeat(depth) + &"]".repeat(depth);
    let root = parse(&text).unwrap();

    let mut node = &root;
    let mut levels = 1;
    while let Some(child) = node.get(0) {
        node = child;
        levels += 1;
    }
    assert_eq!(levels, depth);
}

#[test]
fn tiny_lexeme_capacity_still_parses_long_strings() {
    let options = ParserOptions {
        lexeme_capacity: 0,
        ..strict()
    };
    let long = "x".repeat(1_000);
    let root = parse_with_options(&format!("[\"{long}\"]"), options).unwrap();
    assert_eq!(root[0].value(), long);
}

#[test]
fn display_reparses_to_the_same_tree() {
    let text = r#"{ "a" : [ 1 , -2 , { } ] , "b" : "q\"\\" , "c" : null }"#;
    let root = parse_strict(text);
    let rendered = root.to_string();
    assert_eq!(rendered, r#"{"a":[1,-2,{}],"b":"q\"\\","c":null}"#);
    assert_eq!(parse_strict(&rendered), root);
}

#[test]
fn root_traversal_visits_every_node() {
    fn count(node: &Node) -> usize {
        1 + node.iter().map(count).sum::<usize>()
    }

    let root = parse_strict(r#"{"a": [1, 2, {"b": [true]}], "c": {}}"#);
    // root, a, 1, 2, {b}, b, true, c
    assert_eq!(count(&root), 8);

    let mut via_into_iter = 0;
    for child in &root {
        via_into_iter += 1;
        assert!(child.is_composite());
    }
    assert_eq!(via_into_iter, 2);
}
