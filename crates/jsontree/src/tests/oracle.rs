//! Cross-checks parsed trees against `serde_json` on documents both accept.

use alloc::string::ToString;

use quickcheck::QuickCheck;
use rstest::rstest;
use serde_json::Value;

use crate::{Node, parse};

/// Only canonical `i64` text compares equal: digit text beyond `i64`
/// serializes as a string and `serde_json` reads `-0` as a float.
fn integers_fit(node: &Node) -> bool {
    if node.is_integer() {
        return node.as_i64().is_some_and(|n| n.to_string() == node.value());
    }
    node.iter().all(integers_fit)
}

fn agrees_with_serde_json(text: &str) -> bool {
    let Ok(expected) = serde_json::from_str::<Value>(text) else {
        return true;
    };
    let Ok(root) = parse(text) else {
        return false;
    };
    if !integers_fit(&root) {
        return true;
    }
    serde_json::to_value(&root).is_ok_and(|actual| actual == expected)
}

#[rstest]
#[case(r#"{"a": 1, "b": [true, false, null], "c": {"d": "e"}}"#)]
#[case(r#"[[], {}, [[]], {"": {}}]"#)]
#[case(r#"{"esc": "\"\\\/\b\f\n\r\t", "u": "é😀"}"#)]
#[case(r#"{"dup": 1, "other": 2, "dup": 3}"#)]
#[case("[-9223372036854775808, 9223372036854775807, 0]")]
#[case("  [\n\t1 ,\r\n 2 ]  ")]
fn matches_serde_json(#[case] text: &str) {
    let expected: Value = serde_json::from_str(text).unwrap();
    let actual = serde_json::to_value(parse(text).unwrap()).unwrap();
    assert_eq!(actual, expected, "{text}");
}

#[test]
fn serde_json_oracle_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(tree: Node) -> bool {
        agrees_with_serde_json(&tree.to_string())
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Node) -> bool);
}
