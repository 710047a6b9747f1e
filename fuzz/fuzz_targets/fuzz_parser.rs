#![no_main]

use arbitrary::Arbitrary;
use jsontree::{ParserOptions, parse, parse_with_options};
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value};

/// Deepest nesting of generated values, root wrapper included. Stays below
/// the default `max_depth`, so a rejection is always a real failure.
const MAX_GENERATED_DEPTH: usize = 64;

#[derive(Debug)]
struct ArbitraryValue(Value);

fn arbitrary_value(u: &mut arbitrary::Unstructured<'_>, depth: usize) -> arbitrary::Result<Value> {
    // Containers stop being chosen once the depth budget is spent.
    let choices = if depth >= MAX_GENERATED_DEPTH { 11 } else { 21 };
    let value = match u.choose_index(choices)? {
        0 => Value::Null,
        1 => Value::Bool(u.arbitrary()?),
        2 => Value::Number(i64::arbitrary(u)?.into()),
        3..=10 => Value::String(u.arbitrary()?),
        11..=15 => {
            let elems = u.arbitrary_len::<u8>()?;
            let mut array = Vec::with_capacity(elems);
            for _ in 0..elems {
                array.push(arbitrary_value(u, depth + 1)?);
            }
            Value::Array(array)
        }
        16..=20 => {
            let members = u.arbitrary_len::<u8>()?;
            let mut map = Map::new();
            for _ in 0..members {
                let key: String = u.arbitrary()?;
                map.insert(key, arbitrary_value(u, depth + 1)?);
            }
            Value::Object(map)
        }
        _ => Err(arbitrary::Error::IncorrectFormat)?,
    };
    Ok(value)
}

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        // The root wrapper below adds one more level.
        arbitrary_value(u, 1).map(ArbitraryValue)
    }
}

/// Structured input: a document `serde_json` writes must parse, and
/// serialize back to the same value.
fn structured(data: &[u8]) {
    let Ok(ArbitraryValue(value)) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(data))
    else {
        return;
    };
    let root = match value {
        Value::Array(_) | Value::Object(_) => value,
        scalar => Value::Array(vec![scalar]),
    };
    let text = serde_json::to_string(&root).expect("serialize arbitrary value");

    let options = ParserOptions {
        panic_on_error: true,
        ..ParserOptions::default()
    };
    let tree = parse_with_options(&text, options).expect("serde_json output should parse");
    let back = serde_json::to_value(&tree).expect("serialize tree");
    assert_eq!(back, root, "{text}");
}

/// Unstructured input: any text either fails cleanly or parses to a tree
/// whose rendering parses to the same tree.
fn unstructured(flags: u8, data: &[u8]) {
    let text = String::from_utf8_lossy(data);
    let options = ParserOptions {
        max_depth: 1 + usize::from(flags >> 2),
        decode_escapes: flags & 2 == 0,
        lexeme_capacity: usize::from(flags & 0x0C),
        ..ParserOptions::default()
    };

    let Ok(tree) = parse_with_options(&text, options) else {
        return;
    };
    if !options.decode_escapes {
        return;
    }

    let rendered = tree.to_string();
    let reparsed = parse(&rendered).expect("rendered tree should parse");
    assert_eq!(reparsed, tree, "{rendered}");
    assert_eq!(reparsed.to_string(), rendered);
}

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    if flags & 1 == 0 {
        structured(rest);
    } else {
        unstructured(flags, rest);
    }
});
