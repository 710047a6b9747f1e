//! Parses a JSON document and prints every node, one per line.
//!
//! ```text
//! cargo run --example walk_tree -- path/to/document.json
//! ```
//!
//! Without an argument a small built-in document is used. Parser events are
//! logged to stderr at `debug` level.
#![allow(missing_docs)]

use std::{env, fs, process::ExitCode};

use jsontree::{Node, parse};

const SAMPLE: &str = r#"{
    "name": "sensor-7",
    "online": true,
    "readings": [12, -3, 40],
    "location": {"room": "lab", "floor": 2},
    "owner": null
}"#;

fn walk(node: &Node, depth: usize) {
    let indent = "    ".repeat(depth);
    if node.is_composite() {
        println!("{indent}{:?} : {} ({} children)", node.key(), node.json_type(), node.len());
        for child in node {
            walk(child, depth + 1);
        }
    } else {
        println!("{indent}{:?} : {} = {}", node.key(), node.json_type(), node.value());
    }
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .try_init();

    let text = match env::args().nth(1) {
        Some(path) => match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("cannot read {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => SAMPLE.to_owned(),
    };

    match parse(&text) {
        Ok(root) => {
            walk(&root, 0);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("parse error: {err}");
            ExitCode::FAILURE
        }
    }
}
