#![allow(missing_docs)]
#![allow(dead_code)]

pub const CATALOG: &str = r#"
{
    "store": "north",
    "open": true,
    "manager": null,
    "shelves": [
        {
            "id": 1,
            "items": ["tea", "coffee"]
        },
        {
            "id": 2,
            "items": []
        }
    ],
    "stock": {
        "tea": 40,
        "coffee": -3
    }
}
"#;
