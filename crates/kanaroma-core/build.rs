fn main() {
    // Validate the embedded mora table at compile time.
    validate_json(
        "src/mora/default_mora.json",
        include_str!("src/mora/default_mora.json"),
    );
}

fn is_romanization(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '\'' || c == '-')
}

fn validate_json(path: &str, content: &str) {
    let value: serde_json::Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(e) => panic!("{path} contains invalid JSON: {e}"),
    };
    for (table, key_len) in [("digraphs", 2), ("mono", 1)] {
        let Some(entries) = value.get(table).and_then(|t| t.as_object()) else {
            panic!("{path} is missing the \"{table}\" object");
        };
        for (key, roma) in entries {
            if key.chars().count() != key_len {
                panic!("{path}: [{table}] key {key:?} must be {key_len} character(s)");
            }
            match roma.as_str() {
                Some(s) if is_romanization(s) => {}
                _ => panic!("{path}: [{table}] invalid romanization for {key:?}: {roma}"),
            }
        }
    }
}
