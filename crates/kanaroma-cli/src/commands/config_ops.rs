use std::path::Path;

use kanaroma_core::mora::{default_json, load_mora_map};

pub fn mapping_export() {
    print!("{}", default_json());
}

pub fn mapping_validate(file: &str) {
    let map = die!(load_mora_map(Path::new(file)), "Error: {}");
    println!(
        "OK: {} digraphs, {} mono",
        map.digraphs.len(),
        map.mono.len()
    );
}
