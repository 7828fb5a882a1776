use std::path::Path;
use std::process;

use kanaroma_core::resources::{ResourceStatus, Resources};

pub fn check_cmd(dir: &str) {
    let base = Path::new(dir);
    let status = ResourceStatus::scan(base);
    println!("{status}");

    if !status.is_complete() {
        eprintln!("Missing: {}", status.missing().join(", "));
        process::exit(1);
    }

    let resources = die!(Resources::load(base), "Error: {}");
    println!(
        "OK: {} mora entries, {} replacement rules",
        resources.mora_map.len(),
        resources.rules.len()
    );
}
