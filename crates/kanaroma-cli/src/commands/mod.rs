macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod resource_ops;
pub mod romaji_ops;

use std::io::{self, BufRead};

/// The texts given on the command line, or one per stdin line when none
/// were given.
pub(crate) fn collect_inputs(texts: &[String]) -> Vec<String> {
    if !texts.is_empty() {
        return texts.to_vec();
    }
    let stdin = io::stdin();
    stdin
        .lock()
        .lines()
        .map(|line| die!(line, "Error reading stdin: {}"))
        .collect()
}
