pub mod loyalty;
pub mod resource;
pub mod session;

use std::io::{BufRead, Write};

use anyhow::Result;
use serde::Serialize;

/// Read one trimmed line from stdin after printing `label`.
pub fn prompt(label: &str) -> Result<String> {
    eprint!("{}", label);
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
