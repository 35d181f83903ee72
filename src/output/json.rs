//
//  community-sdk
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! | Function | Description | Use Case |
//! |----------|-------------|----------|
//! | [`write_json`] | Pretty-printed JSON | Human-readable output |
//! | [`write_json_compact`] | Minified JSON | Piping to other tools |
//! | [`write_json_lines`] | One JSON object per line | Large activity exports |

use std::io::{self, Write};

use serde::Serialize;

/// Writes a value as pretty-printed JSON to stdout.
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value)
}

/// Writes a value as pretty-printed JSON, followed by a newline, to `writer`.
pub fn write_json_to<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes a value as minified JSON to stdout.
pub fn write_json_compact<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Writes each value as one compact JSON document per line to `writer`.
pub fn write_json_lines_to<W: Write, T: Serialize>(
    writer: &mut W,
    values: &[T],
) -> anyhow::Result<()> {
    for value in values {
        serde_json::to_writer(&mut *writer, value)?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes each value as one compact JSON document per line to stdout.
pub fn write_json_lines<T: Serialize>(values: &[T]) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json_lines_to(&mut handle, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_json_to_buffer() {
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &json!({"key": "value"})).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("\"key\": \"value\""));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_json_lines() {
        let mut buffer = Vec::new();
        write_json_lines_to(&mut buffer, &[json!({"a": 1}), json!({"a": 2})]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "{\"a\":1}\n{\"a\":2}\n");
    }
}
