//! Loader for `.properties` files
//!
//! Supports the line-oriented subset used by job property files: `#`/`!` comments,
//! `=`, `:` or whitespace separators, backslash line continuations, the common
//! escapes and `\uXXXX` code units.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

/// Read and parse a properties file
pub fn load(path: &Path) -> Result<HashMap<String, String>> {
    log::debug!("Loading properties from: {:?}", path);

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read properties file: {:?}", path))?;
    let props = parse(&content);

    log::info!("Loaded {} properties from {:?}", props.len(), path);
    Ok(props)
}

/// Parse properties text. Later keys override earlier ones.
pub fn parse(content: &str) -> HashMap<String, String> {
    let mut props = HashMap::new();
    let mut lines = content.lines();

    while let Some(line) = lines.next() {
        let mut logical = line.trim_start().to_string();
        if logical.is_empty() || logical.starts_with('#') || logical.starts_with('!') {
            continue;
        }

        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some(next) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        props.insert(key, value);
    }

    props
}

/// An odd number of trailing backslashes joins the next line
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (String, String) {
    let mut key = String::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => push_escaped(&mut chars, &mut key),
            '=' | ':' => break,
            c if c.is_whitespace() => {
                // whitespace may be followed by an explicit separator
                while chars.peek().is_some_and(|c| c.is_whitespace()) {
                    chars.next();
                }
                if matches!(chars.peek(), Some('=') | Some(':')) {
                    chars.next();
                }
                break;
            }
            c => key.push(c),
        }
    }

    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }

    let mut value = String::new();
    while let Some(c) = chars.next() {
        if c == '\\' {
            push_escaped(&mut chars, &mut value);
        } else {
            value.push(c);
        }
    }

    (key, value)
}

/// Decode the escape following a backslash into `out`
fn push_escaped(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    match chars.next() {
        Some('t') => out.push('\t'),
        Some('n') => out.push('\n'),
        Some('r') => out.push('\r'),
        Some('f') => out.push('\u{000C}'),
        Some('u') => push_unicode(chars, out),
        Some(other) => out.push(other),
        None => {}
    }
}

/// Decode `XXXX` after `\u`, joining a surrogate pair written as two escapes
fn push_unicode(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    let Some(unit) = read_code_unit(chars) else {
        log::warn!("Malformed \\uXXXX escape in properties, keeping it literally");
        out.push('u');
        return;
    };

    let mut units = vec![unit];
    if (0xD800..0xDC00).contains(&unit) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            if let Some(low) = read_code_unit(&mut lookahead).filter(|u| (0xDC00..0xE000).contains(u)) {
                units.push(low);
                *chars = lookahead;
            }
        }
    }

    for decoded in char::decode_utf16(units) {
        out.push(decoded.unwrap_or_else(|err| {
            log::warn!(
                "Unpaired surrogate \\u{:04X} in properties, replaced",
                err.unpaired_surrogate()
            );
            char::REPLACEMENT_CHARACTER
        }));
    }
}

/// Four hex digits, consumed only when all are present
fn read_code_unit(chars: &mut Peekable<Chars<'_>>) -> Option<u16> {
    let digits: String = chars.clone().take(4).collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let unit = u16::from_str_radix(&digits, 16).ok()?;
    chars.nth(3);
    Some(unit)
}
