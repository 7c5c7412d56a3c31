//! # Parameter File Parser
//!
//! Line-oriented parser for parameter files.
//!
//! ## Grammar
//!
//! ```text
//! definition := type ':' key '=' value
//! type       := 's' | 'd' | 'u' | 'i' | 'b'
//! value      := '"' text '"'            (s)
//!             | number unit             (d)
//!             | number                  (u, i)
//!             | 'True' | 'False'        (b, quotes optional, case-insensitive)
//! ```
//!
//! `#` starts a comment unless it appears inside a quoted string.
//!
//! ## Example
//!
//! ```rust
//! use csg_params::parse_parameters;
//!
//! let defs = parse_parameters("d:Ge/Shape/RelRotZ = 90 deg # quarter turn").unwrap();
//! assert_eq!(defs.len(), 1);
//! assert_eq!(defs[0].key, "Ge/Shape/RelRotZ");
//! ```

use crate::error::ParameterError;
use crate::unit::Unit;
use crate::value::ParameterValue;

// =============================================================================
// DEFINITION
// =============================================================================

/// One parsed `type:key = value` line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDefinition {
    /// Fully-qualified parameter key.
    pub key: String,
    /// Parsed value in internal units.
    pub value: ParameterValue,
    /// 1-based source line.
    pub line: usize,
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parses every definition in a parameter file.
///
/// ## Parameters
///
/// - `source`: Parameter file contents
///
/// ## Returns
///
/// Definitions in source order. Later duplicates are kept; the store
/// decides which one wins.
pub fn parse_parameters(source: &str) -> Result<Vec<ParameterDefinition>, ParameterError> {
    let mut definitions = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let content = strip_comment(raw).trim();
        if content.is_empty() {
            continue;
        }
        definitions.push(parse_definition(content, line)?);
    }

    Ok(definitions)
}

// =============================================================================
// LINE PARSING
// =============================================================================

/// Removes a trailing `#` comment that is not inside quotes.
fn strip_comment(line: &str) -> &str {
    let mut in_quotes = false;
    for (idx, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '#' if !in_quotes => return &line[..idx],
            _ => {}
        }
    }
    line
}

fn parse_definition(content: &str, line: usize) -> Result<ParameterDefinition, ParameterError> {
    let (lhs, rhs) = content
        .split_once('=')
        .ok_or_else(|| ParameterError::syntax(line, "expected '=' between key and value"))?;

    let (type_tag, key) = lhs
        .split_once(':')
        .ok_or_else(|| ParameterError::syntax(line, "expected '<type>:<key>' before '='"))?;

    let type_tag = type_tag.trim();
    let key = key.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return Err(ParameterError::syntax(
            line,
            format!("invalid parameter key '{}'", key),
        ));
    }

    let value = parse_value(type_tag, rhs.trim(), line)?;

    Ok(ParameterDefinition {
        key: key.to_string(),
        value,
        line,
    })
}

fn parse_value(type_tag: &str, text: &str, line: usize) -> Result<ParameterValue, ParameterError> {
    match type_tag {
        "s" => parse_quoted(text, line).map(ParameterValue::String),
        "d" => parse_dimensioned(text, line),
        "u" => parse_single_token(text, line)?
            .parse::<f64>()
            .map(ParameterValue::Unitless)
            .map_err(|_| ParameterError::syntax(line, format!("invalid number '{}'", text))),
        "i" => parse_single_token(text, line)?
            .parse::<i64>()
            .map(ParameterValue::Integer)
            .map_err(|_| ParameterError::syntax(line, format!("invalid integer '{}'", text))),
        "b" => parse_boolean(text, line).map(ParameterValue::Boolean),
        other => Err(ParameterError::syntax(
            line,
            format!("unsupported parameter type '{}'", other),
        )),
    }
}

fn parse_quoted(text: &str, line: usize) -> Result<String, ParameterError> {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        let inner = &text[1..text.len() - 1];
        if !inner.contains('"') {
            return Ok(inner.to_string());
        }
    }
    Err(ParameterError::syntax(
        line,
        format!("expected a double-quoted string, found '{}'", text),
    ))
}

fn parse_dimensioned(text: &str, line: usize) -> Result<ParameterValue, ParameterError> {
    let mut tokens = text.split_whitespace();

    let number = tokens
        .next()
        .ok_or_else(|| ParameterError::syntax(line, "missing value"))?;
    let value: f64 = number
        .parse()
        .map_err(|_| ParameterError::syntax(line, format!("invalid number '{}'", number)))?;

    let symbol = tokens
        .next()
        .ok_or_else(|| ParameterError::syntax(line, "dimensioned value requires a unit"))?;
    let unit = Unit::from_symbol(symbol).ok_or_else(|| ParameterError::UnknownUnit {
        line,
        unit: symbol.to_string(),
    })?;

    if let Some(extra) = tokens.next() {
        return Err(ParameterError::syntax(
            line,
            format!("unexpected token '{}' after unit", extra),
        ));
    }

    Ok(ParameterValue::Double {
        value: unit.to_internal(value),
        category: unit.category(),
    })
}

fn parse_single_token(text: &str, line: usize) -> Result<&str, ParameterError> {
    let mut tokens = text.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => Ok(token),
        (None, _) => Err(ParameterError::syntax(line, "missing value")),
        (Some(_), Some(extra)) => Err(ParameterError::syntax(
            line,
            format!("unexpected token '{}'", extra),
        )),
    }
}

fn parse_boolean(text: &str, line: usize) -> Result<bool, ParameterError> {
    let token = parse_single_token(text, line)?;
    let unquoted = token.trim_matches('"');
    if unquoted.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if unquoted.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ParameterError::syntax(
            line,
            format!("invalid boolean '{}'", token),
        ))
    }
}

// =============================================================================
// TESTS
// =============================================================================
