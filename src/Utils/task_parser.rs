//! Parser for small task documents such as
//!
//! ```text
//! // solver settings
//! solver tolerance: 1e-8 max_iterations: 200
//! logging loglevel: warn log_to_file: false
//! ```
//!
//! A document is a sequence of sections. Each section is a title followed by
//! `key: value[, value...]` pairs. Lines starting with `//`, `#`, `%` or `;` are comments.
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::{map, recognize},
    multi::{many0, many1, separated_list1},
    sequence::{delimited, pair, separated_pair, terminated},
};
use std::collections::HashMap;
use std::fmt;

pub type SectionMap = HashMap<String, Vec<Value>>;
pub type DocumentMap = HashMap<String, SectionMap>;

/// A single value; the narrowest type that parses wins (integer, float, bool, string).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Float(f64),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    pub fn as_string(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Integers are accepted where a float is expected.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Float(val) => write!(f, "{}", val),
            Value::Integer(val) => write!(f, "{}", val),
            Value::Boolean(val) => write!(f, "{}", val),
        }
    }
}

/// identifier: letter or `_`, then letters, digits, `_`
fn identifier(input: &str) -> IResult<&str, String> {
    map(
        recognize(pair(
            alt((alpha1, tag("_"))),
            many0(alt((alphanumeric1, tag("_")))),
        )),
        String::from,
    )
    .parse(input)
}

pub(crate) fn parse_title(input: &str) -> IResult<&str, String> {
    let (input, title) = identifier(input)?;
    Ok((input.trim_start(), title))
}

pub(crate) fn parse_key(input: &str) -> IResult<&str, String> {
    identifier(input)
}

pub(crate) fn parse_value(input: &str) -> IResult<&str, Value> {
    map(
        take_while1(|c: char| !matches!(c, ',' | ' ' | '\t' | '\n' | '\r' | ';')),
        |s: &str| {
            if let Ok(val) = s.parse::<i64>() {
                Value::Integer(val)
            } else if let Ok(val) = s.parse::<f64>() {
                Value::Float(val)
            } else if let Ok(val) = s.parse::<bool>() {
                Value::Boolean(val)
            } else {
                Value::String(s.to_string())
            }
        },
    )
    .parse(input)
}

pub(crate) fn parse_value_list(input: &str) -> IResult<&str, Vec<Value>> {
    let (input, _) = multispace0(input)?;
    separated_list1(delimited(space0, tag(","), space0), parse_value).parse(input)
}

pub(crate) fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Vec<Value>)> {
    let (input, pair) = separated_pair(
        parse_key,
        delimited(space0, tag(":"), space0),
        parse_value_list,
    )
    .parse(input)?;
    Ok((input.trim_start(), pair))
}

pub(crate) fn parse_section(input: &str) -> IResult<&str, (String, SectionMap)> {
    let (input, _) = space0(input)?;
    let (input, title) = parse_title(input)?;
    let (input, _) = multispace0(input)?;
    let (input, pairs) = many1(terminated(parse_key_value_pair, space0)).parse(input)?;
    Ok((input, (title, pairs.into_iter().collect())))
}

/// Drops comment lines and blank lines.
pub fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !(trimmed.is_empty()
                || trimmed.starts_with("//")
                || trimmed.starts_with('#')
                || trimmed.starts_with('%')
                || trimmed.starts_with(';'))
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// nom entry point: one or more sections. A repeated section title merges into the
/// earlier one; a repeated key keeps the last value list.
pub fn parse_document(input: &str) -> IResult<&str, DocumentMap> {
    let (input, sections) =
        many1(delimited(multispace0, parse_section, multispace0)).parse(input)?;
    let mut document: DocumentMap = HashMap::new();
    for (title, section) in sections {
        document.entry(title).or_default().extend(section);
    }
    Ok((input, document))
}

/// Parses a whole document, comments included. Blank input gives an empty map; any
/// text left unparsed is an error.
pub fn parse_task_document(input: &str) -> Result<DocumentMap, String> {
    let filtered = filter_comments(input);
    if filtered.trim().is_empty() {
        return Ok(HashMap::new());
    }
    match parse_document(&filtered) {
        Ok((remaining, document)) => {
            if remaining.trim().is_empty() {
                Ok(document)
            } else {
                Err(format!(
                    "failed to parse entire document, remaining: '{}'",
                    remaining.trim()
                ))
            }
        }
        Err(e) => Err(format!("parsing error: {:?}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title() {
        let (remaining, title) = parse_title("solver\n tolerance: 1e-6").unwrap();
        assert_eq!(title, "solver");
        assert_eq!(remaining, "tolerance: 1e-6");

        let (remaining, title) = parse_title("_section2 key: 1").unwrap();
        assert_eq!(title, "_section2");
        assert_eq!(remaining, "key: 1");

        assert!(parse_title("1section").is_err());
    }

    #[test]
    fn test_parse_key() {
        let (remaining, key) = parse_key("max_iterations: 10").unwrap();
        assert_eq!(key, "max_iterations");
        assert_eq!(remaining, ": 10");
    }

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("200 next").unwrap(), (" next", Value::Integer(200)));
        assert_eq!(parse_value("1e-8, 2").unwrap(), (", 2", Value::Float(1e-8)));
        assert_eq!(parse_value("-0.5").unwrap(), ("", Value::Float(-0.5)));
        assert_eq!(parse_value("false").unwrap(), ("", Value::Boolean(false)));
        assert_eq!(
            parse_value("warn\nlogging").unwrap(),
            ("\nlogging", Value::String("warn".to_string()))
        );
    }

    #[test]
    fn test_parse_value_list() {
        let (remaining, values) = parse_value_list("1, 2.5 ,three next").unwrap();
        assert_eq!(
            values,
            vec![
                Value::Integer(1),
                Value::Float(2.5),
                Value::String("three".to_string())
            ]
        );
        assert_eq!(remaining, " next");
    }

    #[test]
    fn test_parse_key_value_pair() {
        let (remaining, (key, values)) =
            parse_key_value_pair("tolerance : 1e-6 max_iterations: 5").unwrap();
        assert_eq!(key, "tolerance");
        assert_eq!(values, vec![Value::Float(1e-6)]);
        assert_eq!(remaining, "max_iterations: 5");
    }

    #[test]
    fn test_parse_section_stops_at_next_title() {
        let (remaining, (title, section)) =
            parse_section("solver tolerance: 1e-6 max_iterations: 5\nlogging loglevel: info")
                .unwrap();
        assert_eq!(title, "solver");
        assert_eq!(section.len(), 2);
        assert_eq!(section["max_iterations"], vec![Value::Integer(5)]);
        assert_eq!(remaining, "logging loglevel: info");
    }

    #[test]
    fn test_filter_comments() {
        let text = "// header\nsolver a: 1\n# note\n\n% tex style\n; ini style\nlogging b: 2";
        assert_eq!(filter_comments(text), "solver a: 1\nlogging b: 2");
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Integer(3).as_float(), Some(3.0));
        assert_eq!(Value::Float(3.5).as_integer(), None);
        assert_eq!(Value::Boolean(true).as_boolean(), Some(true));
        assert_eq!(Value::String("x".into()).as_string(), Some("x"));
        assert_eq!(Value::Float(0.25).to_string(), "0.25");
    }
}
