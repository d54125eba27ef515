//! Speed parsing.
//!
//! Attempts, in order: a range (`30-40`, `thirty to forty`) resolved to its
//! mean, the first decimal number anywhere in the text, then the whole text
//! as number words. Unit suffixes are removed first.

use std::sync::LazyLock;

use regex::Regex;

use super::words::{is_tens_word, is_unit_word, words_to_number};

static UNIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*(?:km/h|kmh|mph)\s*").expect("Invalid unit regex"));

static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("Invalid number regex"));

static LEADING_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?").expect("Invalid number regex"));

static TRAILING_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?$").expect("Invalid number regex"));

static LEADING_WORDS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(?:[\s-]+[a-z]+)*").expect("Invalid words regex"));

static TRAILING_WORDS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+(?:[\s-]+[a-z]+)*$").expect("Invalid words regex"));

/// Range separators other than the word `to`.
const DASHES: [char; 3] = ['-', '\u{2013}', '\u{2014}'];

/// Lowercases, trims and removes `km/h`, `kmh` and `mph` units.
///
/// Each unit is replaced by a single space so neighbouring words stay apart.
pub fn strip_units(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    UNIT_REGEX.replace_all(&lowered, " ").trim().to_string()
}

/// Parses a single range token: a decimal literal or number words.
fn parse_token(token: &str) -> Option<f64> {
    let token = token.trim();
    if LEADING_NUMBER_REGEX
        .find(token)
        .is_some_and(|m| m.end() == token.len())
    {
        return token.parse::<f64>().ok();
    }
    words_to_number(token)
}

/// Byte spans of candidate range separators, in order of appearance.
fn separator_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    for (index, ch) in text.char_indices() {
        let end = index + ch.len_utf8();
        if DASHES.contains(&ch) {
            if ch == '-' && is_compound_hyphen(text, index, end) {
                continue;
            }
            spans.push((index, end));
        } else if text[index..].starts_with("to") && is_standalone_word(text, index, index + 2) {
            spans.push((index, index + 2));
        }
    }
    spans
}

fn is_standalone_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// A hyphen joining a tens word to a unit word (`forty-five`) is part of
/// the number, not a range.
fn is_compound_hyphen(text: &str, start: usize, end: usize) -> bool {
    let left: String = text[..start]
        .chars()
        .rev()
        .take_while(char::is_ascii_alphabetic)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let right: String = text[end..]
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .collect();
    is_tens_word(&left) && is_unit_word(&right)
}

fn trailing_token(text: &str) -> Option<&str> {
    TRAILING_NUMBER_REGEX
        .find(text)
        .or_else(|| TRAILING_WORDS_REGEX.find(text))
        .map(|m| m.as_str())
}

fn leading_token(text: &str) -> Option<&str> {
    LEADING_NUMBER_REGEX
        .find(text)
        .or_else(|| LEADING_WORDS_REGEX.find(text))
        .map(|m| m.as_str())
}

/// Resolves a range to the mean of its bounds.
///
/// Only the first separator with a token on both sides is considered; if
/// either bound fails to parse the range interpretation is abandoned.
pub fn parse_range(text: &str) -> Option<f64> {
    for (start, end) in separator_spans(text) {
        let left = text[..start].trim_end();
        let right = text[end..].trim_start();
        let (Some(low), Some(high)) = (trailing_token(left), leading_token(right)) else {
            continue;
        };
        let low = parse_token(low)?;
        let high = parse_token(high)?;
        return Some((low + high) / 2.0);
    }
    None
}

/// Returns the first decimal number found anywhere in the text.
pub fn first_number(text: &str) -> Option<f64> {
    NUMBER_REGEX
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Parses a raw speed cell into a value.
///
/// Returns `None` when no interpretation succeeds.
pub fn parse_speed(raw: &str) -> Option<f64> {
    let text = strip_units(raw);
    if text.is_empty() {
        return None;
    }
    parse_range(&text)
        .or_else(|| first_number(&text))
        .or_else(|| words_to_number(&text))
}

/// Rounds to one decimal place, rejecting non-finite or negative values.
///
/// Ties go to the even digit, so `0.25` becomes `0.2` and `0.35` becomes `0.4`.
pub fn round_speed(value: f64) -> Option<f64> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let rounded = (value * 10.0).round_ties_even() / 10.0;
    rounded.is_finite().then_some(rounded)
}

/// Parses and rounds a raw speed cell.
pub fn normalize_speed(raw: &str) -> Option<f64> {
    parse_speed(raw).and_then(round_speed)
}
