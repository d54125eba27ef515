//! English cardinal number words.
//!
//! Lenient in the same way spreadsheet users are: unknown words are skipped
//! (`"about fifty"` is 50), hyphens and punctuation split words
//! (`"forty-five"` is 45), and `point` starts a digit-by-digit fraction.

fn unit_value(word: &str) -> Option<u32> {
    let value = match word {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        _ => return None,
    };
    Some(value)
}

fn teen_value(word: &str) -> Option<u32> {
    let value = match word {
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        _ => return None,
    };
    Some(value)
}

fn tens_value(word: &str) -> Option<u32> {
    let value = match word {
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    };
    Some(value)
}

fn scale_value(word: &str) -> Option<f64> {
    match word {
        "thousand" => Some(1e3),
        "million" => Some(1e6),
        "billion" => Some(1e9),
        _ => None,
    }
}

/// Returns true for a tens word such as `forty`.
pub fn is_tens_word(word: &str) -> bool {
    tens_value(word).is_some()
}

/// Returns true for a single-digit word from `one` to `nine`.
pub fn is_unit_word(word: &str) -> bool {
    matches!(unit_value(word), Some(1..=9))
}

/// Converts English number words to a value.
///
/// Returns `None` when the text holds no number word at all.
pub fn words_to_number(text: &str) -> Option<f64> {
    let lowered = text.to_lowercase();
    let words = lowered
        .split(|ch: char| !ch.is_ascii_alphabetic())
        .filter(|word| !word.is_empty());

    let mut total = 0.0;
    let mut group = 0.0;
    let mut seen = false;
    let mut fraction: Option<String> = None;

    for word in words {
        if let Some(digits) = fraction.as_mut() {
            if let Some(digit) = unit_value(word) {
                digits.push(char::from_digit(digit, 10)?);
            }
            continue;
        }
        if let Some(value) = unit_value(word)
            .or_else(|| teen_value(word))
            .or_else(|| tens_value(word))
        {
            group += f64::from(value);
            seen = true;
        } else if word == "hundred" {
            group = group.max(1.0) * 100.0;
            seen = true;
        } else if let Some(scale) = scale_value(word) {
            total += group.max(1.0) * scale;
            group = 0.0;
            seen = true;
        } else if word == "point" {
            fraction = Some(String::new());
        }
    }

    let fraction = fraction
        .filter(|digits| !digits.is_empty())
        .and_then(|digits| format!("0.{digits}").parse::<f64>().ok());
    if !seen && fraction.is_none() {
        return None;
    }
    Some(total + group + fraction.unwrap_or(0.0))
}
