//! Proportional sizing helpers shared by the rendering layer.
//!
//! Every linear size on the face is `percent / 100` of a reference
//! dimension: the clock diameter for discs and markers, the hand
//! half-length for label offsets.

/// Scales a reference dimension by a percentage.
pub fn scaled(reference: f64, percent: f64) -> f64 {
    reference * percent / 100.0
}

/// Length of a hand, measured from the clock centre.
///
/// The reference dimension is the clock radius, so 100% reaches the rim.
pub fn hand_length(clock_size: f64, length_percent: f64) -> f64 {
    scaled(clock_size / 2.0, length_percent)
}

/// Distance of a hand label from the clock centre, along the hand.
pub fn label_offset(hand_length: f64, offset_percent: f64) -> f64 {
    scaled(hand_length, offset_percent)
}

/// Applies a hand label's casing rule to its text.
///
/// `all_caps` uppercases; otherwise each word is capitalized.
pub fn label_text(text: &str, all_caps: bool) -> String {
    if all_caps {
        text.to_uppercase()
    } else {
        capitalize_words(text)
    }
}

fn capitalize_words(text: &str) -> String {
    text.split_inclusive(char::is_whitespace)
        .map(capitalize_word)
        .collect()
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
