use std::collections::HashSet;

use regex::Regex;

lazy_static::lazy_static! {
    static ref STOP_WORDS: HashSet<String> =
        stop_words::get(stop_words::LANGUAGE::English).into_iter().collect();
    static ref PRICE_RGX: Regex = Regex::new(r"\$\d").unwrap();
    static ref PERCENTAGE_RGX: Regex = Regex::new(r"%\d").unwrap();
    static ref URL_RGX: Regex = Regex::new(r"https?://[-a-zA-Z0-9$_@.&+!*(),%/]+").unwrap();
    static ref WWW_RGX: Regex = Regex::new(r"www\.[-a-zA-Z0-9$_@.&+!*(),%/]+").unwrap();
    static ref EMAIL_RGX: Regex = Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").unwrap();
    static ref SHORT_WORD_RGX: Regex = Regex::new(r"\b\w{1,2}\b").unwrap();
    static ref NON_WORD_RGX: Regex = Regex::new(r"[\W\d]").unwrap();
    static ref WHITESPACE_RGX: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalizes raw article text down to the word tokens the tables are
/// keyed by. The replacement order matters: the marker substitutions run
/// before punctuation and digits are swept away, so `$5` can still be
/// seen as a price and a URL is still one recognizable unit.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let message = strip_stop_words(text);
    let message = PRICE_RGX.replace_all(&message, "price");
    let message = PERCENTAGE_RGX.replace_all(&message, "percentage");
    let message = URL_RGX.replace_all(&message, "url");
    let message = WWW_RGX.replace_all(&message, "url");
    let message = EMAIL_RGX.replace_all(&message, "email");
    let message = SHORT_WORD_RGX.replace_all(&message, " ");
    let message = NON_WORD_RGX.replace_all(&message, " ");
    let message = WHITESPACE_RGX.replace_all(&message, " ");
    let message = message.trim();
    if message.is_empty() {
        return Vec::new();
    }
    message.split(' ').map(str::to_owned).collect()
}

fn strip_stop_words(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .filter(|word| !STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}
