/// Normalize a word to its cache key: lowercase, with at most one trailing
/// punctuation character (`. , ! ? ; :`) stripped.
pub fn normalize(word: &str) -> String {
    let mut key = word.to_lowercase();
    if let Some(last) = key.chars().last() {
        if matches!(last, '.' | ',' | '!' | '?' | ';' | ':') {
            key.pop();
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn lowercases() {
        assert_eq!(normalize("Joel"), "joel");
        assert_eq!(normalize("BBC"), "bbc");
    }

    #[test]
    fn strips_one_trailing_punctuation_character() {
        assert_eq!(normalize("website!"), "website");
        assert_eq!(normalize("Netflix,"), "netflix");
        assert_eq!(normalize("done?!"), "done?");
    }

    #[test]
    fn leaves_interior_punctuation_alone() {
        assert_eq!(normalize("don't"), "don't");
        assert_eq!(normalize("e.g."), "e.g");
    }

    #[test]
    fn empty_word_stays_empty() {
        assert_eq!(normalize(""), "");
    }
}
