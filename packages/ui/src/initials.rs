/// One or two uppercase initials: first letter of the first word, plus first letter of
/// the last word when there is more than one. Empty input gives an empty string.
pub fn get_initials_from_name(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let first_letter = |word: &str| -> String {
        word.chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    };
    match words.as_slice() {
        [] => String::new(),
        [only] => first_letter(only),
        [first, .., last] => first_letter(first) + &first_letter(last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(get_initials_from_name("maria"), "M");
        assert_eq!(get_initials_from_name("maria lopez garcia"), "MG");
        assert_eq!(get_initials_from_name("Jan Kowalski"), "JK");
        assert_eq!(get_initials_from_name(""), "");
        assert_eq!(get_initials_from_name("   "), "");
        assert_eq!(get_initials_from_name("  ola   nowak "), "ON");
        assert_eq!(get_initials_from_name("łucja"), "Ł");
    }
}
