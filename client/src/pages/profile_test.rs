use super::*;

#[test]
fn initials_takes_first_letters_of_two_words() {
    assert_eq!(initials("Ada Lovelace"), "AL");
    assert_eq!(initials("grace brewster murray hopper"), "GB");
}

#[test]
fn initials_of_single_word_or_empty() {
    assert_eq!(initials("Ada"), "A");
    assert_eq!(initials("   "), "");
}
