use super::*;

#[test]
fn initials_take_the_first_two_words() {
    assert_eq!(initials("Sourov Dash"), "SD");
    assert_eq!(initials("Ada Byron Lovelace"), "AB");
}

#[test]
fn initials_handle_short_and_empty_names() {
    assert_eq!(initials("Plato"), "P");
    assert_eq!(initials(""), "");
    assert_eq!(initials("   "), "");
}
