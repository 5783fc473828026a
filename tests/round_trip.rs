use lyst::codec::{decode_fragment, encode_fragment};
use lyst::model::item::Item;
use lyst::model::list::TodoList;
use pretty_assertions::assert_eq;

/// Helper: encode a list, decode the result, and assert item-for-item
/// equality (content, order, and flags).
fn assert_round_trip(list: &TodoList) {
    let fragment = encode_fragment(list);
    let decoded = decode_fragment(&fragment).unwrap();
    assert_eq!(&decoded, list, "round-trip failed for {:?}", list);
}

fn list_of(texts: &[&str]) -> TodoList {
    texts.iter().map(|t| Item::new(*t)).collect()
}

#[test]
fn round_trip_empty_list() {
    assert_round_trip(&TodoList::new());
}

#[test]
fn round_trip_single_item() {
    assert_round_trip(&list_of(&["Buy milk"]));
}

#[test]
fn round_trip_preserves_order() {
    assert_round_trip(&list_of(&["cherry", "apple", "banana"]));
}

#[test]
fn round_trip_preserves_flags() {
    let mut list = list_of(&["a", "b", "c"]);
    list.items[0].done = true;
    list.items[2].done = true;
    assert_round_trip(&list);
}

#[test]
fn round_trip_url_significant_characters() {
    // & and # would break the fragment if left unescaped
    assert_round_trip(&list_of(&["milk & eggs", "#urgent", "a=b&c=d"]));
}

#[test]
fn round_trip_markup_significant_characters() {
    assert_round_trip(&list_of(&["<li>sneaky</li>", "quote \" quote", "it's"]));
}

#[test]
fn round_trip_json_significant_characters() {
    assert_round_trip(&list_of(&["brace { bracket [", "back\\slash", "line\nbreak"]));
}

#[test]
fn round_trip_non_ascii_text() {
    assert_round_trip(&list_of(&["emoji 👍", "köttbullar", "牛乳を買う"]));
}

#[test]
fn round_trip_empty_text_item() {
    assert_round_trip(&list_of(&[""]));
}

#[test]
fn round_trip_percent_looking_text() {
    // Text that already looks percent-encoded must survive unmangled
    assert_round_trip(&list_of(&["100%", "%5B not a bracket %5D"]));
}

#[test]
fn fragment_is_url_safe() {
    let mut list = list_of(&["milk & eggs", "#urgent"]);
    list.items[0].done = true;
    let fragment = encode_fragment(&list);
    // Nothing in the fragment may terminate or re-delimit the URL
    for forbidden in ['#', '&', '"', '<', '>', ' '] {
        assert!(
            !fragment.contains(forbidden),
            "fragment contains {:?}: {}",
            forbidden,
            fragment
        );
    }
}
