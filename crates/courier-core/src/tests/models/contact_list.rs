use crate::models::contact_list::{filter_by_display_name, merge_union};
use crate::models::contact_summary::ContactSummary;

use proptest::prelude::*;

fn contact(email: &str, name: &str) -> ContactSummary {
    ContactSummary::new(email.to_string(), name.to_string())
}

#[test]
fn given_empty_list_when_merging_then_additions_are_appended_in_order() {
    let merged = merge_union(&[], &[contact("a@x.io", "A"), contact("b@x.io", "B")]);

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].email, "a@x.io");
    assert_eq!(merged[1].email, "b@x.io");
}

#[test]
fn given_existing_entry_when_merging_same_value_then_list_is_unchanged() {
    let existing = vec![contact("a@x.io", "A")];

    let merged = merge_union(&existing, &[contact("a@x.io", "A")]);

    assert_eq!(merged, existing);
}

#[test]
fn given_existing_entries_when_merging_then_their_order_is_preserved() {
    let existing = vec![contact("a@x.io", "A"), contact("b@x.io", "B")];

    let merged = merge_union(&existing, &[contact("c@x.io", "C"), contact("a@x.io", "A")]);

    assert_eq!(merged.len(), 3);
    assert_eq!(merged[0].email, "a@x.io");
    assert_eq!(merged[1].email, "b@x.io");
    assert_eq!(merged[2].email, "c@x.io");
}

#[test]
fn given_duplicate_additions_when_merging_then_only_first_is_kept() {
    let merged = merge_union(&[], &[contact("a@x.io", "A"), contact("a@x.io", "A")]);

    assert_eq!(merged.len(), 1);
}

#[test]
fn given_mixed_case_names_when_filtering_then_match_is_case_insensitive() {
    let list = vec![
        contact("alice@x.io", "Alice"),
        contact("aliceb@x.io", "alice B"),
        contact("bob@x.io", "Bob"),
    ];

    let matches = filter_by_display_name(&list, "ali");

    let names: Vec<&str> = matches.iter().map(|c| c.display_name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "alice B"]);
}

fn arb_contact() -> impl Strategy<Value = ContactSummary> {
    ("[a-z]{1,8}", "[A-Za-z ]{1,12}", any::<bool>()).prop_map(|(local, name, verified)| {
        ContactSummary {
            email: format!("{local}@example.com"),
            display_name: name,
            photo_url: None,
            email_verified: verified,
        }
    })
}

proptest! {
    #[test]
    fn merge_union_never_produces_duplicates(
        existing in proptest::collection::vec(arb_contact(), 0..8),
        additions in proptest::collection::vec(arb_contact(), 0..8),
    ) {
        // Start from a deduplicated base, as the store invariant guarantees.
        let base = merge_union(&[], &existing);

        let merged = merge_union(&base, &additions);

        for (i, entry) in merged.iter().enumerate() {
            prop_assert!(!merged[i + 1..].contains(entry));
        }
        // Existing entries survive, in order, as a prefix.
        prop_assert_eq!(&merged[..base.len()], &base[..]);
        // Every addition is present afterwards.
        for addition in &additions {
            prop_assert!(merged.contains(addition));
        }
    }

    #[test]
    fn merge_union_is_idempotent(
        existing in proptest::collection::vec(arb_contact(), 0..8),
        additions in proptest::collection::vec(arb_contact(), 0..8),
    ) {
        let once = merge_union(&existing, &additions);
        let twice = merge_union(&once, &additions);

        prop_assert_eq!(once, twice);
    }
}
