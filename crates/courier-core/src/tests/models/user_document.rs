use crate::models::contact_summary::ContactSummary;
use crate::models::user_document::UserDocument;

fn document() -> UserDocument {
    UserDocument::new("alice@example.com".to_string(), "Alice".to_string())
}

#[test]
fn given_new_document_when_created_then_contact_list_is_uninitialized() {
    let doc = document();

    assert!(!doc.has_contact_list());
    assert!(doc.filter_contacts("").is_empty());
}

#[test]
fn given_empty_contact_list_when_checked_then_it_counts_as_initialized() {
    let mut doc = document();
    doc.contacts = Some(Vec::new());

    // An empty list is distinct from an absent one.
    assert!(doc.has_contact_list());
    assert!(!doc.has_contact("bob@example.com"));
}

#[test]
fn given_contact_list_when_filtering_then_matches_are_case_insensitive() {
    let mut doc = document();
    doc.contacts = Some(vec![
        ContactSummary::new("alice2@example.com".to_string(), "Alice".to_string()),
        ContactSummary::new("ab@example.com".to_string(), "alice B".to_string()),
        ContactSummary::new("bob@example.com".to_string(), "Bob".to_string()),
    ]);

    let matches = doc.filter_contacts("ali");

    let names: Vec<&str> = matches.iter().map(|c| c.display_name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "alice B"]);
}

#[test]
fn given_contact_in_list_when_checking_membership_then_match_is_by_email() {
    let mut doc = document();
    doc.contacts = Some(vec![ContactSummary::new(
        "bob@example.com".to_string(),
        "Bob".to_string(),
    )]);

    assert!(doc.has_contact("bob@example.com"));
    assert!(!doc.has_contact("carol@example.com"));
}

#[test]
fn given_blank_email_when_validating_then_validation_fails() {
    let doc = UserDocument::new("  ".to_string(), "Alice".to_string());

    assert!(doc.validate().is_err());
}

#[test]
fn given_blank_display_name_when_validating_then_validation_fails() {
    let doc = UserDocument::new("alice@example.com".to_string(), "".to_string());

    assert!(doc.validate().is_err());
}

#[test]
fn given_document_when_serialized_then_wire_names_are_camel_case() {
    let mut doc = document();
    doc.photo_url = Some("https://example.com/a.png".to_string());

    let json = serde_json::to_value(&doc).unwrap();

    assert!(json.get("userId").is_some());
    assert!(json.get("displayName").is_some());
    assert!(json.get("photoURL").is_some());
    assert!(json.get("emailVerified").is_some());
    // Uninitialized contact list is absent on the wire, not null.
    assert!(json.get("contacts").is_none());
}

#[test]
fn given_summary_when_taken_then_it_copies_profile_fields_only() {
    let mut doc = document();
    doc.email_verified = true;
    doc.last_seen = Some(chrono::Utc::now());

    let summary = doc.summary();

    assert_eq!(summary.email, doc.email);
    assert_eq!(summary.display_name, doc.display_name);
    assert!(summary.email_verified);
}
