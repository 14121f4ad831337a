//! Contact list operations shared by the store and the directory context.

use crate::models::contact_summary::ContactSummary;

/// Additive, order-preserving, de-duplicating set union.
///
/// Existing entries keep their order; additions that are not already present
/// (exact-value comparison) are appended in argument order. Idempotent, so a
/// retried or racing append cannot produce duplicates.
pub fn merge_union(existing: &[ContactSummary], additions: &[ContactSummary]) -> Vec<ContactSummary> {
    let mut merged = existing.to_vec();
    for addition in additions {
        if !merged.contains(addition) {
            merged.push(addition.clone());
        }
    }
    merged
}

/// Case-insensitive substring filter on display names, preserving order.
pub fn filter_by_display_name(list: &[ContactSummary], query: &str) -> Vec<ContactSummary> {
    list.iter()
        .filter(|c| c.display_name_contains(query))
        .cloned()
        .collect()
}
