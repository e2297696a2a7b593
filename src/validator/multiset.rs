//! Order-insensitive pchannel-list comparison
//!
//! The relevance check compares the operator-supplied local pchannel list
//! against the declared one as multisets: the local view need not be
//! ordered the same way as the declaration. Positional comparison only
//! applies later, at the transition check.

use std::collections::HashMap;

/// Returns true when both sequences contain the same elements with the
/// same multiplicities, regardless of order.
pub fn equal_ignore_order(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in a {
        *counts.entry(item.as_str()).or_insert(0) += 1;
    }
    for item in b {
        match counts.get_mut(item.as_str()) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_same_elements_different_order() {
        assert!(equal_ignore_order(
            &strings(&["ch-1", "ch-2", "ch-3"]),
            &strings(&["ch-3", "ch-1", "ch-2"]),
        ));
    }

    #[test]
    fn test_same_elements_same_order() {
        assert!(equal_ignore_order(
            &strings(&["ch-1", "ch-2"]),
            &strings(&["ch-1", "ch-2"]),
        ));
    }

    #[test]
    fn test_empty_sequences_are_equal() {
        assert!(equal_ignore_order(&[], &[]));
    }

    #[test]
    fn test_different_lengths() {
        assert!(!equal_ignore_order(
            &strings(&["ch-1"]),
            &strings(&["ch-1", "ch-2"]),
        ));
    }

    #[test]
    fn test_different_content() {
        assert!(!equal_ignore_order(
            &strings(&["ch-1", "ch-2"]),
            &strings(&["ch-1", "ch-3"]),
        ));
    }

    #[test]
    fn test_different_multiplicities() {
        // Same distinct elements, different counts.
        assert!(!equal_ignore_order(
            &strings(&["ch-1", "ch-1", "ch-2"]),
            &strings(&["ch-1", "ch-2", "ch-2"]),
        ));
    }
}
