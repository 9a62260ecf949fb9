//! Reconciliation engine: which ranked titles are missing from the library
//!
//! A pure set-difference over canonical keys. The library's keys are
//! built once; each reference title then costs one normalization and
//! one hash lookup, so a run is linear in the two list sizes combined.

use std::collections::HashSet;

use crate::normalize::normalize;

/// Compute the ordered subset of `reference` absent from `library`.
///
/// Membership is tested on canonical keys, so "The Godfather (1972)"
/// matches a library entry of "the godfather". Output order is
/// reference order; neither input is mutated.
pub fn reconcile(reference: &[String], library: &[String]) -> Vec<String> {
    let library_keys: HashSet<String> = library.iter().map(|title| normalize(title)).collect();

    reference
        .iter()
        .filter(|title| !library_keys.contains(&normalize(title)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_example_scenario() {
        let reference = titles(&["Inception", "The Godfather (1972)", "Amelie"]);
        let library = titles(&["inception", "amelie"]);
        assert_eq!(
            reconcile(&reference, &library),
            titles(&["The Godfather (1972)"])
        );
    }

    #[test]
    fn test_empty_reference_yields_empty() {
        let library = titles(&["inception"]);
        assert!(reconcile(&[], &library).is_empty());
    }

    #[test]
    fn test_empty_library_yields_full_reference() {
        let reference = titles(&["Inception", "Amelie", "Heat"]);
        assert_eq!(reconcile(&reference, &[]), reference);
    }

    #[test]
    fn test_preserves_reference_order() {
        let reference = titles(&["Zulu", "Alien", "Memento", "Brazil"]);
        let library = titles(&["Alien"]);
        assert_eq!(
            reconcile(&reference, &library),
            titles(&["Zulu", "Memento", "Brazil"])
        );
    }

    #[test]
    fn test_matching_ignores_case_year_punctuation() {
        let reference = titles(&["The Godfather (1972)", "Se7en.", "  HEAT "]);
        let library = titles(&["the godfather", "se7en", "Heat (1995)"]);
        assert!(reconcile(&reference, &library).is_empty());
    }

    #[test]
    fn test_duplicate_reference_entries_each_emitted() {
        let reference = titles(&["Alien", "Alien (1979)"]);
        assert_eq!(reconcile(&reference, &[]), reference);
    }

    #[test]
    fn test_inputs_untouched_and_deterministic() {
        let reference = titles(&["Inception", "Heat"]);
        let library = titles(&["heat (1995)"]);
        let first = reconcile(&reference, &library);
        let second = reconcile(&reference, &library);
        assert_eq!(first, second);
        assert_eq!(reference, titles(&["Inception", "Heat"]));
        assert_eq!(library, titles(&["heat (1995)"]));
    }

    #[test]
    fn test_every_emitted_title_is_actually_absent() {
        let reference = titles(&["A", "B (2001)", "C!", "D"]);
        let library = titles(&["b", "d"]);
        let missing = reconcile(&reference, &library);

        let library_keys: std::collections::HashSet<String> =
            library.iter().map(|t| crate::normalize::normalize(t)).collect();
        for title in &missing {
            assert!(!library_keys.contains(&crate::normalize::normalize(title)));
        }
        assert_eq!(missing, titles(&["A", "C!"]));
    }
}
