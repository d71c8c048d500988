//! List reconciliation.
//!
//! The server is authoritative on which elements a list contains, but
//! many lists are unordered by contract and come back in arbitrary order.
//! Reconciling keeps the previously known order for elements that are
//! still present so an unchanged list never shows up as a diff.

use std::collections::HashMap;
use std::hash::Hash;

/// Merge the known ordering with the authoritative `actual` elements.
///
/// - `known` absent: `actual` verbatim.
/// - otherwise: elements present in both, in `known` order, followed by
///   elements only in `actual`, in `actual` order. Elements only in
///   `known` are dropped.
///
/// Counts are taken from `actual`: every occurrence there is emitted
/// exactly once, so duplicates survive.
pub fn reconcile<T>(known: Option<&[T]>, actual: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    reconcile_by_key(known, actual, |v| v)
}

/// Like [`reconcile`], but `actual == None` stays `None`.
///
/// An empty `actual` list stays empty; null and empty are distinct states.
pub fn reconcile_nullable<T>(known: Option<&[T]>, actual: Option<&[T]>) -> Option<Vec<T>>
where
    T: Clone + Eq + Hash,
{
    actual.map(|actual| reconcile(known, actual))
}

/// Reconcile object lists identified by a key.
///
/// Output elements always come from `actual`, so server-populated fields
/// (such as generated IDs) are kept; only the ordering follows `known`.
pub fn reconcile_by_key<T, K, F>(known: Option<&[T]>, actual: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash + ?Sized,
    F: Fn(&T) -> &K,
{
    let Some(known) = known else {
        return actual.to_vec();
    };

    // Remaining occurrences per key, as positions into `actual`.
    let mut pending: HashMap<&K, Vec<usize>> = HashMap::new();
    for (idx, item) in actual.iter().enumerate().rev() {
        pending.entry(key(item)).or_default().push(idx);
    }

    let mut taken = vec![false; actual.len()];
    let mut out = Vec::with_capacity(actual.len());

    for item in known {
        if let Some(idx) = pending.get_mut(key(item)).and_then(Vec::pop) {
            taken[idx] = true;
            out.push(actual[idx].clone());
        }
    }

    out.extend(
        actual
            .iter()
            .zip(taken)
            .filter(|(_, t)| !t)
            .map(|(item, _)| item.clone()),
    );
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn s(items: &[&str]) -> Vec<String> {
        items.iter().map(|&i| i.to_owned()).collect()
    }

    #[test]
    fn absent_known_returns_actual_verbatim() {
        for actual in [s(&[]), s(&["b", "a"]), s(&["a", "a", "b"])] {
            assert_eq!(reconcile(None, &actual), actual);
        }
    }

    #[test]
    fn idempotent_when_known_equals_actual() {
        for actual in [s(&[]), s(&["x"]), s(&["c", "a", "b"]), s(&["a", "b", "a"])] {
            assert_eq!(reconcile(Some(&actual), &actual), actual);
        }
    }

    #[test]
    fn overlapping_elements_keep_known_order() {
        let known = s(&["a", "b"]);
        let actual = s(&["b", "c"]);
        assert_eq!(reconcile(Some(&known), &actual), s(&["b", "c"]));
    }

    #[test]
    fn reordered_server_list_is_stable() {
        let known = s(&["ns1", "ns2", "ns3"]);
        let actual = s(&["ns3", "ns1", "ns2"]);
        assert_eq!(reconcile(Some(&known), &actual), known);
    }

    #[test]
    fn out_of_band_drift() {
        let known = s(&["ns1", "ns2"]);
        let actual = s(&["ns2", "ns3"]);
        assert_eq!(reconcile(Some(&known), &actual), s(&["ns2", "ns3"]));
    }

    #[test]
    fn new_elements_appended_in_actual_order() {
        let known = s(&["b"]);
        let actual = s(&["d", "b", "c", "a"]);
        assert_eq!(reconcile(Some(&known), &actual), s(&["b", "d", "c", "a"]));
    }

    #[test]
    fn duplicates_in_actual_preserved() {
        let known = s(&["a", "b"]);
        let actual = s(&["b", "a", "b"]);
        assert_eq!(reconcile(Some(&known), &actual), s(&["a", "b", "b"]));

        // Extra known duplicates do not invent elements.
        let known = s(&["a", "a", "a"]);
        let actual = s(&["a"]);
        assert_eq!(reconcile(Some(&known), &actual), s(&["a"]));
    }

    #[test]
    fn known_only_elements_dropped() {
        let known = s(&["a", "b", "c"]);
        let actual = s(&["c"]);
        assert_eq!(reconcile(Some(&known), &actual), s(&["c"]));
    }

    #[test]
    fn nullable_distinguishes_null_and_empty() {
        let known = s(&["a"]);
        assert_eq!(reconcile_nullable(Some(&known), None), None);
        assert_eq!(reconcile_nullable(Some(&known), Some(&[])), Some(vec![]));
        assert_eq!(reconcile_nullable::<String>(None, None), None);
        assert_eq!(reconcile_nullable::<String>(None, Some(&[])), Some(vec![]));
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Range {
        id: &'static str,
        prefix: &'static str,
    }

    #[test]
    fn by_key_takes_elements_from_actual() {
        let known = vec![
            Range { id: "", prefix: "10.1.0.0/16" },
            Range { id: "", prefix: "10.0.0.0/16" },
        ];
        let actual = vec![
            Range { id: "r0", prefix: "10.0.0.0/16" },
            Range { id: "r2", prefix: "10.2.0.0/16" },
            Range { id: "r1", prefix: "10.1.0.0/16" },
        ];
        let out = reconcile_by_key(Some(&known), &actual, |r| r.prefix);
        assert_eq!(
            out.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec!["r1", "r0", "r2"]
        );
    }
}
