//! Tests for equivalence-key deduplication.

use sift_core::unique::{self, List, Set};

fn first_char(s: &&str) -> char {
    s.chars().next().unwrap_or_default()
}

#[test]
fn test_copy_identity_key() {
    let input = [1, 2, 1, 3, 4, 5, 3, 6, 6];
    assert_eq!(
        unique::copy(Some(&input[..]), unique::same),
        Some(vec![1, 2, 3, 4, 5, 6])
    );
}

#[test]
fn test_copy_grouped_by_key() {
    let input = ["a1", "b1", "a2", "c2", "d2", "d3"];
    assert_eq!(
        unique::copy(Some(&input[..]), first_char),
        Some(vec!["a1", "b1", "c2", "d2"])
    );
}

#[test]
fn test_copy_absent_and_empty_are_absent() {
    assert_eq!(unique::copy(None::<&[i32]>, unique::same), None);
    assert_eq!(unique::copy(Some(&[] as &[i32]), unique::same), None);
}

#[test]
fn test_in_place_identity_key() {
    let mut input = vec![1, 2, 1, 3, 4, 5, 3, 6, 6];
    assert_eq!(
        unique::in_place(Some(&mut input), unique::same),
        Some(&[1, 2, 3, 4, 5, 6][..])
    );
    assert_eq!(input, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_in_place_grouped_by_key() {
    let mut input = vec!["a1", "b1", "a2", "c2", "d2", "d3"];
    assert_eq!(
        unique::in_place(Some(&mut input), first_char),
        Some(&["a1", "b1", "c2", "d2"][..])
    );
}

#[test]
fn test_in_place_keeps_present_but_empty() {
    assert_eq!(unique::in_place(None::<&mut Vec<i32>>, unique::same), None);

    let mut empty: Vec<i32> = Vec::new();
    assert_eq!(
        unique::in_place(Some(&mut empty), unique::same),
        Some(&[][..])
    );
}

#[test]
fn test_key_is_authoritative() {
    // Equal keys, different values: the first one wins.
    let input = vec![("pod", 1), ("svc", 2), ("pod", 3)];
    let output = unique::copy(Some(input.as_slice()), |(kind, _)| *kind);
    assert_eq!(output, Some(vec![("pod", 1), ("svc", 2)]));
}

#[test]
fn test_dedup_by_key_on_owned_strings() {
    let mut names: Vec<String> = ["Alert", "alert", "Log", "ALERT"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    unique::dedup_by_key(&mut names, |s| s.to_lowercase());
    assert_eq!(names, vec!["Alert".to_string(), "Log".to_string()]);
}

#[test]
fn test_list_incremental_appends() {
    let mut list = List::new();
    for i in [1, 2, 3, 1, 4, 3, 5, 5, 5, 6] {
        list.append([i]);
    }
    assert_eq!(list.as_slice(), &[1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_list_append_many() {
    let mut list = List::new();
    list.append(vec![1, 2, 3, 1, 4, 3, 5, 5, 5, 6]);
    assert_eq!(list.into_vec(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_list_with_key_readable_between_appends() {
    let mut list = List::with_key(|s: &String| s.len());
    list.append(["ab".to_string(), "cd".to_string()]);
    assert_eq!(list.as_slice(), &["ab".to_string()]);

    list.extend(["xyz".to_string(), "e".to_string(), "fg".to_string()]);
    let collected: Vec<&String> = list.iter().collect();
    assert_eq!(collected, ["ab", "xyz", "e"]);
    assert!(list.contains_key(&3));
    assert!(!list.contains_key(&4));
}

#[test]
fn test_set_add_reports_novelty() {
    let mut set = Set::new();
    assert!(set.add("Pod"));
    assert!(!set.add("Pod"));
    assert!(set.add("Service"));
    assert!(set.has(&"Pod"));
    assert_eq!(set.len(), 2);

    let from_iter: Set<u8> = [1, 1, 2].into_iter().collect();
    assert_eq!(from_iter.len(), 2);
}

#[test]
fn test_set_extend_and_iter() {
    let mut set: Set<&str> = ["Pod"].into_iter().collect();
    set.extend(["Service", "Pod", "Node"]);
    assert_eq!(set.len(), 3);

    let mut keys: Vec<&str> = set.iter().copied().collect();
    keys.sort_unstable();
    assert_eq!(keys, ["Node", "Pod", "Service"]);
}

#[test]
fn test_single_element_and_all_duplicates() {
    assert_eq!(unique::copy(Some(&[7][..]), unique::same), Some(vec![7]));
    assert_eq!(unique::copy(Some(&[7, 7, 7][..]), unique::same), Some(vec![7]));

    let mut one = vec![7];
    assert_eq!(unique::in_place(Some(&mut one), unique::same), Some(&[7][..]));

    let mut dups = vec![7, 7, 7];
    assert_eq!(unique::in_place(Some(&mut dups), unique::same), Some(&[7][..]));
    assert_eq!(dups, [7]);
}
