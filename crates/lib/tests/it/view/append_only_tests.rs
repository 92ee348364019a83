//! AppendOnlyView integration tests

use tether::{AppendOnlyView, backing::VecStore};

use crate::helpers::*;

#[test]
fn test_append_only_sequence() {
    let mut impl_ = AppendLog::new(&["a", "b", "c"]);
    let mut s = AppendOnlyView::from_backing(&mut impl_).unwrap();
    assert_eq!(s.len(), 3);
    assert_eq!(s.to_string(), "a,b,c");

    // Trivial append
    assert_eq!(s.extend(Vec::new()).unwrap(), 3);
    assert_eq!(s.to_string(), "a,b,c");

    // Append a value
    assert_eq!(s.push("d").unwrap(), 4);
    assert_eq!(s.to_string(), "a,b,c,d");

    // Append multiple values
    assert_eq!(s.extend(["e", "f"]).unwrap(), 6);
    assert_eq!(s.to_string(), "a,b,c,d,e,f");

    // Illegals
    assert!(s.set(1, "z").unwrap_err().is_unsupported_mutation());
    assert!(s.set_len(10).unwrap_err().is_unsupported_mutation());
    assert_eq!(s.to_string(), "a,b,c,d,e,f");

    drop(s);
    assert_eq!(impl_.appends, 3);
    assert_eq!(impl_.list, vec!["a", "b", "c", "d", "e", "f"]);
}

#[test]
fn test_trivial_append_makes_no_call() {
    let mut s = AppendOnlyView::from_backing(AppendLog::new(&["a"])).unwrap();
    s.extend(std::iter::empty()).unwrap();
    assert_eq!(s.backing().appends, 0);
    assert_eq!(s.as_slice(), &["a"]);
}

#[test]
fn test_rejected_assignment_changes_nothing() {
    let mut s = AppendOnlyView::from_backing(AppendLog::new(&["a", "b"])).unwrap();
    let before = s.to_string();

    for index in [0, 1, 2, 100] {
        let err = s.set(index, "z").unwrap_err();
        assert!(err.is_view_error());
        assert!(err.to_string().contains(&format!("index {index}")), "{err}");
    }

    assert_eq!(s.to_string(), before);
    assert_eq!(s.backing().appends, 0);
}

#[test]
fn test_reads_pass_through() {
    let s = AppendOnlyView::from_backing(VecStore::from(vec![10, 20, 30])).unwrap();
    assert_eq!(s[1], 20);
    assert_eq!(s.first(), Some(&10));
    assert_eq!(s.iter().sum::<i32>(), 60);
    assert!(s.contains(&30));
    let collected: Vec<_> = (&s).into_iter().copied().collect();
    assert_eq!(collected, vec![10, 20, 30]);
}

#[test]
fn test_view_over_full_sequence_store() {
    // A full sequence store also satisfies the append-only contract.
    let mut store = CountingSequence::new(&["a"]);
    let mut s = AppendOnlyView::from_backing(&mut store).unwrap();
    s.push("b").unwrap();
    assert!(s.set(0, "z").is_err());
    drop(s);

    assert_eq!(
        store.counters,
        SeqCounters {
            appends: 1,
            ..Default::default()
        }
    );
}

#[test]
fn test_failed_append_leaves_view_unchanged() {
    let store = CountingSequence::new(&["a"]).failing_on(0);
    let mut s = AppendOnlyView::from_backing(store).unwrap();

    let err = s.push("b").unwrap_err();
    assert!(err.is_backing_error());
    assert_eq!(s.as_slice(), &["a"]);
}

#[test]
fn test_failed_batch_keeps_accepted_prefix() {
    let store = CountingSequence::new(&["a"]).failing_on(2);
    let mut s = AppendOnlyView::from_backing(store).unwrap();

    assert!(s.extend(["b", "c", "d", "e"]).is_err());
    assert_eq!(s.as_slice(), &["a", "b", "c"]);
    assert_eq!(s.backing().list, s.as_slice());
    assert_eq!(s.backing().counters.appends, 2);
}

#[test]
fn test_compares_with_native_sequences() {
    let mut s = AppendOnlyView::from_backing(AppendLog::new(&["a", "b"])).unwrap();
    assert_eq!(s, vec!["a", "b"]);
    assert_eq!(s, ["a", "b"]);
    assert!(s == ["a", "b"][..]);
    assert!(s != vec!["a"]);

    s.push("c").unwrap();
    assert_eq!(s, s.backing().list);
}
