//! Property tests for the forwarding invariants.
//!
//! Random edit scripts are applied to a view over a journaling store and to a plain native
//! model. After every step the view, the store and the model agree, and at the end the
//! journal replays onto an empty store to the same contents.

use std::collections::HashMap;

use proptest::prelude::*;
use tether::{
    AppendOnlyView, ListView, MapView,
    backing::{MapOp, MapRecorder, MapStore, SequenceOp, SequenceRecorder, VecStore},
};

#[derive(Debug, Clone)]
enum ListAction {
    Push(u8),
    Extend(Vec<u8>),
    Unshift(Vec<u8>),
    Pop,
    Shift,
    Set(usize, u8),
    Insert(usize, u8),
    Remove(usize),
}

fn list_action() -> impl Strategy<Value = ListAction> {
    prop_oneof![
        any::<u8>().prop_map(ListAction::Push),
        prop::collection::vec(any::<u8>(), 0..4).prop_map(ListAction::Extend),
        prop::collection::vec(any::<u8>(), 0..4).prop_map(ListAction::Unshift),
        Just(ListAction::Pop),
        Just(ListAction::Shift),
        (0..12usize, any::<u8>()).prop_map(|(i, v)| ListAction::Set(i, v)),
        (0..12usize, any::<u8>()).prop_map(|(i, v)| ListAction::Insert(i, v)),
        (0..12usize).prop_map(ListAction::Remove),
    ]
}

#[derive(Debug, Clone)]
enum MapAction {
    Insert(u8, i32),
    Remove(u8),
}

fn map_action() -> impl Strategy<Value = MapAction> {
    prop_oneof![
        (0..6u8, any::<i32>()).prop_map(|(k, v)| MapAction::Insert(k, v)),
        (0..6u8).prop_map(MapAction::Remove),
    ]
}

type ListStore = SequenceRecorder<u8, VecStore<u8>>;

/// Apply `action` to the view and the model. Returns the number of primitives it should cost.
fn apply_list(view: &mut ListView<u8, ListStore>, model: &mut Vec<u8>, action: ListAction) -> usize {
    match action {
        ListAction::Push(v) => {
            view.push(v).unwrap();
            model.push(v);
            1
        }
        ListAction::Extend(values) => {
            let n = values.len();
            assert_eq!(view.extend(values.clone()).unwrap(), model.len() + n);
            model.extend(values);
            n
        }
        ListAction::Unshift(values) => {
            let n = values.len();
            assert_eq!(view.unshift(values.clone()).unwrap(), model.len() + n);
            let mut front = values;
            front.append(model);
            *model = front;
            n
        }
        ListAction::Pop => {
            let expected = model.pop();
            assert_eq!(view.pop().unwrap(), expected);
            usize::from(expected.is_some())
        }
        ListAction::Shift => {
            let expected = if model.is_empty() {
                None
            } else {
                Some(model.remove(0))
            };
            assert_eq!(view.shift().unwrap(), expected);
            usize::from(expected.is_some())
        }
        ListAction::Set(i, v) => {
            let result = view.set(i, v);
            if i < model.len() {
                result.unwrap();
                model[i] = v;
                1
            } else if i == model.len() {
                result.unwrap();
                model.push(v);
                1
            } else {
                assert!(result.unwrap_err().is_unsupported_mutation());
                0
            }
        }
        ListAction::Insert(i, v) => {
            let result = view.insert(i, v);
            if i <= model.len() {
                result.unwrap();
                model.insert(i, v);
                1
            } else {
                assert!(result.unwrap_err().is_out_of_range());
                0
            }
        }
        ListAction::Remove(i) => {
            let result = view.remove(i);
            if i < model.len() {
                assert_eq!(result.unwrap(), model.remove(i));
                1
            } else {
                assert!(result.unwrap_err().is_out_of_range());
                0
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_append_only_preserves_order(values in prop::collection::vec(any::<u16>(), 0..32)) {
        let store: SequenceRecorder<u16, VecStore<u16>> = SequenceRecorder::new(VecStore::new());
        let mut view = AppendOnlyView::from_backing(store).unwrap();
        for v in &values {
            view.push(*v).unwrap();
        }

        prop_assert_eq!(view.as_slice(), values.as_slice());
        let expected: Vec<_> = values.iter().copied().map(SequenceOp::Append).collect();
        prop_assert_eq!(view.backing().ops(), expected.as_slice());
    }

    #[test]
    fn prop_list_journal_reconstructs_view(actions in prop::collection::vec(list_action(), 0..48)) {
        let store: ListStore = SequenceRecorder::new(VecStore::new());
        let mut view = ListView::from_backing(store).unwrap();
        let mut model = Vec::new();
        let mut expected_calls = 0;

        for action in actions {
            expected_calls += apply_list(&mut view, &mut model, action);
            prop_assert_eq!(view.as_slice(), model.as_slice());
            prop_assert_eq!(view.backing().inner().as_slice(), model.as_slice());
            prop_assert!(view == model);
        }

        prop_assert_eq!(view.backing().ops().len(), expected_calls);
        let replayed = SequenceOp::replay(view.backing().ops()).unwrap();
        prop_assert_eq!(replayed.as_slice(), model.as_slice());
    }

    #[test]
    fn prop_map_journal_reconstructs_view(actions in prop::collection::vec(map_action(), 0..48)) {
        let store: MapRecorder<u8, i32, MapStore<u8, i32>> = MapRecorder::new(MapStore::new());
        let mut view = MapView::from_backing(store).unwrap();
        let mut model = HashMap::new();

        for action in actions {
            let before = view.backing().ops().len();
            match action {
                MapAction::Insert(k, v) => {
                    let expected_op = if model.contains_key(&k) {
                        MapOp::Update(k, v)
                    } else {
                        MapOp::Add(k, v)
                    };
                    prop_assert_eq!(view.insert(k, v).unwrap(), model.insert(k, v));
                    prop_assert_eq!(view.backing().ops().last(), Some(&expected_op));
                }
                MapAction::Remove(k) => {
                    let expected = model.remove(&k);
                    let forwarded = usize::from(expected.is_some());
                    prop_assert_eq!(view.remove(&k).unwrap(), expected);
                    prop_assert_eq!(view.backing().ops().len(), before + forwarded);
                    continue;
                }
            }
            prop_assert_eq!(view.backing().ops().len(), before + 1);
        }

        prop_assert_eq!(view.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(view.get(k), Some(v));
        }
        let replayed = MapOp::replay(view.backing().ops()).unwrap();
        prop_assert_eq!(replayed.as_map().len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(replayed.get(k), Some(v));
        }
    }
}
