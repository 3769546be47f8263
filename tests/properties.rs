// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::LinkedList as StdLinkedList;

use proptest::prelude::*;
use sentinel_list::LinkedList;

/// The operations applied to both the list under test and the reference list.
#[derive(Clone, Debug)]
enum Operation {
    PushFront(u32),
    PushBack(u32),
    PopFront,
    PopBack,
    Clear,
    Retain(u32),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => any::<u32>().prop_map(Operation::PushFront),
        3 => any::<u32>().prop_map(Operation::PushBack),
        1 => Just(Operation::PopFront),
        1 => Just(Operation::PopBack),
        1 => Just(Operation::Clear),
        1 => (2..5u32).prop_map(Operation::Retain),
    ]
}

fn apply(list: &mut LinkedList<u32>, reference: &mut StdLinkedList<u32>, operation: &Operation) {
    match *operation {
        Operation::PushFront(value) => {
            list.push_front(value);
            reference.push_front(value);
        }
        Operation::PushBack(value) => {
            list.push_back(value);
            reference.push_back(value);
        }
        Operation::PopFront => assert_eq!(list.pop_front(), reference.pop_front()),
        Operation::PopBack => assert_eq!(list.pop_back(), reference.pop_back()),
        Operation::Clear => {
            list.clear();
            reference.clear();
        }
        Operation::Retain(divisor) => {
            list.retain(|value| *value % divisor != 0);
            *reference = reference
                .iter()
                .copied()
                .filter(|value| *value % divisor != 0)
                .collect();
        }
    }
}

proptest! {
    #[test]
    fn matches_reference_list(operations in prop::collection::vec(operation(), 0..200)) {
        let mut list = LinkedList::new();
        let mut reference = StdLinkedList::new();

        for operation in &operations {
            apply(&mut list, &mut reference, operation);

            prop_assert_eq!(list.len(), reference.len());
            prop_assert_eq!(list.is_empty(), reference.is_empty());
            prop_assert_eq!(list.front(), reference.front());
            prop_assert_eq!(list.back(), reference.back());
        }

        prop_assert!(list.iter().eq(reference.iter()));
        prop_assert!(list.iter().rev().eq(reference.iter().rev()));
    }

    #[test]
    fn size_counts_insertions_since_clear(
        before in prop::collection::vec(any::<i64>(), 0..50),
        after in prop::collection::vec((any::<bool>(), any::<i64>()), 0..50),
    ) {
        let mut list = LinkedList::new();
        list.extend(before);
        list.clear();
        prop_assert_eq!(list.len(), 0);
        prop_assert!(list.is_empty());

        for (i, (at_front, value)) in after.iter().enumerate() {
            if *at_front {
                list.push_front(*value);
            } else {
                list.push_back(*value);
            }

            prop_assert_eq!(list.len(), i + 1);
        }
    }

    #[test]
    fn range_round_trip(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let list = LinkedList::from(values.as_slice());
        prop_assert!(list.iter().eq(values.iter()));

        let copy = LinkedList::from_range(list.cursor_front(), list.cursor_end());
        let collected: Vec<i32> = copy.into_iter().collect();
        prop_assert_eq!(collected, values);
    }

    #[test]
    fn indexing_walks_to_position(values in prop::collection::vec(any::<u8>(), 1..60)) {
        let list: LinkedList<u8> = values.iter().copied().collect();
        let end = list.cursor_end();

        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(list[i], *value);

            let cursor = list.cursor_front() + i;
            prop_assert_eq!(cursor.current(), Some(value));
            prop_assert_eq!(end.distance_from(&cursor), Some(values.len() - i));
        }
    }

    #[test]
    fn swap_is_an_involution(
        a in prop::collection::vec(any::<u16>(), 0..40),
        b in prop::collection::vec(any::<u16>(), 0..40),
    ) {
        let mut list_a: LinkedList<u16> = a.iter().copied().collect();
        let mut list_b: LinkedList<u16> = b.iter().copied().collect();

        list_a.swap(&mut list_b);
        prop_assert!(list_a.iter().eq(b.iter()));
        prop_assert!(list_b.iter().eq(a.iter()));

        list_a.swap(&mut list_b);
        prop_assert!(list_a.iter().eq(a.iter()));
        prop_assert!(list_b.iter().eq(b.iter()));
    }

    #[test]
    fn equality_laws(
        a in prop::collection::vec(0..4u8, 0..10),
        b in prop::collection::vec(0..4u8, 0..10),
        extra in any::<u8>(),
    ) {
        let list_a: LinkedList<u8> = a.iter().copied().collect();
        let list_b: LinkedList<u8> = b.iter().copied().collect();

        prop_assert_eq!(&list_a, &list_a.clone());
        prop_assert_eq!(list_a == list_b, list_b == list_a);
        prop_assert_eq!(list_a == list_b, a == b);

        let mut longer = list_a.clone();
        longer.push_back(extra);
        prop_assert_ne!(&list_a, &longer);
    }
}
