#![cfg(test)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::collections::stack::{ContainerError, Stack};
use crate::util::eq::CountedEq;

#[test]
fn test_append_round_trip() {
    let mut stack = Stack::new();
    let mut vec = Vec::new();

    for value in ["ash", "oak", "yew"] {
        stack.append(value);
        Container::append(&mut vec, value);
    }

    assert_eq!(stack.count(), 3);
    assert_eq!(Container::count(&vec), 3);

    for (index, expected) in ["ash", "oak", "yew"].iter().enumerate() {
        assert_eq!(
            stack.item_at(index),
            Ok(expected),
            "Appending through the capability should read back in insertion order."
        );
        assert_eq!(vec.item_at(index), Ok(expected));
    }

    assert_eq!(
        stack.last_item(),
        Some(&"yew"),
        "The last item should be the most recent append."
    );
    assert_eq!(
        &*stack,
        &["ash", "oak", "yew"],
        "Capability appends should match direct construction."
    );
    assert_eq!(vec, ["ash", "oak", "yew"]);

    let empty = Stack::<u8>::new();
    assert!(Container::is_empty(&empty));
    assert_eq!(empty.last_item(), None, "An empty container has no last item.");
}

#[test]
fn test_item_at_bounds() {
    let stack = Stack::from([10, 20, 30]);

    assert_eq!(
        stack.item_at(0),
        Ok(&10),
        "Index 0 should be the first-pushed value."
    );
    assert_eq!(
        stack.item_at(3),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "Indexing at count() should always be out of bounds."
    );
    assert_eq!(
        stack.item_at(100),
        Err(IndexOutOfBounds { index: 100, len: 3 })
    );

    let empty: Stack<u8> = Stack::new();
    assert_eq!(empty.item_at(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
}

#[test]
fn test_all_items_match() {
    let stack = Stack::from([1, 2, 3]);
    let vec = vec![1, 2, 3];

    assert!(all_items_match(&stack, &stack), "Matching should be reflexive.");
    assert!(
        all_items_match(&stack, &vec),
        "Containers of different concrete types should compare by contents."
    );
    assert!(all_items_match(&vec, &stack), "Matching should be symmetric.");

    assert!(
        !all_items_match(&stack, &vec![1, 2]),
        "Differing counts should never match."
    );
    assert!(
        !all_items_match(&stack, &vec![1, 2, 4]),
        "A differing item should prevent a match."
    );

    let empty_stack: Stack<i32> = Stack::new();
    let empty_vec: Vec<i32> = Vec::new();
    assert!(
        all_items_match(&empty_stack, &empty_vec),
        "Two empty containers should match."
    );
}

#[test]
fn test_match_short_circuits() {
    let counter = Rc::new(RefCell::new(0));
    let lhs: Stack<_> = [1, 9, 3, 4, 5]
        .into_iter()
        .map(|value| CountedEq::new(value, &counter))
        .collect();
    let rhs: Vec<_> = [1, 2, 3, 4, 5]
        .into_iter()
        .map(|value| CountedEq::new(value, &counter))
        .collect();

    assert!(!all_items_match(&lhs, &rhs));
    assert_eq!(
        counter.take(),
        2,
        "Matching should stop at the first differing index without touching later items."
    );

    assert!(!all_items_match(&lhs, &vec![CountedEq::new(1, &counter)]));
    assert_eq!(
        counter.take(),
        0,
        "A count mismatch should be decided without any comparisons."
    );
}

#[test]
fn test_starts_with() {
    let stack = Stack::from(["a", "b", "c"]);

    assert!(
        starts_with(&stack, &["a", "b"]),
        "A prefix should be read from the first-pushed end."
    );
    assert!(starts_with(&stack, &[]), "The empty prefix should match any container.");
    assert!(
        starts_with(&stack, &["a", "b", "c"]),
        "A container should start with itself."
    );

    assert!(!starts_with(&stack, &["b"]));
    assert!(
        !starts_with(&stack, &["a", "b", "c", "d"]),
        "A prefix longer than the container should never match."
    );
}

#[test]
fn test_error_union() {
    fn first_after_pop(stack: &mut Stack<u8>) -> Result<u8, ContainerError> {
        stack.pop()?;
        Ok(*stack.item_at(0)?)
    }

    let mut stack = Stack::from([7_u8, 8]);
    assert_eq!(
        first_after_pop(&mut stack),
        Ok(7),
        "Both operations should succeed on a two-element Stack."
    );

    let Err(error) = first_after_pop(&mut stack) else {
        panic!("Indexing into the emptied Stack should fail.");
    };
    assert!(
        error.is_index_out_of_bounds(),
        "The index error should carry through the union type."
    );
    assert_eq!(
        TryInto::<IndexOutOfBounds>::try_into(error).ok(),
        Some(IndexOutOfBounds { index: 0, len: 0 }),
        "The original error should be recoverable from the union type."
    );

    let mut empty = Stack::new();
    let Err(error) = first_after_pop(&mut empty) else {
        panic!("Popping an empty Stack should fail.");
    };
    assert!(
        error.is_empty_container(),
        "The pop error should carry through the union type."
    );
}
