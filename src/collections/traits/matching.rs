use super::Container;
use crate::util::result::ResultExtension;

/// Returns true if `lhs` and `rhs` hold the same number of items and every pair of items at
/// corresponding indices is equal. The walk stops at the first mismatch without inspecting
/// later items.
///
/// The two containers may be different concrete types, as long as they hold the same element
/// type; comparing containers of incompatible element types fails to compile rather than being
/// checked at runtime.
///
/// # Examples
/// ```
/// # use container_lib::collections::stack::Stack;
/// # use container_lib::collections::traits::all_items_match;
/// let stack = Stack::from(["tree", "shrub"]);
/// let vec = vec!["tree", "shrub"];
/// assert!(all_items_match(&stack, &vec));
/// assert!(!all_items_match(&stack, &vec!["tree"]));
/// ```
pub fn all_items_match<T, L, R>(lhs: &L, rhs: &R) -> bool
where
    T: PartialEq,
    L: Container<T>,
    R: Container<T>,
{
    if lhs.count() != rhs.count() {
        return false;
    }

    for index in 0..lhs.count() {
        // Both lookups are in bounds for any Container upholding its contract.
        if lhs.item_at(index).throw() != rhs.item_at(index).throw() {
            return false;
        }
    }

    true
}

/// Returns true if reading `container` from its first-appended item yields every value in
/// `prefix`, in order, before anything else. The empty prefix matches any container.
///
/// # Examples
/// ```
/// # use container_lib::collections::stack::Stack;
/// # use container_lib::collections::traits::starts_with;
/// let stack = Stack::from([1, 2, 3]);
/// assert!(starts_with(&stack, &[1, 2]));
/// assert!(!starts_with(&stack, &[2]));
/// ```
pub fn starts_with<T, C>(container: &C, prefix: &[T]) -> bool
where
    T: PartialEq,
    C: Container<T>,
{
    if prefix.len() > container.count() {
        return false;
    }

    prefix
        .iter()
        .enumerate()
        .all(|(index, expected)| container.item_at(index).throw() == expected)
}
