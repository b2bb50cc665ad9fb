//! Dense 0-based ordering for child collections.
//!
//! Every ordered list inside an aggregate (template entries, workout
//! exercises, sets, schedule block items) keeps its `order` values equal to
//! exactly `{0, .., len - 1}`. Two removal strategies exist:
//!
//! - [`remove_and_shift`] for lists addressed by position: the removed slot
//!   closes by decrementing every entry above it.
//! - [`resequence`] for lists addressed by a stable id: survivors are sorted
//!   by their current order and renumbered.

/// A child entry carrying a dense position within its parent.
pub trait Ordered {
    fn order(&self) -> u32;
    fn set_order(&mut self, order: u32);
}

/// Order assigned to the next appended entry.
pub fn next_order<T>(items: &[T]) -> u32 {
    items.len() as u32
}

pub fn find_by_order<T: Ordered>(items: &[T], order: u32) -> Option<&T> {
    items.iter().find(|item| item.order() == order)
}

pub fn find_by_order_mut<T: Ordered>(items: &mut [T], order: u32) -> Option<&mut T> {
    items.iter_mut().find(|item| item.order() == order)
}

/// Removes the entry at `order`, then decrements every entry whose order was
/// greater. Entries below `order` are left untouched.
pub fn remove_and_shift<T: Ordered>(items: &mut Vec<T>, order: u32) -> Option<T> {
    let index = items.iter().position(|item| item.order() == order)?;
    let removed = items.remove(index);

    for item in items.iter_mut() {
        if item.order() > order {
            item.set_order(item.order() - 1);
        }
    }

    Some(removed)
}

/// Sorts entries by their current order and renumbers them `0..len`.
pub fn resequence<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(|item| item.order());
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index as u32);
    }
}

/// True when the orders form exactly `{0, .., len - 1}`.
pub fn is_dense<T: Ordered>(items: &[T]) -> bool {
    let mut orders: Vec<u32> = items.iter().map(Ordered::order).collect();
    orders.sort_unstable();
    orders.iter().enumerate().all(|(index, order)| *order == index as u32)
}
