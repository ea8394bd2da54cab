use std::fmt;
use std::iter::FusedIterator;

use log::trace;

use crate::error::{EmptyListError, Result};
use crate::node::{Link, Node};

// Iterates head to tail, so a list built from `[a, b, c]` yields `c, b, a`.
pub struct LinkedList<T> {
    head: Link<T>,
    length: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            length: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn head(&self) -> Result<&T> {
        self.peek().ok_or(EmptyListError)
    }

    pub fn peek(&self) -> Option<&T> {
        self.head.as_deref().map(Node::value)
    }

    pub fn head_node(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    pub fn push(&mut self, value: T) {
        self.head = Some(Box::new(Node::new(value, self.head.take())));
        self.length += 1;
        trace!("push: length now {}", self.length);
    }

    pub fn pop(&mut self) -> Result<T> {
        let node = self.head.take().ok_or(EmptyListError)?;
        let (value, next) = (*node).into_parts();
        self.head = next;
        self.length -= 1;
        trace!("pop: length now {}", self.length);
        Ok(value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.as_deref(),
            remaining: self.length,
        }
    }

    // Nodes are never rewired; each is rebuilt on top of the reversed prefix.
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut current = self.head.take();

        while let Some(node) = current {
            let (value, next) = (*node).into_parts();
            reversed = Some(Box::new(Node::new(value, reversed)));
            current = next;
        }

        self.head = reversed;
        trace!("reverse: {} nodes", self.length);
    }

    pub fn into_reversed(mut self) -> LinkedList<T> {
        self.reverse();
        self
    }

    pub fn clear(&mut self) {
        self.head = None;
        self.length = 0;
    }
}

impl<T: Clone> LinkedList<T> {
    // Leaves `self` untouched. Pushing in iteration order lands the current
    // head at the tail.
    pub fn reversed(&self) -> LinkedList<T> {
        trace!("reversed: copying {} values", self.length);
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.reversed().into_reversed()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

// Values come out in the order they were pushed, tail first.
impl<T> From<LinkedList<T>> for Vec<T> {
    fn from(list: LinkedList<T>) -> Self {
        let mut values: Vec<T> = list.into_iter().collect();
        values.reverse();
        values
    }
}

pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next();
            self.remaining -= 1;
            node.value()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}


// proptest doesn't run under miri with default config
#[cfg(all(test, not(miri)))]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone)]
    enum Op {
        Push(i32),
        Pop,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            2 => any::<i32>().prop_map(Op::Push),
            1 => Just(Op::Pop),
        ]
    }

    fn contents() -> impl Strategy<Value = Vec<i32>> {
        prop::collection::vec(any::<i32>(), 0..64)
    }

    proptest! {
        #[test]
        fn construction_keeps_length(values in contents()) {
            let list: LinkedList<i32> = values.iter().copied().collect();
            prop_assert_eq!(list.len(), values.len());
            prop_assert_eq!(list.is_empty(), values.is_empty());
        }

        #[test]
        fn construction_iterates_in_reverse(values in contents()) {
            let list = LinkedList::from(values.clone());
            let expected: Vec<i32> = values.into_iter().rev().collect();
            let actual: Vec<i32> = list.iter().copied().collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn push_grows_by_one_and_becomes_head(values in contents(), value in any::<i32>()) {
            let mut list = LinkedList::from(values);
            let before = list.len();
            list.push(value);
            prop_assert_eq!(list.len(), before + 1);
            prop_assert_eq!(list.head(), Ok(&value));
        }

        #[test]
        fn pop_matches_head(values in prop::collection::vec(any::<i32>(), 1..64)) {
            let mut list = LinkedList::from(values);
            let before = list.len();
            let head = *list.head().unwrap();
            prop_assert_eq!(list.pop(), Ok(head));
            prop_assert_eq!(list.len(), before - 1);
        }

        #[test]
        fn push_then_pop_round_trips(values in contents(), value in any::<i32>()) {
            let mut list = LinkedList::from(values);
            let before = list.clone();
            list.push(value);
            prop_assert_eq!(list.pop(), Ok(value));
            prop_assert_eq!(list, before);
        }

        #[test]
        fn reversed_is_an_involution(values in contents()) {
            let list = LinkedList::from(values);
            prop_assert_eq!(list.reversed().reversed(), list);
        }

        #[test]
        fn reversed_leaves_input_untouched(values in contents()) {
            let list = LinkedList::from(values);
            let before: Vec<i32> = list.iter().copied().collect();
            let reversed = list.reversed();
            let after: Vec<i32> = list.iter().copied().collect();
            prop_assert_eq!(list.len(), before.len());
            prop_assert_eq!(&after, &before);

            let mut expected = before;
            expected.reverse();
            let actual: Vec<i32> = reversed.iter().copied().collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn reverse_in_place_matches_reversed(values in contents()) {
            let mut list = LinkedList::from(values);
            let copy = list.reversed();
            list.reverse();
            prop_assert_eq!(list, copy);
        }

        #[test]
        fn behaves_like_a_vec_stack(ops in prop::collection::vec(op(), 0..128)) {
            let mut list = LinkedList::new();
            let mut model: Vec<i32> = Vec::new();

            for op in ops {
                match op {
                    Op::Push(value) => {
                        list.push(value);
                        model.push(value);
                    }
                    Op::Pop => {
                        prop_assert_eq!(list.pop().ok(), model.pop());
                    }
                }
                prop_assert_eq!(list.len(), model.len());
                prop_assert_eq!(list.peek(), model.last());
            }

            let actual: Vec<i32> = list.iter().copied().collect();
            let expected: Vec<i32> = model.iter().rev().copied().collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
