use std::fmt;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

// Owns the successor. Dropping it unwinds the rest of the chain in a loop.
struct Chain<T>(Link<T>);

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        let mut current = self.0.take();
        while let Some(mut node) = current {
            current = node.next.0.take();
        }
    }
}

pub struct Node<T> {
    value: T,
    next: Chain<T>,
}

impl<T> Node<T> {
    pub fn new(value: T, next: Option<Box<Node<T>>>) -> Self {
        Node {
            value,
            next: Chain(next),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn next(&self) -> Option<&Node<T>> {
        self.next.0.as_deref()
    }

    pub(crate) fn into_parts(self) -> (T, Link<T>) {
        let Node { value, mut next } = self;
        (value, next.0.take())
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.0.is_some())
            .finish()
    }
}
