use std::fmt;

use crate::EmptyStackError;

/// Growable LIFO stack.
///
/// Elements are stored bottom to top in a `Vec`, so the top of the stack is always the last
/// element. The backing store starts unallocated, grows geometrically as elements are pushed,
/// and is not reclaimed by [Stack::pop].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack<T> {
    inner: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack. Nothing is allocated until the first push.
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Create an empty stack with room for at least `capacity` elements. A request that can't
    /// be allocated, or doesn't fit in a `usize`, reserves nothing.
    pub fn with_capacity(capacity: impl TryInto<usize>) -> Self {
        let capacity = crate::macros::cast_usize!(capacity, 0);
        let mut inner = Vec::new();
        if let Err(error) = inner.try_reserve_exact(capacity) {
            tracing::trace!(capacity, %error, "stack reservation skipped");
        }
        Self { inner }
    }

    /// Push a value onto the top of the stack.
    pub fn push(&mut self, value: T) {
        let capacity = self.inner.capacity();
        self.inner.push(value);
        if self.inner.capacity() != capacity {
            tracing::trace!(
                from = capacity,
                to = self.inner.capacity(),
                len = self.inner.len(),
                "stack storage grew"
            );
        }
    }

    /// Remove and return the top of the stack.
    pub fn pop(&mut self) -> Result<T, EmptyStackError> {
        self.inner.pop().ok_or(EmptyStackError)
    }

    /// Borrow the top of the stack without removing it.
    pub fn peek(&self) -> Result<&T, EmptyStackError> {
        self.inner.last().ok_or(EmptyStackError)
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, EmptyStackError> {
        self.inner.last_mut().ok_or(EmptyStackError)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of elements on the stack.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Allocated length of the backing store. Always `>= self.len()`.
    ///
    /// Zero-sized elements never allocate, so their capacity is reported as the length.
    pub fn capacity(&self) -> usize {
        if std::mem::size_of::<T>() == 0 {
            return self.inner.len();
        }
        self.inner.capacity()
    }

    /// Drop every element and release the backing store. Clones and snapshots taken earlier
    /// own their own storage and are unaffected.
    pub fn clear(&mut self) {
        let capacity = self.capacity();
        let released = std::mem::take(&mut self.inner);
        tracing::trace!(len = released.len(), capacity, "stack cleared");
    }

    /// Reverse the stack in place: the bottom element becomes the top.
    pub fn reverse(&mut self) {
        self.inner.reverse();
    }

    /// Elements from bottom to top.
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }
}

impl<T> Stack<T>
where
    T: PartialEq,
{
    /// Linear scan for an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.inner.contains(value)
    }
}

impl<T> Stack<T>
where
    T: Clone,
{
    /// Copy the elements, bottom to top, into a new `Vec`. The copy shares no storage with the
    /// stack.
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.to_vec()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The first element of the vector is the bottom of the stack.
impl<T> From<Vec<T>> for Stack<T> {
    fn from(inner: Vec<T>) -> Self {
        Self { inner }
    }
}

/// Renders as `Stack: [a b c]`, bottom to top.
impl<T> fmt::Display for Stack<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Stack: [")?;
        for (n, value) in self.inner.iter().enumerate() {
            if n > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
