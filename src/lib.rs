//! A `Vec<T>`-like collection which never stores absent values and keeps its
//! elements packed at the front of a fixed-capacity buffer.
//!
//! This crate provides a simple compacting store implementation. You can
//! find nearly all the relevant documentation on
//! [this crate's main type: `CompactingStore`](struct.CompactingStore.html).
//!
//! ---
//!
//! In order to use this crate, you have to include it into your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! compacting-store = "0.1"
//! ```
//!
//! The store logs buffer reallocations at `trace` level through the `log`
//! facade. Install any logger (e.g. `env_logger`) to see them.

use std::{
    fmt,
    iter::FromIterator,
    ops::{Index, IndexMut},
};

use log::trace;

use crate::core::Slots;

pub use crate::{
    config::{Config, DEFAULT_CAPACITY, DEFAULT_GROWTH_SLACK},
    error::{Result, StoreError},
    iter::{IntoIter, Iter, IterMut},
};

mod core;
pub mod config;
pub mod error;
pub mod iter;



/// A `Vec<T>`-like collection which rejects absent values and closes the gap
/// whenever an element is removed.
///
/// # How?
///
/// The store owns a buffer of *slots* (see the diagram in the `core`
/// module). Every slot is either filled with an element or empty. All filled
/// slots are always at the front of the buffer, so the element at index `i`
/// is simply the `i`-th inserted element that is still alive. The store
/// distinguishes two numbers:
///
/// - the *length* (`len()`): the number of elements,
/// - the *capacity* (`capacity()`): the number of slots.
///
/// Inserting writes into the first empty slot. If there is none, the buffer
/// is reallocated to exactly the required size plus a fixed *growth slack*
/// (see [`Config`]). Growth is additive, not multiplicative.
///
/// Removing an element moves all elements behind it one slot to the left and
/// shrinks the buffer by **exactly one slot**. Removing invalidates indices
/// of all following elements, just like `Vec::remove`.
///
/// # Absent values
///
/// Insertion methods take `impl Into<Option<T>>`. Passing `None` is not an
/// error, it's just a no-op that reports "nothing changed":
///
/// ```
/// use compacting_store::CompactingStore;
///
/// let mut store = CompactingStore::new();
/// assert!(store.add("foo"));
/// assert!(!store.add(None::<&str>));
/// assert!(store.add("bar"));
///
/// assert_eq!(store.remove_value(&"foo"), Some("foo"));
/// assert_eq!(store.get(0), Some(&"bar"));
/// assert_eq!(store.to_string(), "CompactingStore{size=1}");
/// ```
///
/// # Note
///
/// This type's interface is similar to the `Vec<T>` interface from the Rust
/// standard library. When in doubt about what a method is doing, please
/// consult [the official `Vec<T>` documentation][vec-doc] first.
///
/// [vec-doc]: https://doc.rust-lang.org/stable/std/vec/struct.Vec.html
#[derive(Clone)]
pub struct CompactingStore<T> {
    /// Storing the actual elements. Always front-packed.
    slots: Slots<T>,

    /// A cached value equal to the index of the first empty slot (or the
    /// capacity if there is none).
    num_elements: usize,

    config: Config,
}

impl<T> CompactingStore<T> {
    /// Constructs a new, empty store with a capacity of
    /// [`DEFAULT_CAPACITY`] (8) slots.
    pub fn new() -> Self {
        Self::empty(Config::new())
    }

    /// Constructs a new, empty store with exactly `capacity` slots.
    ///
    /// Returns `StoreError::InvalidArgument` if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(StoreError::InvalidArgument(
                "initial capacity must be greater than zero",
            ));
        }

        Ok(Self {
            slots: Slots::with_cap(capacity),
            num_elements: 0,
            config: Config::new(),
        })
    }

    /// Constructs a new, empty store using the given configuration. The
    /// store starts with `config`'s default capacity.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    /// Constructs a store from a sequence of possibly absent values.
    ///
    /// Absent entries are skipped, the order of the others is kept. The
    /// capacity of the store equals the number of present values, so
    /// `remaining()` is 0 right after construction. If there are no present
    /// values, this is the same as `new()`.
    ///
    /// ```
    /// use compacting_store::CompactingStore;
    ///
    /// let store = CompactingStore::from_slots(vec![Some(1), None, Some(3)]);
    /// assert_eq!(store, [1, 3]);
    /// assert_eq!(store.capacity(), 2);
    /// assert_eq!(store.remaining(), 0);
    /// ```
    pub fn from_slots<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        Self::from_vec(slots.into_iter().flatten().collect())
    }

    /// Constructs a store holding all elements of `vec` with a capacity of
    /// exactly `vec.len()`. An empty vector yields the same as `new()`.
    pub fn from_vec(vec: Vec<T>) -> Self {
        if vec.is_empty() {
            return Self::new();
        }

        Self {
            num_elements: vec.len(),
            slots: Slots::from_vec(vec),
            config: Config::new(),
        }
    }

    fn empty(config: Config) -> Self {
        Self {
            slots: Slots::with_cap(config.default_capacity),
            num_elements: 0,
            config,
        }
    }

    /// Returns the number of elements in this store.
    pub fn len(&self) -> usize {
        self.num_elements
    }

    /// Returns `true` if this store doesn't contain any elements.
    pub fn is_empty(&self) -> bool {
        self.num_elements == 0
    }

    /// Returns the number of slots, filled or not.
    pub fn capacity(&self) -> usize {
        self.slots.cap()
    }

    /// Returns the number of empty slots behind the last element, i.e. how
    /// many elements can be added without reallocating.
    pub fn remaining(&self) -> usize {
        debug_assert!(self.is_packed_around_len());
        self.slots.cap() - self.num_elements
    }

    /// Returns the configuration this store was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` if all filled slots precede all empty slots. This is
    /// the case after every operation on the store.
    pub fn is_front_packed(&self) -> bool {
        self.slots.is_front_packed()
    }

    /// Returns `true` if there exists an element at the given index.
    pub fn has_element_at(&self, index: usize) -> bool {
        self.slots.has_element_at(index)
    }

    /// Returns a reference to the element at the given index, or `None` if
    /// `index >= len()`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    /// Returns a mutable reference to the element at the given index, or
    /// `None` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }

    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|elem| elem == value)
    }

    /// Returns `true` if the store contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Inserts `value` behind the last element, growing the buffer if
    /// necessary.
    ///
    /// Returns `false` (and does nothing) if `value` is `None`.
    ///
    /// Since both `T` and `Option<T>` are accepted, a bare `None` or
    /// `Option<U>` argument needs its type spelled out. Storing a `None`
    /// element in a `CompactingStore<Option<U>>` takes `Some(None)`:
    ///
    /// ```
    /// use compacting_store::CompactingStore;
    ///
    /// let mut store = CompactingStore::<Option<u8>>::new();
    /// assert!(!store.add(None::<Option<u8>>));
    /// assert!(store.add(Some(None)));
    /// assert_eq!(store, [None]);
    /// ```
    pub fn add<V>(&mut self, value: V) -> bool
    where
        V: Into<Option<T>>,
    {
        let value: Option<T> = value.into();
        match value {
            None => false,
            Some(elem) => {
                self.reserve_for(1);
                self.push_unchecked(elem);
                true
            }
        }
    }

    /// Inserts `first` and then all of `rest`, skipping absent values.
    ///
    /// The buffer grows at most once. Returns `true` if at least one value
    /// was inserted.
    ///
    /// ```
    /// use compacting_store::CompactingStore;
    ///
    /// let mut store = CompactingStore::new();
    /// store.add("test");
    /// assert!(store.add_all("val", vec!["123"]));
    /// assert!(!store.add_all(None::<&str>, vec![None]));
    /// assert_eq!(store, ["test", "val", "123"]);
    /// ```
    pub fn add_all<V, I>(&mut self, first: V, rest: I) -> bool
    where
        V: Into<Option<T>>,
        I: IntoIterator<Item = V>,
    {
        let elems = std::iter::once(first)
            .chain(rest)
            .filter_map(Into::<Option<T>>::into)
            .collect();

        self.insert_all(elems)
    }

    /// Inserts clones of all elements of `other`, in order.
    ///
    /// Returns `false` if `other` is empty.
    pub fn add_store(&mut self, other: &CompactingStore<T>) -> bool
    where
        T: Clone,
    {
        self.insert_all(other.to_vec())
    }

    /// Moves all elements of `other` into this store, in order.
    ///
    /// Returns `false` if `other` is empty.
    pub fn append(&mut self, other: CompactingStore<T>) -> bool {
        self.insert_all(other.into_vec())
    }

    /// Removes all elements and resets the buffer to the configured default
    /// capacity.
    pub fn clear(&mut self) {
        trace!(
            "clearing store: {} -> {} slots",
            self.slots.cap(),
            self.config.default_capacity,
        );

        self.slots = Slots::with_cap(self.config.default_capacity);
        self.num_elements = 0;
    }

    /// Calls `f` once for every element, in order.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(f);
    }

    /// Removes the first element equal to `value` and returns it, or returns
    /// `None` if there is no such element.
    ///
    /// Like `remove()`, this shrinks the capacity by one on success.
    pub fn remove_value(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.index_of(value)?;
        self.take_closing_gap(index)
    }

    /// Removes and returns the element at position `index`, shifting all
    /// elements after it to the left. The capacity shrinks by exactly one.
    ///
    /// Returns `Ok(None)` if the slot at `index` is empty; nothing is changed
    /// in that case. Returns `StoreError::IndexOutOfRange` if
    /// `index >= capacity()`.
    ///
    /// ```
    /// use compacting_store::CompactingStore;
    ///
    /// let mut store = CompactingStore::from_vec(vec!['a', 'b', 'c']);
    /// assert_eq!(store.remove(1), Ok(Some('b')));
    /// assert_eq!(store, ['a', 'c']);
    /// assert_eq!(store.capacity(), 2);
    /// assert!(store.remove(2).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<Option<T>> {
        if index >= self.slots.cap() {
            return Err(StoreError::IndexOutOfRange {
                index,
                capacity: self.slots.cap(),
            });
        }

        Ok(self.take_closing_gap(index))
    }

    /// Returns a new vector holding clones of all elements, in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Converts the store into a vector holding all elements, in order.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Returns an iterator over immutable references to all elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.slots.as_slice(), self.num_elements)
    }

    /// Returns an iterator over mutable references to all elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.slots.as_mut_slice(), self.num_elements)
    }

    /// Makes sure that at least `needed` more elements fit. If they don't,
    /// the buffer grows by the missing amount plus the configured slack.
    fn reserve_for(&mut self, needed: usize) {
        let remaining = self.remaining();
        if remaining < needed {
            let new_cap = self.slots.cap() + (needed - remaining) + self.config.growth_slack;
            self.slots.realloc(new_cap);
        }
    }

    /// Checks the slots next to `num_elements`: the one before must be
    /// filled, the one at it must be empty. Constant time, unlike
    /// `is_front_packed()`.
    fn is_packed_around_len(&self) -> bool {
        let len = self.num_elements;
        (len == 0 || self.slots.has_element_at(len - 1)) && !self.slots.has_element_at(len)
    }

    /// Writes `elem` into the first empty slot.
    ///
    /// **Precondition**: there is at least one empty slot.
    fn push_unchecked(&mut self, elem: T) {
        let idx = self.num_elements;
        debug_assert!(self.is_packed_around_len());

        self.slots.insert_at(idx, elem);
        self.num_elements += 1;
    }

    fn insert_all(&mut self, elems: Vec<T>) -> bool {
        if elems.is_empty() {
            return false;
        }

        self.reserve_for(elems.len());
        for elem in elems {
            self.push_unchecked(elem);
        }
        true
    }

    fn take_closing_gap(&mut self, index: usize) -> Option<T> {
        let elem = self.slots.remove_closing_gap(index)?;
        self.num_elements -= 1;
        debug_assert!(self.slots.is_front_packed());

        Some(elem)
    }
}

impl<T> Default for CompactingStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for CompactingStore<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(elem) => elem,
            None => panic!(
                "attempt to index CompactingStore with index {}, but it has only {} elements",
                index,
                self.num_elements,
            ),
        }
    }
}

impl<T> IndexMut<usize> for CompactingStore<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.num_elements;
        match self.get_mut(index) {
            Some(elem) => elem,
            None => panic!(
                "attempt to index CompactingStore with index {}, but it has only {} elements",
                index,
                len,
            ),
        }
    }
}

impl<T> From<Vec<Option<T>>> for CompactingStore<T> {
    fn from(slots: Vec<Option<T>>) -> Self {
        Self::from_slots(slots)
    }
}

impl<T> FromIterator<T> for CompactingStore<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for CompactingStore<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.insert_all(iter.into_iter().collect());
    }
}

impl<'a, T> IntoIterator for &'a CompactingStore<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CompactingStore<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for CompactingStore<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.slots.into_vec(), self.num_elements)
    }
}

impl<T: fmt::Debug> fmt::Debug for CompactingStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactingStore ")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for CompactingStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactingStore{{size={}}}", self.num_elements)
    }
}

impl<Ta, Tb> PartialEq<CompactingStore<Tb>> for CompactingStore<Ta>
where
    Ta: PartialEq<Tb>,
{
    fn eq(&self, other: &CompactingStore<Tb>) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CompactingStore<T> {}

impl<A, B> PartialEq<[B]> for CompactingStore<A>
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &[B]) -> bool {
        self.iter().eq(other)
    }
}

impl<'other, A, B> PartialEq<&'other [B]> for CompactingStore<A>
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &&'other [B]) -> bool {
        self == *other
    }
}

impl<A, B, const N: usize> PartialEq<[B; N]> for CompactingStore<A>
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &[B; N]) -> bool {
        self == &other[..]
    }
}

impl<A, B> PartialEq<Vec<B>> for CompactingStore<A>
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &Vec<B>) -> bool {
        self == &other[..]
    }
}
