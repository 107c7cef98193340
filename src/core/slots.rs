use std::mem;

use log::trace;

/// The slot buffer backing a `CompactingStore`: essentially a
/// `Box<[Option<T>]>` with exact reallocations.
///
/// A `Vec<Option<T>>` would work a bit different than we need: we want to
/// address every slot below the capacity and we want the capacity to be
/// exactly what we asked for. So we manage the boxed slice ourselves.
#[derive(Clone)]
pub(crate) struct Slots<T> {
    data: Box<[Option<T>]>,
}

impl<T> Slots<T> {
    /// Creates a buffer of `cap` empty slots.
    pub(crate) fn with_cap(cap: usize) -> Self {
        Self {
            data: empty_slots(cap),
        }
    }

    /// Creates a full buffer from the given elements. The capacity equals
    /// `elems.len()`.
    pub(crate) fn from_vec(elems: Vec<T>) -> Self {
        Self {
            data: elems.into_iter().map(Some).collect(),
        }
    }

    pub(crate) fn cap(&self) -> usize {
        self.data.len()
    }

    /// Checks if there exists an element at index `idx`. Indices `>= cap`
    /// are simply empty.
    pub(crate) fn has_element_at(&self, idx: usize) -> bool {
        self.data.get(idx).map_or(false, Option::is_some)
    }

    pub(crate) fn get(&self, idx: usize) -> Option<&T> {
        self.data.get(idx).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.data.get_mut(idx).and_then(Option::as_mut)
    }

    /// Writes `elem` into the empty slot `idx`.
    ///
    /// # Formal
    ///
    /// **Preconditions**:
    /// - `idx < self.cap()`
    /// - `self.has_element_at(idx) == false`
    pub(crate) fn insert_at(&mut self, idx: usize, elem: T) {
        debug_assert!(idx < self.cap());
        debug_assert!(!self.has_element_at(idx));

        self.data[idx] = Some(elem);
    }

    /// Returns the index of the first empty slot with index `idx` or higher,
    /// or `None` if all slots from `idx` up to the capacity are filled.
    pub(crate) fn first_hole_from(&self, idx: usize) -> Option<usize> {
        (idx..self.cap()).find(|&i| self.data[i].is_none())
    }

    /// Returns the index of the last filled slot, or `None` if all slots are
    /// empty.
    pub(crate) fn last_filled(&self) -> Option<usize> {
        self.data.iter().rposition(Option::is_some)
    }

    /// Returns `true` if no filled slot follows an empty one.
    pub(crate) fn is_front_packed(&self) -> bool {
        match self.first_hole_from(0) {
            None => true,
            Some(hole) => self.data[hole..].iter().all(Option::is_none),
        }
    }

    /// Reallocates the buffer to exactly `new_cap` slots, keeping all filled
    /// slots at their index.
    ///
    /// # Formal
    ///
    /// **Preconditions**:
    /// - all slots with index `>= new_cap` are empty
    #[inline(never)]
    #[cold]
    pub(crate) fn realloc(&mut self, new_cap: usize) {
        debug_assert!(self.last_filled().map_or(true, |last| last < new_cap));
        trace!("reallocating slot buffer: {} -> {} slots", self.cap(), new_cap);

        let old = mem::replace(&mut self.data, Box::default());
        let mut new: Vec<Option<T>> = Vec::from(old);
        new.truncate(new_cap);
        new.resize_with(new_cap, || None);

        self.data = new.into_boxed_slice();
    }

    /// Takes the element out of slot `idx`, moves every element behind it
    /// one slot to the left and shrinks the buffer by exactly one slot.
    ///
    /// Returns `None` (and leaves the buffer untouched) if the slot is empty.
    ///
    /// # Formal
    ///
    /// **Preconditions**:
    /// - `idx < self.cap()`
    ///
    /// **Postconditons** (with `before` being `self` before the call, and
    /// the slot being filled):
    /// - `self.cap() == before.cap() - 1`
    /// - ∀ i < `idx` ⇒ slot `i` is unchanged
    /// - ∀ i > `idx` ⇒ `before` slot `i` is now slot `i - 1`
    pub(crate) fn remove_closing_gap(&mut self, idx: usize) -> Option<T> {
        debug_assert!(idx < self.cap());

        let elem = self.data[idx].take()?;
        let new_cap = self.cap() - 1;
        trace!("closing gap at slot {}: {} -> {} slots", idx, self.cap(), new_cap);

        let old = mem::replace(&mut self.data, Box::default());
        let mut new: Vec<Option<T>> = Vec::from(old);
        new.remove(idx);
        debug_assert_eq!(new.len(), new_cap);

        self.data = new.into_boxed_slice();
        Some(elem)
    }

    pub(crate) fn as_slice(&self) -> &[Option<T>] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Option<T>] {
        &mut self.data
    }

    pub(crate) fn into_vec(self) -> Vec<Option<T>> {
        self.data.into_vec()
    }
}

fn empty_slots<T>(cap: usize) -> Box<[Option<T>]> {
    let mut v = Vec::with_capacity(cap);
    v.resize_with(cap, || None);
    v.into_boxed_slice()
}

