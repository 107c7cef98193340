//! The slot buffer that stores the elements of a `CompactingStore`.
//!
//! It's best to think of the buffer as a contiguous sequence of "slots". A
//! slot can either be empty or filled with an element. The buffer always has
//! `cap` many slots. Here is an example of a buffer with `len = 4` and
//! `cap = 10`:
//!
//! ```text
//!      0   1   2   3   4   5   6   7   8   9   10
//!    ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┐
//!    │ a │ b │ c │ d │ - │ - │ - │ - │ - │ - │
//!    └───┴───┴───┴───┴───┴───┴───┴───┴───┴───┘
//!                      ↑                       ↑
//!                     len                     cap
//! ```
//!
//! The store keeps the buffer *front-packed*:
//! - `0 ≤ i < len`: slots with index `i` are always filled
//! - `len ≤ i < cap`: slots with index `i` are always empty
//!
//! So `len` is at the same time the number of elements and the index of the
//! first empty slot. The buffer itself doesn't enforce this; it only offers
//! the primitive slot operations. Keeping the invariant is the job of the
//! store.

pub(crate) use self::slots::Slots;

mod slots;
