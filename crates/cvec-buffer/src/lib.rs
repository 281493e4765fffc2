//! Growable real buffers for cvec.
//!
//! A [`Buffer`] owns a contiguous run of reals together with its length
//! and a policy-tracked capacity. It is the only allocating type in the
//! workspace: vector operations and matrices build on its constructors,
//! [`Buffer::push`], and drop.
//!
//! # Layout
//!
//! ```text
//! Buffer<T>
//! ├── data: Vec<T>          (len() == length, reserved ≥ capacity)
//! ├── capacity: usize       (slots granted by the growth policy)
//! ├── policy: GrowthPolicy  (min_capacity = 4, growth_factor = 2)
//! └── growths: usize        (reallocations performed so far)
//! ```
//!
//! # Growth
//!
//! When a write needs more room than `capacity`, the new capacity is the
//! larger of the room needed and `growth_factor × capacity`, with a floor
//! of `min_capacity`. `N` appends to a null buffer therefore cost
//! `O(log N)` reallocations and `O(N)` element copies.
//!
//! # Aliasing
//!
//! Growth may move the storage. [`Buffer::push`] takes `&mut self` and
//! [`Buffer::append`] consumes and returns the buffer, so no borrowed
//! slice can outlive a reallocation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod policy;

pub use buffer::Buffer;
pub use policy::GrowthPolicy;
