#![no_std]

//! `DynamicArrayList`: a resizable list backed by a single owned array buffer.
//!
//! The list keeps its elements in insertion order in a contiguous buffer and
//! supports indexed access, positional insertion and removal, search by value,
//! sorting and explicit capacity management.
//!
//! The crate is `no_std` and only needs `alloc`. Enable the optional `std`
//! feature to have `ListError` implement `std::error::Error` through `thiserror`:
//! ```toml
//! [dependencies]
//! dynamic_array_list = { version = "0.1", features = ["std"] }
//! ```
//!
//! # Performance Characteristics
//!
//! - `add()`: amortized O(1). A full buffer grows to 1.5 times its capacity,
//!   so N appends copy O(N) elements in total.
//! - `get()`, `set()`, `len()`, `is_empty()`: O(1)
//! - `add_at()`, `remove()`, `remove_value()`, `index_of()`, `contains()`: O(n)
//! - `sort_by()`: O(n log n)
//! - `trim_to_size()`: O(n), reallocates to exactly `len()` slots
//!
//! The buffer never shrinks on its own.
//!
//! # List Interface
//!
//! The operations live on the [`List`] trait:
//!
//! ```
//! use dynamic_array_list::{DynamicArrayList, List};
//!
//! let mut list = DynamicArrayList::new();
//! list.add("Hello");
//! list.add("Bye");
//! list.add("Good");
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(1), Ok(&"Bye"));
//! assert_eq!(list.index_of(&"Good"), Some(2));
//!
//! list.add_at(1, "new").unwrap();
//! assert_eq!(list.to_string(), "[Hello, new, Bye, Good]");
//!
//! assert_eq!(list.remove(1), Ok("new"));
//! assert!(list.remove_value(&"Hello"));
//! assert_eq!(list.to_string(), "[Bye, Good]");
//! ```
//!
//! # Errors
//!
//! Range violations are reported, never clamped:
//!
//! ```
//! use dynamic_array_list::{DynamicArrayList, List, ListError};
//!
//! let mut list: DynamicArrayList<i32> = DynamicArrayList::new();
//! assert_eq!(
//!     list.get(21),
//!     Err(ListError::IndexOutOfRange { index: 21, length: 0 })
//! );
//! assert_eq!(
//!     list.add_at(1, 7),
//!     Err(ListError::BoundaryFault { index: 1, length: 0 })
//! );
//! assert!(DynamicArrayList::<i32>::with_capacity(-1).is_err());
//! ```
//!
//! # Absent Elements
//!
//! Elements that may be missing are stored as `Option`. Searching for `None`
//! matches only stored `None` elements:
//!
//! ```
//! use dynamic_array_list::{DynamicArrayList, List};
//!
//! let list: DynamicArrayList<Option<&str>> = [Some("a"), None, Some("b")].into_iter().collect();
//! assert_eq!(list.index_of(&None), Some(1));
//! assert!(list.contains(&Some("b")));
//! ```
//!
//! # Capacity
//!
//! ```
//! use dynamic_array_list::{DynamicArrayList, List, DEFAULT_CAPACITY};
//!
//! let mut list = DynamicArrayList::new();
//! assert_eq!(list.capacity(), DEFAULT_CAPACITY);
//!
//! for i in 0..11 {
//!     list.add(i);
//! }
//! assert_eq!(list.capacity(), 15);
//!
//! list.trim_to_size();
//! assert_eq!(list.capacity(), 11);
//! ```

extern crate alloc;

mod array_list;
mod error;
mod iter;
mod list;

// Re-export public types and traits
pub use array_list::{DynamicArrayList, DEFAULT_CAPACITY};
pub use error::{ListError, Result};
pub use iter::{IntoIter, Iter};
pub use list::List;
