//! Value equality for containers.
//!
//! [`ValueEq`] wraps a container and compares it to other wrapped
//! containers by their elements rather than by identity. Order counts only
//! when both sides ask for it and both containers are [`Sequenced`];
//! otherwise the comparison is a multiset one, where duplicate counts still
//! matter.
//!
//! ```
//! use std::collections::HashSet;
//! use value_eq::{IntoValueEq, OrderMode};
//!
//! let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
//! let ordered = vec![2, 1, 3].into_ordered_value_eq();
//! assert_eq!(ordered.ordering(), OrderMode::Consider);
//! assert!(set.into_value_eq() == ordered);
//! assert!(vec![1, 2, 3].into_ordered_value_eq() != ordered);
//! ```

mod container;
mod error;
mod hash;
mod multiset;
mod order;
mod wrapper;

pub use container::{Container, Sequenced};
pub use error::{CollectionError, Result};
pub use order::OrderMode;
pub use wrapper::{IntoValueEq, ValueEq};
