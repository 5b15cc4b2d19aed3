pub mod grid;
pub mod range_set;

pub use self::grid::Grid;
pub use self::range_set::RangeSet;

use linked_hash_set::LinkedHashSet;

/// An insertion-ordered hash set, used as a deduplicated work queue
pub type LinkedAHashSet<T> = LinkedHashSet<T, ahash::RandomState>;
