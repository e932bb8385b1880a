#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs, warnings)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

#[cfg(feature = "std")]
extern crate std;

mod arena;

mod error;
pub use error::Error;

mod level;
pub use level::LevelGenerator;

/// The node type stored in the [`SkipList`].
pub mod node;
pub use node::Node;

mod options;
pub use options::Options;

/// The skiplist and its iterators.
pub mod list;
pub use list::SkipList;

/// Re-export of the [`rand`] crate, so that custom generators can be built
/// without depending on a matching version of `rand` directly.
pub use rand;
