//! Dotted-path typed accessors over an NBT compound tree.
//!
//! ```
//! use nbt_path::{Compound, TagAccessor, TagID};
//!
//! let mut stack_tag: Option<Compound> = None;
//! TagAccessor::of_holder(&mut stack_tag)
//!     .set_int("display.color", 0xff00ff)
//!     .set_string("display.name", "Lantern");
//!
//! let accessor = TagAccessor::of_holder(&mut stack_tag);
//! assert_eq!(accessor.get_int("display.color"), 0xff00ff);
//! assert_eq!(accessor.get_int("display.name"), 0);
//! assert!(accessor.has("display", TagID::Compound));
//! ```

mod accessor;
mod compound;
mod error;
mod holder;
pub mod path;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod tag;
mod util;
mod value;

pub use accessor::*;
pub use compound::*;
pub use error::*;
pub use holder::*;
pub use path::{AsTagPath, SEPARATOR, TagPath};
pub use tag::{NBT, TagID, TagMatch};
pub(crate) use util::*;
pub use value::*;
