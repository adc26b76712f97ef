pub mod control;
pub mod document;
pub mod element;
pub mod selector;
pub mod validity;

pub use control::{parse_number, ControlKind, FileEntry, FileList};
pub use document::{Document, NodeId};
pub use element::{Content, Element};
pub use selector::{Selector, SelectorError};
pub use validity::ValidityState;
