pub mod node;
pub mod project;
pub mod tree;

pub use node::{BookmarkNode, Folder, Link};
pub use project::{LinkSummary, Projection, ProjectionMode, project};
pub use tree::{RootSet, Selection, resolve};
