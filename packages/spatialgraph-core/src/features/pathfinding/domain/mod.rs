mod path;

pub use path::{Path, PathMember};
