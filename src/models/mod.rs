mod comment;
mod content;

pub use comment::{build_comment_tree, Comment, CommentNode};
pub use content::{ContentItem, ContentKind};

/// Wire format for timestamps: fixed-width UTC ISO-8601, so serialized
/// values compare lexicographically in chronological order.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
