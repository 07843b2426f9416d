pub mod entity;
pub mod repository;
pub mod tree;
pub mod value_objects;

pub use entity::{Comment, NewComment};
pub use repository::{CommentFilter, CommentRepository};
pub use tree::{
    CommentNode, MAX_REPLY_DEPTH, MAX_THREAD_DEPTH, build_comment_tree, node_count,
    prune_deeper_than,
};
pub use value_objects::{CommentContent, CommentId};
