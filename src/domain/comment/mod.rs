//! Comment domain module

mod entity;

pub use entity::{Comment, CommentId, Reaction, MAX_COMMENT_LENGTH};
