// src/domain/comment/tree.rs
use crate::domain::comment::entity::Comment;
use crate::domain::comment::value_objects::CommentId;
use std::collections::HashMap;

/// Roots sit at depth 0. Replies can be made to comments above this depth.
pub const MAX_REPLY_DEPTH: usize = 2;

/// Hard nesting limit. New replies may not go deeper, and stored replies
/// below it are cut from the rendered tree.
pub const MAX_THREAD_DEPTH: usize = 32;

#[derive(Debug, Clone)]
pub struct CommentNode {
    pub comment: Comment,
    pub depth: usize,
    pub children: Vec<CommentNode>,
}

impl CommentNode {
    pub fn can_reply(&self) -> bool {
        self.depth < MAX_REPLY_DEPTH
    }

    /// This node plus all of its descendants.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }
}

// Reply chains can be arbitrarily long; the default drop would recurse once
// per level.
impl Drop for CommentNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Build the reply forest for one article's comments.
///
/// `comments` is expected oldest first and that order is kept among siblings.
/// Comments whose parent is not in the list are dropped together with their
/// replies. Every comment has a single parent, so walking down from the roots
/// visits each reachable comment exactly once.
pub fn build_comment_tree(comments: &[Comment]) -> Vec<CommentNode> {
    let mut replies: HashMap<CommentId, Vec<&Comment>> = HashMap::new();
    for comment in comments {
        if let Some(parent_id) = comment.parent_id {
            replies.entry(parent_id).or_default().push(comment);
        }
    }

    let mut forest = Vec::new();
    for root in comments.iter().filter(|comment| comment.parent_id.is_none()) {
        // Each frame is a comment whose children are still being built.
        let mut stack: Vec<(&Comment, Vec<CommentNode>)> = vec![(root, Vec::new())];

        while let Some((comment, built)) = stack.last_mut() {
            let comment: &Comment = *comment;
            let direct = replies.get(&comment.id).map(Vec::as_slice).unwrap_or_default();

            if let Some(&next) = direct.get(built.len()) {
                stack.push((next, Vec::new()));
                continue;
            }

            let Some((comment, children)) = stack.pop() else {
                break;
            };
            let node = CommentNode {
                comment: comment.clone(),
                depth: stack.len(),
                children,
            };
            match stack.last_mut() {
                Some((_, siblings)) => siblings.push(node),
                None => forest.push(node),
            }
        }
    }
    forest
}

pub fn node_count(forest: &[CommentNode]) -> usize {
    forest.iter().map(CommentNode::subtree_size).sum()
}

/// Remove every node at or below `max_depth`. Returns how many were removed.
pub fn prune_deeper_than(forest: &mut [CommentNode], max_depth: usize) -> usize {
    let mut removed = 0;
    let mut pending: Vec<&mut CommentNode> = forest.iter_mut().collect();
    while let Some(node) = pending.pop() {
        if node.depth + 1 >= max_depth {
            removed += node.subtree_size() - 1;
            node.children.clear();
        } else {
            pending.extend(node.children.iter_mut());
        }
    }
    removed
}
