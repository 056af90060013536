use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A comment as it crosses the wire: `created_at` is already rendered with
/// [`super::DATE_FORMAT`], so the client never sees raw database times.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub name: Option<String>,
    pub page: String,
    pub created_at: String,
    pub parent_id: Option<Uuid>,
}

/// A comment plus its replies. Never persisted; rebuilt from the flat list
/// on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentNode {
    pub comment: Comment,
    pub children: Vec<CommentNode>,
}

#[cfg(feature = "ssr")]
#[derive(sqlx::FromRow)]
struct CommentRecord {
    id: Uuid,
    content: String,
    name: Option<String>,
    page: String,
    created_at: chrono::DateTime<chrono::Utc>,
    parent_id: Option<Uuid>,
}

#[cfg(feature = "ssr")]
impl From<CommentRecord> for Comment {
    fn from(x: CommentRecord) -> Self {
        Self {
            id: x.id,
            content: x.content,
            name: x.name,
            page: x.page,
            created_at: x.created_at.format(super::DATE_FORMAT).to_string(),
            parent_id: x.parent_id,
        }
    }
}

impl Comment {
    #[cfg(feature = "ssr")]
    pub async fn insert(
        content: String,
        name: String,
        page: String,
        parent_id: Option<Uuid>,
    ) -> Result<sqlx::postgres::PgQueryResult, sqlx::Error> {
        sqlx::query(
            "INSERT INTO Comments(content, name, page, parent_id) VALUES ($1, $2, $3, $4)",
        )
        .bind(content)
        .bind(name)
        .bind(page)
        .bind(parent_id)
        .execute(crate::database::get_db())
        .await
    }

    #[cfg(feature = "ssr")]
    pub async fn for_page(page: &str) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, CommentRecord>(
            "
        SELECT id, content, name, page, created_at, parent_id FROM Comments
        WHERE page = $1
        ORDER BY created_at DESC",
        )
        .bind(page)
        .fetch_all(crate::database::get_db())
        .await
        .map(|rows| rows.into_iter().map(Self::from).collect())
    }
}

/// Rebuilds the reply tree from a flat comment list.
///
/// Comments are indexed by id once, then linked strictly parent -> children;
/// a parent that is missing from the set (or that points back at the comment
/// itself) degrades the comment to a root instead of dropping it. Roots come
/// out newest-first, every reply list oldest-first; equal timestamps fall
/// back to id order so the result does not depend on input order.
pub fn build_comment_tree(comments: &[Comment]) -> Vec<CommentNode> {
    let slot_of: HashMap<Uuid, usize> = comments
        .iter()
        .enumerate()
        .map(|(slot, c)| (c.id, slot))
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); comments.len()];
    let mut roots: Vec<usize> = Vec::new();

    for (slot, comment) in comments.iter().enumerate() {
        let parent_slot = comment
            .parent_id
            .filter(|parent| *parent != comment.id)
            .and_then(|parent| slot_of.get(&parent).copied());
        match parent_slot {
            Some(parent) => children[parent].push(slot),
            None => roots.push(slot),
        }
    }

    let mut tree: Vec<CommentNode> = roots
        .into_iter()
        .map(|slot| assemble(slot, comments, &children))
        .collect();
    tree.sort_by(|a, b| {
        b.comment
            .created_at
            .cmp(&a.comment.created_at)
            .then_with(|| a.comment.id.cmp(&b.comment.id))
    });
    tree
}

fn assemble(slot: usize, comments: &[Comment], children: &[Vec<usize>]) -> CommentNode {
    let mut replies: Vec<CommentNode> = children[slot]
        .iter()
        .map(|&child| assemble(child, comments, children))
        .collect();
    replies.sort_by(|a, b| {
        a.comment
            .created_at
            .cmp(&b.comment.created_at)
            .then_with(|| a.comment.id.cmp(&b.comment.id))
    });
    CommentNode {
        comment: comments[slot].clone(),
        children: replies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: u128, parent: Option<u128>, created_at: &str) -> Comment {
        Comment {
            id: Uuid::from_u128(id),
            content: format!("コメント {id}"),
            name: Some("テスト".into()),
            page: "abc".into(),
            created_at: created_at.into(),
            parent_id: parent.map(Uuid::from_u128),
        }
    }

    fn node_count(nodes: &[CommentNode]) -> usize {
        nodes.iter().map(|n| 1 + node_count(&n.children)).sum()
    }

    #[test]
    fn empty_list_builds_empty_tree() {
        assert!(build_comment_tree(&[]).is_empty());
    }

    #[test]
    fn replies_attach_under_their_parent() {
        // A(root, 10:00), B(root, 10:05), C(reply to A, 10:02)
        let comments = vec![
            comment(1, None, "2024-05-01T10:00:00.000Z"),
            comment(2, None, "2024-05-01T10:05:00.000Z"),
            comment(3, Some(1), "2024-05-01T10:02:00.000Z"),
        ];

        let tree = build_comment_tree(&comments);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].comment.id, Uuid::from_u128(2));
        assert_eq!(tree[1].comment.id, Uuid::from_u128(1));
        assert_eq!(tree[1].children.len(), 1);
        assert_eq!(tree[1].children[0].comment.id, Uuid::from_u128(3));
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn roots_are_newest_first() {
        let comments = vec![
            comment(1, None, "2024-05-01T08:00:00.000Z"),
            comment(2, None, "2024-05-01T12:00:00.000Z"),
            comment(3, None, "2024-05-01T10:00:00.000Z"),
        ];

        let ids: Vec<Uuid> = build_comment_tree(&comments)
            .iter()
            .map(|n| n.comment.id)
            .collect();

        assert_eq!(
            ids,
            vec![Uuid::from_u128(2), Uuid::from_u128(3), Uuid::from_u128(1)]
        );
    }

    #[test]
    fn replies_are_oldest_first_at_every_depth() {
        let comments = vec![
            comment(1, None, "2024-05-01T09:00:00.000Z"),
            comment(2, Some(1), "2024-05-01T11:00:00.000Z"),
            comment(3, Some(1), "2024-05-01T10:00:00.000Z"),
            comment(4, Some(3), "2024-05-01T12:30:00.000Z"),
            comment(5, Some(3), "2024-05-01T12:00:00.000Z"),
        ];

        let tree = build_comment_tree(&comments);

        let first_level: Vec<Uuid> = tree[0].children.iter().map(|n| n.comment.id).collect();
        assert_eq!(first_level, vec![Uuid::from_u128(3), Uuid::from_u128(2)]);

        let second_level: Vec<Uuid> = tree[0].children[0]
            .children
            .iter()
            .map(|n| n.comment.id)
            .collect();
        assert_eq!(second_level, vec![Uuid::from_u128(5), Uuid::from_u128(4)]);
    }

    #[test]
    fn orphan_becomes_root() {
        let comments = vec![
            comment(1, None, "2024-05-01T10:00:00.000Z"),
            comment(2, Some(99), "2024-05-01T11:00:00.000Z"),
        ];

        let tree = build_comment_tree(&comments);

        assert_eq!(tree.len(), 2);
        assert_eq!(node_count(&tree), comments.len());
    }

    #[test]
    fn self_referencing_comment_becomes_root() {
        let comments = vec![comment(1, Some(1), "2024-05-01T10:00:00.000Z")];

        let tree = build_comment_tree(&comments);

        assert_eq!(tree.len(), 1);
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn no_comments_are_lost() {
        let comments = vec![
            comment(1, None, "2024-05-01T09:00:00.000Z"),
            comment(2, Some(1), "2024-05-01T09:10:00.000Z"),
            comment(3, Some(2), "2024-05-01T09:20:00.000Z"),
            comment(4, None, "2024-05-01T09:30:00.000Z"),
            comment(5, Some(42), "2024-05-01T09:40:00.000Z"),
            comment(6, Some(4), "2024-05-01T09:50:00.000Z"),
        ];

        assert_eq!(node_count(&build_comment_tree(&comments)), comments.len());
    }

    #[test]
    fn rebuild_is_idempotent() {
        let comments = vec![
            comment(1, None, "2024-05-01T09:00:00.000Z"),
            comment(2, Some(1), "2024-05-01T09:10:00.000Z"),
            comment(3, None, "2024-05-01T09:20:00.000Z"),
            comment(4, Some(3), "2024-05-01T09:30:00.000Z"),
        ];

        assert_eq!(build_comment_tree(&comments), build_comment_tree(&comments));
    }

    #[test]
    fn equal_timestamps_fall_back_to_id_order() {
        let at = "2024-05-01T10:00:00.000Z";
        let comments = vec![
            comment(7, None, at),
            comment(2, None, at),
            comment(5, None, at),
        ];

        let ids: Vec<Uuid> = build_comment_tree(&comments)
            .iter()
            .map(|n| n.comment.id)
            .collect();

        assert_eq!(
            ids,
            vec![Uuid::from_u128(2), Uuid::from_u128(5), Uuid::from_u128(7)]
        );
    }
}
