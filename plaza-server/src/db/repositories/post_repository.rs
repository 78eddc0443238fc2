use anyhow::{Context, Result};
use rusqlite::OptionalExtension;

use plaza_types::Post;

use crate::db::DbPool;

use super::parse_created_at;

pub struct PostRepository {
    pool: DbPool,
}

impl PostRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get all posts joined with their author's username, newest first.
    pub fn list_all(&self) -> Result<Vec<Post>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT p.id, p.title, p.body, p.user_id, u.username, p.created_at
             FROM posts p
             JOIN users u ON p.user_id = u.id
             ORDER BY p.created_at DESC, p.id DESC",
        )?;

        let posts = stmt
            .query_map([], |row| {
                Ok(Post {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    body: row.get(2)?,
                    user_id: row.get(3)?,
                    username: row.get(4)?,
                    created_at: parse_created_at(&row.get::<_, String>(5)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(posts)
    }

    /// Get a single post by ID, joined with its author's username
    pub fn get_by_id(&self, post_id: i64) -> Result<Option<Post>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT p.id, p.title, p.body, p.user_id, u.username, p.created_at
             FROM posts p
             JOIN users u ON p.user_id = u.id
             WHERE p.id = ?",
        )?;

        let post = stmt
            .query_row([post_id], |row| {
                Ok(Post {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    body: row.get(2)?,
                    user_id: row.get(3)?,
                    username: row.get(4)?,
                    created_at: parse_created_at(&row.get::<_, String>(5)?),
                })
            })
            .optional()?;

        Ok(post)
    }

    /// Insert a new post and return its generated id. A `user_id` with no
    /// matching user fails the foreign-key constraint.
    pub fn create(&self, title: &str, body: &str, user_id: i64) -> Result<i64> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO posts (title, body, user_id) VALUES (?, ?, ?)",
            (title, body, user_id),
        )
        .context("Failed to create post")?;
        Ok(conn.last_insert_rowid())
    }
}
