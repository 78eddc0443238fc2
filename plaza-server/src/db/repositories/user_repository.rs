use anyhow::{Context, Result};
use rusqlite::OptionalExtension;

use plaza_types::User;

use crate::db::DbPool;

use super::parse_created_at;

pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get all users, newest first. The id tiebreak keeps the order
    /// deterministic for rows created within the same second.
    pub fn list_all(&self) -> Result<Vec<User>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, username, role, created_at
             FROM users
             ORDER BY created_at DESC, id DESC",
        )?;

        let users = stmt
            .query_map([], |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    role: row.get(2)?,
                    created_at: parse_created_at(&row.get::<_, String>(3)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }

    /// Get user by ID
    pub fn get_by_id(&self, user_id: i64) -> Result<Option<User>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, username, role, created_at
             FROM users
             WHERE id = ?",
        )?;

        let user = stmt
            .query_row([user_id], |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    role: row.get(2)?,
                    created_at: parse_created_at(&row.get::<_, String>(3)?),
                })
            })
            .optional()?;

        Ok(user)
    }

    /// Insert a new user and return its generated id. A duplicate
    /// username surfaces as a constraint violation.
    pub fn create(&self, username: &str, role: &str) -> Result<i64> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO users (username, role) VALUES (?, ?)",
            (username, role),
        )
        .context("Failed to create user")?;
        Ok(conn.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::is_constraint_violation;
    use crate::db::Database;
    use proptest::prelude::*;

    #[test]
    fn list_all_returns_seeded_users() {
        let db = Database::in_memory().expect("Failed to create database");
        let repo = UserRepository::new(db.pool.clone());

        let users = repo.list_all().expect("Failed to list users");
        assert_eq!(users.len(), 3);

        let mut usernames: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        usernames.sort();
        assert_eq!(usernames, vec!["carlos_student", "juan_dev", "maria_admin"]);
    }

    #[test]
    fn create_assigns_fresh_id_and_default_role_comes_from_caller() {
        let db = Database::in_memory().expect("Failed to create database");
        let repo = UserRepository::new(db.pool.clone());

        let id = repo.create("new_guy", "user").expect("Failed to create user");
        assert_eq!(id, 4);

        let user = repo
            .get_by_id(id)
            .expect("Failed to fetch user")
            .expect("User not found");
        assert_eq!(user.username, "new_guy");
        assert_eq!(user.role, "user");
        assert!(repo.list_all().unwrap().iter().any(|u| u.id == id));
    }

    #[test]
    fn duplicate_username_is_a_constraint_violation() {
        let db = Database::in_memory().expect("Failed to create database");
        let repo = UserRepository::new(db.pool.clone());

        let err = repo.create("juan_dev", "user").unwrap_err();
        assert!(is_constraint_violation(&err));

        // No second row was persisted
        let users = repo.list_all().expect("Failed to list users");
        assert_eq!(
            users.iter().filter(|u| u.username == "juan_dev").count(),
            1
        );
    }

    #[test]
    fn newest_first_ordering_holds_within_one_second() {
        let db = Database::in_memory().expect("Failed to create database");
        let repo = UserRepository::new(db.pool.clone());

        repo.create("first", "user").expect("Failed to create user");
        repo.create("second", "user").expect("Failed to create user");

        let users = repo.list_all().expect("Failed to list users");
        assert_eq!(users[0].username, "second");
        assert_eq!(users[1].username, "first");
    }

    proptest! {
        /// Created users round-trip their username and role.
        #[test]
        fn created_user_round_trips(username in "[a-z][a-z0-9_]{0,30}", admin in any::<bool>()) {
            prop_assume!(!["juan_dev", "maria_admin", "carlos_student"].contains(&username.as_str()));

            let db = Database::in_memory().expect("Failed to create database");
            let repo = UserRepository::new(db.pool.clone());
            let role = if admin { "admin" } else { "user" };

            let id = repo.create(&username, role).expect("Failed to create user");
            prop_assert!(id > 3);

            let user = repo
                .get_by_id(id)
                .expect("Failed to fetch user")
                .expect("User not found");
            prop_assert_eq!(user.username, username);
            prop_assert_eq!(user.role, role);
        }
    }
}
