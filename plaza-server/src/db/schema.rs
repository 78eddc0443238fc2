/// SQL schema for the Plaza database
/// Creates the three tables with their declared constraints
pub const SCHEMA: &str = r#"
-- Users table
CREATE TABLE users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username VARCHAR(50) NOT NULL UNIQUE,
    role VARCHAR(20) DEFAULT 'user',
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

-- Posts table
CREATE TABLE posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title VARCHAR(100) NOT NULL,
    body TEXT NOT NULL,
    user_id INTEGER NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES users(id)
);

-- Follows table (directed edges, seeded only)
CREATE TABLE follows (
    following_user_id INTEGER,
    followed_user_id INTEGER,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    PRIMARY KEY (following_user_id, followed_user_id),
    FOREIGN KEY (following_user_id) REFERENCES users(id),
    FOREIGN KEY (followed_user_id) REFERENCES users(id)
);
"#;

/// Fixed rows inserted once, when the database file is first created.
/// Timestamps come from the column defaults.
pub const SEED_DATA: &str = r#"
INSERT INTO users (username, role) VALUES
    ('juan_dev', 'user'),
    ('maria_admin', 'admin'),
    ('carlos_student', 'user');

INSERT INTO posts (title, body, user_id) VALUES
    ('Mi primer post', 'Hola mundo desde la API con SQLite!', 1),
    ('Segundo post', 'Este proyecto está genial', 2),
    ('Aprendiendo FastAPI', 'Es más fácil de lo que pensé', 3);

INSERT INTO follows (following_user_id, followed_user_id) VALUES
    (1, 2),
    (1, 3),
    (2, 3);
"#;
