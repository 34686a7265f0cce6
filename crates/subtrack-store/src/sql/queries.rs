//! SQL queries and schema for different databases.
//!
//! Dates are stored as ISO-8601 text so the same column types work across
//! all three drivers supported by the `Any` pool.

/// Query to find a user id by name (PostgreSQL).
pub const FIND_USER_PG: &str = r#"
SELECT id FROM subtrack_users
WHERE user_name = $1
"#;

/// Query to find a user id by name (MySQL/SQLite).
pub const FIND_USER_MYSQL: &str = r#"
SELECT id FROM subtrack_users
WHERE user_name = ?
"#;

/// Query to register a user (PostgreSQL).
pub const INSERT_USER_PG: &str = r#"
INSERT INTO subtrack_users (user_name)
VALUES ($1)
"#;

/// Query to register a user (MySQL/SQLite).
pub const INSERT_USER_MYSQL: &str = r#"
INSERT INTO subtrack_users (user_name)
VALUES (?)
"#;

/// Query to insert a subscription period (PostgreSQL).
pub const INSERT_SUBSCRIPTION_PG: &str = r#"
INSERT INTO subtrack_subscriptions (user_id, plan_id, start_date, valid_till)
VALUES ($1, $2, $3, $4)
"#;

/// Query to insert a subscription period (MySQL/SQLite).
pub const INSERT_SUBSCRIPTION_MYSQL: &str = r#"
INSERT INTO subtrack_subscriptions (user_id, plan_id, start_date, valid_till)
VALUES (?, ?, ?, ?)
"#;

/// Query to list a user's subscription periods (PostgreSQL).
pub const LIST_SUBSCRIPTIONS_PG: &str = r#"
SELECT plan_id, start_date, valid_till
FROM subtrack_subscriptions
WHERE user_id = $1
"#;

/// Query to list a user's subscription periods (MySQL/SQLite).
pub const LIST_SUBSCRIPTIONS_MYSQL: &str = r#"
SELECT plan_id, start_date, valid_till
FROM subtrack_subscriptions
WHERE user_id = ?
"#;

/// Schema bootstrap statements (PostgreSQL).
pub const SCHEMA_PG: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS subtrack_users (
    id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    user_name TEXT NOT NULL UNIQUE
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS subtrack_subscriptions (
    id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    user_id BIGINT NOT NULL REFERENCES subtrack_users(id),
    plan_id TEXT NOT NULL,
    start_date TEXT NOT NULL,
    valid_till TEXT NOT NULL
)
"#,
];

/// Schema bootstrap statements (MySQL).
pub const SCHEMA_MYSQL: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS subtrack_users (
    id BIGINT AUTO_INCREMENT PRIMARY KEY,
    user_name VARCHAR(255) NOT NULL UNIQUE
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS subtrack_subscriptions (
    id BIGINT AUTO_INCREMENT PRIMARY KEY,
    user_id BIGINT NOT NULL,
    plan_id VARCHAR(64) NOT NULL,
    start_date VARCHAR(32) NOT NULL,
    valid_till VARCHAR(32) NOT NULL
)
"#,
];

/// Schema bootstrap statements (SQLite).
pub const SCHEMA_SQLITE: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS subtrack_users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_name TEXT NOT NULL UNIQUE
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS subtrack_subscriptions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES subtrack_users(id),
    plan_id TEXT NOT NULL,
    start_date TEXT NOT NULL,
    valid_till TEXT NOT NULL
)
"#,
];
