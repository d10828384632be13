//! Row source for the `users` table.
//!
//! The database is an external collaborator: this module only opens the
//! connection and fetches rows. Its errors propagate to the caller as-is;
//! a batch is never partially retried.

use crate::config::DbConfig;
use crate::error::Result;
use crate::row::RowValue;
use chrono::NaiveDateTime;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

/// Column order for serialized user rows; matches [`fetch_users`].
pub const USER_COLUMNS: [&str; 8] = [
    "name",
    "email",
    "phone",
    "ssn",
    "password",
    "ip",
    "last_login",
    "user_agent",
];

/// One row of the `users` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub ssn: String,
    pub password: String,
    pub ip: String,
    pub last_login: NaiveDateTime,
    pub user_agent: String,
}

impl UserRecord {
    /// Column values in [`USER_COLUMNS`] order.
    pub fn into_values(self) -> Vec<RowValue> {
        vec![
            RowValue::Text(self.name),
            RowValue::Text(self.email),
            RowValue::Text(self.phone),
            RowValue::Text(self.ssn),
            RowValue::Text(self.password),
            RowValue::Text(self.ip),
            RowValue::DateTime(self.last_login),
            RowValue::Text(self.user_agent),
        ]
    }
}

/// Open a connection to the personal-data database.
pub async fn connect(config: &DbConfig) -> Result<MySqlPool> {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database)
        .username(&config.username)
        .password(&config.password);

    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Fetch every user row, in table order.
pub async fn fetch_users(pool: &MySqlPool) -> Result<Vec<UserRecord>> {
    let users = sqlx::query_as::<_, UserRecord>(
        "SELECT name, email, phone, ssn, password, ip, last_login, user_agent FROM users",
    )
    .fetch_all(pool)
    .await?;
    Ok(users)
}
