use oracle::{Connection, Error};
use r2d2::CustomizeConnection;
use tracing::trace;

/// Runs a fixed statement on every newly opened Oracle session.
///
/// The statement executes once per physical connection, before the pool hands it out.
#[derive(Debug, Clone)]
pub struct SessionInitializer {
    sql: String,
}

impl SessionInitializer {
    pub fn new(sql: impl Into<String>) -> Self {
        Self { sql: sql.into() }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }
}

impl CustomizeConnection<Connection, Error> for SessionInitializer {
    fn on_acquire(&self, conn: &mut Connection) -> Result<(), Error> {
        trace!(sql = %self.sql, "initializing oracle session");
        conn.execute(&self.sql, &[])?;

        Ok(())
    }
}
