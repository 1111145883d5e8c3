use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entity::Movies;

/// Create a SeaORM connection.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let conn = Database::connect(database_url).await?;
    Ok(conn)
}

/// Create the store schema from the entity definitions if it does not
/// exist yet. Runs once at startup; existing tables are left untouched.
pub async fn setup_schema(conn: &DatabaseConnection) -> Result<()> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);

    let mut statement = schema.create_table_from_entity(Movies);
    statement.if_not_exists();
    conn.execute(backend.build(&statement)).await?;

    Ok(())
}
