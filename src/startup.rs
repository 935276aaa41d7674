use sea_orm::DatabaseConnection;

use crate::{config::Config, error::Error};

/// Build and configure the QNAS client with the provided credentials
pub fn build_qnas_client(config: &Config) -> Result<qnas::Client, Error> {
    let mut builder = qnas::Client::builder().base_url(&config.qnas_base_url);

    if let Some(token) = &config.qnas_api_token {
        builder = builder.token(token);
    }
    if let Some(domain) = &config.qnas_api_domain {
        builder = builder.domain(domain);
    }

    Ok(builder.build()?)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
