use crate::config::app_config::DatabaseConfig;
use log::info;
use options_repo::OptionRepo;
use questions_repo::QuestionRepo;
use sqlx::{mysql::MySqlPoolOptions, MySqlPool};
use surveys_repo::SurveyRepo;
pub mod options_repo;
pub mod questions_repo;
pub mod surveys_repo;

/// Shared handle to the survey database. Each repo holds a clone of the same
/// pool; a connection is checked out per statement and returned on drop.
#[derive(Clone)]
pub struct DB {
    pub pool: MySqlPool,
    pub surveys: SurveyRepo,
    pub questions: QuestionRepo,
    pub options: OptionRepo,
}

impl DB {
    pub async fn init(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(config.connect_options())
            .await?;
        info!(
            "Connected to database {} at {}:{}",
            config.database, config.host, config.port
        );
        Ok(Self::from_pool(pool))
    }

    /// Builds a pool that only connects on first use.
    pub fn lazy(config: &DatabaseConfig) -> Self {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy_with(config.connect_options());
        Self::from_pool(pool)
    }

    pub fn from_pool(pool: MySqlPool) -> Self {
        DB {
            surveys: SurveyRepo::init(&pool),
            questions: QuestionRepo::init(&pool),
            options: OptionRepo::init(&pool),
            pool,
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}
