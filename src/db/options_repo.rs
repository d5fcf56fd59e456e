use log::warn;
use sqlx::MySqlPool;

use crate::models::survey_api_model::NewOption;

#[derive(Clone)]
pub struct OptionRepo {
    pool: MySqlPool,
}

impl OptionRepo {
    pub fn init(pool: &MySqlPool) -> Self {
        Self { pool: pool.clone() }
    }

    pub async fn insert(&self, new_option: &NewOption) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO Options (QuestionID, OptionText) VALUES (?, ?)")
            .bind(new_option.question_id)
            .bind(&new_option.text)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id() as i64)
    }

    /// Adds one vote. The increment happens inside the UPDATE so concurrent
    /// votes never overwrite each other. Returns the number of rows touched;
    /// an unknown option id touches none and is not an error.
    pub async fn add_vote(&self, option_id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE Options SET Votes = Votes + 1 WHERE OptionID = ?")
            .bind(option_id)
            .execute(&self.pool)
            .await?;
        let affected = result.rows_affected();
        if affected == 0 {
            warn!("Vote for unknown option {}", option_id);
        }
        Ok(affected)
    }

    /// Current vote count, or `None` for an unknown option. No route reads
    /// this; it backs read-back checks in the database tests.
    pub async fn votes(&self, option_id: i64) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar("SELECT Votes FROM Options WHERE OptionID = ?")
            .bind(option_id)
            .fetch_optional(&self.pool)
            .await
    }
}
