use sqlx::MySqlPool;

use crate::models::{
    survey_api_model::NewQuestion,
    survey_results::{group_results, QuestionResult, ResultRow},
};

#[derive(Clone)]
pub struct QuestionRepo {
    pool: MySqlPool,
}

impl QuestionRepo {
    pub fn init(pool: &MySqlPool) -> Self {
        Self { pool: pool.clone() }
    }

    /// The parent survey is not checked here; the foreign key rejects unknown ids.
    pub async fn insert(&self, new_question: &NewQuestion) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO Questions (SurveyID, QuestionText) VALUES (?, ?)")
            .bind(new_question.survey_id)
            .bind(&new_question.text)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id() as i64)
    }

    pub async fn results(&self, survey_id: i64) -> Result<Vec<QuestionResult>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ResultRow>(
            "SELECT q.QuestionID, q.QuestionText, o.OptionID, o.OptionText, o.Votes
             FROM Questions q
             LEFT JOIN Options o ON q.QuestionID = o.QuestionID
             WHERE q.SurveyID = ?
             ORDER BY q.QuestionID, o.OptionID",
        )
        .bind(survey_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(group_results(rows))
    }
}
