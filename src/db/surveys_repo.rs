use chrono::{NaiveDate, TimeDelta};
use futures::TryStreamExt;
use sqlx::MySqlPool;

use crate::models::survey_api_model::{format_deadline, format_duration, NewSurvey, SurveyRecord};

#[derive(Debug, sqlx::FromRow)]
pub struct Survey {
    #[sqlx(rename = "SurveyID")]
    pub id: i64,
    #[sqlx(rename = "SurveyTitle")]
    pub title: String,
    #[sqlx(rename = "Deadline")]
    pub deadline: Option<NaiveDate>,
    #[sqlx(rename = "Time")]
    pub time: Option<TimeDelta>,
    #[sqlx(rename = "Image")]
    pub image: Option<String>,
}

impl From<Survey> for SurveyRecord {
    fn from(survey: Survey) -> Self {
        SurveyRecord {
            survey_id: survey.id,
            survey_title: survey.title,
            deadline: survey.deadline.map(format_deadline),
            time: survey.time.map(format_duration),
            image: survey.image,
        }
    }
}

const SELECT_SURVEYS: &str = "SELECT SurveyID, SurveyTitle, Deadline, Time, Image FROM Surveys ORDER BY SurveyID";
const SELECT_SURVEY_BY_ID: &str =
    "SELECT SurveyID, SurveyTitle, Deadline, Time, Image FROM Surveys WHERE SurveyID = ?";

#[derive(Clone)]
pub struct SurveyRepo {
    pool: MySqlPool,
}

impl SurveyRepo {
    pub fn init(pool: &MySqlPool) -> Self {
        Self { pool: pool.clone() }
    }

    /// Inserts a survey and returns its new id.
    pub async fn insert(&self, new_survey: &NewSurvey) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO Surveys (SurveyTitle, Deadline, Time, Image) VALUES (?, ?, ?, ?)",
        )
        .bind(&new_survey.title)
        .bind(&new_survey.deadline)
        .bind(&new_survey.time)
        .bind(&new_survey.image)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_id() as i64)
    }

    pub async fn list(&self) -> Result<Vec<SurveyRecord>, sqlx::Error> {
        sqlx::query_as::<_, Survey>(SELECT_SURVEYS)
            .fetch(&self.pool)
            .map_ok(SurveyRecord::from)
            .try_collect()
            .await
    }

    pub async fn get(&self, survey_id: i64) -> Result<Option<SurveyRecord>, sqlx::Error> {
        let survey = sqlx::query_as::<_, Survey>(SELECT_SURVEY_BY_ID)
            .bind(survey_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(survey.map(SurveyRecord::from))
    }
}
