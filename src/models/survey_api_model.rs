use chrono::{NaiveDate, TimeDelta};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::errors::AppError;

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct NewSurveyRequest {
    #[serde(rename = "SurveyTitle")]
    pub survey_title: Option<String>,
    #[serde(rename = "Deadline")]
    pub deadline: Option<String>,
    #[serde(rename = "Time")]
    pub time: Option<String>,
    /// Base64 encoded image, stored as-is.
    #[serde(rename = "Image")]
    pub image: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// Ids arrive as JSON numbers or as numeric strings (`"5"`). A blank string
/// reads as absent; anything else that is not an integer fails to parse.
fn id_or_numeric_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawId::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid id {text:?}"))),
    }
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct NewQuestionRequest {
    #[serde(rename = "SurveyID", default, deserialize_with = "id_or_numeric_string")]
    pub survey_id: Option<i64>,
    #[serde(rename = "QuestionText")]
    pub question_text: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct NewOptionRequest {
    #[serde(rename = "QuestionID", default, deserialize_with = "id_or_numeric_string")]
    pub question_id: Option<i64>,
    #[serde(rename = "OptionText")]
    pub option_text: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct VoteRequest {
    #[serde(rename = "OptionID", default, deserialize_with = "id_or_numeric_string")]
    pub option_id: Option<i64>,
}

#[derive(Debug, PartialEq)]
pub struct NewSurvey {
    pub title: String,
    pub deadline: Option<String>,
    pub time: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct NewQuestion {
    pub survey_id: i64,
    pub text: String,
}

#[derive(Debug, PartialEq)]
pub struct NewOption {
    pub question_id: i64,
    pub text: String,
}

// Blank strings and zero ids count as missing.
fn present_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn present_id(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v != 0)
}

impl NewSurveyRequest {
    pub fn validate(self) -> Result<NewSurvey, AppError> {
        let title = present_text(self.survey_title)
            .ok_or_else(|| AppError::Validation("SurveyTitle is required".to_string()))?;
        Ok(NewSurvey {
            title,
            deadline: self.deadline,
            time: self.time,
            image: self.image,
        })
    }
}

impl NewQuestionRequest {
    pub fn validate(self) -> Result<NewQuestion, AppError> {
        match (present_id(self.survey_id), present_text(self.question_text)) {
            (Some(survey_id), Some(text)) => Ok(NewQuestion { survey_id, text }),
            _ => Err(AppError::Validation(
                "SurveyID and QuestionText are required".to_string(),
            )),
        }
    }
}

impl NewOptionRequest {
    pub fn validate(self) -> Result<NewOption, AppError> {
        match (present_id(self.question_id), present_text(self.option_text)) {
            (Some(question_id), Some(text)) => Ok(NewOption { question_id, text }),
            _ => Err(AppError::Validation(
                "QuestionID and OptionText are required".to_string(),
            )),
        }
    }
}

impl VoteRequest {
    pub fn validate(self) -> Result<i64, AppError> {
        present_id(self.option_id)
            .ok_or_else(|| AppError::Validation("OptionID is required".to_string()))
    }
}

/// Survey as returned to clients, with date and time flattened to text.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct SurveyRecord {
    #[serde(rename = "SurveyID")]
    pub survey_id: i64,
    #[serde(rename = "SurveyTitle")]
    pub survey_title: String,
    #[serde(rename = "Deadline")]
    pub deadline: Option<String>,
    #[serde(rename = "Time")]
    pub time: Option<String>,
    #[serde(rename = "Image")]
    pub image: Option<String>,
}

/// Calendar date as `YYYY-MM-DD`.
pub fn format_deadline(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

const MICROS_PER_DAY: i64 = 86_400_000_000;

/// Duration text in `H:MM:SS` form, with a `.ffffff` suffix only when there
/// are sub-second parts. Whole days are split off in front (`2 days, 0:00:00`),
/// and negative values borrow a day so the clock part stays positive
/// (`-1 day, 23:00:00`).
pub fn format_duration(duration: TimeDelta) -> String {
    let total = duration.num_seconds() * 1_000_000 + i64::from(duration.subsec_nanos() / 1_000);
    let days = total.div_euclid(MICROS_PER_DAY);
    let rest = total.rem_euclid(MICROS_PER_DAY);

    let secs = rest / 1_000_000;
    let micros = rest % 1_000_000;
    let mut text = format!("{}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60);
    if micros != 0 {
        text.push_str(&format!(".{micros:06}"));
    }
    match days {
        0 => text,
        1 | -1 => format!("{days} day, {text}"),
        _ => format!("{days} days, {text}"),
    }
}
