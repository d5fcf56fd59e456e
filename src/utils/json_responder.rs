use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorBody {
            error: error.into(),
        }
    }
}

/// Success payload: a human readable message plus, for inserts, the new row id
/// under the caller-facing key (`SurveyID`, `QuestionID`, ...).
#[derive(Serialize, Debug)]
pub struct Response {
    pub message: &'static str,
    #[serde(flatten)]
    pub created: Option<CreatedId>,
}

#[derive(Serialize, Debug)]
pub enum CreatedId {
    SurveyID(i64),
    QuestionID(i64),
    OptionID(i64),
}

impl Response {
    pub fn created(message: &'static str, id: CreatedId) -> HttpResponse {
        HttpResponse::Created().json(Response {
            message,
            created: Some(id),
        })
    }

    pub fn ok(message: &'static str) -> HttpResponse {
        HttpResponse::Ok().json(Response {
            message,
            created: None,
        })
    }
}
