use actix_web::{
    web::{Data, Json, Path, ServiceConfig},
    HttpResponse,
};
use log::debug;

use crate::{
    db::DB,
    errors::AppError,
    models::survey_api_model::{NewOptionRequest, NewQuestionRequest, NewSurveyRequest, VoteRequest},
    utils::json_responder::{CreatedId, Response},
};

#[actix_web::post("/add_survey")]
pub async fn add_survey(
    db: Data<DB>,
    Json(req): Json<NewSurveyRequest>,
) -> Result<HttpResponse, AppError> {
    let new_survey = req.validate()?;
    let survey_id = db.surveys.insert(&new_survey).await?;
    Ok(Response::created(
        "Survey added successfully",
        CreatedId::SurveyID(survey_id),
    ))
}

#[actix_web::post("/add_question")]
pub async fn add_question(
    db: Data<DB>,
    Json(req): Json<NewQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let new_question = req.validate()?;
    let question_id = db.questions.insert(&new_question).await?;
    Ok(Response::created(
        "Question added successfully",
        CreatedId::QuestionID(question_id),
    ))
}

#[actix_web::post("/add_option")]
pub async fn add_option(
    db: Data<DB>,
    Json(req): Json<NewOptionRequest>,
) -> Result<HttpResponse, AppError> {
    let new_option = req.validate()?;
    let option_id = db.options.insert(&new_option).await?;
    Ok(Response::created(
        "Option added successfully",
        CreatedId::OptionID(option_id),
    ))
}

#[actix_web::post("/vote_option")]
pub async fn vote_option(
    db: Data<DB>,
    Json(req): Json<VoteRequest>,
) -> Result<HttpResponse, AppError> {
    let option_id = req.validate()?;
    db.options.add_vote(option_id).await?;
    Ok(Response::ok("Vote recorded successfully"))
}

#[actix_web::get("/survey_results/{survey_id}")]
pub async fn survey_results(
    db: Data<DB>,
    survey_id: Path<i64>,
) -> Result<HttpResponse, AppError> {
    let results = db.questions.results(survey_id.into_inner()).await?;
    debug!("Returned results: {:?}", results);
    Ok(HttpResponse::Ok().json(results))
}

#[actix_web::get("/read_data")]
pub async fn read_data(db: Data<DB>) -> Result<HttpResponse, AppError> {
    let surveys = db.surveys.list().await?;
    Ok(HttpResponse::Ok().json(surveys))
}

#[actix_web::get("/read_survey/{survey_id}")]
pub async fn read_survey(
    db: Data<DB>,
    survey_id: Path<i64>,
) -> Result<HttpResponse, AppError> {
    let survey_id = survey_id.into_inner();
    match db.surveys.get(survey_id).await? {
        Some(survey) => Ok(HttpResponse::Ok().json(survey)),
        None => Err(AppError::NotFound(format!("Survey {} not found", survey_id))),
    }
}

pub fn init(cnf: &mut ServiceConfig) {
    cnf.service(add_survey)
        .service(add_question)
        .service(add_option)
        .service(vote_option)
        .service(survey_results)
        .service(read_data)
        .service(read_survey);
}
