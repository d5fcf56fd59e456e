pub mod survey_api_model;
pub mod survey_results;
