pub mod general_routes;
pub mod survey_routes;
