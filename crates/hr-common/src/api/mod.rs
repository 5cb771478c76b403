pub mod employee_record;
pub mod team_request;
pub mod team_response;
