mod request;
mod response;

pub use request::CreateProjectRequest;
pub use response::{GenerateResponse, HealthResponse, RootResponse, SuccessResponse};
