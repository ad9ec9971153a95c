mod greeting;
mod health;
mod status;

pub use greeting::GreetingResponse;
pub use health::HealthResponse;
pub use status::ServiceStatus;
