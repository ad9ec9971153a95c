use serde::Serialize;

use crate::models::ServiceStatus;
use crate::utils::constant::*;

/// Payload returned by `GET /`.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
    pub status: ServiceStatus,
    pub engineer: &'static str,
    pub stack: &'static [&'static str],
}

impl GreetingResponse {
    pub const fn new() -> Self {
        Self {
            message: GREETING_MESSAGE,
            status: ServiceStatus::Running,
            engineer: ENGINEER,
            stack: &STACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_exact_literal() {
        let body = serde_json::to_string(&GreetingResponse::new()).unwrap();
        assert_eq!(
            body,
            r#"{"message":"Hello from Tcloud's DevOps Pipeline! 🚀","status":"running","engineer":"Abidemi Adewale","stack":["Python","Flask","Docker","GitHub Actions"]}"#
        );
    }

    #[test]
    fn emoji_is_not_escaped() {
        let body = serde_json::to_vec(&GreetingResponse::new()).unwrap();
        let rocket = "🚀".as_bytes();
        assert!(body.windows(rocket.len()).any(|w| w == rocket));
        assert!(!String::from_utf8(body).unwrap().contains("\\u"));
    }
}
