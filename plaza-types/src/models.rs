use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Custom serde module for DateTime to ensure RFC3339 string format
mod datetime_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date.to_rfc3339();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<DateTime<Utc>>().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: String,
    #[serde(with = "datetime_format")]
    pub created_at: DateTime<Utc>,
}

/// A post flattened with its author's username, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub user_id: i64,
    pub username: String,
    #[serde(with = "datetime_format")]
    pub created_at: DateTime<Utc>,
}

/// A directed follow edge between two users. Seeded at first run only;
/// no endpoint creates or removes follows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follow {
    pub following_user_id: i64,
    pub followed_user_id: i64,
    #[serde(with = "datetime_format")]
    pub created_at: DateTime<Utc>,
}

// Request/Response types for API
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    pub user_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_created_at_as_rfc3339() {
        let user = User {
            id: 1,
            username: "juan_dev".to_string(),
            role: "user".to_string(),
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["created_at"], "2024-01-01T00:00:00+00:00");
        assert_eq!(json["id"], 1);
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn create_user_request_role_is_optional() {
        let req: CreateUserRequest = serde_json::from_str(r#"{"username":"new_guy"}"#).unwrap();
        assert_eq!(req.username, "new_guy");
        assert!(req.role.is_none());

        let req: CreateUserRequest =
            serde_json::from_str(r#"{"username":"maria_admin","role":"admin"}"#).unwrap();
        assert_eq!(req.role.as_deref(), Some("admin"));
    }

    #[test]
    fn create_user_request_requires_username() {
        let result = serde_json::from_str::<CreateUserRequest>(r#"{"role":"admin"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_post_request_requires_all_fields() {
        let result =
            serde_json::from_str::<CreatePostRequest>(r#"{"title":"Mi primer post","user_id":1}"#);
        assert!(result.is_err());
    }
}
