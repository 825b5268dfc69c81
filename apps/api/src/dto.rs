use presyohan_domain::User;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Query string for a single user lookup.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-lookup-query.ts"
)]
pub struct UserLookupQuery {
    pub email: String,
}

/// API representation of a user.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-response.ts"
)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub user_code: Option<String>,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id.to_string(),
            display_name: value.display_name().to_owned(),
            email: value.email,
            name: value.name,
            avatar_url: value.avatar_url,
            phone: value.phone,
            user_code: value.user_code,
            created_at: value.created_at.to_rfc3339(),
        }
    }
}
