//! ==============================================================================
//! api.rs - client for the JSONPlaceholder test api
//! ==============================================================================
//!
//! one error kind only: any transport failure or non-2xx status becomes a
//! plain string surfaced verbatim by the verb demo pages. no retry, no
//! caching, no timeout.
//! ==============================================================================

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

pub const API_BASE: &str = "https://jsonplaceholder.typicode.com";

// ==============================================================================
// wire types
// ==============================================================================

/// user record as returned by GET /users
#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
pub struct ApiUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

/// request body for POST /posts and PUT /posts/{id}
#[derive(Debug, Clone, Serialize)]
pub struct PostPayload {
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

/// post as echoed back by the api
#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
pub struct PostResource {
    pub id: u32,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

// ==============================================================================
// api functions
// ==============================================================================

/// GET /users - fetch the full user list
pub async fn fetch_users() -> Result<Vec<ApiUser>, String> {
    let response = Request::get(&format!("{}/users", API_BASE))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    ensure_ok(&response)?;
    response
        .json::<Vec<ApiUser>>()
        .await
        .map_err(|e| e.to_string())
}

/// POST /posts - create a post
pub async fn create_post(payload: &PostPayload) -> Result<PostResource, String> {
    let response = Request::post(&format!("{}/posts", API_BASE))
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(payload).map_err(|e| e.to_string())?)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    ensure_ok(&response)?;
    response
        .json::<PostResource>()
        .await
        .map_err(|e| e.to_string())
}

/// PUT /posts/{id} - replace a post
pub async fn update_post(id: u32, payload: &PostPayload) -> Result<PostResource, String> {
    let response = Request::put(&format!("{}/posts/{}", API_BASE, id))
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(payload).map_err(|e| e.to_string())?)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    ensure_ok(&response)?;
    response
        .json::<PostResource>()
        .await
        .map_err(|e| e.to_string())
}

/// DELETE /posts/{id} - delete a post (the api returns an empty object)
pub async fn delete_post(id: u32) -> Result<(), String> {
    let response = Request::delete(&format!("{}/posts/{}", API_BASE, id))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    ensure_ok(&response)?;
    Ok(())
}

/// collapse every non-2xx status into the single failure kind
fn ensure_ok(response: &Response) -> Result<(), String> {
    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP error! status: {}", response.status()))
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_payload_uses_wire_casing() {
        let payload = PostPayload {
            title: "hello".to_string(),
            body: "world".to_string(),
            user_id: 1,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"userId\":1"));
        assert!(!json.contains("user_id"));
    }

    #[test]
    fn test_post_resource_deserialization() {
        let json = r#"{"id":101,"title":"hello","body":"world","userId":1}"#;
        let post: PostResource = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 101);
        assert_eq!(post.user_id, 1);
    }

    #[test]
    fn test_api_user_deserialization() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031",
            "website": "hildegard.org"
        }"#;
        let user: ApiUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.website, "hildegard.org");
    }
}
