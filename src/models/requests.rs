//! Request DTOs for the API
//!
//! Defines the structure of incoming HTTP request bodies. Each DTO carries
//! a `validate()` returning an error message when the payload is rejected;
//! handlers turn that into a protocol 400 / INVALID_PARAMS.

use serde::Deserialize;

// == Shared Limits ==
/// Maximum allowed cache key length in characters
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed username/nickname length
pub const MAX_NAME_LENGTH: usize = 50;

/// Maximum allowed email length
pub const MAX_EMAIL_LENGTH: usize = 100;

/// Minimum allowed password length
pub const MIN_PASSWORD_LENGTH: usize = 6;

fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("key 不能为空".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!("key 长度不能超过 {} 个字符", MAX_KEY_LENGTH));
    }
    None
}

/// Loose email shape check: one `@` with a dot somewhere after it.
fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

// == Cache DTOs ==

/// Body for `POST /api/cache/set`
#[derive(Debug, Clone, Deserialize)]
pub struct SetCacheRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
    /// Optional TTL in seconds; absent or 0 means no expiry
    #[serde(default)]
    pub ttl: Option<u64>,
}

impl SetCacheRequest {
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

/// Body for `GET /api/cache/get` and `POST /api/cache/del`
#[derive(Debug, Clone, Deserialize)]
pub struct KeyRequest {
    pub key: String,
}

impl KeyRequest {
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

/// Body for `POST /api/cache/hset`
#[derive(Debug, Clone, Deserialize)]
pub struct HsetCacheRequest {
    pub key: String,
    pub field: String,
    pub value: String,
}

impl HsetCacheRequest {
    pub fn validate(&self) -> Option<String> {
        if let Some(msg) = validate_key(&self.key) {
            return Some(msg);
        }
        if self.field.is_empty() {
            return Some("field 不能为空".to_string());
        }
        None
    }
}

/// Body for `GET /api/cache/hget`
#[derive(Debug, Clone, Deserialize)]
pub struct HgetCacheRequest {
    pub key: String,
    pub field: String,
}

impl HgetCacheRequest {
    pub fn validate(&self) -> Option<String> {
        if let Some(msg) = validate_key(&self.key) {
            return Some(msg);
        }
        if self.field.is_empty() {
            return Some("field 不能为空".to_string());
        }
        None
    }
}

// == User DTOs ==

/// Body for `POST /api/users`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub nickname: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Option<String> {
        if self.username.is_empty() {
            return Some("username 不能为空".to_string());
        }
        if self.username.len() > MAX_NAME_LENGTH {
            return Some(format!("username 长度不能超过 {} 个字符", MAX_NAME_LENGTH));
        }
        if self.email.is_empty() || self.email.len() > MAX_EMAIL_LENGTH {
            return Some("email 不能为空且长度不能超过 100 个字符".to_string());
        }
        if !is_valid_email(&self.email) {
            return Some("email 格式不正确".to_string());
        }
        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Some(format!("password 长度不能少于 {} 个字符", MIN_PASSWORD_LENGTH));
        }
        if let Some(nickname) = &self.nickname {
            if nickname.len() > MAX_NAME_LENGTH {
                return Some(format!("nickname 长度不能超过 {} 个字符", MAX_NAME_LENGTH));
            }
        }
        None
    }
}

/// Body for `PUT /api/users/:id`; all fields optional, absent fields keep
/// their stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Option<String> {
        if let Some(username) = &self.username {
            if username.is_empty() || username.len() > MAX_NAME_LENGTH {
                return Some("username 不能为空且长度不能超过 50 个字符".to_string());
            }
        }
        if let Some(email) = &self.email {
            if email.len() > MAX_EMAIL_LENGTH || !is_valid_email(email) {
                return Some("email 格式不正确".to_string());
            }
        }
        if let Some(password) = &self.password {
            if password.len() < MIN_PASSWORD_LENGTH {
                return Some(format!("password 长度不能少于 {} 个字符", MIN_PASSWORD_LENGTH));
            }
        }
        if let Some(nickname) = &self.nickname {
            if nickname.len() > MAX_NAME_LENGTH {
                return Some(format!("nickname 长度不能超过 {} 个字符", MAX_NAME_LENGTH));
            }
        }
        None
    }

    /// True when no field is present; such an update is rejected.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.nickname.is_none()
    }
}
