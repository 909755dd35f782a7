use serde::{Deserialize, Serialize};

/// A stored user record. Both fields are required on input.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
}

/// Update input: only the name is replaced. The id comes from the path, so an
/// `id` in the body is ignored.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_requires_both_fields() {
        assert!(serde_json::from_str::<User>(r#"{"id":"1","name":"Alice"}"#).is_ok());
        assert!(serde_json::from_str::<User>(r#"{"id":"1"}"#).is_err());
        assert!(serde_json::from_str::<User>(r#"{"id":1,"name":"Alice"}"#).is_err());
    }

    #[test]
    fn update_ignores_body_id() {
        let upd: UserUpdate = serde_json::from_str(r#"{"id":"9","name":"Bob"}"#).unwrap();
        assert_eq!(upd, UserUpdate { name: "Bob".into() });
    }
}
