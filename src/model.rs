//! Customer entity and the request payloads that create and modify it.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    /// Assigned by the store on insert; `None` until then.
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl Customer {
    /// A customer that has not been persisted yet.
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRegistrationRequest {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<CustomerRegistrationRequest> for Customer {
    fn from(request: CustomerRegistrationRequest) -> Self {
        Customer::new(request.name, request.email, request.age)
    }
}

/// Partial update: absent or `null` fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerUpdateRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unsaved_customer_serializes_null_id() {
        let c = Customer::new("Alex", "alex@x.com", 21);
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            json!({"id": null, "name": "Alex", "email": "alex@x.com", "age": 21})
        );
    }

    #[test]
    fn update_request_accepts_missing_and_null_fields() {
        let r: CustomerUpdateRequest = serde_json::from_value(json!({"name": "foo", "age": null})).unwrap();
        assert_eq!(
            r,
            CustomerUpdateRequest {
                name: Some("foo".into()),
                email: None,
                age: None
            }
        );
    }
}
