//! Field contracts of the portal's forms.
//!
//! No handler consumes these yet. They pin down the field names the pages
//! render so whoever wires up submission decodes exactly what the browser
//! sends.

use serde::Deserialize;

/// Fields of the sign-in form.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Unchecked checkboxes are not sent at all.
    #[serde(default, rename = "remember-me", deserialize_with = "checkbox")]
    pub remember_me: bool,
}

impl LoginForm {
    pub const EMAIL: &'static str = "email";
    pub const PASSWORD: &'static str = "password";
    pub const REMEMBER_ME: &'static str = "remember-me";
}

/// Fields of the report-an-issue form.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FeedbackForm {
    pub issue: String,
}

impl FeedbackForm {
    pub const ISSUE: &'static str = "issue";
}

fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(matches!(value.as_str(), "true" | "on"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Form;
    use axum::http::Request;
    use axum::body::Body;
    use axum::extract::FromRequest;

    async fn decode<T>(body: &'static str) -> T
    where
        T: serde::de::DeserializeOwned,
    {
        let request = Request::builder()
            .method("POST")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        let Form(value) = Form::<T>::from_request(request, &()).await.unwrap();
        value
    }

    #[tokio::test]
    async fn login_without_checkbox() {
        let form: LoginForm = decode("email=a%40b.gov&password=secret").await;
        assert_eq!(form.email, "a@b.gov");
        assert_eq!(form.password, "secret");
        assert!(!form.remember_me);
    }

    #[tokio::test]
    async fn login_with_checkbox() {
        let form: LoginForm = decode("email=a%40b.gov&password=x&remember-me=true").await;
        assert!(form.remember_me);
    }

    #[tokio::test]
    async fn feedback_issue() {
        let form: FeedbackForm = decode("issue=Broken+street+light").await;
        assert_eq!(form.issue, "Broken street light");
    }
}
