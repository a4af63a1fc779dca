use super::*;

// =============================================================
// Role parsing
// =============================================================

#[test]
fn role_defaults_to_user_when_missing() {
    let user: User = serde_json::from_str(r#"{"id":"1","email":"a@b.com"}"#).unwrap();
    assert_eq!(user.role, Role::User);
}

#[test]
fn role_parses_admin() {
    let user: User =
        serde_json::from_str(r#"{"id":"1","email":"a@b.com","role":"admin"}"#).unwrap();
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn unknown_role_folds_to_user() {
    let user: User =
        serde_json::from_str(r#"{"id":"1","email":"a@b.com","role":"superuser"}"#).unwrap();
    assert_eq!(user.role, Role::User);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
}

// =============================================================
// Response envelopes
// =============================================================

#[test]
fn me_response_unwraps_user() {
    let me: MeResponse =
        serde_json::from_str(r#"{"user":{"id":"1","email":"a@b.com"}}"#).unwrap();
    assert_eq!(me.user.id, "1");
    assert_eq!(me.user.email, "a@b.com");
}

#[test]
fn auth_response_with_user() {
    let resp: AuthResponse = serde_json::from_str(
        r#"{"message":"Login successful","user":{"id":"1","email":"a@b.com","role":"admin"}}"#,
    )
    .unwrap();
    assert_eq!(resp.message, "Login successful");
    let user = resp.user.unwrap();
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn logout_response_has_no_user() {
    let resp: AuthResponse =
        serde_json::from_str(r#"{"message":"Logged out successfully"}"#).unwrap();
    assert!(resp.user.is_none());
}

#[test]
fn error_body_carries_backend_message() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"error":"Invalid email or password"}"#).unwrap();
    assert_eq!(body.error, "Invalid email or password");
}

#[test]
fn credentials_serialize_as_email_password() {
    let creds = Credentials {
        email: "a@b.com".to_owned(),
        password: "x".to_owned(),
    };
    let json = serde_json::to_value(&creds).unwrap();
    assert_eq!(json["email"], "a@b.com");
    assert_eq!(json["password"], "x");
}
