use super::*;

#[test]
fn bearer_formats_header() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn login_request_serializes_credentials() {
    let body = serde_json::to_value(LoginRequest { email: "a@b.com", password: "pw" }).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.com", "password": "pw" }));
}

#[test]
fn auth_response_parses_token_and_user() {
    let body = r#"{"access_token":"tok","user":{"user_id":5,"role":"student","first_name":"A","last_name":"B"}}"#;
    let parsed: AuthResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.access_token, "tok");
    assert_eq!(parsed.user.id, 5);
}

// =============================================================
// error_message
// =============================================================

#[test]
fn error_message_prefers_error_field() {
    assert_eq!(
        error_message(r#"{"error":"Invalid credentials","message":"ignored"}"#),
        Some("Invalid credentials".to_owned())
    );
}

#[test]
fn error_message_falls_back_to_message_field() {
    assert_eq!(error_message(r#"{"message":"email taken"}"#), Some("email taken".to_owned()));
}

#[test]
fn error_message_none_for_non_json_or_blank() {
    assert_eq!(error_message("<html>502</html>"), None);
    assert_eq!(error_message(r#"{"error":"  "}"#), None);
    assert_eq!(error_message("{}"), None);
}

// =============================================================
// Status mapping
// =============================================================

#[test]
fn login_401_is_invalid_credentials() {
    assert_eq!(login_failure(401, r#"{"error":"Invalid credentials"}"#), AuthenticationError::InvalidCredentials);
}

#[test]
fn login_other_status_is_service_error_with_text() {
    assert_eq!(
        login_failure(500, r#"{"error":"db down"}"#),
        AuthenticationError::Service { status: 500, message: "db down".to_owned() }
    );
    assert_eq!(
        login_failure(502, ""),
        AuthenticationError::Service { status: 502, message: "login request failed".to_owned() }
    );
}

#[test]
fn registration_statuses_map_to_variants() {
    assert_eq!(
        registration_failure(409, r#"{"message":"already registered"}"#),
        RegistrationError::Conflict("already registered".to_owned())
    );
    assert_eq!(
        registration_failure(400, ""),
        RegistrationError::Validation("missing or invalid fields".to_owned())
    );
    assert_eq!(
        registration_failure(422, r#"{"error":"bad school"}"#),
        RegistrationError::Validation("bad school".to_owned())
    );
    assert_eq!(
        registration_failure(503, ""),
        RegistrationError::Service { status: 503, message: "registration request failed".to_owned() }
    );
}

#[test]
fn rejected_token_statuses() {
    assert!(is_rejected_token(401));
    assert!(is_rejected_token(422));
    assert!(!is_rejected_token(500));
    assert!(!is_rejected_token(200));
}

// =============================================================
// Registration bodies
// =============================================================

#[test]
fn registered_with_token_is_signed_in() {
    let body = r#"{"access_token":"tok","user":{"id":3,"role":"student"}}"#;
    match parse_registered(body).unwrap() {
        Registered::SignedIn(session) => {
            assert_eq!(session.access_token, "tok");
            assert_eq!(session.user.id, 3);
        }
        Registered::Created => panic!("expected a session"),
    }
}

#[test]
fn registered_with_message_only_is_created() {
    assert!(matches!(parse_registered(r#"{"message":"registered"}"#).unwrap(), Registered::Created));
    assert!(matches!(parse_registered("  ").unwrap(), Registered::Created));
}

#[test]
fn registered_with_garbage_is_an_error() {
    assert!(parse_registered("<html>ok</html>").is_err());
}

#[test]
fn refused_follow_up_login_becomes_service_error() {
    assert_eq!(
        RegistrationError::from(AuthenticationError::InvalidCredentials),
        RegistrationError::Service { status: 401, message: "account created but sign-in was refused".to_owned() }
    );
    assert_eq!(
        RegistrationError::from(AuthenticationError::Transport("offline".to_owned())),
        RegistrationError::Transport("offline".to_owned())
    );
}
