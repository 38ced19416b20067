use super::*;

#[test]
fn invalid_credentials_message() {
    assert_eq!(login_error_message(&AuthenticationError::InvalidCredentials), "Invalid email or password.");
}

#[test]
fn service_error_shows_backend_text() {
    let err = AuthenticationError::Service { status: 500, message: "db down".to_owned() };
    assert_eq!(login_error_message(&err), "Login failed: db down");
}

#[test]
fn transport_error_names_the_service() {
    let err = AuthenticationError::Transport("login timed out after 15000ms".to_owned());
    assert_eq!(
        login_error_message(&err),
        "Login failed: auth service unreachable: login timed out after 15000ms"
    );
}
