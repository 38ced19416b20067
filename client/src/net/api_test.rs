use std::time::Duration;

use super::*;

#[test]
fn timed_out_message_includes_operation_and_millis() {
    assert_eq!(timed_out_message("login", Duration::from_secs(15)), "login timed out after 15000ms");
}

#[test]
fn malformed_body_message_names_operation() {
    assert_eq!(
        malformed_body_message("registration", "missing field `user`"),
        "registration returned an unreadable body: missing field `user`"
    );
}

#[test]
fn service_keeps_its_config() {
    let config = ClientConfig { api_base: "http://localhost:5000".to_owned(), ..ClientConfig::default() };
    let service = HttpAuthService::new(config.clone());
    assert_eq!(service.config(), &config);
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn server_render_has_no_session_and_refuses_writes() {
    let service = HttpAuthService::new(ClientConfig::default());
    assert_eq!(service.restore_session().await, None);
    assert_eq!(
        service.login("a@b.com", "pw").await,
        Err(AuthenticationError::Transport(SERVER_UNAVAILABLE.to_owned()))
    );
    assert_eq!(
        service.register(&Registration::default()).await,
        Err(RegistrationError::Transport(SERVER_UNAVAILABLE.to_owned()))
    );
    assert_eq!(service.invalidate_session().await, Ok(()));
}
