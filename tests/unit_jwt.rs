use fablingo::config::session::SessionConfig;
use fablingo::utils::jwt::{
    create_invite_token, create_session_token, verify_invite_token, verify_session_token,
};
use uuid::Uuid;

fn get_test_session_config() -> SessionConfig {
    SessionConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        session_expiry: 3600,
        invite_expiry: 604800,
        cookie_name: "fablingo_session".to_string(),
    }
}

#[test]
fn test_session_token_round_trip() {
    let config = get_test_session_config();
    let user_id = Uuid::new_v4();

    let token = create_session_token(user_id, "test@example.com", &config).unwrap();
    assert!(!token.is_empty());

    let claims = verify_session_token(&token, &config).unwrap();
    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.email, "test@example.com");
    assert_eq!(claims.purpose, "session");
}

#[test]
fn test_invite_token_round_trip() {
    let config = get_test_session_config();
    let user_id = Uuid::new_v4();

    let token = create_invite_token(user_id, "invited@example.com", &config).unwrap();
    let claims = verify_invite_token(&token, &config).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.purpose, "invite");
}

#[test]
fn test_purposes_are_not_interchangeable() {
    let config = get_test_session_config();
    let user_id = Uuid::new_v4();

    let session_token = create_session_token(user_id, "test@example.com", &config).unwrap();
    let invite_token = create_invite_token(user_id, "test@example.com", &config).unwrap();

    assert!(verify_invite_token(&session_token, &config).is_err());
    assert!(verify_session_token(&invite_token, &config).is_err());
}

#[test]
fn test_garbage_token_is_rejected() {
    let config = get_test_session_config();

    assert!(verify_session_token("invalid.token.here", &config).is_err());
    assert!(verify_session_token("", &config).is_err());
}

#[test]
fn test_wrong_secret_is_rejected() {
    let config = get_test_session_config();
    let token = create_session_token(Uuid::new_v4(), "test@example.com", &config).unwrap();

    let mut other = get_test_session_config();
    other.secret = "a_completely_different_secret".to_string();

    assert!(verify_session_token(&token, &other).is_err());
}

#[test]
fn test_expired_token_is_rejected() {
    let mut config = get_test_session_config();
    config.session_expiry = -120;

    let token = create_session_token(Uuid::new_v4(), "test@example.com", &config).unwrap();

    assert!(verify_session_token(&token, &config).is_err());
}
