use super::*;

fn identity(first: &str, last: &str) -> Identity {
    Identity {
        id: 7,
        username: "hana".to_owned(),
        email: "hana@example.com".to_owned(),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        role: Role::Student,
        school_id: Some(1),
        student_id: None,
        grade: None,
        class_name: None,
    }
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn deserializes_current_user_shape() {
    let json = serde_json::json!({
        "user_id": 12,
        "username": "taro",
        "email": "taro@example.com",
        "first_name": "Taro",
        "last_name": "Yamada",
        "role": "admin",
        "school_id": 3,
        "student_id": "S-001",
        "grade": "2",
        "class_name": "B",
        "is_active": true,
        "created_at": "2024-04-01T00:00:00",
        "updated_at": "2024-04-01T00:00:00"
    });
    let user: Identity = serde_json::from_value(json).unwrap();
    assert_eq!(user.id, 12);
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.school_id, Some(3));
    assert_eq!(user.student_id.as_deref(), Some("S-001"));
    assert_eq!(user.class_name.as_deref(), Some("B"));
}

#[test]
fn deserializes_legacy_is_admin_flag() {
    let json = serde_json::json!({ "id": 4, "username": "root", "is_admin": true });
    let user: Identity = serde_json::from_value(json).unwrap();
    assert_eq!(user.id, 4);
    assert!(user.is_admin());
    assert!(user.email.is_empty());
}

#[test]
fn explicit_role_wins_over_legacy_flag() {
    let json = serde_json::json!({ "id": 4, "role": "student", "is_admin": true });
    let user: Identity = serde_json::from_value(json).unwrap();
    assert_eq!(user.role, Role::Student);
}

#[test]
fn missing_role_defaults_to_student() {
    let json = serde_json::json!({ "id": 9 });
    let user: Identity = serde_json::from_value(json).unwrap();
    assert_eq!(user.role, Role::Student);
}

#[test]
fn missing_id_is_rejected() {
    let json = serde_json::json!({ "username": "ghost" });
    assert!(serde_json::from_value::<Identity>(json).is_err());
}

#[test]
fn unknown_role_is_rejected() {
    let json = serde_json::json!({ "id": 1, "role": "librarian" });
    assert!(serde_json::from_value::<Identity>(json).is_err());
}

// =============================================================
// Display name
// =============================================================

#[test]
fn display_name_joins_first_and_last() {
    assert_eq!(identity("Hana", "Sato").display_name(), "Hana Sato");
}

#[test]
fn display_name_with_only_first_name() {
    assert_eq!(identity("Hana", "").display_name(), "Hana");
}

#[test]
fn display_name_falls_back_to_username() {
    assert_eq!(identity("  ", "").display_name(), "hana");
}

// =============================================================
// Registration payload
// =============================================================

#[test]
fn registration_omits_absent_optional_fields() {
    let registration = Registration {
        username: "hana".to_owned(),
        email: "hana@example.com".to_owned(),
        password: "secret".to_owned(),
        first_name: "Hana".to_owned(),
        last_name: "Sato".to_owned(),
        school_id: 2,
        student_id: Some("S-42".to_owned()),
        grade: None,
        class_name: None,
    };
    let value = serde_json::to_value(&registration).unwrap();
    assert_eq!(value["school_id"], 2);
    assert_eq!(value["student_id"], "S-42");
    assert!(value.get("grade").is_none());
    assert!(value.get("class_name").is_none());
}
