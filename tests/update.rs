mod common;

use common::{MockExecutor, User, affected};
use skiff::{Error, UpdateOptions};

fn user() -> User {
    User {
        id: "update-id".into(),
        email: "new-email".into(),
        token: "new-token".into(),
        session: 0,
    }
}

#[tokio::test]
async fn update_writes_only_the_selected_fields() {
    common::init_logs();
    let mut executor = MockExecutor::new().returns(vec![affected(1)]);
    let outcome = skiff::update(
        &mut executor,
        &user(),
        &UpdateOptions {
            set: &["email", "token"],
            by: &["id"],
        },
    )
    .await
    .unwrap();
    assert_eq!(outcome.rows_affected, 1);
    assert_eq!(
        executor.sql(0),
        "UPDATE users SET email = $1, token = $2 WHERE id = $3"
    );
    assert_eq!(
        executor.queries[0].args,
        vec!["new-email".into(), "new-token".into(), "update-id".into()]
    );
}

#[tokio::test]
async fn predicate_fields_are_never_written() {
    common::init_logs();
    let mut executor = MockExecutor::new().returns(vec![affected(1)]);
    skiff::update(
        &mut executor,
        &user(),
        &UpdateOptions {
            set: &["id", "email"],
            by: &["id"],
        },
    )
    .await
    .unwrap();
    assert_eq!(executor.sql(0), "UPDATE users SET email = $1 WHERE id = $2");
}

#[tokio::test]
async fn unknown_predicate_field_fails_before_anything_is_sent() {
    common::init_logs();
    let mut executor = MockExecutor::new();
    let err = skiff::update(
        &mut executor,
        &user(),
        &UpdateOptions {
            set: &["email"],
            by: &["nickname"],
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::FieldNotFound(name) if name == "nickname"));
    assert!(executor.queries.is_empty());
}

#[tokio::test]
async fn unmapped_predicate_field_fails_before_anything_is_sent() {
    common::init_logs();
    let mut executor = MockExecutor::new();
    let err = skiff::update(
        &mut executor,
        &user(),
        &UpdateOptions {
            set: &["email"],
            by: &["session"],
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::FieldNotAnnotated(name) if name == "session"));
    assert!(executor.queries.is_empty());
}
