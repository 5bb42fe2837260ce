use super::*;

fn guild(subscribers: &[u64]) -> TestBuilder {
    let mut builder = TestBuilder::new()
        .with_role(create_test_notification_role(
            ANNOUNCEMENTS_ID,
            "Announcements",
            1,
        ))
        .with_bot_roles(&[ANNOUNCEMENTS_ID]);
    for subscriber in subscribers {
        builder = builder.with_member_roles(*subscriber, &[ANNOUNCEMENTS_ID]);
    }
    builder
}

/// Tests cleanup after the last subscriber leaves.
///
/// Verifies that the role is deleted once only the bot holds it.
///
/// Expected: Ok(true) with role deleted
#[tokio::test]
async fn deletes_role_held_only_by_bot() {
    let test = guild(&[MEMBER_ID]).build();
    let service = NotificationRoleService::new(&test);

    let role = service
        .unsubscribe(MEMBER_ID, "Announcements")
        .await
        .unwrap();
    let deleted = service.delete_if_orphaned(&role).await.unwrap();

    assert!(deleted);
    assert!(test.role_named("Announcements").is_none());
    assert_eq!(
        test.calls().last(),
        Some(&PlatformCall::DeleteRole {
            role_id: ANNOUNCEMENTS_ID
        })
    );
}

/// Tests cleanup while other members are still subscribed.
///
/// Expected: Ok(false) with role kept
#[tokio::test]
async fn keeps_role_with_remaining_subscribers() {
    let test = guild(&[MEMBER_ID, OTHER_MEMBER_ID]).build();
    let service = NotificationRoleService::new(&test);

    let role = service
        .unsubscribe(MEMBER_ID, "Announcements")
        .await
        .unwrap();
    let deleted = service.delete_if_orphaned(&role).await.unwrap();

    assert!(!deleted);
    assert!(test.role_named("Announcements").is_some());
    assert_eq!(test.calls().len(), 1);
}

/// Tests cleanup of a role the bot no longer holds.
///
/// A role with no holders at all is not the bot's to delete.
///
/// Expected: Ok(false) with role kept
#[tokio::test]
async fn keeps_role_without_bot() {
    let test = TestBuilder::new()
        .with_role(create_test_notification_role(
            ANNOUNCEMENTS_ID,
            "Announcements",
            1,
        ))
        .build();
    let service = NotificationRoleService::new(&test);
    let role = service.resolve_role("Announcements").await.unwrap().unwrap();

    let deleted = service.delete_if_orphaned(&role).await.unwrap();

    assert!(!deleted);
    assert!(test.calls().is_empty());
}

/// Tests that a failed delete is surfaced to the caller.
///
/// Expected: Err
#[tokio::test]
async fn propagates_delete_failure() {
    let test = guild(&[MEMBER_ID]).fail_role_deletion().build();
    let service = NotificationRoleService::new(&test);

    let role = service
        .unsubscribe(MEMBER_ID, "Announcements")
        .await
        .unwrap();

    assert!(service.delete_if_orphaned(&role).await.is_err());
}
