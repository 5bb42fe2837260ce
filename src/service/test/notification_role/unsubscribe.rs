use super::*;

fn guild_with_subscriber() -> TestBuilder {
    TestBuilder::new()
        .with_role(create_test_notification_role(
            ANNOUNCEMENTS_ID,
            "Announcements",
            1,
        ))
        .with_bot_roles(&[ANNOUNCEMENTS_ID])
        .with_member_roles(MEMBER_ID, &[ANNOUNCEMENTS_ID])
}

/// Tests unsubscribing from a held notification role.
///
/// Expected: Ok with role revoked from the member
#[tokio::test]
async fn revokes_role_from_member() {
    let test = guild_with_subscriber().build();
    let service = NotificationRoleService::new(&test);

    let role = service
        .unsubscribe(MEMBER_ID, "Announcements")
        .await
        .unwrap();

    assert_eq!(role.role_id, ANNOUNCEMENTS_ID);
    assert!(!test.member_has_role(MEMBER_ID, ANNOUNCEMENTS_ID));
    assert_eq!(
        test.calls(),
        vec![PlatformCall::RemoveMemberRole {
            user_id: MEMBER_ID,
            role_id: ANNOUNCEMENTS_ID,
        }]
    );
}

/// Tests unsubscribing from a role the member never held.
///
/// Expected: Err(RoleNotFoundInMember) with no revoke call
#[tokio::test]
async fn rejects_role_not_held_by_member() {
    let test = guild_with_subscriber().build();
    let service = NotificationRoleService::new(&test);

    let result = service.unsubscribe(OTHER_MEMBER_ID, "Announcements").await;

    assert!(matches!(
        result,
        Err(CommandError::Guard(GuardError::RoleNotFoundInMember(_)))
    ));
    assert!(test.calls().is_empty());
}

/// Tests unsubscribing from a role that does not exist.
///
/// Expected: Err(RoleNotFoundInGuild) with no revoke call
#[tokio::test]
async fn rejects_unknown_role() {
    let test = guild_with_subscriber().build();
    let service = NotificationRoleService::new(&test);

    let result = service.unsubscribe(MEMBER_ID, "Raids").await;

    assert!(matches!(
        result,
        Err(CommandError::Guard(GuardError::RoleNotFoundInGuild(_)))
    ));
    assert!(test.calls().is_empty());
}

/// Tests unsubscribing from an unmentionable role the member holds.
///
/// Verifies that the bot refuses to revoke roles outside the notification role set.
///
/// Expected: Err(NotNotificationRole) with no revoke call
#[tokio::test]
async fn rejects_non_notification_role() {
    let test = TestBuilder::new()
        .with_role(create_test_role(
            ANNOUNCEMENTS_ID,
            "Veterans",
            1,
            false,
            Permissions::empty(),
        ))
        .with_bot_roles(&[ANNOUNCEMENTS_ID])
        .with_member_roles(MEMBER_ID, &[ANNOUNCEMENTS_ID])
        .build();
    let service = NotificationRoleService::new(&test);

    let result = service.unsubscribe(MEMBER_ID, "Veterans").await;

    assert!(matches!(
        result,
        Err(CommandError::Guard(GuardError::NotNotificationRole(_)))
    ));
    assert!(test.member_has_role(MEMBER_ID, ANNOUNCEMENTS_ID));
}

/// Tests that unsubscribing leaves the role in place.
///
/// Cleanup is a separate step performed after the member has been answered.
///
/// Expected: Ok with role still in the guild
#[tokio::test]
async fn does_not_delete_role() {
    let test = guild_with_subscriber().build();
    let service = NotificationRoleService::new(&test);

    service
        .unsubscribe(MEMBER_ID, "Announcements")
        .await
        .unwrap();

    assert!(test.role_named("Announcements").is_some());
}
