use super::*;

/// Tests listing a guild without notification roles.
///
/// Roles failing any one of the three conditions are present but excluded.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_without_notification_roles() {
    let test = TestBuilder::new()
        .with_role(create_test_role(1, "Quiet", 1, false, Permissions::empty()))
        .with_role(create_test_role(2, "Staff", 2, true, Permissions::KICK_MEMBERS))
        .with_role(create_test_notification_role(3, "Not Ours", 3))
        .with_bot_roles(&[1, 2])
        .build();
    let service = NotificationRoleService::new(&test);

    let roles = service.list().await.unwrap();

    assert!(roles.is_empty());
}

/// Tests listing notification roles in native roster order.
///
/// Verifies that roles are returned by ascending position regardless of the order
/// they were created in, and that non-notification roles are skipped.
///
/// Expected: Ok with roles ordered by position
#[tokio::test]
async fn returns_notification_roles_in_roster_order() {
    let test = TestBuilder::new()
        .with_role(create_test_notification_role(10, "Raids", 3))
        .with_role(create_test_notification_role(20, "Events", 1))
        .with_role(create_test_role(30, "Staff", 2, true, Permissions::MANAGE_MESSAGES))
        .with_role(create_test_notification_role(40, "Patch Notes", 2))
        .with_bot_roles(&[10, 20, 30, 40])
        .build();
    let service = NotificationRoleService::new(&test);

    let roles = service.list().await.unwrap();

    let names: Vec<&str> = roles.iter().map(|role| role.name.as_str()).collect();
    assert_eq!(names, vec!["Events", "Patch Notes", "Raids"]);
}

/// Tests that classification is read fresh on every call.
///
/// Expected: Ok with the role listed only after the bot holds it
#[tokio::test]
async fn reflects_current_bot_roles() {
    let test = TestBuilder::new()
        .with_role(create_test_notification_role(10, "Raids", 1))
        .build();
    let service = NotificationRoleService::new(&test);

    assert!(service.list().await.unwrap().is_empty());

    test.add_member_role(TEST_BOT_ID, 10).unwrap();

    assert_eq!(service.list().await.unwrap().len(), 1);
}

/// Tests listing never mutates guild state.
///
/// Expected: Ok with no calls recorded
#[tokio::test]
async fn does_not_mutate() {
    let test = TestBuilder::new()
        .with_role(create_test_notification_role(10, "Raids", 1))
        .with_bot_roles(&[10])
        .build();
    let service = NotificationRoleService::new(&test);

    service.list().await.unwrap();

    assert!(test.calls().is_empty());
}

/// Tests listing when Discord is unavailable.
///
/// Expected: Err
#[tokio::test]
async fn fails_when_roster_unavailable() {
    let test = TestBuilder::new().fail_reads().build();
    let service = NotificationRoleService::new(&test);

    assert!(service.list().await.is_err());
}
