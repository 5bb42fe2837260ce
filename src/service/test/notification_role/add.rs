use super::*;

/// Tests adding a role that does not exist yet.
///
/// Verifies that the role is created mentionable with no permissions, granted to
/// the bot, and returned to the caller.
///
/// Expected: Ok with role created and held by the bot
#[tokio::test]
async fn creates_notification_role() {
    let test = TestBuilder::new().build();
    let service = NotificationRoleService::new(&test);

    let role = service.add("Announcements").await.unwrap();

    assert_eq!(role.name, "Announcements");
    assert!(role.mentionable);
    assert!(role.permissions.is_empty());
    assert_eq!(
        test.calls(),
        vec![
            PlatformCall::CreateRole {
                name: "Announcements".to_string(),
                mentionable: true,
                permissions: Permissions::empty(),
            },
            PlatformCall::AddMemberRole {
                user_id: TEST_BOT_ID,
                role_id: role.role_id,
            },
        ]
    );
    assert!(test.member_has_role(TEST_BOT_ID, role.role_id));
}

/// Tests that a created role immediately counts as a notification role.
///
/// Expected: Ok with the new role listed
#[tokio::test]
async fn created_role_is_listed() {
    let test = TestBuilder::new().build();
    let service = NotificationRoleService::new(&test);

    let role = service.add("Announcements").await.unwrap();
    let listed = service.list().await.unwrap();

    assert_eq!(listed, vec![role]);
}

/// Tests adding a role whose name already exists in the guild.
///
/// Expected: Err(RoleFoundInGuild) with no creation call
#[tokio::test]
async fn rejects_existing_role_name() {
    let test = TestBuilder::new()
        .with_role(create_test_role(
            ANNOUNCEMENTS_ID,
            "Announcements",
            1,
            false,
            Permissions::empty(),
        ))
        .build();
    let service = NotificationRoleService::new(&test);

    let result = service.add("Announcements").await;

    assert!(matches!(
        result,
        Err(CommandError::Guard(GuardError::RoleFoundInGuild(ref role))) if role.role_id == ANNOUNCEMENTS_ID
    ));
    assert!(test.calls().is_empty());
}

/// Tests adding a role given as a mention of an existing role.
///
/// Expected: Err(RoleFoundInGuild) with no creation call
#[tokio::test]
async fn rejects_existing_role_mention() {
    let test = TestBuilder::new()
        .with_role(create_test_notification_role(
            ANNOUNCEMENTS_ID,
            "Announcements",
            1,
        ))
        .build();
    let service = NotificationRoleService::new(&test);

    let result = service.add(&format!("<@&{}>", ANNOUNCEMENTS_ID)).await;

    assert!(matches!(
        result,
        Err(CommandError::Guard(GuardError::RoleFoundInGuild(_)))
    ));
    assert!(test.calls().is_empty());
}

/// Tests that role names are matched case-sensitively.
///
/// Expected: Ok with a second role created
#[tokio::test]
async fn treats_names_case_sensitively() {
    let test = TestBuilder::new()
        .with_role(create_test_notification_role(
            ANNOUNCEMENTS_ID,
            "Announcements",
            1,
        ))
        .build();
    let service = NotificationRoleService::new(&test);

    let role = service.add("announcements").await.unwrap();

    assert_ne!(role.role_id, ANNOUNCEMENTS_ID);
    assert_eq!(role.name, "announcements");
}

/// Tests that a rejected creation is reported as a guard failure.
///
/// Expected: Err(RoleNotAddedToGuild) with no grant attempted
#[tokio::test]
async fn reports_rejected_creation() {
    let test = TestBuilder::new().fail_role_creation().build();
    let service = NotificationRoleService::new(&test);

    let result = service.add("Announcements").await;

    assert!(matches!(
        result,
        Err(CommandError::Guard(GuardError::RoleNotAddedToGuild(ref name))) if name == "Announcements"
    ));
    assert_eq!(test.calls().len(), 1);
}

/// Tests that a failed self-grant is not rolled back.
///
/// The role stays in the guild but is not a notification role until the bot holds it.
///
/// Expected: Err(Unexpected) with the role left in the guild
#[tokio::test]
async fn leaves_role_when_self_grant_fails() {
    let test = TestBuilder::new().fail_role_grant().build();
    let service = NotificationRoleService::new(&test);

    let result = service.add("Announcements").await;

    assert!(matches!(result, Err(CommandError::Unexpected(_))));
    assert!(test.role_named("Announcements").is_some());
    assert!(service.list().await.unwrap().is_empty());
}

/// Tests that a roster read failure is not mistaken for a missing role.
///
/// Expected: Err(Unexpected) with no creation call
#[tokio::test]
async fn fails_when_roster_unavailable() {
    let test = TestBuilder::new().fail_reads().build();
    let service = NotificationRoleService::new(&test);

    let result = service.add("Announcements").await;

    assert!(matches!(result, Err(CommandError::Unexpected(_))));
    assert!(test.calls().is_empty());
}
