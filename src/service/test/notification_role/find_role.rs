use crate::{
    model::role::GuildRole,
    service::notification_role::find_role,
};
use serenity::all::Permissions;

fn roster() -> Vec<GuildRole> {
    vec![
        GuildRole {
            role_id: 123456789012345678,
            name: "Announcements".to_string(),
            position: 1,
            mentionable: true,
            permissions: Permissions::empty(),
        },
        GuildRole {
            role_id: 223456789012345678,
            name: "2024".to_string(),
            position: 2,
            mentionable: true,
            permissions: Permissions::empty(),
        },
        GuildRole {
            role_id: 323456789012345678,
            name: "Announcements".to_string(),
            position: 3,
            mentionable: true,
            permissions: Permissions::empty(),
        },
    ]
}

/// Tests resolving a role mention.
///
/// Expected: Some with the mentioned role
#[test]
fn resolves_mention() {
    let role = find_role(&roster(), "<@&223456789012345678>").unwrap();

    assert_eq!(role.name, "2024");
}

/// Tests resolving a bare role ID.
///
/// Expected: Some with the role of that ID
#[test]
fn resolves_id() {
    let role = find_role(&roster(), "323456789012345678").unwrap();

    assert_eq!(role.position, 3);
}

/// Tests resolving a name, preferring the first role in roster order.
///
/// Expected: Some with the lowest duplicate
#[test]
fn resolves_first_name_match() {
    let role = find_role(&roster(), "Announcements").unwrap();

    assert_eq!(role.role_id, 123456789012345678);
}

/// Tests that short numbers are treated as names, not IDs.
///
/// Expected: Some with the role named "2024"
#[test]
fn resolves_numeric_name() {
    let role = find_role(&roster(), "2024").unwrap();

    assert_eq!(role.role_id, 223456789012345678);
}

/// Tests that an unknown ID does not fall back to a name match.
///
/// Expected: None
#[test]
fn unknown_id_does_not_match() {
    assert!(find_role(&roster(), "999999999999999999").is_none());
    assert!(find_role(&roster(), "<@&999999999999999999>").is_none());
}

/// Tests that names are matched exactly.
///
/// Expected: None
#[test]
fn requires_exact_name() {
    assert!(find_role(&roster(), "announcements").is_none());
    assert!(find_role(&roster(), "Announce").is_none());
    assert!(find_role(&roster(), "").is_none());
}
