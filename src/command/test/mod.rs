use crate::{
    command::{dispatch, reply::{GUILD_CONTEXT_REQUIRED_ERROR, SYNTAX, UNHANDLED_EXCEPTION}},
    model::command::Invocation,
};
use serenity::all::Permissions;
use test_utils::{
    builder::{TestBuilder, TEST_BOT_ID, TEST_GUILD_ID},
    context::PlatformCall,
    serenity::create_test_notification_role,
};


const MEMBER_ID: u64 = 400000000000000000;
const ANNOUNCEMENTS_ID: u64 = 111111111111111111;

fn in_guild() -> Invocation {
    Invocation {
        guild_id: Some(TEST_GUILD_ID),
        author_id: MEMBER_ID,
    }
}

fn in_direct_message() -> Invocation {
    Invocation {
        guild_id: None,
        author_id: MEMBER_ID,
    }
}
