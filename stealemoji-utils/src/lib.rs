/// Text-reply confirmation prompts.
pub mod confirmation;
/// Embed builders and reply helpers shared across commands.
pub mod embed;
/// Pure text helpers (paging, yes/no parsing, labels).
pub mod formatting;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Permission helper utilities.
pub mod permissions;
