//! Committee member command and query handlers.

mod add_member;
mod confirm_member;
mod decline_member;
mod list_members;
mod remove_member;
mod send_invite;

pub use add_member::{AddMemberCommand, AddMemberHandler};
pub use confirm_member::{ConfirmMemberCommand, ConfirmMemberHandler};
pub use decline_member::{DeclineMemberCommand, DeclineMemberHandler};
pub use list_members::{ListMembersHandler, ListMembersQuery};
pub use remove_member::{RemoveMemberCommand, RemoveMemberHandler};
pub use send_invite::{SendInviteCommand, SendInviteHandler};
