pub use super::board_column::Entity as BoardColumn;
pub use super::entry::Entity as Entry;
pub use super::friendship::Entity as Friendship;
pub use super::room::Entity as Room;
pub use super::room_invitation::Entity as RoomInvitation;
pub use super::room_member::Entity as RoomMember;
pub use super::task::Entity as Task;
pub use super::task_assignment::Entity as TaskAssignment;
pub use super::user::Entity as User;
