mod board_column;
mod entry;
mod friendship;
mod room;
mod room_invitation;
mod room_member;
mod task;
mod task_assignment;
mod user;
