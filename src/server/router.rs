use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        column::{ColumnDto, CreateColumnDto, UpdateColumnDto},
        email::{CodePurposeDto, SendCodeDto, VerifyCodeDto},
        entry::{CreateEntryDto, EntryDto},
        friendship::{FriendshipDto, IncomingFriendRequestDto, SendFriendRequestDto},
        invitation::{CreateInvitationDto, InvitationDto, PendingInvitationDto},
        room::{AssignRoleDto, CreateRoomDto, RoomDetailDto, RoomDto, RoomListItemDto, RoomMemberDto},
        task::{
            AssignmentOutcomeDto, CreateTaskDto, TaskDto, TaskListDto, TaskListItemDto,
            UpdateAssigneesDto, UpdateTaskDto,
        },
        user::{
            LoginUserDto, PaginatedUsersDto, RegisterUserDto, ResetPasswordDto, UserDto,
            UserSummaryDto,
        },
    },
    server::{
        controller::{column, email, entry, friendship, invitation, room, task, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Room Board API",
        description = "Rooms, membership, invitations, friendships and task boards"
    ),
    paths(
        user::register,
        user::login,
        user::logout,
        user::reset_password,
        user::get_me,
        user::get_users,
        user::get_user,
        email::send_code,
        email::verify_code,
        room::get_rooms,
        room::create_room,
        room::get_room,
        room::delete_room,
        room::get_members,
        room::assign_role,
        room::remove_member,
        invitation::create_invitation,
        invitation::get_pending_invitations,
        invitation::accept_invitation,
        invitation::reject_invitation,
        friendship::send_request,
        friendship::get_incoming_requests,
        friendship::accept_request,
        friendship::get_friends,
        column::get_columns,
        column::create_column,
        column::update_column,
        column::delete_column,
        task::get_tasks,
        task::create_task,
        task::get_task,
        task::update_task,
        task::delete_task,
        task::update_assignees,
        entry::get_entries,
        entry::create_entry,
        entry::delete_entry,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        UserDto,
        UserSummaryDto,
        PaginatedUsersDto,
        RegisterUserDto,
        LoginUserDto,
        ResetPasswordDto,
        CodePurposeDto,
        SendCodeDto,
        VerifyCodeDto,
        RoomDto,
        RoomListItemDto,
        RoomDetailDto,
        RoomMemberDto,
        CreateRoomDto,
        AssignRoleDto,
        CreateInvitationDto,
        InvitationDto,
        PendingInvitationDto,
        SendFriendRequestDto,
        FriendshipDto,
        IncomingFriendRequestDto,
        ColumnDto,
        CreateColumnDto,
        UpdateColumnDto,
        TaskDto,
        TaskListDto,
        TaskListItemDto,
        CreateTaskDto,
        UpdateTaskDto,
        UpdateAssigneesDto,
        AssignmentOutcomeDto,
        EntryDto,
        CreateEntryDto,
    )),
    tags(
        (name = "user", description = "Registration, login and user lookup"),
        (name = "email", description = "Email verification codes"),
        (name = "room", description = "Rooms and their member roster"),
        (name = "invitation", description = "Room invitations"),
        (name = "friend", description = "Friend requests and friend lists"),
        (name = "column", description = "Board columns"),
        (name = "task", description = "Tasks and their assignees"),
        (name = "entry", description = "Room entries"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .merge(user_routes())
        .merge(email_routes())
        .merge(room_routes())
        .merge(invitation_routes())
        .merge(friend_routes())
        .merge(board_routes())
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(user::get_users))
        .route("/api/users/register", post(user::register))
        .route("/api/users/login", post(user::login))
        .route("/api/users/logout", post(user::logout))
        .route("/api/users/reset-password", post(user::reset_password))
        .route("/api/users/me", get(user::get_me))
        .route("/api/users/{user_id}", get(user::get_user))
}

fn email_routes() -> Router<AppState> {
    Router::new()
        .route("/api/email/send-code", post(email::send_code))
        .route("/api/email/verify-code", post(email::verify_code))
}

fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/api/rooms", get(room::get_rooms).post(room::create_room))
        .route(
            "/api/rooms/{room_id}",
            get(room::get_room).delete(room::delete_room),
        )
        .route("/api/rooms/{room_id}/members", get(room::get_members))
        .route(
            "/api/rooms/{room_id}/members/{user_id}",
            delete(room::remove_member),
        )
        .route(
            "/api/rooms/{room_id}/members/{user_id}/role",
            put(room::assign_role),
        )
}

fn invitation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/invitations",
            get(invitation::get_pending_invitations).post(invitation::create_invitation),
        )
        .route(
            "/api/invitations/{invitation_id}/accept",
            post(invitation::accept_invitation),
        )
        .route(
            "/api/invitations/{invitation_id}/reject",
            post(invitation::reject_invitation),
        )
}

fn friend_routes() -> Router<AppState> {
    Router::new()
        .route("/api/friends", get(friendship::get_friends))
        .route(
            "/api/friends/requests",
            get(friendship::get_incoming_requests).post(friendship::send_request),
        )
        .route(
            "/api/friends/requests/{requester_id}/accept",
            post(friendship::accept_request),
        )
}

/// Columns, tasks and entries; each resolves its room from the request.
fn board_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/columns",
            get(column::get_columns).post(column::create_column),
        )
        .route(
            "/api/columns/{column_id}",
            put(column::update_column).delete(column::delete_column),
        )
        .route("/api/tasks", get(task::get_tasks).post(task::create_task))
        .route(
            "/api/tasks/{task_id}",
            get(task::get_task)
                .put(task::update_task)
                .delete(task::delete_task),
        )
        .route("/api/tasks/{task_id}/assignees", put(task::update_assignees))
        .route(
            "/api/entries",
            get(entry::get_entries).post(entry::create_entry),
        )
        .route(
            "/api/entries/{entry_id}",
            delete(entry::delete_entry),
        )
}
