pub mod dispatch;
pub mod layout;
pub mod role;
pub mod schema;
pub mod shared;
pub mod team;
pub mod tenant;
