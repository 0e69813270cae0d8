pub mod layout;
pub mod role;
pub mod team;
pub mod tenant;

pub use layout::LayoutCommands;
pub use role::RoleCommands;
pub use team::TeamCommands;
pub use tenant::TenantCommands;
