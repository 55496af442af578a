//! The six field groups of the account record.

pub(crate) mod avatar;
pub(crate) mod email;
pub(crate) mod name;
pub(crate) mod password;
pub(crate) mod stats;
pub(crate) mod theme;

pub use avatar::AvatarGroup;
pub use email::EmailGroup;
pub use name::NameGroup;
pub use password::PasswordGroup;
pub use stats::StatsGroup;
pub use theme::ThemeGroup;
