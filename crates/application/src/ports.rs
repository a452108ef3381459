mod directories;
mod repositories;

pub use directories::{TeamDirectory, UserDirectory};
pub use repositories::{MembershipRepository, RoleRepository};
