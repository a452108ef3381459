pub mod directory;
pub mod health;
pub mod memberships;
pub mod roles;
