pub mod project;
pub mod provider;
pub mod skill;
