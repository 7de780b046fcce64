pub mod cards;
pub mod layout;
pub mod theme;
