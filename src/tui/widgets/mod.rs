pub mod actions;
pub mod calories;
pub mod header;
pub mod insight;
pub mod meals;
pub mod statusbar;
pub mod tasks;
