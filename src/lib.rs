pub mod disable;
pub mod driver;
pub mod icon_set;
pub mod verify;
