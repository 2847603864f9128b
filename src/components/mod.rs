pub mod helpers;
pub mod menu_bar;
pub mod palette;
