pub mod arrow_button;
pub mod article_view;
pub mod main_window;
pub mod outside_click;
pub mod params_panel;
pub mod theme;
pub mod widgets;
