pub mod activity_bar;
pub mod counters;
pub mod detail_panel;
pub mod game_list;
pub mod letter_bar;
