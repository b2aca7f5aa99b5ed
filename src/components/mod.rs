//! UI Components
//!
//! Leptos components for each section of the page.

mod countdown_strip;
mod gallery;
mod hero;
mod music_player;
mod surprise_panel;
mod wish_grid;
mod wish_panel;

pub use countdown_strip::CountdownStrip;
pub use gallery::Gallery;
pub use hero::Hero;
pub use music_player::MusicPlayer;
pub use surprise_panel::SurprisePanel;
pub use wish_grid::WishGrid;
pub use wish_panel::WishPanel;
