//! Birthday Page Core
//!
//! Pure, clock-free logic behind the page. Every function takes the
//! reference timestamp as a parameter, so the browser tick is the only
//! place that reads the wall clock.
//!
//! - shuffle: seeded PRNG and Fisher-Yates permutation
//! - gallery: hourly photo selection
//! - countdown: next birthday and remaining time
//! - messages: daily wish rotation
//! - config: page configuration and validation
//! - snapshot: everything the page shows for one tick
//! - music: background music toggle state

mod error;

pub mod config;
pub mod countdown;
pub mod gallery;
pub mod messages;
pub mod music;
pub mod shuffle;
pub mod snapshot;

pub use config::PageConfig;
pub use countdown::{compute_countdown, format_counter, is_target_day, next_occurrence, Countdown, MonthDay};
pub use error::{CoreError, CoreResult};
pub use gallery::{hour_seed, image_pool, select_hourly_gallery, GalleryItem, HourKey, LayoutClass};
pub use messages::{cycle_index, day_number, select_today_messages};
pub use music::MusicState;
pub use shuffle::{seed_hash, shuffle, shuffle_in_place, SeededRandom};
pub use snapshot::PageSnapshot;
