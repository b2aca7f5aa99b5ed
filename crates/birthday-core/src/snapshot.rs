//! Page Snapshot
//!
//! Everything the page shows for one tick of the clock, derived from the
//! configuration and a single reference timestamp.

use chrono::{DateTime, TimeZone};

use crate::config::PageConfig;
use crate::countdown::{compute_countdown, is_target_day, Countdown};
use crate::gallery::{select_hourly_gallery, GalleryItem, HourKey};
use crate::messages::select_today_messages;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    pub countdown: Countdown,
    pub is_birthday: bool,
    pub wishes: Vec<String>,
    /// Gallery cache key; recompute `gallery` only when this changes
    pub hour: HourKey,
}

impl PageSnapshot {
    pub fn at<Tz: TimeZone>(config: &PageConfig, reference: &DateTime<Tz>) -> Self {
        Self {
            countdown: compute_countdown(config.birthday, reference),
            is_birthday: is_target_day(config.birthday, reference),
            wishes: select_today_messages(reference, &config.wish_messages, config.wishes_per_day).to_vec(),
            hour: HourKey::of(reference),
        }
    }

    pub fn gallery<Tz: TimeZone>(config: &PageConfig, reference: &DateTime<Tz>) -> Vec<GalleryItem> {
        select_hourly_gallery(reference, &config.image_pool(), &config.layout_pattern)
    }
}
