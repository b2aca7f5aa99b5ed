//! Hourly Gallery Selector
//!
//! The photo wall is reshuffled once per local calendar hour. Within the
//! hour every call returns the same items.

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::shuffle::shuffle;

/// Visual slot of a gallery card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutClass {
    Large,
    Small,
    Wide,
}

impl LayoutClass {
    /// CSS class name
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutClass::Large => "large",
            LayoutClass::Small => "small",
            LayoutClass::Wide => "wide",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub title: String,
    pub image: String,
    pub layout: LayoutClass,
}

/// Calendar hour of a timestamp, used as the reshuffle cache key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HourKey {
    pub year: i32,
    /// Zero-based month (January = 0)
    pub month0: u32,
    pub day: u32,
    pub hour: u32,
}

impl HourKey {
    pub fn of<Tz: TimeZone>(reference: &DateTime<Tz>) -> Self {
        Self {
            year: reference.year(),
            month0: reference.month0(),
            day: reference.day(),
            hour: reference.hour(),
        }
    }

    /// `"{year}-{month0}-{day}-{hour}"`, no padding
    pub fn seed(&self) -> String {
        format!("{}-{}-{}-{}", self.year, self.month0, self.day, self.hour)
    }
}

pub fn hour_seed<Tz: TimeZone>(reference: &DateTime<Tz>) -> String {
    HourKey::of(reference).seed()
}

/// `{base}img1.{ext}` .. `{base}img{count}.{ext}`
pub fn image_pool(asset_base: &str, count: usize, extension: &str) -> Vec<String> {
    (1..=count)
        .map(|n| format!("{}img{}.{}", asset_base, n, extension))
        .collect()
}

/// Pick this hour's photos: shuffle the pool with the hour seed, keep one
/// per layout slot, title them "Memory 1", "Memory 2", ...
///
/// A pool shorter than the pattern yields only as many items as the pool has.
pub fn select_hourly_gallery<Tz: TimeZone>(
    reference: &DateTime<Tz>,
    pool: &[String],
    pattern: &[LayoutClass],
) -> Vec<GalleryItem> {
    let seed = hour_seed(reference);
    log::debug!("reshuffling gallery with seed {}", seed);

    shuffle(&seed, pool)
        .into_iter()
        .zip(pattern.iter().copied())
        .enumerate()
        .map(|(index, (image, layout))| GalleryItem {
            title: format!("Memory {}", index + 1),
            image,
            layout,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    const PATTERN: [LayoutClass; 6] = [
        LayoutClass::Large,
        LayoutClass::Small,
        LayoutClass::Small,
        LayoutClass::Wide,
        LayoutClass::Small,
        LayoutClass::Small,
    ];

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_hour_seed_uses_zero_based_month() {
        assert_eq!(hour_seed(&at(2024, 2, 24, 13, 5, 0)), "2024-1-24-13");
        assert_eq!(hour_seed(&at(2025, 12, 1, 0, 0, 0)), "2025-11-1-0");
    }

    #[test]
    fn test_image_pool() {
        let pool = image_pool("./", 3, "jpg");
        assert_eq!(pool, vec!["./img1.jpg", "./img2.jpg", "./img3.jpg"]);
    }

    #[test]
    fn test_known_selection() {
        let pool = image_pool("", 18, "jpg");
        let items = select_hourly_gallery(&at(2024, 2, 24, 13, 0, 0), &pool, &PATTERN);
        let images: Vec<&str> = items.iter().map(|i| i.image.as_str()).collect();
        assert_eq!(images, vec!["img9.jpg", "img13.jpg", "img12.jpg", "img3.jpg", "img11.jpg", "img14.jpg"]);
    }

    #[test]
    fn test_titles_and_layouts_are_positional() {
        let pool = image_pool("", 18, "jpg");
        let items = select_hourly_gallery(&at(2024, 6, 1, 9, 0, 0), &pool, &PATTERN);
        assert_eq!(items.len(), PATTERN.len());
        for (index, item) in items.iter().enumerate() {
            assert_eq!(item.title, format!("Memory {}", index + 1));
            assert_eq!(item.layout, PATTERN[index]);
        }
    }

    #[test]
    fn test_stable_within_hour() {
        let pool = image_pool("", 18, "jpg");
        let first = select_hourly_gallery(&at(2024, 2, 24, 13, 0, 0), &pool, &PATTERN);
        let last = select_hourly_gallery(&at(2024, 2, 24, 13, 59, 59), &pool, &PATTERN);
        assert_eq!(first, last);
    }

    #[test]
    fn test_changes_at_hour_boundary() {
        let pool = image_pool("", 18, "jpg");
        let before = at(2024, 2, 24, 13, 59, 59);
        let after = at(2024, 2, 24, 14, 0, 0);
        assert_ne!(HourKey::of(&before), HourKey::of(&after));
        assert_ne!(
            select_hourly_gallery(&before, &pool, &PATTERN),
            select_hourly_gallery(&after, &pool, &PATTERN)
        );
    }

    #[test]
    fn test_short_pool_is_truncated() {
        let pool = image_pool("", 4, "png");
        let items = select_hourly_gallery(&at(2024, 1, 1, 0, 0, 0), &pool, &PATTERN);
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn test_layout_class_names() {
        assert_eq!(LayoutClass::Large.as_str(), "large");
        assert_eq!(serde_json::to_string(&LayoutClass::Wide).unwrap(), "\"wide\"");
    }
}
