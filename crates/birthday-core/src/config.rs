//! Page Configuration
//!
//! Everything the page treats as fixed: who it celebrates, which photos and
//! wishes it rotates through, and where its assets live. Defaults reproduce
//! the page as first published; a JSON document may override any field.

use serde::{Deserialize, Serialize};

use crate::countdown::MonthDay;
use crate::error::{CoreError, CoreResult};
use crate::gallery::{image_pool, LayoutClass};

const DEFAULT_BIRTHDAY: MonthDay = MonthDay::new_unchecked(2, 24);

const DEFAULT_WISHES: [&str; 8] = [
    "💖 May your smile shine brighter than the candles today. Wishing you endless joy!",
    "✨ May this birthday bring you moments that make your heart feel full.",
    "🌸 May every new morning bring you peace, happiness, and sweet surprises.",
    "🎉 Keep shining, keep dreaming, and keep being wonderfully you.",
    "🌟 May your path be filled with love, laughter, and beautiful memories.",
    "💫 Wishing you strength, success, and smiles in every step ahead.",
    "🕊️ May your heart stay light and your days stay bright all year long.",
    "🎂 You deserve all the happiness in the world today and always.",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Name shown in the hero heading
    pub name: String,
    pub birthday: MonthDay,
    /// Prefix for every asset URL
    pub asset_base: String,
    /// Photos are `img1` .. `img{image_count}`
    pub image_count: usize,
    pub image_extension: String,
    /// One gallery card per entry
    pub layout_pattern: Vec<LayoutClass>,
    pub wish_messages: Vec<String>,
    pub wishes_per_day: usize,
    /// Opened from the surprise panel on the birthday
    pub surprise_url: String,
    pub music_src: String,
    pub music_volume: f64,
    pub tick_millis: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            name: "Mayesha".to_string(),
            birthday: DEFAULT_BIRTHDAY,
            asset_base: "./".to_string(),
            image_count: 18,
            image_extension: "jpg".to_string(),
            layout_pattern: vec![
                LayoutClass::Large,
                LayoutClass::Small,
                LayoutClass::Small,
                LayoutClass::Wide,
                LayoutClass::Small,
                LayoutClass::Small,
            ],
            wish_messages: DEFAULT_WISHES.iter().map(|w| w.to_string()).collect(),
            wishes_per_day: 2,
            surprise_url: "https://codewithshamim-bs23.github.io/HappyBirthday/".to_string(),
            music_src: "hbd.mp3".to_string(),
            music_volume: 0.7,
            tick_millis: 1_000,
        }
    }
}

impl PageConfig {
    /// Parse a JSON override (missing fields keep their defaults) and validate it
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the size requirements the selectors rely on
    pub fn validate(&self) -> CoreResult<()> {
        if self.layout_pattern.is_empty() {
            return Err(CoreError::InvalidConfig("layout pattern is empty".into()));
        }
        if self.image_count < self.layout_pattern.len() {
            return Err(CoreError::InvalidConfig(format!(
                "{} images cannot fill {} gallery slots",
                self.image_count,
                self.layout_pattern.len()
            )));
        }
        if self.wishes_per_day == 0 {
            return Err(CoreError::InvalidConfig("wishes_per_day must be at least 1".into()));
        }
        if self.wish_messages.len() < self.wishes_per_day
            || self.wish_messages.len() % self.wishes_per_day != 0
        {
            return Err(CoreError::InvalidConfig(format!(
                "{} wishes do not split into groups of {}",
                self.wish_messages.len(),
                self.wishes_per_day
            )));
        }
        if !(0.0..=1.0).contains(&self.music_volume) {
            return Err(CoreError::InvalidConfig(format!("music volume {} outside 0..=1", self.music_volume)));
        }
        if self.tick_millis == 0 {
            return Err(CoreError::InvalidConfig("tick_millis must be positive".into()));
        }
        Ok(())
    }

    pub fn image_pool(&self) -> Vec<String> {
        image_pool(&self.asset_base, self.image_count, &self.image_extension)
    }

    pub fn music_url(&self) -> String {
        format!("{}{}", self.asset_base, self.music_src)
    }

    /// Number of days before the wishes repeat
    pub fn wish_cycle_length(&self) -> usize {
        self.wish_messages.len() / self.wishes_per_day.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_valid() {
        let config = PageConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.birthday, MonthDay::new(2, 24).unwrap());
        assert_eq!(config.wish_cycle_length(), 4);
        assert_eq!(config.image_pool().len(), 18);
        assert_eq!(config.image_pool()[0], "./img1.jpg");
        assert_eq!(config.music_url(), "./hbd.mp3");
    }

    #[test]
    fn test_from_json_overrides_fields() {
        let config = PageConfig::from_json(
            r#"{
                "name": "Ada",
                "birthday": { "month": 12, "day": 10 },
                "asset_base": "/assets/",
                "layout_pattern": ["wide", "large"]
            }"#,
        )
        .unwrap();
        assert_eq!(config.name, "Ada");
        assert_eq!(config.birthday, MonthDay::new(12, 10).unwrap());
        assert_eq!(config.layout_pattern, vec![LayoutClass::Wide, LayoutClass::Large]);
        assert_eq!(config.music_url(), "/assets/hbd.mp3");
        // untouched fields keep defaults
        assert_eq!(config.image_count, 18);
        assert_eq!(config.wishes_per_day, 2);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn test_rejects_small_pool() {
        let err = PageConfig::from_json(r#"{ "image_count": 3 }"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_uneven_wish_groups() {
        let config = PageConfig { wishes_per_day: 3, ..PageConfig::default() };
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig(_))));

        let config = PageConfig { wishes_per_day: 0, ..PageConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_volume_and_tick() {
        let config = PageConfig { music_volume: 1.5, ..PageConfig::default() };
        assert!(config.validate().is_err());
        let config = PageConfig { tick_millis: 0, ..PageConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_birthday_and_json() {
        assert!(matches!(
            PageConfig::from_json(r#"{ "birthday": { "month": 2, "day": 30 } }"#),
            Err(CoreError::Parse(_))
        ));
        assert!(matches!(PageConfig::from_json("not json"), Err(CoreError::Parse(_))));
    }
}
