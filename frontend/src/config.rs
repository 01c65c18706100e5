use std::collections::BTreeMap;

use log::Level;

use crate::scheduling::assets::AssetUrls;
use crate::scheduling::options::{
    ColorScheme, DisplayOptions, ModalSize, ModalWidth, Prefill, SchedulingConfig, UtmTracking,
};

pub const TIKTOK_URL: &str = "https://www.tiktok.com/@daviddriscoll18";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/daviddriscoll18";

pub const SCHEDULING_URL: &str = "https://calendly.com/davidpdriscoll8/consultation";
pub const WIDGET_SCRIPT_URL: &str = "https://assets.calendly.com/assets/external/widget.js";
pub const WIDGET_STYLESHEET_URL: &str = "https://assets.calendly.com/assets/external/widget.css";

pub const COPYRIGHT_HOLDER: &str = "Fitness Coaching";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn widget_assets() -> AssetUrls {
    AssetUrls {
        script: WIDGET_SCRIPT_URL.to_string(),
        stylesheet: WIDGET_STYLESHEET_URL.to_string(),
    }
}

pub fn scheduling_config() -> SchedulingConfig {
    SchedulingConfig {
        base_url: SCHEDULING_URL.to_string(),
        display: DisplayOptions {
            hide_event_details: true,
            hide_gdpr_banner: true,
            hide_landing_page_details: true,
        },
        colors: ColorScheme {
            primary: Some("ef4444".to_string()),
            text: Some("374151".to_string()),
            background: Some("ffffff".to_string()),
            link: Some("ef4444".to_string()),
        },
        prefill: Prefill {
            name: String::new(),
            email: String::new(),
            custom_answers: BTreeMap::new(),
        },
        utm: UtmTracking {
            utm_source: Some("website".to_string()),
            utm_medium: Some("popup".to_string()),
            utm_campaign: Some("fitness_consultation".to_string()),
            utm_content: Some("hero_cta".to_string()),
        },
        modal: ModalSize {
            max_width: ModalWidth::Xl4,
            height: "80vh".to_string(),
        },
    }
}
