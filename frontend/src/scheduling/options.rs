use serde::Serialize;
use std::collections::BTreeMap;

/// Tailwind-style width steps for the scheduling modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalWidth {
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,
    Xl3,
    Xl4,
    Xl5,
    Xl6,
    Xl7,
}

impl ModalWidth {
    pub fn as_css(&self) -> &'static str {
        match self {
            ModalWidth::Sm => "24rem",
            ModalWidth::Md => "28rem",
            ModalWidth::Lg => "32rem",
            ModalWidth::Xl => "36rem",
            ModalWidth::Xl2 => "42rem",
            ModalWidth::Xl3 => "48rem",
            ModalWidth::Xl4 => "56rem",
            ModalWidth::Xl5 => "64rem",
            ModalWidth::Xl6 => "72rem",
            ModalWidth::Xl7 => "80rem",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalSize {
    pub max_width: ModalWidth,
    /// Any CSS height value, e.g. `80vh`.
    pub height: String,
}

impl ModalSize {
    pub fn style(&self) -> String {
        format!("max-width: {}; height: {};", self.max_width.as_css(), self.height)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayOptions {
    pub hide_event_details: bool,
    pub hide_gdpr_banner: bool,
    pub hide_landing_page_details: bool,
}

/// Widget colors as hex without the leading `#`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorScheme {
    pub primary: Option<String>,
    pub text: Option<String>,
    pub background: Option<String>,
    pub link: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prefill {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    /// Custom question answers keyed `a1`..`a10`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_answers: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UtmTracking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
}

/// Everything the popup needs to ask the provider for an inline widget.
#[derive(Clone, Debug, PartialEq)]
pub struct SchedulingConfig {
    pub base_url: String,
    pub display: DisplayOptions,
    pub colors: ColorScheme,
    pub prefill: Prefill,
    pub utm: UtmTracking,
    pub modal: ModalSize,
}

/// Record handed to the provider's init entry point. The parent element is
/// attached separately since it can't go through serde.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InlineWidgetOptions {
    pub url: String,
    pub prefill: Prefill,
    pub utm: UtmTracking,
}

impl SchedulingConfig {
    /// Query parameters in the order the widget URL carries them.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();

        let toggles = [
            ("hide_event_details", self.display.hide_event_details),
            ("hide_gdpr_banner", self.display.hide_gdpr_banner),
            ("hide_landing_page_details", self.display.hide_landing_page_details),
        ];
        for (key, enabled) in toggles {
            if enabled {
                pairs.push((key, "1"));
            }
        }

        let colors = [
            ("primary_color", &self.colors.primary),
            ("text_color", &self.colors.text),
            ("background_color", &self.colors.background),
            ("link_color", &self.colors.link),
        ];
        for (key, value) in colors {
            match value.as_deref() {
                Some(hex) if !hex.is_empty() => pairs.push((key, hex)),
                _ => {}
            }
        }

        pairs
    }

    pub fn build_url(&self) -> String {
        let query = self
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        if query.is_empty() {
            return self.base_url.clone();
        }

        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.base_url, separator, query)
    }

    pub fn widget_options(&self) -> InlineWidgetOptions {
        InlineWidgetOptions {
            url: self.build_url(),
            prefill: self.prefill.clone(),
            utm: self.utm.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bare(base_url: &str) -> SchedulingConfig {
        SchedulingConfig {
            base_url: base_url.to_string(),
            display: DisplayOptions::default(),
            colors: ColorScheme::default(),
            prefill: Prefill::default(),
            utm: UtmTracking::default(),
            modal: ModalSize {
                max_width: ModalWidth::Xl4,
                height: "80vh".to_string(),
            },
        }
    }

    #[test]
    fn shipped_config_builds_full_query() {
        let config = crate::config::scheduling_config();
        assert_eq!(
            config.build_url(),
            "https://calendly.com/davidpdriscoll8/consultation\
             ?hide_event_details=1&hide_gdpr_banner=1&hide_landing_page_details=1\
             &primary_color=ef4444&text_color=374151&background_color=ffffff&link_color=ef4444"
        );
    }

    #[test]
    fn only_enabled_toggles_and_set_colors_appear() {
        let mut config = bare("https://calendly.com/coach/intro");
        config.display.hide_gdpr_banner = true;
        config.colors.text = Some("111827".to_string());
        config.colors.link = Some(String::new());

        assert_eq!(
            config.build_url(),
            "https://calendly.com/coach/intro?hide_gdpr_banner=1&text_color=111827"
        );
    }

    #[test]
    fn no_parameters_leaves_base_url_untouched() {
        let config = bare("https://calendly.com/coach/intro");
        assert_eq!(config.build_url(), "https://calendly.com/coach/intro");
    }

    #[test]
    fn existing_query_is_extended() {
        let mut config = bare("https://calendly.com/coach/intro?month=2025-01");
        config.display.hide_event_details = true;
        assert_eq!(
            config.build_url(),
            "https://calendly.com/coach/intro?month=2025-01&hide_event_details=1"
        );
    }

    #[test]
    fn color_values_are_percent_encoded() {
        let mut config = bare("https://calendly.com/coach/intro");
        config.colors.primary = Some("ef 44&44".to_string());
        assert_eq!(
            config.build_url(),
            "https://calendly.com/coach/intro?primary_color=ef%2044%2644"
        );
    }

    #[test]
    fn widget_options_use_vendor_field_names() {
        let mut config = bare("https://calendly.com/coach/intro");
        config.prefill.email = "client@example.com".to_string();
        config
            .prefill
            .custom_answers
            .insert("a1".to_string(), "Lose fat".to_string());
        config.utm.utm_source = Some("website".to_string());
        config.utm.utm_campaign = Some("fitness_consultation".to_string());

        let value = serde_json::to_value(config.widget_options()).unwrap();
        assert_eq!(
            value,
            json!({
                "url": "https://calendly.com/coach/intro",
                "prefill": {
                    "email": "client@example.com",
                    "customAnswers": { "a1": "Lose fat" }
                },
                "utm": {
                    "utmSource": "website",
                    "utmCampaign": "fitness_consultation"
                }
            })
        );
    }

    #[test]
    fn empty_prefill_serializes_to_empty_object() {
        let value = serde_json::to_value(Prefill::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn modal_style_maps_width_step() {
        let modal = ModalSize {
            max_width: ModalWidth::Xl4,
            height: "80vh".to_string(),
        };
        assert_eq!(modal.style(), "max-width: 56rem; height: 80vh;");
    }
}
