use std::ops::Deref;
use std::rc::Rc;

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{js_sys, HtmlElement};

use crate::config;
use crate::scheduling::assets::AssetUrls;
use crate::scheduling::options::InlineWidgetOptions;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Calendly, js_name = initInlineWidget)]
    fn calendly_init_inline_widget(options: &JsValue) -> Result<(), JsValue>;
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("scheduling widget library is not loaded")]
    Unavailable,
    #[error("could not serialize widget options: {0}")]
    Serialize(String),
    #[error("widget library threw: {0}")]
    Js(String),
}

impl From<serde_wasm_bindgen::Error> for ProviderError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ProviderError::Serialize(err.to_string())
    }
}

impl From<JsValue> for ProviderError {
    fn from(value: JsValue) -> Self {
        ProviderError::Js(format!("{:?}", value))
    }
}

/// Something that can render an inline scheduling widget into an element.
pub trait WidgetProvider {
    /// Script and stylesheet the provider needs in the document.
    fn assets(&self) -> AssetUrls;

    /// Whether the provider's library has registered itself and can be called.
    fn is_ready(&self) -> bool;

    fn init_inline_widget(
        &self,
        options: &InlineWidgetOptions,
        parent: &HtmlElement,
    ) -> Result<(), ProviderError>;
}

pub struct CalendlyProvider {
    assets: AssetUrls,
}

impl CalendlyProvider {
    pub fn new() -> Self {
        Self {
            assets: config::widget_assets(),
        }
    }
}

impl Default for CalendlyProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetProvider for CalendlyProvider {
    fn assets(&self) -> AssetUrls {
        self.assets.clone()
    }

    fn is_ready(&self) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        js_sys::Reflect::get(&window, &JsValue::from_str("Calendly"))
            .map(|calendly| !calendly.is_undefined() && !calendly.is_null())
            .unwrap_or(false)
    }

    fn init_inline_widget(
        &self,
        options: &InlineWidgetOptions,
        parent: &HtmlElement,
    ) -> Result<(), ProviderError> {
        if !self.is_ready() {
            return Err(ProviderError::Unavailable);
        }

        // json_compatible keeps customAnswers a plain object instead of a Map.
        let value = options.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
        js_sys::Reflect::set(&value, &JsValue::from_str("parentElement"), parent)?;
        calendly_init_inline_widget(&value)?;
        Ok(())
    }
}

/// Shared provider reference that can travel through component props.
#[derive(Clone)]
pub struct ProviderHandle(Rc<dyn WidgetProvider>);

impl ProviderHandle {
    pub fn new(provider: impl WidgetProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn calendly() -> Self {
        Self::new(CalendlyProvider::new())
    }
}

impl<P: WidgetProvider + 'static> From<Rc<P>> for ProviderHandle {
    fn from(provider: Rc<P>) -> Self {
        Self(provider)
    }
}

impl Deref for ProviderHandle {
    type Target = dyn WidgetProvider;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for ProviderHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingProvider;
    use super::*;

    #[test]
    fn handles_compare_by_identity() {
        let recorder = RecordingProvider::ready();
        let first = ProviderHandle::from(recorder.clone());
        let second = first.clone();
        let other = ProviderHandle::from(RecordingProvider::ready());

        assert!(first == second);
        assert!(first != other);
        assert!(ProviderHandle::from(recorder) == first);
    }

    #[test]
    fn handle_exposes_provider_readiness() {
        let recorder = RecordingProvider::unavailable();
        let handle = ProviderHandle::from(recorder.clone());
        assert!(!handle.is_ready());
        recorder.set_ready(true);
        assert!(handle.is_ready());
    }

    #[test]
    fn calendly_assets_come_from_config() {
        let provider = CalendlyProvider::new();
        assert_eq!(provider.assets(), config::widget_assets());
        assert!(provider.assets().script.ends_with("/widget.js"));
        assert!(provider.assets().stylesheet.ends_with("/widget.css"));
    }

    #[test]
    fn unavailable_error_reads_plainly() {
        assert_eq!(
            ProviderError::Unavailable.to_string(),
            "scheduling widget library is not loaded"
        );
    }
}
