use log::debug;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

/// Attribute stamped on every element the popup injects, so they can be told
/// apart from the page's own tags.
pub const ASSET_MARKER: &str = "data-scheduling-widget";

#[derive(Clone, Debug, PartialEq)]
pub struct AssetUrls {
    pub script: String,
    pub stylesheet: String,
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("no document available")]
    NoDocument,
    #[error("document has no <head>")]
    NoHead,
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for AssetError {
    fn from(value: JsValue) -> Self {
        AssetError::Dom(format!("{:?}", value))
    }
}

/// The widget's script and stylesheet while they live in `<head>`.
/// Dropping the handle removes both.
pub struct InjectedAssets {
    script: Element,
    stylesheet: Element,
    on_load: Option<Closure<dyn FnMut()>>,
}

impl InjectedAssets {
    pub fn inject(
        document: &Document,
        urls: &AssetUrls,
        on_script_load: Option<Box<dyn FnMut()>>,
    ) -> Result<Self, AssetError> {
        let head = document.head().ok_or(AssetError::NoHead)?;

        let script = document.create_element("script")?;
        script.set_attribute("src", &urls.script)?;
        script.set_attribute("async", "")?;
        script.set_attribute(ASSET_MARKER, "script")?;

        let stylesheet = document.create_element("link")?;
        stylesheet.set_attribute("rel", "stylesheet")?;
        stylesheet.set_attribute("href", &urls.stylesheet)?;
        stylesheet.set_attribute(ASSET_MARKER, "stylesheet")?;

        // Build the handle before touching <head> so a failed append still
        // detaches whatever made it in.
        let mut assets = Self {
            script,
            stylesheet,
            on_load: None,
        };

        if let Some(callback) = on_script_load {
            let closure = Closure::wrap(callback);
            assets
                .script
                .add_event_listener_with_callback("load", closure.as_ref().unchecked_ref())?;
            assets.on_load = Some(closure);
        }

        head.append_child(&assets.script)?;
        head.append_child(&assets.stylesheet)?;
        debug!("injected scheduling widget assets from {}", urls.script);

        Ok(assets)
    }

    pub fn inject_current(
        urls: &AssetUrls,
        on_script_load: Option<Box<dyn FnMut()>>,
    ) -> Result<Self, AssetError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(AssetError::NoDocument)?;
        Self::inject(&document, urls, on_script_load)
    }

    pub fn release(self) {
        drop(self);
    }

    /// Counts widget script and stylesheet tags currently in `document`.
    pub fn count_in(document: &Document) -> Result<(u32, u32), AssetError> {
        let scripts = document.query_selector_all(&format!("script[{}]", ASSET_MARKER))?;
        let stylesheets = document.query_selector_all(&format!("link[{}]", ASSET_MARKER))?;
        Ok((scripts.length(), stylesheets.length()))
    }
}

impl Drop for InjectedAssets {
    fn drop(&mut self) {
        if let Some(on_load) = self.on_load.take() {
            let _ = self
                .script
                .remove_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
        }
        // remove() on a detached node does nothing.
        self.script.remove();
        self.stylesheet.remove();
        debug!("released scheduling widget assets");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;
    use gloo_timers::future::sleep;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn test_urls() -> AssetUrls {
        AssetUrls {
            script: "data:text/javascript,".to_string(),
            stylesheet: "data:text/css,".to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn inject_adds_one_of_each_and_drop_removes_them() {
        let document = document();
        assert_eq!(InjectedAssets::count_in(&document).unwrap(), (0, 0));

        let assets = InjectedAssets::inject(&document, &test_urls(), None).unwrap();
        assert_eq!(InjectedAssets::count_in(&document).unwrap(), (1, 1));

        assets.release();
        assert_eq!(InjectedAssets::count_in(&document).unwrap(), (0, 0));
    }

    #[wasm_bindgen_test]
    fn release_after_external_removal_is_quiet() {
        let document = document();
        let assets = InjectedAssets::inject(&document, &test_urls(), None).unwrap();

        let head = document.head().unwrap();
        while let Some(node) = head
            .query_selector(&format!("[{}]", ASSET_MARKER))
            .unwrap()
        {
            node.remove();
        }

        drop(assets);
        assert_eq!(InjectedAssets::count_in(&document).unwrap(), (0, 0));
    }

    #[wasm_bindgen_test]
    async fn load_callback_fires_once_script_is_loaded() {
        let document = document();
        let loaded = Rc::new(Cell::new(0));
        let counter = loaded.clone();
        let assets = InjectedAssets::inject(
            &document,
            &test_urls(),
            Some(Box::new(move || counter.set(counter.get() + 1))),
        )
        .unwrap();

        sleep(Duration::from_millis(50)).await;
        assert_eq!(loaded.get(), 1);
        drop(assets);
    }
}
