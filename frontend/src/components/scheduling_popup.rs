use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info, warn};
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::scheduling::assets::InjectedAssets;
use crate::scheduling::options::SchedulingConfig;
use crate::scheduling::provider::ProviderHandle;
use crate::scheduling::session::WidgetSession;

pub const WIDGET_CONTAINER_ID: &str = "scheduling-widget";

fn default_config() -> Rc<SchedulingConfig> {
    Rc::new(config::scheduling_config())
}

#[derive(Properties, PartialEq)]
pub struct SchedulingPopupProps {
    pub visible: bool,
    pub on_close: Callback<()>,
    pub provider: ProviderHandle,
    #[prop_or_else(default_config)]
    pub config: Rc<SchedulingConfig>,
}

fn initialize_widget(
    provider: &ProviderHandle,
    config: &SchedulingConfig,
    container: &NodeRef,
    session: &RefCell<WidgetSession>,
) {
    let Some(parent) = container.cast::<HtmlElement>() else {
        warn!("scheduling widget container is not mounted");
        return;
    };

    if !session.borrow_mut().try_initialize(provider.is_ready()) {
        return;
    }

    match provider.init_inline_widget(&config.widget_options(), &parent) {
        Ok(()) => info!("scheduling widget initialized"),
        Err(e) => error!("failed to initialize scheduling widget: {}", e),
    }
}

#[function_component(SchedulingPopup)]
pub fn scheduling_popup(props: &SchedulingPopupProps) -> Html {
    let container_ref = use_node_ref();
    let session = use_mut_ref(WidgetSession::default);

    {
        let provider = props.provider.clone();
        let config = props.config.clone();
        let container_ref = container_ref.clone();
        let session = session.clone();
        use_effect_with_deps(
            move |visible| {
                let mut assets = None;

                if *visible {
                    session.borrow_mut().show();

                    let on_script_load: Box<dyn FnMut()> = {
                        let provider = provider.clone();
                        let config = config.clone();
                        let container_ref = container_ref.clone();
                        let session = session.clone();
                        Box::new(move || {
                            initialize_widget(&provider, &config, &container_ref, &session);
                            if !session.borrow().is_initialized() {
                                warn!("scheduling widget library missing after its script loaded");
                            }
                        })
                    };

                    match InjectedAssets::inject_current(&provider.assets(), Some(on_script_load)) {
                        Ok(injected) => assets = Some(injected),
                        Err(e) => error!("failed to inject scheduling widget assets: {}", e),
                    }

                    // A library left over from an earlier showing is usable right away.
                    initialize_widget(&provider, &config, &container_ref, &session);
                    if !session.borrow().is_initialized() {
                        debug!("waiting for scheduling widget script to load");
                    }
                }

                move || {
                    session.borrow_mut().hide();
                    if let Some(assets) = assets {
                        assets.release();
                    }
                }
            },
            props.visible,
        );
    }

    if !props.visible {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div class="scheduling-overlay">
            <div class="scheduling-modal" style={props.config.modal.style()}>
                <button class="scheduling-close" onclick={close} aria-label="Close calendar">
                    <svg class="scheduling-close-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor"
                        stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M18 6 6 18" />
                        <path d="m6 6 12 12" />
                    </svg>
                </button>
                <div
                    id={WIDGET_CONTAINER_ID}
                    ref={container_ref}
                    class="scheduling-widget"
                    style="min-width: 320px; height: 100%;"
                />
            </div>
            <style>
                {r#"
                .scheduling-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }

                .scheduling-modal {
                    position: relative;
                    width: 100%;
                    background: #ffffff;
                    border-radius: 0.5rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .scheduling-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    z-index: 10;
                    padding: 0.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: #ef4444;
                    color: #ffffff;
                    cursor: pointer;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    transition: background-color 0.15s ease;
                }

                .scheduling-close:hover {
                    background: #dc2626;
                }

                .scheduling-close-icon {
                    display: block;
                    width: 1.5rem;
                    height: 1.5rem;
                }

                .scheduling-widget {
                    width: 100%;
                    border-radius: 0.5rem;
                    overflow: hidden;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::scheduling::provider::testing::RecordingProvider;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn unmounted_container_leaves_showing_uninitialized() {
        let recorder = RecordingProvider::ready();
        let provider = ProviderHandle::from(recorder.clone());
        let config = config::scheduling_config();
        let session = RefCell::new(WidgetSession::default());
        session.borrow_mut().show();

        initialize_widget(&provider, &config, &NodeRef::default(), &session);
        assert!(!session.borrow().is_initialized());
        assert_eq!(recorder.call_count(), 0);

        // The showing is still open for the next attempt.
        assert!(session.borrow_mut().try_initialize(true));
    }
}
