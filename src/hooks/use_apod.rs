use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::{Config, WidgetConfig};
use crate::models::poll::PollState;
use crate::services::api::{ApiConfig, ApodClient};
use crate::services::poller::Poller;
use crate::services::retry::NextFetch;

/// Polls the APOD endpoint and exposes the latest snapshot.
///
/// Setting the returned state is the redraw request: the widget re-renders
/// only when a new record arrives.
#[hook]
pub fn use_apod(config: WidgetConfig) -> UseStateHandle<PollState> {
    let state = use_state(PollState::new);

    {
        let state = state.clone();

        use_effect_with(config, move |config| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();
            let config = config.clone();

            spawn_local(async move {
                let mut poller = match Poller::new(&config) {
                    Ok(poller) => poller,
                    Err(e) => {
                        gloo::console::error!(&format!("{}: {e}", Config::WIDGET_NAME));
                        return;
                    }
                };
                let client = match ApodClient::with_config(ApiConfig::from_widget(&config)) {
                    Ok(client) => client,
                    Err(e) => {
                        gloo::console::error!(&format!("{}: {e}", Config::WIDGET_NAME));
                        return;
                    }
                };

                gloo::console::info!(&format!("Starting module: {}", Config::WIDGET_NAME));

                while let Some(delay_ms) = poller.armed_delay() {
                    TimeoutFuture::new(delay_ms).await;
                    if aborted_check.get() || !poller.begin_fetch() {
                        break;
                    }

                    let result = client.fetch_apod().await;
                    if aborted_check.get() {
                        break; // Unmounted while the request was in flight
                    }

                    let failure = result.as_ref().err().cloned();
                    let next = poller.complete(result);

                    match (failure, next) {
                        (None, _) => state.set(poller.state().clone()),
                        (Some(e), NextFetch::Never) => gloo::console::error!(&format!(
                            "{}: {e}, polling stopped",
                            Config::WIDGET_NAME
                        )),
                        (Some(e), NextFetch::After(0)) => gloo::console::warn!(&format!(
                            "{}: {e}, retrying immediately",
                            Config::WIDGET_NAME
                        )),
                        (Some(e), NextFetch::After(delay)) => gloo::console::error!(&format!(
                            "{}: could not load APOD ({e}), retrying in {delay}ms",
                            Config::WIDGET_NAME
                        )),
                    }
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
