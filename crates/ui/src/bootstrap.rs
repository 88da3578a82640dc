//! Page startup: decorate the backdrop, then wire every toggle input to
//! the command API.

use std::rc::Rc;

use cosmic_toggle_protocol::ToggleReply;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlInputElement};

use crate::client::{ToggleClient, ToggleTransport};
use crate::config::ClientConfig;
use crate::dom::{read_config_block, set_toggle_error, DomSurface};
use crate::error::{Result, UiError};
use crate::network::FetchTransport;
use crate::theme::apply_theme;

/// Attribute naming the command a toggle controls
pub const COMMAND_ATTRIBUTE: &str = "data-command";

/// A `change` on a toggle input, read out of the DOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleChange {
    pub command: Option<String>,
    pub checked: bool,
}

impl ToggleChange {
    pub fn from_input(input: &HtmlInputElement) -> Self {
        Self {
            command: input.get_attribute(COMMAND_ATTRIBUTE),
            checked: input.checked(),
        }
    }
}

/// What happened to a dispatched change
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The toggle had no command; nothing was sent
    Skipped,
    Sent(Value),
    Failed(UiError),
}

impl DispatchOutcome {
    /// Failed call, or a reply the server marked as an error
    pub fn is_failure(&self) -> bool {
        match self {
            Self::Skipped => false,
            Self::Sent(reply) => ToggleReply::classify(reply).is_rejected(),
            Self::Failed(_) => true,
        }
    }
}

/// Forward one change to the client and handle both result branches
pub async fn dispatch_change<T: ToggleTransport>(
    client: &ToggleClient<T>,
    change: &ToggleChange,
) -> DispatchOutcome {
    let Some(command) = change.command.as_deref() else {
        tracing::warn!("toggle without {COMMAND_ATTRIBUTE}, skipping");
        return DispatchOutcome::Skipped;
    };

    match client.set_status(command, change.checked).await {
        Ok(reply) => {
            match ToggleReply::classify(&reply) {
                ToggleReply::Rejected { message } => {
                    tracing::warn!(command, %message, "toggle rejected by server");
                }
                ToggleReply::Accepted { enabled, .. } => {
                    tracing::debug!(command, ?enabled, "toggle accepted");
                }
                ToggleReply::Unrecognized => {
                    tracing::debug!(command, %reply, "toggle answered");
                }
            }
            DispatchOutcome::Sent(reply)
        }
        Err(e) => {
            tracing::error!(command, error = %e, "toggle request failed");
            DispatchOutcome::Failed(e)
        }
    }
}

/// Attach a `change` listener to every element matching `selector`
///
/// Returns the number of inputs bound. Matches that are not `<input>`
/// elements are skipped.
pub fn bind_toggles<T>(
    document: &Document,
    selector: &str,
    client: Rc<ToggleClient<T>>,
) -> Result<usize>
where
    T: ToggleTransport + 'static,
{
    let nodes = document.query_selector_all(selector)?;
    let mut bound = 0;

    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        let Ok(input) = node.dyn_into::<HtmlInputElement>() else {
            tracing::warn!(selector, "toggle match is not an input, skipping");
            continue;
        };

        let client = Rc::clone(&client);
        let target = input.clone();
        let on_change = Closure::wrap(Box::new(move |_e: Event| {
            let change = ToggleChange::from_input(&target);
            let client = Rc::clone(&client);
            let target = target.clone();

            spawn_local(async move {
                let outcome = dispatch_change(&client, &change).await;
                if !matches!(outcome, DispatchOutcome::Skipped) {
                    set_toggle_error(&target, outcome.is_failure());
                }
            });
        }) as Box<dyn FnMut(_)>);

        input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        on_change.forget();
        bound += 1;
    }

    Ok(bound)
}

/// Decorate the page and wire its toggles
pub fn run(document: &Document) -> Result<usize> {
    let config = ClientConfig::load(read_config_block(document).as_deref());

    let mut surface = DomSurface::new(document.clone());
    apply_theme(&mut surface, &mut rand::thread_rng())?;

    let client = Rc::new(ToggleClient::new(FetchTransport, config.api_base.clone()));
    let bound = bind_toggles(document, &config.toggle_selector, client)?;

    tracing::info!(toggles = bound, api_base = %config.api_base, "cosmic-toggle ready");
    Ok(bound)
}
