//! Explicit deselect affordance for the coordinated views.

use crate::state::AppState;
use dioxus::prelude::*;
use fce_data::selection::SelectionEvent;

/// Button that clears the current (country, year) selection.
///
/// Hidden while nothing is selected; clicking routes a `Clear` event
/// through the same reducer the heatmap click path uses.
#[component]
pub fn ClearSelectionButton() -> Element {
    let mut state = use_context::<AppState>();
    if !(state.selection)().is_bound() {
        return rsx! {};
    }

    let on_click = move |_| {
        let next = state.selection.read().apply(SelectionEvent::Clear);
        state.selection.set(next);
    };

    rsx! {
        button {
            style: "margin: 8px 0; padding: 4px 10px; cursor: pointer;",
            onclick: on_click,
            "Clear selection"
        }
    }
}
