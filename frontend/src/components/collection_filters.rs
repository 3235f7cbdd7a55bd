//! Sort select, facet checkboxes, active chips and the mobile filter drawer.
//!
//! Every control recomputes the next query string from the route's current query at event time,
//! so unrelated parameters and the other control's state carry over.

use common::{
    facet_catalog::{FacetCatalog, FacetDefinition, FacetKind, FacetSelection, FacetValue, selection_chips},
    facet_filters::{ActiveFilters, apply_selection_change, clear_all, decode_from_query_string, encode_to_query_string, remove_selection, set_single_value},
    pagination::reset_paging,
    search_const::{PRICE_MAX_FACET_KEY, PRICE_MIN_FACET_KEY},
    sort_selection::SortSelection,
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_content_icons::MdFilterList, md_navigation_icons::MdClose, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::routes::Route;

#[derive(Clone, Copy)]
struct FilterContext {
    handle: ReadSignal<String>,
    query: ReadSignal<String>,
    facets: ReadSignal<FacetCatalog>,
}

impl FilterContext {
    fn filters(&self) -> ActiveFilters {
        decode_from_query_string(&self.query.read())
    }

    fn sort(&self) -> SortSelection {
        SortSelection::from_query_string(&self.query.read())
    }

    /// A filter or sort change always starts over from the first page.
    fn navigate(&self, next_query: String) {
        let next_query = reset_paging(&next_query);
        navigator().push(Route::collection(&self.handle.read(), next_query));
    }

    fn apply(&self, filters: &ActiveFilters, sort: SortSelection) {
        let next_query = encode_to_query_string(&self.query.read(), filters, sort);
        self.navigate(next_query);
    }
}

#[component]
pub fn CollectionFilters(handle: ReadSignal<String>, query: ReadSignal<String>, facets: ReadSignal<FacetCatalog>) -> Element {
    use_context_provider(|| FilterContext { handle, query, facets });
    let mut drawer_open = use_signal(|| false);
    let active_count = use_memo(move || decode_from_query_string(&query.read()).active_count());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
                margin-bottom: 16px;
            ",
            button {
                class: "x-filters-mobile-toggle",
                style: "
                    align-items: center;
                    gap: 6px;
                    border: 1px solid #D1D5DB;
                    background: white;
                    padding: 8px 12px;
                    cursor: pointer;
                ",
                onclick: move |_| drawer_open.set(true),
                Icon { icon: MdFilterList, style: "width: 18px; height: 18px;" }
                "Filters"
                if active_count() > 0 {
                    span {
                        style: "
                            background: #111827;
                            color: white;
                            border-radius: 9999px;
                            font-size: 11px;
                            min-width: 18px;
                            height: 18px;
                            display: inline-flex;
                            align-items: center;
                            justify-content: center;
                        ",
                        "{active_count}"
                    }
                }
            }
            div { style: "flex-grow: 1;" }
            SortSelect {}
        }

        ActiveFilterChips {}

        div {
            class: "x-filters-sidebar",
            FilterGroups {}
        }

        if drawer_open() {
            div {
                style: "position: fixed; inset: 0; background-color: rgba(0,0,0,0.3); z-index: 900;",
                onclick: move |_| drawer_open.set(false),
            }
            div {
                id: "x-filters-drawer",
                style: "
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 320px;
                    max-width: 90vw;
                    height: 100vh;
                    overflow-y: auto;
                    background: white;
                    z-index: 1000;
                    padding: 16px;
                    box-sizing: border-box;
                ",
                div {
                    style: "display: flex; flex-direction: row; align-items: center; justify-content: space-between; margin-bottom: 12px;",
                    h3 { style: "margin: 0; font-size: 14px; letter-spacing: 0.1em;", "FILTERS ({active_count})" }
                    button {
                        style: "border: none; background: none; cursor: pointer;",
                        onclick: move |_| drawer_open.set(false),
                        Icon { icon: MdClose, style: "width: 22px; height: 22px;" }
                    }
                }
                FilterGroups {}
            }
        }
    }
}

#[component]
fn SortSelect() -> Element {
    let context = use_context::<FilterContext>();
    let current = context.sort();
    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 8px; font-size: 13px;",
            "Sort by"
            select {
                style: "border: 1px solid #D1D5DB; padding: 6px 8px; font-size: 13px; background: white;",
                onchange: move |e: Event<FormData>| {
                    let sort = SortSelection::from_param(&e.value());
                    context.apply(&context.filters(), sort);
                },
                for sort in SortSelection::ALL {
                    option {
                        key: "{sort.param_value()}",
                        value: "{sort.param_value()}",
                        selected: sort == current,
                        "{sort.label()}"
                    }
                }
            }
        }
    }
}

#[component]
fn ActiveFilterChips() -> Element {
    let context = use_context::<FilterContext>();
    let chips = selection_chips(&context.filters(), &context.facets.read());
    if chips.is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            id: "x-active-filter-chips",
            style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 8px; margin-bottom: 16px; align-items: center;",
            for chip in chips {
                FilterChip { key: "{chip.facet_key}-{chip.raw_value}", chip: chip.clone() }
            }
            button {
                style: "border: none; background: none; text-decoration: underline; font-size: 12px; cursor: pointer;",
                onclick: move |_| {
                    let (_, next_query) = clear_all(&context.query.read());
                    context.navigate(next_query);
                },
                "Clear all"
            }
        }
    }
}

#[component]
fn FilterChip(chip: ReadSignal<FacetSelection>) -> Element {
    let context = use_context::<FilterContext>();
    rsx! {
        button {
            style: "
                display: inline-flex;
                align-items: center;
                gap: 4px;
                border: 1px solid #111827;
                border-radius: 9999px;
                background: white;
                padding: 4px 10px;
                font-size: 12px;
                cursor: pointer;
            ",
            onclick: move |_| {
                let chip = chip.read();
                let next = remove_selection(&context.filters(), &chip.facet_key, &chip.raw_value);
                context.apply(&next, context.sort());
            },
            "{chip.read().display_label}"
            Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
        }
    }
}

#[component]
fn FilterGroups() -> Element {
    let context = use_context::<FilterContext>();
    let facets = context.facets.read().facets.clone();
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; min-width: 220px;",
            for facet in facets {
                FilterGroup { key: "{facet.id}", facet: facet.clone() }
            }
        }
    }
}

#[component]
fn FilterGroup(facet: ReadSignal<FacetDefinition>) -> Element {
    let facet = facet.read().clone();
    rsx! {
        details {
            open: true,
            style: "border-bottom: 1px solid #E5E7EB; padding: 8px 0;",
            summary {
                style: "cursor: pointer; font-size: 13px; font-weight: 600; letter-spacing: 0.05em; text-transform: uppercase;",
                "{facet.label}"
            }
            {match facet.kind {
                FacetKind::PriceRange => rsx! { PriceRangeInputs {} },
                FacetKind::List | FacetKind::Boolean => rsx! {
                    ul {
                        style: "list-style: none; margin: 8px 0 0 0; padding: 0;",
                        for value in facet.values.iter() {
                            li {
                                key: "{value.id}",
                                FacetCheckbox { facet_id: facet.id.clone(), value: value.clone() }
                            }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn FacetCheckbox(facet_id: ReadSignal<String>, value: ReadSignal<FacetValue>) -> Element {
    let context = use_context::<FilterContext>();
    let is_checked = use_memo(move || context.filters().is_selected(&facet_id.read(), &value.read().input));
    let value_now = value.read().clone();

    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 8px;
                cursor: pointer;
                padding: 4px 0;
                align-items: center;
                font-size: 14px;
            ",
            onclick: move |_| {
                let next = apply_selection_change(&context.filters(), &facet_id.read(), &value.read().input, !is_checked());
                context.apply(&next, context.sort());
            },

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: #111827; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: #6B7280; flex-shrink: 0;" }
            }
            span {
                style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap; min-width: 0;",
                "{value_now.label}"
            }
            div { style: "flex: 1 1 auto;" }
            span { style: "color: #9CA3AF; font-size: 12px;", "{value_now.count}" }
        }
    }
}

#[component]
fn PriceRangeInputs() -> Element {
    let context = use_context::<FilterContext>();
    let filters = context.filters();
    let min = filters.values(PRICE_MIN_FACET_KEY).first().cloned().unwrap_or_default();
    let max = filters.values(PRICE_MAX_FACET_KEY).first().cloned().unwrap_or_default();

    let set_bound = move |facet_key: &'static str, raw: String| {
        let value = Some(raw.trim().to_string()).filter(|v| !v.is_empty());
        let next = set_single_value(&context.filters(), facet_key, value);
        context.apply(&next, context.sort());
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 8px; margin-top: 8px; align-items: center; font-size: 13px;",
            input {
                r#type: "number",
                min: "0",
                placeholder: "From",
                value: "{min}",
                style: "width: 80px; border: 1px solid #D1D5DB; padding: 6px;",
                onchange: move |e: Event<FormData>| set_bound(PRICE_MIN_FACET_KEY, e.value()),
            }
            span { "–" }
            input {
                r#type: "number",
                min: "0",
                placeholder: "To",
                value: "{max}",
                style: "width: 80px; border: 1px solid #D1D5DB; padding: 6px;",
                onchange: move |e: Event<FormData>| set_bound(PRICE_MAX_FACET_KEY, e.value()),
            }
        }
    }
}
