use api::ActiveFilters;
use api::FilterCategory;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;

/// Checkbox groups for every [`FilterCategory`].
///
/// Holds no state. Checked boxes come straight from `active_filters`;
/// toggling reports the whole new tag list for the touched category, and
/// the owner decides what to do with it.
#[component]
pub fn DonationFilterPanel(
    active_filters: ActiveFilters,
    on_filter_change: EventHandler<(FilterCategory, Vec<String>)>,
    on_clear_filters: EventHandler<()>,
) -> Element {
    rsx! {
        Card {
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem;",
                h4 { style: "margin: 0;", "Filter Results" }
                if active_filters.has_active() {
                    a {
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_clear_filters.call(());
                        },
                        "× Clear all filters"
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 1.5rem;",
                for category in FilterCategory::iter() {
                    fieldset {
                        key: "{category.display_name()}",
                        legend { strong { "{category.display_name()}" } }
                        div {
                            style: "max-height: 10rem; overflow-y: auto;",
                            for option in category.options().iter().copied() {
                                FilterCheckbox {
                                    key: "{option}",
                                    label: option,
                                    checked: active_filters.is_selected(category, option),
                                    next: active_filters.toggled(category, option),
                                    category,
                                    on_filter_change,
                                }
                            }
                        }
                        if category.is_age_range() {
                            small {
                                style: "color: var(--pico-muted-color);",
                                "Listings carry no donor age, so this does not narrow the list."
                            }
                        }
                    }
                }
            }

            footer {
                div {
                    style: "display: flex; justify-content: flex-end; gap: 1rem;",
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| on_clear_filters.call(()),
                        "Reset"
                    }
                    // Toggles apply immediately; this button only confirms.
                    Button {
                        button_type: ButtonType::Primary,
                        "Apply Filters"
                    }
                }
            }
        }
    }
}

#[component]
fn FilterCheckbox(
    label: &'static str,
    checked: bool,
    next: Vec<String>,
    category: FilterCategory,
    on_filter_change: EventHandler<(FilterCategory, Vec<String>)>,
) -> Element {
    rsx! {
        label {
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |_| on_filter_change.call((category, next.clone())),
            }
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Panel(filters: ActiveFilters) -> Element {
        rsx! {
            DonationFilterPanel {
                active_filters: filters,
                on_filter_change: |_: (FilterCategory, Vec<String>)| {},
                on_clear_filters: |_: ()| {},
            }
        }
    }

    fn render(filters: ActiveFilters) -> String {
        let props = PanelProps::builder().filters(filters).build();
        let mut dom = VirtualDom::new_with_props(Panel, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn option_count() -> usize {
        FilterCategory::iter().map(|c| c.options().len()).sum()
    }

    #[test]
    fn clear_link_only_with_active_filters() {
        let html = render(ActiveFilters::default());
        assert!(!html.contains("Clear all filters"));
        assert!(html.contains("Reset"));
        assert!(html.contains("Apply Filters"));

        let mut filters = ActiveFilters::default();
        filters.set(FilterCategory::Location, vec!["Paphos".to_string()]);
        assert!(render(filters).contains("Clear all filters"));
    }

    #[test]
    fn checkboxes_reflect_the_passed_filters() {
        let html = render(ActiveFilters::default());
        assert_eq!(html.matches("type=\"checkbox\"").count(), option_count());
        assert_eq!(html.matches("checked").count(), 0);

        let mut filters = ActiveFilters::default();
        filters.set(FilterCategory::OrganType, vec!["Kidney".to_string()]);
        filters.set(FilterCategory::BloodType, vec!["O-".to_string(), "AB+".to_string()]);
        assert_eq!(render(filters).matches("checked").count(), 3);
    }

    #[test]
    fn every_category_is_rendered() {
        let html = render(ActiveFilters::default());
        for category in FilterCategory::iter() {
            assert!(html.contains(category.display_name()));
        }
        assert!(html.contains("Kyrenia (Girne)"));
        assert!(html.contains("does not narrow the list"));
    }
}
