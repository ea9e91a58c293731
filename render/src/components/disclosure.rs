//! Accordion rendering for a [`DisclosureGroup`].
//!
//! The group lives in one `RwSignal` owned by the component and never
//! notifies. Each item draws from its own `expanded` flag, and a toggle
//! writes only the flags its [`Transition`] names: the clicked item and, in
//! single mode, the one it collapsed.

use std::sync::Arc;

use ghost_site::content::IconKind;
use ghost_site::disclosure::Transition;
use ghost_site::{DisclosureGroup, DisclosureError, ExpandMode};
use leptos::prelude::*;

use super::Icon;

#[component]
pub fn DisclosureList(
    group: DisclosureGroup,
    /// Prefix for element ids; must be unique on the page
    #[prop(into)]
    id_prefix: String,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let mode = match group.mode() {
        ExpandMode::Single => "single",
        ExpandMode::Multiple => "multiple",
    };
    let items = group.items().to_vec();
    let flags: Arc<[(String, RwSignal<bool>)]> = group
        .views()
        .map(|view| (view.id.to_string(), RwSignal::new(view.expanded)))
        .collect();
    let state = RwSignal::new(group);

    view! {
        <div class=format!("disclosure {class}") data-mode=mode>
            {items
                .into_iter()
                .zip(flags.iter().map(|(_, flag)| *flag).collect::<Vec<_>>())
                .map(|(item, expanded)| {
                    let trigger_id = format!("{id_prefix}-{}-trigger", item.id);
                    let panel_id = format!("{id_prefix}-{}-panel", item.id);
                    let toggle = {
                        let id = item.id.clone();
                        let flags = Arc::clone(&flags);
                        move |_| {
                            let mut outcome = None;
                            state.maybe_update(|group| {
                                outcome = Some(group.toggle(&id));
                                false
                            });
                            if let Some(outcome) = outcome {
                                apply(&flags, outcome);
                            }
                        }
                    };
                    view! {
                        <div class="disclosure-item" class:open=move || expanded.get()>
                            <h3 class="disclosure-heading">
                                <button
                                    type="button"
                                    class="disclosure-trigger"
                                    id=trigger_id.clone()
                                    aria-controls=panel_id.clone()
                                    aria-expanded=move || expanded.get().to_string()
                                    data-item=item.id.clone()
                                    on:click=toggle
                                >
                                    <span>{item.title}</span>
                                    <Icon kind=IconKind::CaretDown size="18" class="disclosure-caret" />
                                </button>
                            </h3>
                            <div
                                class="disclosure-panel"
                                id=panel_id
                                role="region"
                                aria-labelledby=trigger_id
                                hidden=move || !expanded.get()
                            >
                                {item
                                    .content
                                    .lines()
                                    .map(|line| view! { <p>{line.to_string()}</p> })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Push a toggle outcome into the per-item flags. Rejected toggles are
/// logged and leave every flag as it was.
fn apply(flags: &[(String, RwSignal<bool>)], outcome: Result<Transition, DisclosureError>) {
    let transition = match outcome {
        Ok(transition) => transition,
        Err(e) => {
            tracing::warn!("{e}");
            return;
        }
    };
    for id in transition.affected() {
        let open = transition.expanded.as_deref() == Some(id);
        if let Some((_, flag)) = flags.iter().find(|(item, _)| item == id) {
            flag.set(open);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghost_site::disclosure::DisclosureEntry;

    fn entries() -> Vec<DisclosureEntry> {
        ["a", "b", "c"]
            .into_iter()
            .map(|title| DisclosureEntry::new(title, "body"))
            .collect()
    }

    fn flags_of(group: &DisclosureGroup) -> Vec<(String, RwSignal<bool>)> {
        group
            .views()
            .map(|view| (view.id.to_string(), RwSignal::new(view.expanded)))
            .collect()
    }

    fn open(flags: &[(String, RwSignal<bool>)]) -> Vec<String> {
        flags
            .iter()
            .filter(|(_, flag)| flag.get_untracked())
            .map(|(id, _)| id.clone())
            .collect()
    }

    #[test]
    fn single_mode_transition_moves_the_open_flag() {
        Owner::new().with(|| {
            let mut group =
                DisclosureGroup::from_entries(entries(), ExpandMode::Single, Some("item-0")).unwrap();
            let flags = flags_of(&group);

            apply(&flags, group.toggle("item-2"));
            assert_eq!(open(&flags), vec!["item-2"]);
            assert_eq!(group.expanded_ids(), vec!["item-2"]);

            apply(&flags, group.toggle("item-2"));
            assert!(open(&flags).is_empty());
        });
    }

    #[test]
    fn multiple_mode_transition_touches_only_target() {
        Owner::new().with(|| {
            let mut group =
                DisclosureGroup::from_entries(entries(), ExpandMode::Multiple, Some("item-1")).unwrap();
            let flags = flags_of(&group);

            apply(&flags, group.toggle("item-0"));
            assert_eq!(open(&flags), vec!["item-0", "item-1"]);
        });
    }

    #[test]
    fn rejected_toggle_keeps_flags() {
        Owner::new().with(|| {
            let mut group =
                DisclosureGroup::from_entries(entries(), ExpandMode::Single, Some("item-1")).unwrap();
            let flags = flags_of(&group);

            apply(&flags, group.toggle("item-9"));
            assert_eq!(open(&flags), vec!["item-1"]);
        });
    }
}
