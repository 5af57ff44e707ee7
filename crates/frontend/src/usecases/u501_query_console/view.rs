//! Query Console - View Component

use super::connection_form::ConnectionForm;
use super::result_panel::ResultPanel;
use super::state::ConsoleOutcome;
use super::view_model::QueryConsoleVm;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_query_console::QueryConsole;
use leptos::html::Div;
use leptos::prelude::*;
use thaw::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

#[component]
#[allow(non_snake_case)]
pub fn QueryConsoleView(
    /// Full URL of the Query Service endpoint
    query_url: String,
) -> impl IntoView {
    let vm = QueryConsoleVm::new(query_url);
    let results_ref = NodeRef::<Div>::new();

    document().set_title(&QueryConsole::page_title());

    // Bring a fresh result into view
    Effect::new(move |_| {
        if vm.has_result() {
            request_animation_frame(move || {
                if let Some(element) = results_ref.get_untracked() {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    element.scroll_into_view_with_scroll_into_view_options(&options);
                }
            });
        }
    });

    let on_copy = Callback::new(move |_| vm.copy_sql_command());

    view! {
        <div class="query-console">
            <div class="query-console__card">
                <h1 class="query-console__title">{QueryConsole::display_name()}</h1>
                <p class="query-console__subtitle">{QueryConsole::description()}</p>

                <ConnectionForm vm=vm />

                <div class="query-console__prompt">
                    <textarea
                        class="form__textarea query-console__prompt-input"
                        placeholder="Type your SQL-related prompt here..."
                        prop:value=move || vm.prompt()
                        on:input=move |ev| vm.update_prompt(event_target_value(&ev))
                        on:keydown=move |ev| {
                            let in_flight = vm.state.with_untracked(|s| s.is_in_flight());
                            if shortcut_submits(&ev.key(), ev.ctrl_key() || ev.meta_key(), in_flight) {
                                ev.prevent_default();
                                vm.submit_command();
                            }
                        }
                    />
                </div>

                <Flex justify=FlexJustify::Center gap=FlexGap::Large>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.submit_command()
                        disabled=Signal::derive(move || vm.is_in_flight())
                    >
                        {move || if vm.is_in_flight() { "Generating..." } else { "Run Query" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.clear_command()
                    >
                        "Clear"
                    </Button>
                </Flex>

                <div node_ref=results_ref class="query-console__results">
                    {move || match vm.outcome() {
                        ConsoleOutcome::Idle => None,
                        ConsoleOutcome::Error(e) => Some(
                            view! { <p class="query-console__error">{format!("❌ {}", e)}</p> }
                                .into_any(),
                        ),
                        ConsoleOutcome::Result(result) => Some(
                            view! { <ResultPanel result=result on_copy=on_copy /> }.into_any(),
                        ),
                    }}
                </div>
            </div>
        </div>
    }
}

/// Ctrl+Enter or Cmd+Enter, ignored while the Run button is disabled
fn shortcut_submits(key: &str, modifier: bool, in_flight: bool) -> bool {
    key == "Enter" && modifier && !in_flight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_shortcut() {
        assert!(shortcut_submits("Enter", true, false));
        assert!(!shortcut_submits("Enter", false, false));
        assert!(!shortcut_submits("a", true, false));
    }

    #[test]
    fn test_submit_shortcut_ignored_in_flight() {
        assert!(!shortcut_submits("Enter", true, true));
    }
}
