use super::view_model::QueryConsoleVm;
use contracts::usecases::u501_query_console::ConnectionField;
use leptos::prelude::*;

/// Five connection inputs in a two-column grid. The password is masked.
#[component]
#[allow(non_snake_case)]
pub fn ConnectionForm(vm: QueryConsoleVm) -> impl IntoView {
    view! {
        <div class="query-console__connection">
            {ConnectionField::ALL
                .into_iter()
                .map(move |field| {
                    let input_id = format!("connection-{}", field.name());
                    let input_type = if field.is_secret() { "password" } else { "text" };
                    let autocomplete = if field.is_secret() { "current-password" } else { "off" };
                    view! {
                        <div class="form__group">
                            <label class="form__label" for=input_id.clone()>
                                {field.label()}
                            </label>
                            <input
                                class="form__input"
                                id=input_id
                                name=field.name()
                                type=input_type
                                autocomplete=autocomplete
                                placeholder=field.label()
                                prop:value=move || vm.field(field)
                                on:input=move |ev| {
                                    vm.update_connection_field(field, event_target_value(&ev));
                                }
                            />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
