use super::model::{field_value, intake_form, set_field, submit_lead, INTAKE_FIELDS};
use crate::shared::api::ApiClient;
use crate::shared::icons::icon;
use crate::shared::state::{FieldKind, FormField, FormState};
use contracts::domain::a001_lead::LeadDraft;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn LeadIntakeForm(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not found in context");
    let form = RwSignal::new(intake_form());
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |_| {
        let draft = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(draft)) => draft,
            _ => return,
        };
        set_error.set(None);
        let api = api.clone();
        spawn_local(async move {
            let result = submit_lead(&api, &draft).await;
            let _ = form.try_update(|f| f.finish_submit(result.is_ok()));
            match result {
                Ok(lead) => {
                    log::info!("lead {} created", lead.id);
                    on_saved.run(());
                }
                Err(e) => {
                    log::warn!("lead intake failed: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"New lead"</h2>
                </div>
                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    <div class="details-form">
                        {INTAKE_FIELDS.iter().map(|field| render_field(*field, form)).collect_view()}
                    </div>
                </div>
                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=submit
                        disabled=Signal::derive(move || form.with(|f| f.is_submitting()))
                    >
                        {icon("plus")}
                        {move || if form.with(|f| f.is_submitting()) { "Saving..." } else { "Create lead" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

fn render_field(field: FormField, form: RwSignal<FormState<LeadDraft>>) -> impl IntoView {
    let name = field.name;
    let value = move || form.with(|f| field_value(f.values(), name));
    let on_input = move |ev: ev::Event| {
        let v = event_target_value(&ev);
        form.update(|f| f.update(name, |d| set_field(d, name, v)));
    };
    let on_blur = move |_: ev::FocusEvent| form.update(|f| f.touch(name));

    let input = match field.kind {
        FieldKind::Text => view! {
            <input type="text" id=name prop:value=value on:input=on_input on:blur=on_blur />
        }
        .into_any(),
        FieldKind::Date => view! {
            <input type="date" id=name prop:value=value on:input=on_input on:blur=on_blur />
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select id=name prop:value=value on:change=on_input on:blur=on_blur>
                <option value="">"—"</option>
                {options.iter().map(|o| view! { <option value=o.value>{o.label}</option> }).collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Upload { accept } => view! {
            <input type="file" id=name accept=accept on:change=on_input />
            <span class="form-group__hint">{value}</span>
        }
        .into_any(),
        FieldKind::Custom => view! { <></> }.into_any(),
    };

    view! {
        <div class="form-group">
            <label for=name>{field.label}</label>
            {input}
            {move || form.with(|f| f.visible_error(name)).map(|e| view! {
                <div class="form-group__error">{e}</div>
            })}
        </div>
    }
}
