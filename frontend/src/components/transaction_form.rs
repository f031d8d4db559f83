use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::{icon_plus, type_options};
use crate::draft::{DraftField, TransactionDraft};

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub draft: TransactionDraft,
    pub submitting: bool,
    pub on_change: Callback<(DraftField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                if let Some(field) = DraftField::from_name(&input.name()) {
                    on_change.emit((field, input.value()));
                }
            }
        })
    };

    let on_select = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_change.emit((DraftField::Type, select.value()));
            }
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let draft = &props.draft;
    let input = |kind: &'static str, field: DraftField, placeholder: &'static str| {
        html! {
            <input
                type={kind}
                name={field.name()}
                placeholder={placeholder}
                value={draft.get(field).to_string()}
                oninput={on_input.clone()}
                class="p-2 border rounded"
            />
        }
    };

    html! {
        <form onsubmit={on_submit} class="grid grid-cols-1 md:grid-cols-4 gap-3">
            <select name={DraftField::Type.name()} onchange={on_select} class="p-2 border rounded">
                { type_options(&draft.kind) }
            </select>
            { input("text", DraftField::Category, "Categoria") }
            { input("number", DraftField::Amount, "Valor") }
            { input("date", DraftField::Date, "Data") }
            { input("number", DraftField::InstallmentCount, "Parcelas") }
            { input("number", DraftField::Interest, "Juros") }
            <button type="submit" disabled={props.submitting} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                { icon_plus() }
                { if props.submitting { "Salvando..." } else { "Adicionar Transação" } }
            </button>
        </form>
    }
}
