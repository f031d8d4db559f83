use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::type_options;
use crate::filter::{FilterField, FilterInputs};

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub inputs: FilterInputs,
    pub on_change: Callback<(FilterField, String)>,
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                if let Some(field) = FilterField::from_name(&input.name()) {
                    on_change.emit((field, input.value()));
                }
            }
        })
    };

    let on_select = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_change.emit((FilterField::Type, select.value()));
            }
        })
    };

    let inputs = &props.inputs;
    html! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-3">
            <select name={FilterField::Type.name()} onchange={on_select} class="p-2 border rounded">
                { type_options(&inputs.kind) }
            </select>
            { for [
                ("text", FilterField::Category, "Categoria"),
                ("date", FilterField::StartDate, "Data Inicial"),
                ("date", FilterField::EndDate, "Data Final"),
            ].into_iter().map(|(kind, field, placeholder)| html! {
                <input
                    type={kind}
                    name={field.name()}
                    placeholder={placeholder}
                    value={inputs.get(field).to_string()}
                    oninput={on_input.clone()}
                    class="p-2 border rounded"
                />
            }) }
        </div>
    }
}
