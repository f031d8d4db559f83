mod filter_panel;
mod line_chart;
mod lists;
mod notice;
mod transaction_form;

pub use filter_panel::FilterPanel;
pub use line_chart::LineChart;
pub use lists::{SummaryList, TransactionList};
pub use notice::NoticeBanner;
pub use transaction_form::TransactionForm;

use yew::prelude::*;

pub(crate) fn page_shell(title: &'static str, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

pub(crate) fn card(title: &'static str, children: Html) -> Html {
    html! {
        <section class="bg-card rounded-[10px] p-6 border border-border">
            <h2 class="font-bold text-foreground text-lg mb-3">{ title }</h2>
            { children }
        </section>
    }
}

pub(crate) fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-foreground">
            <path d={path}></path>
        </svg>
    }
}

pub(crate) fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}

pub(crate) fn icon_close() -> Html {
    icon_base("M18 6L6 18M6 6l12 12")
}

/// Options for a transaction type `<select>`, with an empty "Tipo" entry.
pub(crate) fn type_options(selected: &str) -> Html {
    html! {
        <>
            <option value="" selected={selected.is_empty()}>{"Tipo"}</option>
            { for crate::model::TransactionType::ALL.iter().map(|kind| html! {
                <option value={kind.as_str()} selected={selected == kind.as_str()}>{ kind.label() }</option>
            }) }
        </>
    }
}
