use yew::prelude::*;

use crate::model::{format_amount, CategorySummary, Transaction};

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub transactions: Vec<Transaction>,
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    if props.transactions.is_empty() {
        return html! { <p class="text-sm text-muted-foreground">{"Nenhuma transação."}</p> };
    }

    html! {
        <ul class="divide-y divide-border">
            { for props.transactions.iter().map(|tx| html! {
                <li key={tx.id.to_string()} class="py-2 text-sm text-foreground">
                    { tx.list_line() }
                </li>
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct SummaryListProps {
    pub summary: Vec<CategorySummary>,
}

#[function_component(SummaryList)]
pub fn summary_list(props: &SummaryListProps) -> Html {
    if props.summary.is_empty() {
        return html! { <p class="text-sm text-muted-foreground">{"Sem dados de resumo."}</p> };
    }

    html! {
        <ul class="divide-y divide-border">
            { for props.summary.iter().map(|item| html! {
                <li key={item.category.clone()} class="py-2 text-sm text-foreground">
                    { format!(
                        "{} - Receita: {} - Despesa: {}",
                        item.category,
                        format_amount(item.receita),
                        format_amount(item.despesa)
                    ) }
                </li>
            }) }
        </ul>
    }
}
