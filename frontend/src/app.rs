use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::chart::{daily_chart, monthly_chart};
use crate::components::{
    card, page_shell, FilterPanel, LineChart, NoticeBanner, SummaryList, TransactionForm, TransactionList,
};
use crate::config::AppConfig;
use crate::draft::{DraftAction, DraftField, TransactionDraft};
use crate::error::Notice;
use crate::filter::{filter_transactions, FilterField, FilterInputs};
use crate::store::{refresh_all, submit_outcome, DataStore};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<AppConfig> context={props.config.clone()}>
            <BudgetView />
        </ContextProvider<AppConfig>>
    }
}

#[function_component(BudgetView)]
pub fn budget_view() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let api = ApiClient::new(config);

    let store = use_reducer(DataStore::default);
    let filters = use_state(FilterInputs::default);
    let draft = use_reducer(TransactionDraft::default);
    let notice = use_state(|| None::<Notice>);
    let submitting = use_state(|| false);

    {
        let api = api.clone();
        let dispatcher = store.dispatcher();
        let notice = notice.clone();
        use_effect_with_deps(
            move |_| {
                refresh_all(&api, dispatcher, notice);
                || ()
            },
            (),
        );
    }

    let on_draft_change = {
        let draft = draft.dispatcher();
        Callback::from(move |(field, value): (DraftField, String)| {
            draft.dispatch(DraftAction::Edit(field, value));
        })
    };

    let on_filter_change = {
        let filters = filters.clone();
        Callback::from(move |(field, value): (FilterField, String)| {
            filters.set(filters.with_field(field, value));
        })
    };

    let on_submit = {
        let api = api.clone();
        let dispatcher = store.dispatcher();
        let draft = draft.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();

        Callback::from(move |_: ()| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let draft_dispatcher = draft.dispatcher();
            let notice = notice.clone();
            let submitting = submitting.clone();
            let payload: TransactionDraft = (*draft).clone();

            submitting.set(true);
            spawn_local(async move {
                let result = api.add_transaction(&payload).await;
                match submit_outcome(result, payload) {
                    Ok(reset) => {
                        draft_dispatcher.dispatch(reset);
                        refresh_all(&api, dispatcher, notice);
                    }
                    Err(failure) => notice.set(Some(failure)),
                }
                submitting.set(false);
            });
        })
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    // The unset end date tracks the clock, so it is re-read on every render.
    let now = chrono::Local::now().naive_local();
    let criteria = filters.criteria();
    let filtered = filter_transactions(&store.transactions, &criteria, now)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    log::debug!(
        "{} of {} transaction(s) match {:?}",
        filtered.len(),
        store.transactions.len(),
        criteria
    );

    page_shell(
        "Controle Orçamentário",
        html! {
            <>
                <NoticeBanner notice={(*notice).clone()} on_dismiss={on_dismiss} />
                { card("Nova Transação", html! {
                    <TransactionForm
                        draft={(*draft).clone()}
                        submitting={*submitting}
                        on_change={on_draft_change}
                        on_submit={on_submit}
                    />
                }) }
                { card("Filtros", html! {
                    <FilterPanel inputs={(*filters).clone()} on_change={on_filter_change} />
                }) }
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    { card("Transações Filtradas", html! {
                        <TransactionList transactions={filtered} />
                    }) }
                    { card("Resumo de Despesas e Receitas", html! {
                        <SummaryList summary={store.summary.clone()} />
                    }) }
                </div>
                { card("Saldo Diário", html! {
                    <LineChart data={daily_chart(&store.daily_balance)} />
                }) }
                { card("Saldo Mensal", html! {
                    <LineChart data={monthly_chart(&store.monthly_balance)} />
                }) }
            </>
        },
    )
}
