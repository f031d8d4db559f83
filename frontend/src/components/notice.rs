use yew::prelude::*;

use super::icon_close;
use crate::error::Notice;

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };

    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="flex items-center justify-between bg-red-50 border border-red-200 text-red-600 text-sm rounded-xl px-4 py-3">
            <span>{ notice.message() }</span>
            <button type="button" aria-label="Fechar" onclick={on_dismiss} class="p-1 hover:bg-red-100 rounded-full">
                { icon_close() }
            </button>
        </div>
    }
}
