use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChatInputProps {
    pub draft: String,
    pub disabled: bool,
    pub on_change: Callback<String>,
    pub on_send: Callback<()>,
}

#[function_component(ChatInput)]
pub fn chat_input(props: &ChatInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };

    // Enter sends, Shift+Enter is left alone
    let onkeydown = {
        let on_send = props.on_send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                on_send.emit(());
            }
        })
    };

    let onclick = {
        let on_send = props.on_send.clone();
        Callback::from(move |_: MouseEvent| on_send.emit(()))
    };

    html! {
        <div class="input-area">
            <div class="input-row">
                <input
                    type="text"
                    class="chat-input"
                    value={props.draft.clone()}
                    disabled={props.disabled}
                    placeholder="Ask about campus locations, buildings, directions..."
                    {oninput}
                    {onkeydown}
                />
                <button
                    class="btn-send"
                    disabled={props.disabled}
                    {onclick}
                >
                    {"➤"}
                </button>
            </div>
        </div>
    }
}
