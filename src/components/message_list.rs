use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::models::{ChatMessage, Role};

#[derive(Properties, PartialEq)]
pub struct MessageListProps {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

#[function_component(MessageList)]
pub fn message_list(props: &MessageListProps) -> Html {
    let end_ref = use_node_ref();

    // Keep the newest message in view
    {
        let end_ref = end_ref.clone();
        use_effect_with(
            (props.messages.len(), props.loading),
            move |_| {
                if let Some(element) = end_ref.cast::<Element>() {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    element.scroll_into_view_with_scroll_into_view_options(&options);
                }
                || ()
            },
        );
    }

    html! {
        <div class="messages-area">
            <div class="messages-list">
                {
                    props.messages.iter().map(|message| {
                        let row_class = match message.role {
                            Role::User => "message-row user",
                            Role::Assistant => "message-row assistant",
                        };
                        let bubble_class = match message.role {
                            Role::User => "message-bubble user",
                            Role::Assistant => "message-bubble assistant",
                        };
                        html! {
                            <div key={message.id.clone()} class={row_class}>
                                <div class={bubble_class}>
                                    <p class="message-text">{ &message.content }</p>
                                </div>
                            </div>
                        }
                    }).collect::<Html>()
                }
                {
                    if props.loading {
                        html! {
                            <div class="message-row assistant">
                                <div class="message-bubble assistant thinking">
                                    <span class="spinner"></span>
                                    <p class="message-text">{"Thinking..."}</p>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div ref={end_ref}></div>
            </div>
        </div>
    }
}
