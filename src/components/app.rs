use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::models::{ChatMessage, FeatureCollection, RouteResult};
use crate::services::{ApiClient, GeoJsonCache};
use crate::utils::constants::{BUILDING_SELECTED_EVENT, ERROR_REPLY};

use super::{ChatInput, MapModal, MessageList, Sidebar};

/// The conversation: an append-only message list that only "New Chat" resets
#[derive(Clone, PartialEq)]
pub struct Conversation {
    pub messages: Vec<ChatMessage>,
}

pub enum ConversationAction {
    Push(ChatMessage),
    Reset,
}

impl Default for Conversation {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::greeting()],
        }
    }
}

impl Reducible for Conversation {
    type Action = ConversationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ConversationAction::Push(message) => {
                let mut messages = self.messages.clone();
                messages.push(message);
                Rc::new(Self { messages })
            }
            ConversationAction::Reset => Rc::new(Self::default()),
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let conversation = use_reducer_eq(Conversation::default);
    let draft = use_state(String::new);
    let loading = use_state(|| false);
    let show_map = use_state(|| false);
    let geojson = use_state(|| None::<FeatureCollection>);
    let route = use_state(|| None::<RouteResult>);

    // Load the campus GeoJSON the first time the map opens
    {
        let geojson = geojson.clone();
        use_effect_with(*show_map, move |open| {
            if *open && (*geojson).is_none() {
                if let Some(cached) = GeoJsonCache::load() {
                    geojson.set(Some(cached));
                } else {
                    wasm_bindgen_futures::spawn_local(async move {
                        let api = ApiClient::new();
                        match api.fetch_geojson().await {
                            Ok(collection) => {
                                GeoJsonCache::store(&collection);
                                geojson.set(Some(collection));
                            }
                            Err(e) => {
                                log::error!("❌ Error loading GeoJSON: {}", e);
                            }
                        }
                    });
                }
            }
            || ()
        });
    }

    // Listen for building clicks coming from the map glue
    {
        let conversation = conversation.dispatcher();

        use_effect_with((), move |_| {
            let callback = Closure::wrap(Box::new(move |event: JsValue| {
                // Get detail.ref from the custom event
                let Ok(detail) = js_sys::Reflect::get(&event, &JsValue::from_str("detail"))
                else {
                    return;
                };
                let Some(reference) = js_sys::Reflect::get(&detail, &JsValue::from_str("ref"))
                    .ok()
                    .and_then(|value| value.as_string())
                else {
                    return;
                };

                let conversation = conversation.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let api = ApiClient::new();
                    match api.fetch_building_info(&reference).await {
                        Ok(info) => {
                            if let Some(text) = info.formatted_text {
                                conversation
                                    .dispatch(ConversationAction::Push(ChatMessage::assistant(text)));
                            }
                        }
                        Err(e) => {
                            log::error!("❌ Error fetching building info: {}", e);
                        }
                    }
                });
            }) as Box<dyn FnMut(_)>);

            if let Some(window) = web_sys::window() {
                let _ = window.add_event_listener_with_callback(
                    BUILDING_SELECTED_EVENT,
                    callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                callback.forget();
            }
        });
    }

    // Send the draft to the assistant
    let on_send = {
        let conversation = conversation.clone();
        let draft = draft.clone();
        let loading = loading.clone();
        let route = route.clone();
        let show_map = show_map.clone();

        Callback::from(move |_| {
            let text = (*draft).trim().to_string();
            if text.is_empty() || *loading {
                return;
            }

            conversation.dispatch(ConversationAction::Push(ChatMessage::user(text.clone())));
            draft.set(String::new());
            loading.set(true);

            let conversation = conversation.dispatcher();
            let loading = loading.clone();
            let route = route.clone();
            let show_map = show_map.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();

                match api.send_chat(&text).await {
                    Ok(response) => {
                        conversation.dispatch(ConversationAction::Push(
                            ChatMessage::assistant(response.reply_text()),
                        ));

                        // Navigation answers trigger a route calculation and
                        // auto-open the map
                        if let Some((origin, destination)) = response.navigation() {
                            match api.calculate_route(origin, destination).await {
                                Ok(new_route) => {
                                    route.set(Some(new_route));
                                    show_map.set(true);
                                }
                                Err(e) => {
                                    log::error!("❌ Error calculating route: {}", e);
                                }
                            }
                        } else if response.is_building_info() {
                            // Building-info answers need no follow-up request
                            log::info!("🏢 Building info answer");
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error sending message: {}", e);
                        conversation.dispatch(ConversationAction::Push(
                            ChatMessage::assistant(ERROR_REPLY),
                        ));
                    }
                }

                loading.set(false);
            });
        })
    };

    let on_draft_change = {
        let draft = draft.clone();
        Callback::from(move |value: String| draft.set(value))
    };

    let on_new_chat = {
        let conversation = conversation.clone();
        let route = route.clone();
        Callback::from(move |_| {
            log::info!("🆕 New chat");
            conversation.dispatch(ConversationAction::Reset);
            route.set(None);
        })
    };

    let on_quick_prompt = {
        let draft = draft.clone();
        Callback::from(move |prompt: String| draft.set(prompt))
    };

    let on_toggle_map = {
        let show_map = show_map.clone();
        Callback::from(move |_| show_map.set(!*show_map))
    };

    let on_close_map = {
        let show_map = show_map.clone();
        Callback::from(move |_| show_map.set(false))
    };

    html! {
        <div class="app-shell">
            <Sidebar
                map_open={*show_map}
                on_new_chat={on_new_chat}
                on_quick_prompt={on_quick_prompt}
                on_toggle_map={on_toggle_map}
            />

            <main class="chat-panel">
                <MessageList
                    messages={conversation.messages.clone()}
                    loading={*loading}
                />
                <ChatInput
                    draft={(*draft).clone()}
                    disabled={*loading}
                    on_change={on_draft_change}
                    on_send={on_send}
                />
            </main>

            {
                if *show_map {
                    html! {
                        <MapModal
                            geojson={(*geojson).clone()}
                            route={(*route).clone()}
                            on_close={on_close_map}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::message::GREETING;
    use crate::models::Role;

    fn reduce(conversation: Conversation, action: ConversationAction) -> Conversation {
        Rc::try_unwrap(Rc::new(conversation).reduce(action)).unwrap_or_else(|rc| (*rc).clone())
    }

    #[test]
    fn starts_with_the_greeting() {
        let conversation = Conversation::default();
        assert_eq!(conversation.messages.len(), 1);
        assert_eq!(conversation.messages[0].role, Role::Assistant);
        assert_eq!(conversation.messages[0].content, GREETING);
    }

    #[test]
    fn push_appends_exactly_one_message() {
        let conversation = Conversation::default();
        let conversation = reduce(
            conversation,
            ConversationAction::Push(ChatMessage::user("where is the library?")),
        );
        assert_eq!(conversation.messages.len(), 2);
        assert_eq!(conversation.messages[1].role, Role::User);

        let conversation = reduce(
            conversation,
            ConversationAction::Push(ChatMessage::assistant("In building D.")),
        );
        assert_eq!(conversation.messages.len(), 3);
        assert_eq!(conversation.messages[2].role, Role::Assistant);
    }

    #[test]
    fn reset_returns_to_the_single_greeting() {
        let conversation = reduce(
            Conversation::default(),
            ConversationAction::Push(ChatMessage::user("hi")),
        );
        let conversation = reduce(conversation, ConversationAction::Reset);
        assert_eq!(conversation.messages.len(), 1);
        assert_eq!(conversation.messages[0].content, GREETING);
    }
}
