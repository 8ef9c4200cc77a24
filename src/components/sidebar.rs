use yew::prelude::*;

use crate::utils::constants::{QUICK_BUILDING_PROMPT, QUICK_NAVIGATION_PROMPT};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub map_open: bool,
    pub on_new_chat: Callback<()>,
    pub on_quick_prompt: Callback<String>,
    pub on_toggle_map: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let on_new_chat = {
        let on_new_chat = props.on_new_chat.clone();
        Callback::from(move |_: MouseEvent| on_new_chat.emit(()))
    };

    let quick_navigation = {
        let on_quick_prompt = props.on_quick_prompt.clone();
        Callback::from(move |_: MouseEvent| {
            on_quick_prompt.emit(QUICK_NAVIGATION_PROMPT.to_string())
        })
    };

    let quick_building = {
        let on_quick_prompt = props.on_quick_prompt.clone();
        Callback::from(move |_: MouseEvent| {
            on_quick_prompt.emit(QUICK_BUILDING_PROMPT.to_string())
        })
    };

    let on_toggle_map = {
        let on_toggle_map = props.on_toggle_map.clone();
        Callback::from(move |_: MouseEvent| on_toggle_map.emit(()))
    };

    html! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <div class="app-logo">{"🧭"}</div>
                <button class="btn-new-chat" onclick={on_new_chat}>
                    {"New Chat"}
                </button>
            </div>
            <div class="sidebar-body">
                <p class="sidebar-title">{"Quick Actions"}</p>
                <button class="quick-action" onclick={quick_navigation}>
                    {"Campus Navigation"}
                </button>
                <button class="quick-action" onclick={quick_building}>
                    {"Building Information"}
                </button>
                <button class="btn-map-toggle" onclick={on_toggle_map}>
                    { if props.map_open { "Hide Map" } else { "Show Map" } }
                </button>
            </div>
        </aside>
    }
}
