//! Floating context menu chrome.
//!
//! The menu is positioned absolutely inside its nearest positioned ancestor.
//! A full-viewport backdrop catches click-away and reports it through
//! `on_close`; the owner decides what closing means. The backdrop closes on
//! `click` and swallows the whole gesture, so nothing underneath reacts to the
//! click that dismissed the menu.

use editor::camera::Offset;
use leptos::prelude::*;

/// Menu container. Renders `children` while `open` is true.
#[component]
pub fn Menu(
    #[prop(into)] open: Signal<bool>,
    /// Top-left corner, in pixels relative to the positioned ancestor.
    #[prop(into)]
    anchor: Signal<Offset>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let style = move || {
        let anchor = anchor.get();
        format!("top: {}px; left: {}px;", anchor.y, anchor.x)
    };

    view! {
        <Show when=move || open.get()>
            <div
                class="menu-backdrop"
                on:mousedown=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    on_close.run(());
                }
                on:contextmenu=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    on_close.run(());
                }
            ></div>
            <div
                class="menu"
                style=style
                on:mousedown=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </Show>
    }
}

/// One menu entry.
#[component]
pub fn MenuItem(
    label: String,
    /// Icon name, rendered as a `data-icon` marker for the stylesheet.
    icon: Option<String>,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="menu-item"
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.stop_propagation();
                on_click.run(());
            }
        >
            {icon.map(|name| view! { <span class="menu-item-icon" data-icon=name></span> })}
            <span class="menu-item-label">{label}</span>
        </button>
    }
}
