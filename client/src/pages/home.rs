//! Home page: the polygon builder above a gallery of saved polygons.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns every polygon. The builder edits the draft held in
//! `GalleryState`; saving moves the draft into the gallery, where each saved
//! polygon becomes a clickable region over the preview image.

use editor::camera::ImageMetrics;
use editor::config::EditorConfig;
use editor::polygon;
use leptos::prelude::*;

use crate::components::clip_path_builder::ClipPathBuilder;
use crate::components::menu::{Menu, MenuItem};
use crate::state::gallery::GalleryState;
#[cfg(feature = "csr")]
use crate::util::pointer::local_point;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

/// Image edited by the builder and shown under the saved regions.
const IMAGE_SRC: &str = "/assets/sample.jpg";

/// Builder settings shipped with the page.
const EDITOR_CONFIG: &str = include_str!("../../editor.json");

/// Parse the shipped builder settings, falling back to defaults.
fn editor_config(raw: &str) -> EditorConfig {
    EditorConfig::from_json(raw).unwrap_or_else(|err| {
        log::warn!("editor config rejected, using defaults: {err}");
        EditorConfig::default()
    })
}

#[component]
pub fn HomePage() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let preview_frame = NodeRef::<leptos::html::Div>::new();
    let preview_image = NodeRef::<leptos::html::Img>::new();
    let preview_metrics = RwSignal::new(ImageMetrics::default());

    let draft = Memo::new(move |_| gallery.with(|g| g.draft.clone()));
    let zoom = Memo::new(move |_| gallery.with(|g| g.zoom));
    let hide_handles = Memo::new(move |_| gallery.with(|g| g.hide_handles));
    let on_change = Callback::new(move |next| gallery.update(|g| g.set_draft(next)));

    let on_zoom_in = move |_| gallery.update(GalleryState::zoom_in);
    let on_zoom_reset = move |_| gallery.update(GalleryState::reset_zoom);
    let on_zoom_out = move |_| gallery.update(GalleryState::zoom_out);
    let on_save = move |_| {
        gallery.update(|g| {
            if let Err(err) = g.save() {
                log::warn!("save refused: {err}");
            }
        });
    };
    let on_clear = move |_| gallery.update(GalleryState::clear);
    let on_hide_handles = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        gallery.update(|g| g.hide_handles = checked);
    };

    let on_preview_load = {
        #[cfg(feature = "csr")]
        {
            move |_ev: leptos::ev::Event| {
                if let Some(image) = preview_image.get_untracked() {
                    let metrics =
                        ImageMetrics::new(f64::from(image.client_width()), f64::from(image.client_height()));
                    if metrics.is_ready() {
                        preview_metrics.set(metrics);
                    }
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_preview_click = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::MouseEvent| {
                let Some(frame) = preview_frame.get_untracked() else {
                    return;
                };
                ev.prevent_default();
                let at = local_point(&ev, &frame, 1.0);
                let metrics = preview_metrics.get_untracked();
                gallery.update(|g| {
                    g.click_region(metrics, at);
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_menu_close = Callback::new(move |()| gallery.update(GalleryState::close_menu));

    view! {
        <div class="home">
            <div class="builder-container">
                <ClipPathBuilder
                    src=IMAGE_SRC
                    alt="editor"
                    points=draft
                    zoom=zoom
                    hide_handles=hide_handles
                    on_change=on_change
                    config=editor_config(EDITOR_CONFIG)
                />
            </div>
            <div class="button-row">
                <button on:click=on_zoom_in>"+"</button>
                <button on:click=on_zoom_reset>"0"</button>
                <button on:click=on_zoom_out>"-"</button>
            </div>
            <div class="button-row">
                <button on:click=on_save disabled=move || !gallery.with(GalleryState::can_save)>
                    {move || if gallery.with(|g| g.editing.is_some()) { "Update" } else { "Save" }}
                </button>
                <button on:click=on_clear>"Clear"</button>
            </div>
            <div class="button-row">
                <label>
                    "Hide handles"
                    <input type="checkbox" prop:checked=move || hide_handles.get() on:change=on_hide_handles />
                </label>
            </div>
            <code class="clip-path-value">{move || draft.with(|points| polygon::clip_path(points))}</code>
            <div class="preview-container">
                <div
                    class="preview"
                    node_ref=preview_frame
                    on:click=on_preview_click
                    on:contextmenu=on_preview_click
                >
                    <img node_ref=preview_image src=IMAGE_SRC alt="preview" on:load=on_preview_load />
                    {move || {
                        gallery
                            .with(|g| g.saved.iter().map(|saved| (saved.id, saved.clip_path())).collect::<Vec<_>>())
                            .into_iter()
                            .map(|(id, clip)| {
                                view! {
                                    <div
                                        class="preview-region"
                                        class:editing=move || gallery.with(|g| g.editing == Some(id))
                                        style=format!("clip-path: {clip};")
                                    ></div>
                                }
                            })
                            .collect_view()
                    }}
                    <Menu
                        open=Signal::derive(move || gallery.with(|g| g.menu.is_open()))
                        anchor=Signal::derive(move || gallery.with(|g| g.menu.anchor()))
                        on_close=on_menu_close
                    >
                        {move || {
                            gallery
                                .with(|g| g.menu.items().to_vec())
                                .into_iter()
                                .enumerate()
                                .map(|(index, item)| {
                                    let on_click = Callback::new(move |()| select_region_action(gallery, index));
                                    view! { <MenuItem label=item.label icon=item.icon on_click=on_click /> }
                                })
                                .collect_view()
                        }}
                    </Menu>
                </div>
            </div>
        </div>
    }
}

fn select_region_action(gallery: RwSignal<GalleryState>, index: usize) {
    gallery.update(|g| match g.select_menu(index) {
        Ok(Some(action)) => log::debug!("region action {action:?}"),
        Ok(None) => {}
        Err(err) => log::warn!("region action failed: {err}"),
    });
}
