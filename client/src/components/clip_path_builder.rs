//! Bridge component between Leptos state and the `editor::engine::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine lives in a `StoredValue` and receives every mouse event on the
//! editor. Presses are taken on the zoomed canvas. Moves and releases are
//! taken on the outer frame together with leave, so a drag that strays off a
//! shrunken image still ends in a commit. Committed edits leave through `on_change`; the owner hands the
//! points back down through `points`, which re-syncs the engine. While a vertex
//! is dragged the engine publishes drag previews that are patched straight
//! into the DOM, so the view model is only rebuilt on press and release.

use editor::config::EditorConfig;
use editor::engine::{Action, DragPreview, Engine, VertexAction};
#[cfg(feature = "csr")]
use editor::input::{Button, PointerTarget};
use editor::menu::Menu as MenuModel;
use editor::polygon::Point;
#[cfg(feature = "csr")]
use editor::render;
use editor::render::Scene;
use leptos::prelude::*;

use crate::components::menu::{Menu, MenuItem};
#[cfg(feature = "csr")]
use crate::util::pointer::{anchor_point, local_point, movement, pointer_target};

/// Handles shared by every event closure of one builder instance.
#[derive(Clone, Copy)]
struct Host {
    engine: StoredValue<Engine>,
    scene: RwSignal<Scene>,
    menu: RwSignal<MenuModel<VertexAction>>,
    /// Unscaled scroll container; menu anchors are relative to its content box.
    frame: NodeRef<leptos::html::Div>,
    /// Zoomed element holding the image, outline, and handles.
    canvas: NodeRef<leptos::html::Div>,
    on_change: Callback<Vec<Point>>,
}

impl Host {
    /// Run one engine handler and apply the actions it returns.
    fn dispatch(self, handler: impl FnOnce(&mut Engine) -> Vec<Action>) {
        let Some(actions) = self.engine.try_update_value(handler) else {
            return;
        };
        let mut render = false;
        for action in actions {
            match action {
                Action::PointsChanged(points) => self.on_change.run(points),
                Action::DragPreview(preview) => self.patch(&preview),
                Action::MenuOpened { .. } | Action::MenuClosed => {
                    self.menu.set(self.engine.with_value(|engine| engine.menu.clone()));
                }
                Action::SetCursor(_) | Action::RenderNeeded => render = true,
            }
        }
        if render {
            self.scene.set(self.engine.with_value(Engine::scene));
        }
    }

    #[cfg(feature = "csr")]
    fn patch(self, preview: &DragPreview) {
        let Some(canvas) = self.canvas.get_untracked() else {
            return;
        };
        if let Err(err) = render::patch_drag(&canvas, preview) {
            log::warn!("drag patch failed: {err:?}");
        }
    }

    #[cfg(not(feature = "csr"))]
    fn patch(self, _preview: &DragPreview) {}

    #[cfg(feature = "csr")]
    fn zoom(self) -> f64 {
        self.engine.with_value(|engine| engine.camera.zoom())
    }
}

/// Polygon editor over an image.
///
/// Click to append a vertex, drag a handle to move it, right-click a handle
/// for the vertex menu. Every committed change is reported through
/// `on_change`; nothing changes on screen until the owner feeds it back
/// through `points`.
#[component]
pub fn ClipPathBuilder(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into)] points: Signal<Vec<Point>>,
    #[prop(into)] zoom: Signal<f64>,
    #[prop(into)] hide_handles: Signal<bool>,
    on_change: Callback<Vec<Point>>,
    /// Handle geometry and zoom floor; defaults when omitted.
    #[prop(optional)]
    config: Option<EditorConfig>,
) -> impl IntoView {
    let engine = config.map_or_else(Engine::new, Engine::with_config);
    let host = Host {
        scene: RwSignal::new(engine.scene()),
        engine: StoredValue::new(engine),
        menu: RwSignal::new(MenuModel::new()),
        frame: NodeRef::new(),
        canvas: NodeRef::new(),
        on_change,
    };
    let image_ref = NodeRef::<leptos::html::Img>::new();

    Effect::new(move || {
        let next = points.get();
        host.dispatch(|engine| {
            let mut actions = engine.set_points(next);
            actions.push(Action::RenderNeeded);
            actions
        });
    });
    Effect::new(move || {
        let next = zoom.get();
        host.dispatch(|engine| engine.set_zoom(next));
    });
    Effect::new(move || {
        let next = hide_handles.get();
        host.dispatch(|engine| engine.set_hide_handles(next));
    });

    let on_image_load = {
        #[cfg(feature = "csr")]
        {
            move |_ev: leptos::ev::Event| {
                let Some(image) = image_ref.get_untracked() else {
                    return;
                };
                let width = f64::from(image.client_width());
                let height = f64::from(image.client_height());
                host.dispatch(|engine| engine.on_image_load(width, height));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_mouse_down = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::MouseEvent| {
                let Some(canvas) = host.canvas.get_untracked() else {
                    return;
                };
                let target = pointer_target(&ev);
                if matches!(target, PointerTarget::Handle(_)) {
                    ev.prevent_default();
                }
                let at = local_point(&ev, &canvas, host.zoom());
                let button = Button::from_dom(ev.button());
                host.dispatch(|engine| engine.on_pointer_down(target, at, button));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_move = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::MouseEvent| {
                let delta = movement(&ev);
                host.dispatch(|engine| engine.on_pointer_move(delta));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_up = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::MouseEvent| {
                let Some(canvas) = host.canvas.get_untracked() else {
                    return;
                };
                let at = local_point(&ev, &canvas, host.zoom());
                let button = Button::from_dom(ev.button());
                host.dispatch(|engine| engine.on_pointer_up(at, button));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_context_menu = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::MouseEvent| {
                let PointerTarget::Handle(index) = pointer_target(&ev) else {
                    return;
                };
                ev.prevent_default();
                let Some(frame) = host.frame.get_untracked() else {
                    return;
                };
                let anchor = anchor_point(&ev, &frame);
                host.dispatch(|engine| engine.on_context_menu(index, anchor));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_leave = move |_ev: leptos::ev::MouseEvent| host.dispatch(Engine::on_pointer_leave);
    let on_menu_close = Callback::new(move |()| host.dispatch(Engine::on_menu_close));

    let canvas_style = move || {
        let scene = host.scene.get();
        format!(
            "transform: {}; transform-origin: 0 0; cursor: {};",
            scene.container_transform, scene.cursor
        )
    };

    view! {
        <div
            class="clip-path-builder"
            node_ref=host.frame
            on:mousemove=on_mouse_move
            on:mouseup=on_mouse_up
            on:mouseleave=on_mouse_leave
        >
            <div
                class="clip-path-canvas"
                node_ref=host.canvas
                style=canvas_style
                on:mousedown=on_mouse_down
                on:contextmenu=on_context_menu
            >
                <img node_ref=image_ref src=src alt=alt draggable="false" on:load=on_image_load />
                <svg
                    class="clip-path-outline"
                    viewBox=move || host.scene.get().view_box
                    preserveAspectRatio="none"
                >
                    <path data-outline="" d=move || host.scene.get().path></path>
                </svg>
                {move || {
                    host.scene
                        .get()
                        .handles
                        .into_iter()
                        .map(|handle| {
                            view! {
                                <div
                                    class="clip-path-handle"
                                    data-vertex=handle.index.to_string()
                                    style=handle.style()
                                ></div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <Menu
                open=Signal::derive(move || host.menu.get().is_open())
                anchor=Signal::derive(move || host.menu.get().anchor())
                on_close=on_menu_close
            >
                {move || {
                    host.menu
                        .get()
                        .items()
                        .iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let on_click = Callback::new(move |()| {
                                host.dispatch(|engine| engine.on_menu_select(index));
                            });
                            view! { <MenuItem label=item.label.clone() icon=item.icon.clone() on_click=on_click /> }
                        })
                        .collect_view()
                }}
            </Menu>
        </div>
    }
}
