use leptos::*;

use crate::api::{HttpApi, ParticipantsApi};
use crate::dialogs::BrowserDialogs;
use crate::ops::{self, CreateOutcome, DeleteOutcome};
use crate::parallax;
use crate::state::LeaderboardState;
use crate::types::{avatar_glyph, display_set, format_time, AVATARS};

fn console_error(msg: &str) {
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[component]
pub fn App() -> impl IntoView {
    view! { <Leaderboard /> }
}

#[component]
fn Leaderboard() -> impl IntoView {
    let (state, set_state) = create_signal(LeaderboardState::new());
    let (scroll_y, set_scroll_y) = create_signal(0.0f64);

    // One load path for mount, refresh, and post-mutation reloads.
    let load = move || {
        set_state.update(|s| s.load_start());
        spawn_local(async move {
            match HttpApi::default().list().await {
                Ok(participants) => set_state.update(|s| s.load_success(participants)),
                Err(err) => {
                    console_error(&format!("Error fetching participants: {err}"));
                    set_state.update(|s| s.load_failure());
                }
            }
        });
    };

    load();

    // Parallax background follows the page scroll.
    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        set_scroll_y.set(window().scroll_y().unwrap_or(0.0));
    });
    on_cleanup(move || scroll_handle.remove());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let draft = state.get().draft;
        spawn_local(async move {
            match ops::submit_draft(&HttpApi::default(), &BrowserDialogs, &draft).await {
                CreateOutcome::Created => {
                    set_state.update(|s| s.create_succeeded());
                    load();
                }
                CreateOutcome::Failed(err) => {
                    console_error(&format!("Error adding participant: {err}"));
                }
                CreateOutcome::Rejected => {}
            }
        });
    };

    let delete_entry = move |id: u32| {
        spawn_local(async move {
            match ops::remove_participant(&HttpApi::default(), &BrowserDialogs, id).await {
                DeleteOutcome::Deleted => load(),
                DeleteOutcome::Failed(err) => {
                    console_error(&format!("Error deleting participant: {err}"));
                }
                DeleteOutcome::Declined => {}
            }
        });
    };

    // Memos keep draft keystrokes from rebuilding the form and table.
    let show_form = create_memo(move |_| state.with(|s| s.show_form));
    let error = create_memo(move |_| state.with(|s| s.error.clone()));
    let loading = create_memo(move |_| state.with(|s| s.loading));
    let board = create_memo(move |_| state.with(|s| (s.loading, s.participants.clone())));

    view! {
        <div class="board-page">
            <div class="board-background" style=move || parallax::background_style(scroll_y.get())></div>

            <div class="board-content">
                <header class="board-header">
                    <h1 class="neon-title">"ROBOMASTER RUSH & FIND"</h1>
                    <p class="board-subtitle">"LEADERBOARD"</p>

                    <div class="header-actions">
                        {move || (!show_form.get()).then(|| view! {
                            <button class="add-btn" on:click=move |_| set_state.update(|s| s.open_form())>
                                "Add New Challenger"
                            </button>
                        })}
                        <button
                            class=move || if loading.get() { "refresh-btn loading" } else { "refresh-btn" }
                            on:click=move |_| load()
                            disabled=move || loading.get()
                        >
                            "Refresh"
                        </button>
                    </div>

                    {move || error.get().map(|e| view! { <div class="error-banner">{e}</div> })}
                </header>

                {move || show_form.get().then(|| view! {
                    <div class="add-form">
                        <h2 class="add-form-title">"New Challenger"</h2>
                        <form on:submit=on_submit>
                            <label class="form-label">"Name"</label>
                            <input
                                type="text"
                                class="form-input"
                                placeholder="Enter team name"
                                on:input=move |ev| set_state.update(|s| s.draft.name = event_target_value(&ev))
                                prop:value=move || state.with(|s| s.draft.name.clone())
                            />

                            <label class="form-label">"School"</label>
                            <input
                                type="text"
                                class="form-input"
                                placeholder="Enter school name"
                                on:input=move |ev| set_state.update(|s| s.draft.school = event_target_value(&ev))
                                prop:value=move || state.with(|s| s.draft.school.clone())
                            />

                            <label class="form-label">"Time (seconds)"</label>
                            <input
                                type="number"
                                min="0"
                                class="form-input"
                                placeholder="Enter completion time"
                                on:input=move |ev| set_state.update(|s| {
                                    s.draft.score = event_target_value(&ev).parse().unwrap_or(0);
                                })
                                prop:value=move || state.with(|s| s.draft.score.to_string())
                            />

                            <label class="form-label">"Choose Avatar"</label>
                            <div class="avatar-grid">
                                {AVATARS.iter().map(|avatar| {
                                    let id = avatar.id;
                                    view! {
                                        <button
                                            type="button"
                                            class=move || if state.with(|s| s.draft.avatar == id) {
                                                "avatar-option selected"
                                            } else {
                                                "avatar-option"
                                            }
                                            on:click=move |_| set_state.update(|s| s.draft.avatar = id.to_string())
                                        >
                                            <span class="avatar-glyph">{avatar.glyph}</span>
                                            <span class="avatar-label">{avatar.label}</span>
                                        </button>
                                    }
                                }).collect_view()}
                            </div>

                            <div class="form-actions">
                                <button type="submit" class="form-save">"Save"</button>
                                <button
                                    type="button"
                                    class="form-cancel"
                                    on:click=move |_| set_state.update(|s| s.close_form())
                                >
                                    "Cancel"
                                </button>
                            </div>
                        </form>
                    </div>
                })}

                <div class="board-panel">
                    {move || {
                        let (loading, participants) = board.get();
                        if loading && participants.is_empty() {
                            view! {
                                <div class="board-loading">
                                    <div class="spinner"></div>
                                    <p>"Loading leaderboard data..."</p>
                                </div>
                            }.into_view()
                        } else if participants.is_empty() {
                            view! {
                                <div class="board-empty">
                                    <p>"No participants yet."</p>
                                    <button
                                        class="add-btn"
                                        on:click=move |_| set_state.update(|s| s.open_form())
                                    >
                                        "Add Your First Challenger"
                                    </button>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <table class="board-table">
                                    <thead>
                                        <tr>
                                            <th class="col-rank">"Rank"</th>
                                            <th class="col-name">"Name"</th>
                                            <th class="col-school">"School"</th>
                                            <th class="col-time">"Time"</th>
                                            <th class="col-actions">"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {display_set(&participants).into_iter().enumerate().map(|(i, p)| {
                                            let id = p.id;
                                            let trophy = match i {
                                                0 => Some("trophy gold"),
                                                1 => Some("trophy silver"),
                                                2 => Some("trophy bronze"),
                                                _ => None,
                                            };
                                            view! {
                                                <tr class=if i < 3 { "board-row podium" } else { "board-row" }>
                                                    <td class="cell-rank">
                                                        <span class="rank-number">{i + 1}</span>
                                                        {trophy.map(|c| view! { <span class=c>"🏆"</span> })}
                                                    </td>
                                                    <td class="cell-name">
                                                        <span class="avatar-bubble">{avatar_glyph(&p.avatar)}</span>
                                                        <span class="entrant-name">{p.name.clone()}</span>
                                                    </td>
                                                    <td class="cell-school">{p.school.clone()}</td>
                                                    <td class="cell-time">{format_time(p.score)}</td>
                                                    <td class="cell-actions">
                                                        <button
                                                            class="delete-btn"
                                                            title="Delete"
                                                            on:click=move |_| delete_entry(id)
                                                        >
                                                            "🗑"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            }.into_view()
                        }
                    }}
                </div>

                <footer class="board-footer">
                    <p>"© 2025 ITE Robomaster Rush & Find Challenge"</p>
                </footer>
            </div>
        </div>
    }
}
