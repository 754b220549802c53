//! Player Panel Component
//!
//! Level, title, XP bar, streak and achievement badges.

use leptos::prelude::*;
use quest_core::Achievement;

use crate::format;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PlayerPanel() -> impl IntoView {
    let store = use_app_store();
    let player = Memo::new(move |_| store.quests().with(|q| q.player().clone()));

    view! {
        <div class="player-panel">
            <div class="player-level">{move || player.with(format::level_label)}</div>

            <div class="xp-bar">
                <div
                    class="xp-fill"
                    style=move || format!("width: {}%;", player.with(|p| p.progress_percent()))
                />
            </div>
            <div class="xp-text">{move || player.with(format::xp_label)}</div>

            <div class="streak">
                {move || player.with(|p| format::streak_label(p.streak, p.best_streak))}
            </div>

            <ul class="achievements">
                {Achievement::ALL.iter().map(|&achievement| {
                    let unlocked = move || player.with(|p| p.has_achievement(achievement));
                    view! {
                        <li
                            class=move || if unlocked() { "achievement unlocked" } else { "achievement locked" }
                            title=achievement.description()
                        >
                            {achievement.name()}
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}
