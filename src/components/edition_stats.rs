//! Edition Stats Component

use leptos::prelude::*;

use crate::models::Newspaper;

#[component]
pub fn EditionStats(edition: Newspaper) -> impl IntoView {
    let stats = [
        ("📄", "Total Stories", edition.stories.len()),
        ("⭐", "Headlines", edition.headline_count()),
        ("🖼", "Images", edition.image_count()),
        ("👥", "Contributors", edition.contributor_names().len()),
    ];

    view! {
        <div class="edition-stats">
            {stats
                .into_iter()
                .map(|(icon, label, value)| view! {
                    <div class="stat-card">
                        <span class="stat-icon">{icon}</span>
                        <span class="stat-value">{value}</span>
                        <span class="stat-label">{label}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
