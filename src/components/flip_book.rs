//! FlipBook Component
//!
//! Renders an edition as turnable pages: cover, story spreads and back
//! cover, or one story per page for archive reading.

use leptos::prelude::*;
use leptos_flipbook::{bind_keyboard, create_flip_signals, paginate, request_flip, toggle_fullscreen, FlipRequest, Layout, Page};

use crate::config::PUBLICATION_TIME;
use crate::format::{format_date, format_week, pluralize};
use crate::models::{Newspaper, Story};

/// Edition-level data shown on the covers
#[derive(Clone, Debug)]
struct CoverInfo {
    title: String,
    week: String,
    date: Option<String>,
    story_count: usize,
    contributors: Vec<String>,
}

impl CoverInfo {
    fn from_edition(edition: &Newspaper) -> Self {
        Self {
            title: edition.title.clone(),
            week: format_week(&edition.week_of),
            date: (!edition.published_at.is_empty()).then(|| format_date(&edition.published_at)),
            story_count: edition.stories.len(),
            contributors: edition.contributor_names(),
        }
    }
}

#[component]
pub fn FlipBook(edition: Newspaper, #[prop(optional)] layout: Layout) -> impl IntoView {
    let pages = paginate(&edition.stories, layout);
    let total = pages.len();

    if total == 0 {
        return view! {
            <div class="flipbook-empty">
                <span class="empty-icon">"📄"</span>
                <p>"No stories"</p>
            </div>
        }
        .into_any();
    }

    let cover = StoredValue::new(CoverInfo::from_edition(&edition));
    let pages = StoredValue::new(pages);
    let flip = create_flip_signals(total);
    bind_keyboard(flip);

    let cursor = flip.cursor_read;
    let fullscreen = flip.fullscreen_read;

    let current_page = move || {
        let index = cursor.get().current();
        pages.with_value(|p| p.get(index).cloned())
    };

    view! {
        <div class=move || if fullscreen.get() { "flipbook fullscreen" } else { "flipbook" }>
            <div class="flipbook-controls">
                <div class="flipbook-buttons">
                    <button class="btn" title="Go to cover" on:click=move |_| { request_flip(&flip, FlipRequest::Goto(0)); }>
                        "⟲ Cover"
                    </button>
                    <button class="btn" title="Toggle fullscreen" on:click=move |_| toggle_fullscreen(&flip)>
                        {move || if fullscreen.get() { "Exit Fullscreen" } else { "⛶ Fullscreen" }}
                    </button>
                </div>
                <span class="flipbook-position">
                    {move || format!("Page {} of {}", cursor.get().current() + 1, total)}
                </span>
            </div>

            <div class="flipbook-stage">
                <div class=move || {
                    let kind = current_page().map(|p| p.kind().css_class()).unwrap_or("flip-page");
                    if cursor.get().is_flipping() { format!("{} flipping", kind) } else { kind.to_string() }
                }>
                    {move || current_page().map(|page| cover.with_value(|info| render_page(page, info)))}
                </div>

                <div class="flipbook-zones">
                    <div
                        class="flip-zone prev"
                        style:visibility=move || if cursor.get().has_prev() { "visible" } else { "hidden" }
                        on:click=move |_| { request_flip(&flip, FlipRequest::Prev); }
                    >
                        <span class="flip-arrow">"‹"</span>
                    </div>
                    <div
                        class="flip-zone next"
                        style:visibility=move || if cursor.get().has_next() { "visible" } else { "hidden" }
                        on:click=move |_| { request_flip(&flip, FlipRequest::Next); }
                    >
                        <span class="flip-arrow">"›"</span>
                    </div>
                </div>
            </div>

            <div class="flipbook-indicators">
                {(0..total)
                    .map(|index| {
                        view! {
                            <button
                                class=move || if cursor.get().current() == index { "page-dot active" } else { "page-dot" }
                                title=format!("Go to page {}", index + 1)
                                on:click=move |_| { request_flip(&flip, FlipRequest::Goto(index)); }
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <p class="flipbook-help">
                "Use arrow keys or click to navigate • Space for next page • ESC to exit fullscreen"
            </p>
        </div>
    }
    .into_any()
}

fn render_page(page: Page<Story>, info: &CoverInfo) -> AnyView {
    match page {
        Page::Cover => render_cover(info),
        Page::Spread { left, right } => view! {
            <div class="spread">
                <div class="spread-side left">{render_story(Some(left))}</div>
                <div class="spread-side right">{render_story(right)}</div>
            </div>
        }
        .into_any(),
        Page::Single(story) => render_story(Some(story)),
        Page::BackCover => render_back_cover(info),
    }
}

fn render_cover(info: &CoverInfo) -> AnyView {
    view! {
        <div class="cover-page">
            <h1 class="masthead">{info.title.clone()}</h1>
            <p class="tagline">"\"The Daily Acts\" - Your Social Newspaper Network"</p>
            <div class="rule"></div>
            <h2 class="cover-week">{info.week.clone()}</h2>
            {info.date.clone().map(|date| view! { <p class="cover-date">{date}</p> })}
            <div class="cover-stats">
                <span>"📄 " {pluralize(info.story_count, "Story", "Stories")}</span>
                <span>"👥 " {pluralize(info.contributors.len(), "Contributor", "Contributors")}</span>
            </div>
        </div>
    }
    .into_any()
}

fn render_back_cover(info: &CoverInfo) -> AnyView {
    view! {
        <div class="back-cover-page">
            <h1>"Thank You for Reading"</h1>
            <div class="back-cover-summary">
                <h2>"This Week's Edition"</h2>
                <p><strong>"Week: "</strong>{info.week.clone()}</p>
                <p><strong>"Stories: "</strong>{info.story_count}</p>
                <p><strong>"Contributors: "</strong>{info.contributors.join(", ")}</p>
            </div>
            <p class="next-edition">{format!("Next edition published {}", PUBLICATION_TIME)}</p>
        </div>
    }
    .into_any()
}

fn render_story(story: Option<Story>) -> AnyView {
    let Some(story) = story else {
        return view! {
            <div class="story-page empty">
                <p>"No story for this page"</p>
            </div>
        }
        .into_any();
    };

    let lead_images: Vec<_> = story.images.iter().take(2).cloned().collect();
    let trailing_image = story.images.get(2).cloned();

    view! {
        <article class=if story.is_headline { "story-page headline-story" } else { "story-page" }>
            {story.is_headline.then(|| view! { <span class="headline-badge">"Headline"</span> })}
            <h1 class="story-headline">{story.headline.clone()}</h1>
            <h2 class="story-title">{story.title.clone()}</h2>
            <p class="story-byline">"By " {story.author_name.clone()}</p>
            <div class="story-images">
                {lead_images
                    .into_iter()
                    .map(|img| view! { <img src=img.data_url() alt=img.filename /> })
                    .collect_view()}
            </div>
            <div class="story-content" inner_html=story.content.clone()></div>
            {trailing_image.map(|img| view! { <img class="story-image-trailing" src=img.data_url() alt=img.filename /> })}
        </article>
    }
    .into_any()
}
