use std::cmp::Ordering;

use chrono::NaiveDate;
use maud::{html, Markup};

use crate::article::tag_href;

use super::data::ArticleEntry;

fn parsed_date(entry: &ArticleEntry) -> Option<NaiveDate> {
    entry
        .date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
}

/// Newest first. Entries without a readable date go last, by title.
pub(super) fn sort_article(a: &ArticleEntry, b: &ArticleEntry) -> Ordering {
    match (parsed_date(a), parsed_date(b)) {
        (Some(ref a_date), Some(ref b_date)) => b_date.cmp(a_date).then(a.title.cmp(&b.title)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.title.cmp(&b.title),
    }
}

pub(super) fn render_listing(category: &str, entries: &[ArticleEntry]) -> Markup {
    html! {
        main class="w-full max-w-3xl mx-auto py-16 px-6" {
            h1 class="text-4xl font-bold tracking-wide text-gray-900 mb-8" { (category) }
            ul id="article-list" class="space-y-8" {
                @for entry in entries {
                    li data-tags=(entry.tags.join(",")) {
                        a href=(entry.href) class="text-2xl font-semibold text-gray-900 hover:underline" {
                            (entry.title)
                        }
                        @if let Some(date) = &entry.date {
                            p class="text-gray-600" { (date) }
                        }
                        @if !entry.tags.is_empty() {
                            div class="flex flex-wrap gap-2 text-sm mt-2" {
                                @for tag in &entry.tags {
                                    a href=(tag_href(category, tag))
                                        class="bg-gray-200 text-gray-800 px-3 py-1 rounded-full hover:bg-gray-300" {
                                        (tag)
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub(super) fn render_categories(categories: &[(String, usize)]) -> Markup {
    html! {
        main class="w-full max-w-3xl mx-auto py-16 px-6" {
            ul class="space-y-4" {
                @for (category, count) in categories {
                    li {
                        a href={ "/" (category) } class="text-2xl font-semibold text-gray-900 hover:underline" {
                            (category)
                        }
                        " "
                        span class="text-gray-500" { "(" (count) ")" }
                    }
                }
            }
        }
    }
}
