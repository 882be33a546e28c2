use maud::{html, Markup, Render};

use crate::{
    front_matter::FrontMatter,
    markdown::{self, Theme},
};

use super::source::tag_href;

pub struct ArticlePage<'a> {
    pub category: &'a str,
    pub content: &'a FrontMatter,
    pub theme: &'a Theme,
}

impl Render for ArticlePage<'_> {
    fn render(&self) -> Markup {
        let meta = &self.content.metadata;
        html! {
            div class="min-h-screen bg-white flex flex-col items-center px-6 sm:px-12" {
                main class="w-full max-w-3xl mx-auto py-16" {
                    @if let Some(title) = meta.title() {
                        header class="text-center" {
                            h1 class="text-4xl font-bold tracking-wide leading-tight text-gray-900 mb-4 mt-16" {
                                (title)
                            }
                        }
                    }
                    div class="text-gray-600 mb-2 flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4" {
                        div class="flex flex-col sm:flex-row sm:items-center sm:justify-center gap-6 text-lg text-center sm:text-left sm:flex-grow" {
                            @if let Some(author) = meta.author() {
                                p class="flex items-center gap-1 text-gray-800" {
                                    span role="img" aria-label="author" { "👨‍💻" }
                                    span { (author) }
                                }
                            }
                            @if let Some(date) = meta.date() {
                                p class="flex items-center gap-1 text-gray-800" {
                                    span role="img" aria-label="date" { "📅" }
                                    span { (date) }
                                }
                            }
                            @if let Some(read_time) = meta.read_time() {
                                p class="flex items-center gap-1 text-gray-800" {
                                    span { "⏱️" }
                                    span { (read_time) " min read" }
                                }
                            }
                        }
                    }
                    @if meta.non_empty("tags").is_some() {
                        div class="w-full mt-4 mb-4 text-center" {
                            div class="flex flex-wrap gap-2 text-sm justify-center" {
                                @for tag in meta.tags() {
                                    a href=(tag_href(self.category, &tag))
                                        class="bg-gray-200 text-gray-800 px-3 py-1 rounded-full cursor-pointer hover:bg-gray-300 transition duration-300 ease-in-out" {
                                        (tag)
                                    }
                                }
                            }
                        }
                    }
                    @if let Some(image) = meta.image() {
                        img src=(image) alt="Cover Image" class="w-full rounded-lg shadow-lg mb-12";
                    }
                    article class="prose lg:prose-lg max-w-none" {
                        (markdown::render(&self.content.body, self.theme))
                    }
                }
            }
        }
    }
}
