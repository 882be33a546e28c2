use maud::{html, Markup, Render};
use serde::Deserialize;

pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavbarState {
    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }

    pub fn toggle_menu(&mut self) -> MenuTransition {
        self.menu_open = !self.menu_open;
        self.menu_transition()
    }

    pub fn appearance(&self) -> Appearance {
        Appearance::for_scrolled(self.scrolled)
    }

    pub fn menu_transition(&self) -> MenuTransition {
        MenuTransition::for_open(self.menu_open)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub bar: &'static str,
    pub text: &'static str,
    pub hover: &'static str,
}

impl Appearance {
    pub fn for_scrolled(scrolled: bool) -> Self {
        if scrolled {
            Self {
                bar: "bg-white shadow-md h-16",
                text: "text-gray-900",
                hover: "hover:text-black",
            }
        } else {
            Self {
                bar: "bg-transparent h-20",
                text: "text-white",
                hover: "hover:text-gray-300",
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuTransition {
    pub opacity: f64,
    pub x: f64,
}

impl MenuTransition {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        x: 50.0,
    };
    pub const SHOWN: Self = Self { opacity: 1.0, x: 0.0 };

    pub fn for_open(open: bool) -> Self {
        if open {
            Self::SHOWN
        } else {
            Self::HIDDEN
        }
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transform: translateX({}px);",
            self.opacity, self.x
        )
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

impl NavLink {
    pub fn new(label: &str, path: &str) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
        }
    }
}

pub fn default_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Life", "/life"),
        NavLink::new("About", "/about"),
        NavLink::new("Services", "/services"),
        NavLink::new("Contact", "/contact"),
    ]
}

pub struct Navbar<'a> {
    pub brand: &'a str,
    pub links: &'a [NavLink],
    pub state: NavbarState,
}

impl Render for Navbar<'_> {
    fn render(&self) -> Markup {
        let look = self.state.appearance();
        let top = Appearance::for_scrolled(false);
        let scrolled = Appearance::for_scrolled(true);
        let hidden = MenuTransition::HIDDEN;
        let shown = MenuTransition::SHOWN;
        html! {
            nav id="navbar"
                class={ "fixed top-0 left-0 w-full z-50 transition-all duration-300 " (look.bar) }
                data-scroll-threshold=(SCROLL_THRESHOLD.to_string())
                data-bar-top=(top.bar) data-bar-scrolled=(scrolled.bar)
                data-text-top=(top.text) data-text-scrolled=(scrolled.text)
                data-hover-top=(top.hover) data-hover-scrolled=(scrolled.hover) {
                div class="container mx-auto flex items-center justify-between px-6 py-4" {
                    a href="/" class={ "nav-text text-2xl font-bold " (look.text) } { (self.brand) }
                    div class="hidden md:flex space-x-8" {
                        @for link in self.links {
                            a href=(link.path)
                                class={ "nav-text nav-hover relative transition-colors duration-300 " (look.text) " " (look.hover) } {
                                (link.label)
                                span class="absolute left-0 bottom-0 w-full h-0.5 bg-current" {}
                            }
                        }
                    }
                    button id="navbar-toggle" type="button" class={ "nav-text md:hidden " (look.text) }
                        aria-expanded=(if self.state.menu_open { "true" } else { "false" })
                        aria-controls="navbar-menu" {
                        @if self.state.menu_open { "✕" } @else { "☰" }
                    }
                    div id="navbar-menu"
                        class="absolute top-20 left-0 w-full bg-black/80 backdrop-blur-lg md:hidden transition-all duration-300"
                        hidden[!self.state.menu_open]
                        style=(self.state.menu_transition().style())
                        data-hidden-style=(hidden.style()) data-shown-style=(shown.style()) {
                        ul class="flex flex-col items-center py-4 space-y-4" {
                            @for link in self.links {
                                li {
                                    a href=(link.path) class="text-white text-xl hover:text-gray-300" { (link.label) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
