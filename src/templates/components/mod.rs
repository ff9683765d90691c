use maud::{html, Markup};

pub mod alert;
pub mod badge;
pub mod error;
pub mod fields;

pub use alert::{error_banner, success_banner, unavailable_notice};
pub use badge::{current_badge, rejection_note, status_badge};
pub use error::error_page;

pub fn link_button(href: &str, label: &str) -> Markup {
    html! {
        a href=(href) class="inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-blue-600 hover:bg-blue-700" {
            (label)
        }
    }
}

pub fn page_container(body: Markup) -> Markup {
    html! {
        div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8" {
            (body)
        }
    }
}
