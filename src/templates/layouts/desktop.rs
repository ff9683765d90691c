use crate::backend::models::User;
use chrono::{Datelike, Utc};
use maud::{html, Markup, DOCTYPE};

/// What the header needs to know about the visitor.
#[derive(Debug, Clone, Copy)]
pub struct Nav<'a> {
    pub user: Option<&'a User>,
    pub signin_url: &'a str,
    pub register_url: &'a str,
}

const NAV_LINK: &str = "inline-flex items-center px-1 pt-1 border-b-2 border-transparent text-sm font-medium text-gray-500 hover:text-gray-700 hover:border-gray-300";
const PRIMARY_BUTTON: &str = "inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-blue-600 hover:bg-blue-700";

pub fn desktop_layout(title: &str, nav: Nav<'_>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class="h-full" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Classifieds" }
                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body class="min-h-full flex flex-col bg-gray-50" {
                (header(nav))
                main class="flex-1" {
                    (content)
                }
                (footer())
            }
        }
    }
}

fn header(nav: Nav<'_>) -> Markup {
    html! {
        header class="bg-white shadow-md" {
            div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8" {
                div class="flex justify-between h-16" {
                    div class="flex" {
                        div class="flex-shrink-0 flex items-center" {
                            a href="/" class="text-2xl font-bold text-blue-600" { "Classifieds" }
                        }
                        nav class="ml-6 flex space-x-8" {
                            @if nav.user.is_some() {
                                a href="/my-ads" class=(NAV_LINK) { "My Ads" }
                            }
                        }
                    }
                    div class="ml-6 flex items-center" {
                        @if let Some(user) = nav.user {
                            span class="text-sm text-gray-500 mr-4" title=(user.email) { (user.first_name) " " (user.last_name) }
                            a href="/ads/create" class={ (PRIMARY_BUTTON) " mr-2" } { "Post Ad" }
                            form method="post" action="/auth/logout" class="inline" {
                                button type="submit" class="text-sm font-medium text-gray-500 hover:text-gray-700" {
                                    "Sign out"
                                }
                            }
                        } @else {
                            a href=(nav.signin_url) class="text-sm font-medium text-gray-500 hover:text-gray-700 mr-4" { "Sign in" }
                            a href=(nav.register_url) class=(PRIMARY_BUTTON) { "Register" }
                        }
                    }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="bg-gray-800 text-gray-400" {
            div class="py-12 px-4 sm:px-6 lg:px-8 text-center" {
                "© " (Utc::now().year()) " Classifieds Platform. All rights reserved."
            }
        }
    }
}
