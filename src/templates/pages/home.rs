// templates/pages/home.rs

use crate::backend::models::Ad;
use crate::domain::current_version;
use crate::domain::format::{category_path, format_date, format_price, location};
use crate::templates::{
    components::{error_banner, link_button, page_container, unavailable_notice},
    desktop_layout, Nav,
};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub ads: &'a [Ad],
    pub error: Option<String>,
    /// Where "Post Your First Ad" leads: the form, or sign-in for visitors.
    pub post_href: &'a str,
}

pub fn home_page(nav: Nav<'_>, vm: &HomeVm<'_>) -> Markup {
    desktop_layout(
        "Home",
        nav,
        page_container(html! {
            section class="mb-10" {
                div class="text-center mb-8" {
                    h1 class="text-4xl font-bold text-gray-900 mb-4" { "Classifieds Platform" }
                    p class="text-xl text-gray-600 max-w-3xl mx-auto" {
                        "Browse listings for items, services, and more in your area."
                    }
                }
            }

            section {
                div class="flex justify-between items-center mb-6" {
                    h2 class="text-2xl font-bold text-gray-900" { "All Listings" }
                }

                @if let Some(error) = &vm.error {
                    (error_banner(error))
                } @else if vm.ads.is_empty() {
                    div class="bg-white shadow rounded-lg p-6 text-center" {
                        h2 class="text-xl font-medium text-gray-900 mb-4" { "No ads available" }
                        p class="text-gray-600 mb-6" { "Be the first to post an ad on our platform!" }
                        (link_button(vm.post_href, "Post Your First Ad"))
                    }
                } @else {
                    div class="bg-white shadow overflow-hidden sm:rounded-lg" {
                        ul class="divide-y divide-gray-200" {
                            @for ad in vm.ads {
                                li class="hover:bg-gray-50" { (listing_row(ad)) }
                            }
                        }
                    }
                }
            }
        }),
    )
}

fn listing_row(ad: &Ad) -> Markup {
    html! {
        div class="px-4 py-4 sm:px-6" {
            @match current_version(ad) {
                Ok(current) => {
                    div class="flex items-center justify-between" {
                        div class="flex-1 min-w-0" {
                            h3 class="text-lg font-medium text-blue-600 truncate" { (current.title) }
                            div class="mt-1 flex items-center" {
                                span class="flex-shrink-0 text-gray-500 truncate mr-1" { (location(ad)) }
                                span class="text-sm text-gray-500" { "• Posted on " (format_date(&ad.created_at)) }
                            }
                        }
                        div class="text-right" {
                            span class="text-lg font-medium text-green-600" { (format_price(&current.price)) }
                            p class="mt-1 text-sm text-gray-500" { "Category: " (category_path(ad)) }
                        }
                    }
                    div class="mt-2 text-sm text-gray-600 line-clamp-2" { (current.description) }
                },
                Err(_) => (unavailable_notice()),
            }
        }
    }
}
