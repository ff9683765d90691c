use crate::backend::models::Ad;
use crate::domain::format::{format_date, format_price, location};
use crate::domain::{current_version, version::history};
use crate::templates::{
    components::{
        error_banner, link_button, page_container, rejection_note, status_badge, success_banner,
        unavailable_notice,
    },
    desktop_layout, Nav,
};
use maud::{html, Markup};

/// Flash shown after a redirect from the ad forms (`?success=...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Created,
    Updated,
}

impl Flash {
    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "created" => Some(Flash::Created),
            "updated" => Some(Flash::Updated),
            _ => None,
        }
    }

    pub fn as_query(self) -> &'static str {
        match self {
            Flash::Created => "created",
            Flash::Updated => "updated",
        }
    }

    fn message(self) -> &'static str {
        match self {
            Flash::Created => "Your ad has been created successfully and is pending approval.",
            Flash::Updated => "Your ad has been updated successfully and is pending approval.",
        }
    }
}

pub struct MyAdsVm<'a> {
    pub ads: &'a [Ad],
    pub error: Option<String>,
    pub flash: Option<Flash>,
}

pub fn my_ads_page(nav: Nav<'_>, vm: &MyAdsVm<'_>) -> Markup {
    desktop_layout(
        "My Ads",
        nav,
        page_container(html! {
            div class="flex justify-between items-center mb-6" {
                h1 class="text-3xl font-bold text-gray-900" { "My Ads" }
                (link_button("/ads/create", "Post New Ad"))
            }

            @if let Some(flash) = vm.flash {
                (success_banner(flash.message()))
            }

            @if let Some(error) = &vm.error {
                (error_banner(error))
            }

            @if vm.ads.is_empty() {
                @if vm.error.is_none() {
                    div class="bg-white shadow rounded-lg p-6 text-center" {
                        h2 class="text-xl font-medium text-gray-900 mb-4" { "You haven't posted any ads yet" }
                        p class="text-gray-600 mb-6" { "Get started by posting your first ad. It's quick and easy!" }
                        (link_button("/ads/create", "Post Your First Ad"))
                    }
                }
            } @else {
                div class="bg-white shadow overflow-hidden sm:rounded-md" {
                    ul class="divide-y divide-gray-200" {
                        @for ad in vm.ads {
                            li { (own_ad_row(ad)) }
                        }
                    }
                }
            }
        }),
    )
}

fn own_ad_row(ad: &Ad) -> Markup {
    let Ok(current) = current_version(ad) else {
        return html! { div class="px-4 py-4 sm:px-6" { (unavailable_notice()) } };
    };

    html! {
        div class="px-4 py-4 sm:px-6" {
            div class="flex items-center justify-between" {
                div {
                    h2 class="text-lg font-medium text-gray-900" {
                        a href={ "/ads/" (ad.id) } class="hover:underline" { (current.title) }
                    }
                    div class="mt-1 flex items-center" {
                        span class="text-sm text-gray-500 mr-2" { (location(ad)) }
                        span class="text-sm text-gray-500" { "Posted on " (format_date(&ad.created_at)) }
                    }
                    div class="mt-1" {
                        span class="text-lg font-medium text-blue-600" { (format_price(&current.price)) }
                    }
                }
                div class="flex flex-col items-end" {
                    div class="mb-2" { (status_badge(current.status)) }
                    div class="flex space-x-2" {
                        a href={ "/ads/" (ad.id) }
                            class="inline-flex items-center px-3 py-1 border border-gray-300 text-sm font-medium rounded-md text-gray-700 bg-white hover:bg-gray-50" { "View" }
                        a href={ "/ads/" (ad.id) "/edit" }
                            class="inline-flex items-center px-3 py-1 border border-blue-300 text-sm font-medium rounded-md text-blue-700 bg-blue-50 hover:bg-blue-100" { "Edit" }
                    }
                }
            }

            div class="mt-3 border-t border-gray-100 pt-3" {
                p class="text-sm text-gray-500 mb-1" { "Version History:" }
                div class="flex flex-wrap gap-2" {
                    @for version in history(ad) {
                        div class="text-xs px-2 py-1 rounded border border-gray-200"
                            title=(version.rejection().unwrap_or_default()) {
                            "v" (version.version_number) ": " (status_badge(version.status))
                            @if version.id == current.id {
                                span class="ml-1 text-xs text-gray-500" { "(current)" }
                            }
                        }
                    }
                }
            }

            @if let Some(reason) = current.rejection() {
                (rejection_note(reason))
            }
        }
    }
}
