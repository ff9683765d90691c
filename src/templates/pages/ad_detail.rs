use crate::backend::models::{Ad, AdVersion};
use crate::domain::format::{format_date, format_date_time, format_price, location};
use crate::domain::version::history;
use crate::templates::{
    components::{current_badge, error_banner, page_container, status_badge},
    desktop_layout, Nav,
};
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Description,
    History,
}

impl DetailTab {
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("history") => DetailTab::History,
            _ => DetailTab::Description,
        }
    }
}

const TAB_ACTIVE: &str = "pb-3 px-1 border-b-2 font-medium text-sm border-blue-500 text-blue-600";
const TAB_IDLE: &str = "pb-3 px-1 border-b-2 font-medium text-sm border-transparent text-gray-500 hover:text-gray-700 hover:border-gray-300";

/// Page shown when the ad cannot be displayed at all.
pub fn ad_error_page(nav: Nav<'_>, message: &str) -> Markup {
    desktop_layout("Ad", nav, page_container(error_banner(message)))
}

pub fn ad_detail_page(nav: Nav<'_>, ad: &Ad, current: &AdVersion, tab: DetailTab) -> Markup {
    desktop_layout(
        &current.title,
        nav,
        page_container(html! {
            div class="bg-white shadow-lg rounded-lg overflow-hidden" {
                div class="md:flex" {
                    div class="md:w-2/3 p-6" {
                        (tabs(ad.id, tab))
                        @match tab {
                            DetailTab::Description => {
                                div {
                                    h2 class="text-xl font-semibold text-gray-900 mb-4" { "Description" }
                                    p class="text-gray-700 whitespace-pre-line" { (current.description) }
                                }
                            },
                            DetailTab::History => (version_history(ad, current)),
                        }
                    }
                    div class="md:w-1/3 p-6 border-l border-gray-200" {
                        (summary(ad, current))
                    }
                }
            }
        }),
    )
}

fn tabs(ad_id: i64, active: DetailTab) -> Markup {
    let class = |tab: DetailTab| if tab == active { TAB_ACTIVE } else { TAB_IDLE };

    html! {
        div class="mb-4 border-b border-gray-200" {
            nav class="-mb-px flex space-x-8" {
                a href={ "/ads/" (ad_id) "?tab=description" } class=(class(DetailTab::Description)) { "Description" }
                a href={ "/ads/" (ad_id) "?tab=history" } class=(class(DetailTab::History)) { "Version History" }
            }
        }
    }
}

fn version_history(ad: &Ad, current: &AdVersion) -> Markup {
    html! {
        div {
            h2 class="text-xl font-semibold text-gray-900 mb-4" { "Ad Version History" }
            div class="space-y-4" {
                @for version in history(ad) {
                    @let is_current = version.id == current.id;
                    div class=(if is_current { "p-4 rounded-lg bg-blue-50 border border-blue-100" } else { "p-4 rounded-lg bg-gray-50 border border-gray-100" }) {
                        div class="flex justify-between items-start mb-2" {
                            div {
                                h3 class="font-medium text-gray-900 flex items-center" {
                                    (version.title)
                                    @if is_current { (current_badge()) }
                                    span class="ml-2" { (status_badge(version.status)) }
                                }
                                p class="text-sm text-gray-500" {
                                    "Price: " (format_price(&version.price)) " • Version " (version.version_number)
                                }
                            }
                            div class="text-xs text-gray-500" { (format_date_time(&version.created_at)) }
                        }
                        p class="text-sm text-gray-600 line-clamp-2" { (version.description) }
                        @if let Some(reason) = version.rejection() {
                            p class="mt-2 text-xs text-red-700" { "Rejection reason: " (reason) }
                        }
                    }
                }
            }
        }
    }
}

fn summary(ad: &Ad, current: &AdVersion) -> Markup {
    html! {
        div class="sticky top-8" {
            div class="flex justify-between items-start mb-2" {
                h1 class="text-2xl font-bold text-gray-900" { (current.title) }
                a href={ "/ads/" (ad.id) "/edit" }
                    class="inline-flex items-center px-3 py-2 border border-gray-300 shadow-sm text-sm font-medium rounded-md text-gray-700 bg-white hover:bg-gray-50" {
                    "Edit"
                }
            }
            p class="text-xl font-semibold text-blue-600 mb-4" { (format_price(&current.price)) }
            div class="mb-4" { (status_badge(current.status)) }

            div class="mb-6 text-gray-600 space-y-2" {
                div { (location(ad)) }
                div { "Posted on " (format_date(&ad.created_at)) }
                div { "Category: " (ad.category.name) }
                @if let Some(sub) = &ad.subcategory {
                    div { "Subcategory: " (sub.name) }
                }
            }

            @if let Some(owner) = &ad.user {
                div class="border-t border-gray-200 pt-4" {
                    div class="flex items-center mb-3" {
                        div class="h-10 w-10 rounded-full bg-blue-100 flex items-center justify-center text-blue-500 mr-3" {
                            span class="text-lg font-medium" { (owner.initials()) }
                        }
                        h3 class="text-md font-medium text-gray-900" { (owner.first_name) " " (owner.last_name) }
                    }
                }
            }
        }
    }
}
