use crate::backend::models::ModerationStatus;
use crate::domain::format::status_label;
use maud::{html, Markup};

fn status_colors(status: ModerationStatus) -> &'static str {
    match status {
        ModerationStatus::Approved => "bg-green-100 text-green-800",
        ModerationStatus::Pending => "bg-yellow-100 text-yellow-800",
        ModerationStatus::Rejected => "bg-red-100 text-red-800",
        ModerationStatus::Unknown => "bg-gray-100 text-gray-800",
    }
}

pub fn status_badge(status: ModerationStatus) -> Markup {
    html! {
        span class={ "px-2 py-1 rounded-full text-xs font-medium " (status_colors(status)) } {
            (status_label(status))
        }
    }
}

pub fn current_badge() -> Markup {
    html! {
        span class="ml-2 text-xs font-medium bg-blue-100 text-blue-800 px-2 py-0.5 rounded-full" { "Current" }
    }
}

/// Red box with the moderator's reason, used when the current version was rejected.
pub fn rejection_note(reason: &str) -> Markup {
    html! {
        div class="mt-3 bg-red-50 p-2 rounded-md" {
            p class="text-xs font-medium text-red-800" { "Rejection reason:" }
            p class="text-xs text-red-700" { (reason) }
        }
    }
}
