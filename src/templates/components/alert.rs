use maud::{html, Markup};

pub fn error_banner(message: &str) -> Markup {
    html! {
        div class="bg-red-50 border-l-4 border-red-500 p-4 mb-6" role="alert" {
            div class="flex" {
                div class="flex-shrink-0" {
                    svg class="h-5 w-5 text-red-500" viewBox="0 0 20 20" fill="currentColor" {
                        path fill-rule="evenodd" clip-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zM8.707 7.293a1 1 0 00-1.414 1.414L8.586 10l-1.293 1.293a1 1 0 101.414 1.414L10 11.414l1.293 1.293a1 1 0 001.414-1.414L11.414 10l1.293-1.293a1 1 0 00-1.414-1.414L10 8.586 8.707 7.293z" {}
                    }
                }
                div class="ml-3" {
                    p class="text-sm text-red-700" { (message) }
                }
            }
        }
    }
}

pub fn success_banner(message: &str) -> Markup {
    html! {
        div class="bg-green-50 border-l-4 border-green-500 p-4 mb-6" role="status" {
            div class="flex" {
                div class="flex-shrink-0" {
                    svg class="h-5 w-5 text-green-500" viewBox="0 0 20 20" fill="currentColor" {
                        path fill-rule="evenodd" clip-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z" {}
                    }
                }
                div class="ml-3" {
                    p class="text-sm text-green-700" { (message) }
                }
            }
        }
    }
}

/// Shown in place of an ad whose content could not be resolved.
pub fn unavailable_notice() -> Markup {
    html! {
        p class="text-sm text-red-700" { "This ad's content is currently unavailable." }
    }
}
