use crate::backend::models::{AdVersion, Category, Country};
use crate::domain::validation::{
    CATEGORY_ID, CITY_ID, COUNTRY_ID, DESCRIPTION, PRICE, SUBCATEGORY_ID, TITLE,
};
use crate::domain::{AdForm, Cascade, FieldErrors};
use crate::templates::components::fields::{
    choice_select, field_id, price_input, text_area, text_input, Refresh, SelectField, TextField,
};
use crate::templates::{
    components::{error_banner, page_container, status_badge},
    desktop_layout, Nav,
};
use maud::{html, Markup};

pub const SUBCATEGORIES_PATH: &str = "/ads/create/subcategories";
pub const CITIES_PATH: &str = "/ads/create/cities";

pub struct AdFormVm<'a> {
    pub form: &'a AdForm,
    pub errors: &'a FieldErrors,
    pub error: Option<&'a str>,
    pub categories: Cascade<'a, Category>,
    pub locations: Cascade<'a, Country>,
}

pub fn create_ad_page(nav: Nav<'_>, vm: &AdFormVm<'_>) -> Markup {
    desktop_layout(
        "Post a New Ad",
        nav,
        page_container(html! {
            div class="mb-6" {
                h1 class="text-3xl font-bold text-gray-900 mb-2" { "Post a New Ad" }
                p class="text-gray-600" { "Fill out the form below to create your ad. All fields marked with * are required." }
            }

            @if let Some(error) = vm.error {
                (error_banner(error))
            }

            form method="post" action="/ads/create" class="bg-white shadow-md rounded-lg p-6" {
                (content_fields(vm))
                (placement_fields(vm, false))
                (actions("/my-ads", "Create Ad"))
            }
        }),
    )
}

/// Edit form. Placement (category, location) is shown but cannot change.
pub fn edit_ad_page(
    nav: Nav<'_>,
    ad_id: i64,
    current: Option<&AdVersion>,
    vm: &AdFormVm<'_>,
) -> Markup {
    let action = format!("/ads/{ad_id}/edit");
    let cancel = format!("/ads/{ad_id}");

    desktop_layout(
        "Edit Ad",
        nav,
        page_container(html! {
            div class="mb-6" {
                h1 class="text-3xl font-bold text-gray-900 mb-2" { "Edit Ad" }
                p class="text-gray-600" { "Update your ad information below. All fields marked with * are required." }

                @if let Some(current) = current {
                    div class="mt-4 flex items-center" {
                        span class="mr-2" { "Current status:" }
                        (status_badge(current.status))
                    }
                    @if let Some(reason) = current.rejection() {
                        div class="mt-2 bg-red-50 p-3 rounded-md" {
                            p class="text-sm font-medium text-red-800" { "Rejection reason:" }
                            p class="text-sm text-red-700" { (reason) }
                        }
                    }
                }
            }

            @if let Some(error) = vm.error {
                (error_banner(error))
            }

            form method="post" action=(action) class="bg-white shadow-md rounded-lg p-6" {
                (content_fields(vm))
                (placement_fields(vm, true))
                (actions(&cancel, "Update Ad"))
            }
        }),
    )
}

pub fn not_authorized_page(nav: Nav<'_>) -> Markup {
    desktop_layout(
        "Not authorized",
        nav,
        page_container(html! {
            (error_banner("You are not authorized to edit this ad."))
            div class="flex justify-center" {
                a href="/my-ads" class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-md" { "Go to My Ads" }
            }
        }),
    )
}

fn content_fields(vm: &AdFormVm<'_>) -> Markup {
    html! {
        (text_input(TextField {
            name: TITLE,
            label: "Title",
            value: &vm.form.title,
            placeholder: "Enter a descriptive title for your ad",
            error: vm.errors.get(TITLE),
        }))
        (text_area(TextField {
            name: DESCRIPTION,
            label: "Description",
            value: &vm.form.description,
            placeholder: "Provide a detailed description of what you're selling",
            error: vm.errors.get(DESCRIPTION),
        }))
        (price_input(TextField {
            name: PRICE,
            label: "Price ($)",
            value: &vm.form.price,
            placeholder: "Enter the price",
            error: vm.errors.get(PRICE),
        }))
    }
}

fn placement_fields(vm: &AdFormVm<'_>, locked: bool) -> Markup {
    html! {
        div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-6" {
            (category_select(&vm.categories, vm.errors, locked))
            (subcategory_select(&vm.categories, locked))
        }
        div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-6" {
            (country_select(&vm.locations, vm.errors, locked))
            (city_select(&vm.locations, vm.errors, locked))
        }
    }
}

fn actions(cancel_href: &str, submit_label: &str) -> Markup {
    html! {
        div class="flex justify-end space-x-4" {
            a href=(cancel_href) class="px-4 py-2 border border-gray-300 rounded-md text-gray-700 hover:bg-gray-50" { "Cancel" }
            button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50" {
                (submit_label)
            }
        }
    }
}

pub fn category_select(cascade: &Cascade<'_, Category>, errors: &FieldErrors, locked: bool) -> Markup {
    let target = field_id(SUBCATEGORY_ID);
    let refresh = (!locked).then(|| Refresh {
        url: SUBCATEGORIES_PATH,
        target_id: &target,
        include: SUBCATEGORY_ID,
    });

    choice_select(
        SelectField {
            name: CATEGORY_ID,
            label: "Category",
            placeholder: "Select a category",
            required: true,
            selected: cascade.selected_parent(),
            disabled: locked,
            error: errors.get(CATEGORY_ID),
            refresh,
        },
        cascade.parents(),
    )
}

/// Also the htmx partial returned when the category changes.
pub fn subcategory_select(cascade: &Cascade<'_, Category>, locked: bool) -> Markup {
    let options = cascade.options();

    choice_select(
        SelectField {
            name: SUBCATEGORY_ID,
            label: "Subcategory",
            placeholder: "Select a subcategory (optional)",
            required: false,
            selected: cascade.selected_child(),
            disabled: locked || cascade.selected_parent().is_none() || options.is_empty(),
            error: None,
            refresh: None,
        },
        options,
    )
}

pub fn country_select(cascade: &Cascade<'_, Country>, errors: &FieldErrors, locked: bool) -> Markup {
    let target = field_id(CITY_ID);
    let refresh = (!locked).then(|| Refresh {
        url: CITIES_PATH,
        target_id: &target,
        include: CITY_ID,
    });

    choice_select(
        SelectField {
            name: COUNTRY_ID,
            label: "Country",
            placeholder: "Select a country",
            required: true,
            selected: cascade.selected_parent(),
            disabled: locked,
            error: errors.get(COUNTRY_ID),
            refresh,
        },
        cascade.parents(),
    )
}

/// Also the htmx partial returned when the country changes.
pub fn city_select(cascade: &Cascade<'_, Country>, errors: &FieldErrors, locked: bool) -> Markup {
    let options = cascade.options();

    choice_select(
        SelectField {
            name: CITY_ID,
            label: "City",
            placeholder: "Select a city",
            required: true,
            selected: cascade.selected_child(),
            disabled: locked || cascade.selected_parent().is_none() || options.is_empty(),
            error: errors.get(CITY_ID),
            refresh: None,
        },
        options,
    )
}
