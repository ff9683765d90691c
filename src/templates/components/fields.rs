use crate::domain::cascade::Choice;
use maud::{html, Markup};

const BASE_INPUT: &str =
    "w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

fn input_class(error: Option<&str>) -> String {
    let border = if error.is_some() {
        "border-red-500"
    } else {
        "border-gray-300"
    };
    format!("{BASE_INPUT} {border}")
}

fn label(field: &str, text: &str, required: bool) -> Markup {
    html! {
        label for=(field) class="block text-gray-700 font-medium mb-2" {
            (text)
            @if required { " *" }
        }
    }
}

pub fn field_error(error: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = error {
            p class="mt-1 text-sm text-red-600" { (message) }
        }
    }
}

pub struct TextField<'a> {
    pub name: &'static str,
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub error: Option<&'a str>,
}

pub fn text_input(field: TextField<'_>) -> Markup {
    html! {
        div class="mb-6" {
            (label(field.name, field.label, true))
            input type="text" id=(field.name) name=(field.name) value=(field.value)
                class=(input_class(field.error)) placeholder=(field.placeholder);
            (field_error(field.error))
        }
    }
}

pub fn price_input(field: TextField<'_>) -> Markup {
    html! {
        div class="mb-6" {
            (label(field.name, field.label, true))
            input type="number" id=(field.name) name=(field.name) value=(field.value)
                min="0" step="0.01"
                class=(input_class(field.error)) placeholder=(field.placeholder);
            (field_error(field.error))
        }
    }
}

pub fn text_area(field: TextField<'_>) -> Markup {
    html! {
        div class="mb-6" {
            (label(field.name, field.label, true))
            textarea id=(field.name) name=(field.name) rows="5"
                class=(input_class(field.error)) placeholder=(field.placeholder) {
                (field.value)
            }
            (field_error(field.error))
        }
    }
}

/// htmx request fired when a parent select changes, replacing the dependent field.
pub struct Refresh<'a> {
    pub url: &'a str,
    pub target_id: &'a str,
    pub include: &'a str,
}

pub struct SelectField<'a> {
    pub name: &'static str,
    pub label: &'a str,
    pub placeholder: &'a str,
    pub required: bool,
    pub selected: Option<i64>,
    pub disabled: bool,
    pub error: Option<&'a str>,
    pub refresh: Option<Refresh<'a>>,
}

/// Field wrappers carry a stable id so htmx can swap them whole.
pub fn field_id(name: &str) -> String {
    format!("{name}-field")
}

pub fn choice_select<C: Choice>(field: SelectField<'_>, options: &[C]) -> Markup {
    let hx_get = field.refresh.as_ref().map(|r| r.url);
    let hx_target = field.refresh.as_ref().map(|r| format!("#{}", r.target_id));
    let hx_include = field
        .refresh
        .as_ref()
        .map(|r| format!("[name='{}']", r.include));
    let hx_trigger = field.refresh.as_ref().map(|_| "change");
    let hx_swap = field.refresh.as_ref().map(|_| "outerHTML");

    html! {
        div id=(field_id(field.name)) {
            (label(field.name, field.label, field.required))
            select id=(field.name) name=(field.name) class=(input_class(field.error))
                disabled[field.disabled]
                hx-get=[hx_get] hx-target=[hx_target] hx-include=[hx_include]
                hx-trigger=[hx_trigger] hx-swap=[hx_swap]
            {
                option value="" selected[field.selected.is_none()] { (field.placeholder) }
                @for choice in options {
                    option value=(choice.id()) selected[field.selected == Some(choice.id())] {
                        (choice.name())
                    }
                }
            }
            (field_error(field.error))
        }
    }
}
