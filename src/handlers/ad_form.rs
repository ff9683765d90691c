use crate::app::App;
use crate::backend::models::{Ad, Category, Country};
use crate::backend::{ApiError, Credentials};
use crate::domain::validation::{
    parse_id, validate_ad_edit, validate_new_ad, CATEGORY_ID, CITY_ID, COUNTRY_ID,
    SUBCATEGORY_ID,
};
use crate::domain::{current_version, AdForm, Cascade, FieldErrors};
use crate::handlers::{form_fields, query_params};
use crate::responses::{html_fragment, html_response, redirect, ResultResp};
use crate::session::Session;
use crate::templates::components::error_banner;
use crate::templates::components::fields::field_id;
use crate::templates::pages::ad_form::{city_select, subcategory_select};
use crate::templates::pages::{
    ad_error_page, create_ad_page, edit_ad_page, not_authorized_page, AdFormVm, Flash,
};
use astra::Request;
use maud::html;

/// Dropdown data for the placement selects.
struct Options {
    categories: Vec<Category>,
    countries: Vec<Country>,
    error: Option<String>,
}

fn load_options(app: &App, creds: &Credentials) -> Options {
    let categories = app.backend().categories(creds);
    let countries = app.backend().countries(creds);

    match (categories, countries) {
        (Ok(categories), Ok(countries)) => Options {
            categories,
            countries,
            error: None,
        },
        (categories, countries) => {
            let error = categories
                .as_ref()
                .err()
                .or(countries.as_ref().err())
                .map(|e| format!("Error: {e}"));
            tracing::warn!(error = ?error, "failed to load form options");

            Options {
                categories: categories.unwrap_or_default(),
                countries: countries.unwrap_or_default(),
                error,
            }
        }
    }
}

/// Runs the submitted placement through the cascades so a dependent value
/// left over from a previous parent is not submitted.
fn normalize_placement(form: &mut AdForm, options: &Options) {
    if options.error.is_some() {
        return;
    }

    let categories = Cascade::with_selection(
        &options.categories,
        parse_id(&form.category_id),
        parse_id(&form.subcategory_id),
    );
    let locations = Cascade::with_selection(
        &options.countries,
        parse_id(&form.country_id),
        parse_id(&form.city_id),
    );

    form.subcategory_id = id_value(categories.selected_child());
    form.city_id = id_value(locations.selected_child());
}

fn id_value(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

fn render_create(
    app: &App,
    session: &Session,
    form: &AdForm,
    errors: &FieldErrors,
    options: &Options,
    error: Option<&str>,
) -> ResultResp {
    let vm = AdFormVm {
        form,
        errors,
        error: error.or(options.error.as_deref()),
        categories: Cascade::with_selection(
            &options.categories,
            parse_id(&form.category_id),
            parse_id(&form.subcategory_id),
        ),
        locations: Cascade::with_selection(
            &options.countries,
            parse_id(&form.country_id),
            parse_id(&form.city_id),
        ),
    };

    html_response(create_ad_page(app.nav(session), &vm))
}

pub fn new_ad(req: &Request, app: &App) -> ResultResp {
    let session = app.session(req);
    if !session.is_signed_in() {
        return app.signin_redirect("/ads/create");
    }

    let options = load_options(app, session.credentials());
    render_create(
        app,
        &session,
        &AdForm::default(),
        &FieldErrors::default(),
        &options,
        None,
    )
}

pub fn create_ad(req: Request, app: &App) -> ResultResp {
    let session = app.session(&req);
    if !session.is_signed_in() {
        return app.signin_redirect("/ads/create");
    }

    let mut form = AdForm::from_fields(&form_fields(req)?);
    let options = load_options(app, session.credentials());
    normalize_placement(&mut form, &options);

    let ad = match validate_new_ad(&form) {
        Ok(ad) => ad,
        Err(errors) => return render_create(app, &session, &form, &errors, &options, None),
    };

    match app.backend().create_ad(session.credentials(), &ad) {
        Ok(()) => {
            tracing::info!(title = %ad.title, "ad created");
            redirect(&format!("/my-ads?success={}", Flash::Created.as_query()))
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to create ad");
            let error = format!("Error creating ad: {e}");
            render_create(
                app,
                &session,
                &form,
                &FieldErrors::default(),
                &options,
                Some(&error),
            )
        }
    }
}

/// htmx partial: subcategory select for the newly chosen category.
pub fn subcategory_options(req: &Request, app: &App) -> ResultResp {
    let params = query_params(req);
    let parent = params.get(CATEGORY_ID).and_then(|v| parse_id(v));
    let previous = params.get(SUBCATEGORY_ID).and_then(|v| parse_id(v));
    let creds = crate::session::credentials_from(req);

    match app.backend().categories(&creds) {
        Ok(categories) => {
            let cascade = Cascade::with_selection(&categories, parent, previous);
            html_fragment(subcategory_select(&cascade, false))
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load subcategories");
            html_fragment(html! {
                div id=(field_id(SUBCATEGORY_ID)) {
                    (error_banner(&format!("Error loading subcategories: {e}")))
                }
            })
        }
    }
}

/// htmx partial: city select for the newly chosen country.
pub fn city_options(req: &Request, app: &App) -> ResultResp {
    let params = query_params(req);
    let parent = params.get(COUNTRY_ID).and_then(|v| parse_id(v));
    let previous = params.get(CITY_ID).and_then(|v| parse_id(v));
    let creds = crate::session::credentials_from(req);

    match app.backend().countries(&creds) {
        Ok(countries) => {
            let cascade = Cascade::with_selection(&countries, parent, previous);
            html_fragment(city_select(&cascade, &FieldErrors::default(), false))
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load cities");
            html_fragment(html! {
                div id=(field_id(CITY_ID)) {
                    (error_banner(&format!("Error loading cities: {e}")))
                }
            })
        }
    }
}

/// Loads the ad being edited, or the page to show instead.
fn load_own_ad(app: &App, session: &Session, id: i64) -> Result<Ad, ResultResp> {
    let nav = app.nav(session);

    app.backend()
        .my_ad(session.credentials(), id)
        .map_err(|e| match e {
            e if e.is_auth() => html_response(not_authorized_page(nav)),
            ApiError::NotFound => html_response(ad_error_page(nav, "Ad not found")),
            e => {
                tracing::warn!(ad_id = id, error = %e, "failed to load ad for editing");
                html_response(ad_error_page(nav, &format!("Error loading ad: {e}")))
            }
        })
}

fn render_edit(
    app: &App,
    session: &Session,
    ad: &Ad,
    form: &AdForm,
    errors: &FieldErrors,
    error: Option<&str>,
) -> ResultResp {
    let options = load_options(app, session.credentials());

    let vm = AdFormVm {
        form,
        errors,
        error: error.or(options.error.as_deref()),
        categories: Cascade::with_selection(
            &options.categories,
            Some(ad.category.id),
            ad.subcategory.as_ref().map(|s| s.id),
        ),
        locations: Cascade::with_selection(
            &options.countries,
            Some(ad.city.country.id),
            Some(ad.city.id),
        ),
    };

    html_response(edit_ad_page(
        app.nav(session),
        ad.id,
        current_version(ad).ok(),
        &vm,
    ))
}

pub fn edit_ad(req: &Request, app: &App, id: i64) -> ResultResp {
    let session = app.session(req);
    if !session.is_signed_in() {
        return app.signin_redirect(&format!("/ads/{id}/edit"));
    }

    let ad = match load_own_ad(app, &session, id) {
        Ok(ad) => ad,
        Err(page) => return page,
    };

    let Ok(current) = current_version(&ad) else {
        tracing::error!(ad_id = id, "backend returned an ad without versions");
        return html_response(ad_error_page(
            app.nav(&session),
            "This ad's content is currently unavailable.",
        ));
    };

    let form = AdForm {
        title: current.title.clone(),
        description: current.description.clone(),
        price: current.price.to_string(),
        category_id: ad.category.id.to_string(),
        subcategory_id: id_value(ad.subcategory.as_ref().map(|s| s.id)),
        country_id: ad.city.country.id.to_string(),
        city_id: ad.city.id.to_string(),
    };

    render_edit(app, &session, &ad, &form, &FieldErrors::default(), None)
}

pub fn update_ad(req: Request, app: &App, id: i64) -> ResultResp {
    let session = app.session(&req);
    if !session.is_signed_in() {
        return app.signin_redirect(&format!("/ads/{id}/edit"));
    }

    let form = AdForm::from_fields(&form_fields(req)?);

    let ad = match load_own_ad(app, &session, id) {
        Ok(ad) => ad,
        Err(page) => return page,
    };

    let edit = match validate_ad_edit(&form) {
        Ok(edit) => edit,
        Err(errors) => return render_edit(app, &session, &ad, &form, &errors, None),
    };

    match app.backend().update_ad(session.credentials(), id, &edit) {
        Ok(()) => {
            tracing::info!(ad_id = id, "ad updated, awaiting moderation");
            redirect(&format!("/my-ads?success={}", Flash::Updated.as_query()))
        }
        Err(e) if e.is_auth() => html_response(not_authorized_page(app.nav(&session))),
        Err(e) => {
            tracing::warn!(ad_id = id, error = %e, "failed to update ad");
            let error = format!("Error updating ad: {e}");
            render_edit(
                app,
                &session,
                &ad,
                &form,
                &FieldErrors::default(),
                Some(&error),
            )
        }
    }
}
