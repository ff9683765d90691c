use crate::app::App;
use crate::backend::ApiError;
use crate::domain::current_version;
use crate::handlers::query_params;
use crate::responses::{html_response, ResultResp};
use crate::templates::pages::{
    ad_detail_page, ad_error_page, home_page, my_ads_page, DetailTab, Flash, HomeVm, MyAdsVm,
};
use astra::Request;

pub fn home(req: &Request, app: &App) -> ResultResp {
    let session = app.session(req);

    let (ads, error) = match app.backend().public_ads(session.credentials()) {
        Ok(ads) => (ads, None),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load public ads");
            (Vec::new(), Some(format!("Error loading ads: {e}")))
        }
    };

    let post_href = if session.is_signed_in() {
        "/ads/create".to_string()
    } else {
        app.signin_url("/ads/create")
    };

    html_response(home_page(
        app.nav(&session),
        &HomeVm {
            ads: &ads,
            error,
            post_href: &post_href,
        },
    ))
}

pub fn my_ads(req: &Request, app: &App) -> ResultResp {
    let session = app.session(req);
    if !session.is_signed_in() {
        return app.signin_redirect("/my-ads");
    }

    let flash = query_params(req)
        .get("success")
        .and_then(|value| Flash::from_query(value));

    let (ads, error) = match app.backend().my_ads(session.credentials()) {
        Ok(ads) => (ads, None),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load own ads");
            (Vec::new(), Some(format!("Error loading ads: {e}")))
        }
    };

    html_response(my_ads_page(
        app.nav(&session),
        &MyAdsVm {
            ads: &ads,
            error,
            flash,
        },
    ))
}

pub fn ad_detail(req: &Request, app: &App, id: i64) -> ResultResp {
    let session = app.session(req);
    if !session.is_signed_in() {
        return app.signin_redirect(&format!("/ads/{id}"));
    }

    let params = query_params(req);
    let tab = DetailTab::from_query(params.get("tab").map(String::as_str));
    let nav = app.nav(&session);

    let ad = match app.backend().my_ad(session.credentials(), id) {
        Ok(ad) => ad,
        Err(ApiError::NotFound) => return html_response(ad_error_page(nav, "Ad not found")),
        Err(e) => {
            tracing::warn!(ad_id = id, error = %e, "failed to load ad");
            return html_response(ad_error_page(nav, &format!("Error loading ad: {e}")));
        }
    };

    match current_version(&ad) {
        Ok(current) => html_response(ad_detail_page(nav, &ad, current, tab)),
        Err(e) => {
            tracing::error!(error = %e, "backend returned an ad without versions");
            html_response(ad_error_page(
                nav,
                "This ad's content is currently unavailable.",
            ))
        }
    }
}
