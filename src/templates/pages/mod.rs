pub mod ad_detail;
pub mod ad_form;
pub mod home;
pub mod my_ads;

pub use ad_detail::{ad_detail_page, ad_error_page, DetailTab};
pub use ad_form::{create_ad_page, edit_ad_page, not_authorized_page, AdFormVm};
pub use home::{home_page, HomeVm};
pub use my_ads::{my_ads_page, Flash, MyAdsVm};
