pub mod errors;
pub mod html;
pub mod redirect;

pub use errors::{error_to_response, ResultResp};

// Normal HTML response
pub use html::{html_fragment, html_response};
pub use redirect::{redirect, redirect_with_cookies};
