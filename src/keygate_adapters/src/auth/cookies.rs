use axum_extra::extract::cookie::{Cookie, SameSite};

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

// Create cookie and set the value to the passed-in token string
pub fn create_session_cookie(name: &'static str, token: String) -> Cookie<'static> {
    Cookie::build((name, token))
        .path("/") // apply cookie to all URLs on the server
        .http_only(true) // prevent JavaScript from accessing the cookie
        .secure(true)
        .same_site(SameSite::Lax)
        .build()
}

pub fn create_removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = create_session_cookie(name, String::new());
    cookie.make_removal();
    cookie
}
