use auth::TokenLifetimes;
use auth::TokenPair;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::cookie::SameSite;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Attach both halves of a token pair to the response cookie jar.
///
/// Each cookie lives exactly as long as its token.
pub fn with_token_cookies(jar: CookieJar, pair: &TokenPair, lifetimes: TokenLifetimes) -> CookieJar {
    jar.add(token_cookie(
        ACCESS_TOKEN_COOKIE,
        pair.access_token.clone(),
        lifetimes.access_seconds(),
    ))
    .add(token_cookie(
        REFRESH_TOKEN_COOKIE,
        pair.refresh_token.clone(),
        lifetimes.refresh_seconds(),
    ))
}

/// Read a token cookie's value, if present.
pub fn token_from(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name).map(|cookie| cookie.value().to_string())
}

fn token_cookie(name: &'static str, value: String, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .secure(false)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(max_age_seconds))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_cookie_attributes() {
        let pair = TokenPair {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
        };

        let jar = with_token_cookies(CookieJar::new(), &pair, TokenLifetimes::new(15, 7));

        let access = jar.get(ACCESS_TOKEN_COOKIE).unwrap();
        assert_eq!(access.value(), "access");
        assert_eq!(access.http_only(), Some(true));
        assert_eq!(access.secure(), Some(false));
        assert_eq!(access.same_site(), Some(SameSite::Lax));
        assert_eq!(access.max_age(), Some(time::Duration::seconds(900)));

        let refresh = jar.get(REFRESH_TOKEN_COOKIE).unwrap();
        assert_eq!(refresh.value(), "refresh");
        assert_eq!(refresh.max_age(), Some(time::Duration::seconds(604_800)));
    }

    #[test]
    fn test_token_from_missing_cookie() {
        assert_eq!(token_from(&CookieJar::new(), ACCESS_TOKEN_COOKIE), None);
    }
}
