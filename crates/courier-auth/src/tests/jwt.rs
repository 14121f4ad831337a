use crate::{AuthError, Claims, JwtValidator};

use chrono::Utc;
use googletest::prelude::*;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

fn make_token(claims: &Claims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

fn valid_claims() -> Claims {
    let now = Utc::now().timestamp();
    Claims {
        sub: Uuid::new_v4().to_string(),
        email: "alice@example.com".to_string(),
        exp: now + 3600,
        iat: now,
    }
}

#[test]
fn given_valid_token_when_validated_then_claims_round_trip() {
    let claims = valid_claims();
    let token = make_token(&claims, SECRET);
    let validator = JwtValidator::with_hs256(SECRET);

    let decoded = validator.validate(&token).unwrap();

    assert_that!(decoded.sub, eq(&claims.sub));
    assert_that!(decoded.email, eq(&claims.email));
    assert_that!(decoded.user_id(), ok(anything()));
}

#[test]
fn given_expired_token_when_validated_then_token_expired_is_reported() {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        email: "alice@example.com".to_string(),
        exp: now - 3600,
        iat: now - 7200,
    };
    let token = make_token(&claims, SECRET);
    let validator = JwtValidator::with_hs256(SECRET);

    let result = validator.validate(&token);

    assert_that!(result, err(matches_pattern!(AuthError::TokenExpired { .. })));
}

#[test]
fn given_wrong_secret_when_validated_then_decode_fails() {
    let token = make_token(&valid_claims(), b"another-secret-another-secret-12");
    let validator = JwtValidator::with_hs256(SECRET);

    let result = validator.validate(&token);

    assert_that!(result, err(matches_pattern!(AuthError::JwtDecode { .. })));
}

#[test]
fn given_empty_sub_when_validated_then_claim_is_rejected() {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: String::new(),
        email: "alice@example.com".to_string(),
        exp: now + 3600,
        iat: now,
    };
    let token = make_token(&claims, SECRET);
    let validator = JwtValidator::with_hs256(SECRET);

    let result = validator.validate(&token);

    assert_that!(
        result,
        err(matches_pattern!(AuthError::InvalidClaim { .. }))
    );
}

#[test]
fn given_missing_header_when_validated_then_missing_header_is_reported() {
    let validator = JwtValidator::with_hs256(SECRET);

    let result = validator.validate_header(None);

    assert_that!(
        result,
        err(matches_pattern!(AuthError::MissingHeader { .. }))
    );
}

#[test]
fn given_basic_scheme_when_validated_then_scheme_is_rejected() {
    let validator = JwtValidator::with_hs256(SECRET);

    let result = validator.validate_header(Some("Basic abc123"));

    assert_that!(
        result,
        err(matches_pattern!(AuthError::InvalidScheme { .. }))
    );
}

#[test]
fn given_non_uuid_sub_when_resolving_user_id_then_claim_is_rejected() {
    let mut claims = valid_claims();
    claims.sub = "user-42".to_string();

    assert_that!(
        claims.user_id(),
        err(matches_pattern!(AuthError::InvalidClaim { .. }))
    );
}
