use super::*;
use anyhow::Result;
use oauthsign_oauth1::{AuthorizationBuilder, SignatureBuilder, SignatureMethod, SigningKey};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn twitter_key() -> SigningKey {
    SigningKey::hmac_sha1(
        "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
        Some("LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE".to_string()),
    )
}

fn photos_key() -> SigningKey {
    SigningKey::hmac_sha1("kd94hf93k423kf44", Some("pfkkdhi9sl3r4s00".to_string()))
}

#[test]
fn test_base_string_twitter() -> Result<()> {
    init_signing_test();

    assert_eq!(twitter_base_string_builder().build()?, TWITTER_BASE_STRING);
    Ok(())
}

#[test]
fn test_base_string_photos() -> Result<()> {
    init_signing_test();

    assert_eq!(photos_base_string_builder().build()?, PHOTOS_BASE_STRING);
    Ok(())
}

#[test_case(twitter_key(), twitter_base_string_builder(), "tnnArxj06cWHq44gCs1OSKk/jLY="; "twitter")]
#[test_case(photos_key(), photos_base_string_builder(), "tR3+Ty81lMeYAr/Fid0kMTYa/WM="; "photos")]
fn test_hmac_sha1_signature(
    key: SigningKey,
    builder: oauthsign_oauth1::BaseStringBuilder,
    expected: &str,
) {
    init_signing_test();

    let signature_builder = SignatureBuilder::new(key).with_base_string_builder(builder);
    assert_eq!(signature_builder.method(), SignatureMethod::HmacSha1);
    assert_eq!(signature_builder.build().unwrap(), expected);
}

#[test]
fn test_authorization_twitter() -> Result<()> {
    init_signing_test();

    let builder = AuthorizationBuilder::new().with_signature_builder(
        SignatureBuilder::new(twitter_key()).with_base_string_builder(twitter_base_string_builder()),
    );

    let expected = r#"OAuth oauth_consumer_key="xvz1evFS4wEEPTGEFPHBog", oauth_nonce="kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg", oauth_signature="tnnArxj06cWHq44gCs1OSKk%2FjLY%3D", oauth_signature_method="HMAC-SHA1", oauth_timestamp="1318622958", oauth_token="370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb", oauth_version="1.0""#;
    assert_eq!(builder.build()?, expected);
    Ok(())
}

#[test]
fn test_plaintext_switches_signature_method() -> Result<()> {
    init_signing_test();

    let signature_builder = SignatureBuilder::new(SigningKey::plaintext(
        "kd94hf93k423kf44",
        Some("pfkkdhi9sl3r4s00".to_string()),
    ))
    .with_base_string_builder(photos_base_string_builder());

    let base_string = signature_builder.base_string()?;
    assert_eq!(
        base_string,
        PHOTOS_BASE_STRING.replace("HMAC-SHA1", "PLAINTEXT")
    );
    assert_eq!(
        signature_builder.build()?,
        "kd94hf93k423kf44&pfkkdhi9sl3r4s00"
    );

    let header = AuthorizationBuilder::new()
        .with_realm("Photos")
        .with_signature_builder(signature_builder)
        .build()?;
    assert_eq!(
        header,
        r#"OAuth realm="Photos", oauth_consumer_key="dpf43f3p2l4k3l03", oauth_nonce="kllo9940pd9333jh", oauth_signature="kd94hf93k423kf44%26pfkkdhi9sl3r4s00", oauth_signature_method="PLAINTEXT", oauth_timestamp="1191242096", oauth_token="nnch734d00sl2jdk", oauth_version="1.0""#
    );
    Ok(())
}

#[test]
fn test_chain_is_idempotent() -> Result<()> {
    init_signing_test();

    let base_string_builder = twitter_base_string_builder();
    let signature_builder =
        SignatureBuilder::new(twitter_key()).with_base_string_builder(base_string_builder.clone());
    let authorization_builder =
        AuthorizationBuilder::new().with_signature_builder(signature_builder.clone());

    assert_eq!(base_string_builder.build()?, base_string_builder.build()?);
    assert_eq!(signature_builder.build()?, signature_builder.build()?);
    assert_eq!(authorization_builder.build()?, authorization_builder.build()?);
    Ok(())
}

#[test]
fn test_missing_method_fails_every_stage() {
    init_signing_test();

    let builder = oauthsign_oauth1::BaseStringBuilder::new()
        .with_base_uri("https://api.twitter.com/1/statuses/update.json");
    assert!(builder.build().is_err());

    let signature_builder =
        SignatureBuilder::new(twitter_key()).with_base_string_builder(builder);
    assert!(signature_builder.build().is_err());

    let authorization_builder =
        AuthorizationBuilder::new().with_signature_builder(signature_builder);
    assert!(authorization_builder.build().is_err());
}
