use super::*;
use anyhow::Result;
use http::header::AUTHORIZATION;
use http::Request;
use oauthsign_core::time::parse_unix_timestamp;
use oauthsign_oauth1::{
    generate_nonce, parse_form_body, Credential, RequestSigner, SignatureMethod,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn twitter_credential() -> Credential {
    Credential::new(
        "xvz1evFS4wEEPTGEFPHBog",
        "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
    )
    .with_token(
        "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
        "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
    )
}

#[test]
fn test_sign_twitter_request() -> Result<()> {
    init_signing_test();

    let body = "status=Hello%20Ladies%20%2b%20Gentlemen%2c%20a%20signed%20OAuth%20request%21";
    let req = Request::post("https://api.twitter.com/1/statuses/update.json?include_entities=true")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(body)?;
    let (mut parts, body) = req.into_parts();

    let signer = RequestSigner::new(SignatureMethod::HmacSha1)
        .with_nonce("kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg")
        .with_time(parse_unix_timestamp(1318622958)?);
    signer.sign_request(&mut parts, &twitter_credential(), &parse_form_body(body.as_bytes()))?;

    let value = parts.headers.get(AUTHORIZATION).expect("must be signed");
    assert_eq!(
        value.to_str()?,
        r#"OAuth oauth_consumer_key="xvz1evFS4wEEPTGEFPHBog", oauth_nonce="kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg", oauth_signature="tnnArxj06cWHq44gCs1OSKk%2FjLY%3D", oauth_signature_method="HMAC-SHA1", oauth_timestamp="1318622958", oauth_token="370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb", oauth_version="1.0""#
    );
    Ok(())
}

#[test]
fn test_sign_normalizes_base_uri() -> Result<()> {
    init_signing_test();

    let signer = RequestSigner::new(SignatureMethod::HmacSha1)
        .with_nonce("kllo9940pd9333jh")
        .with_time(parse_unix_timestamp(1191242096)?);
    let cred = Credential::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44")
        .with_token("nnch734d00sl2jdk", "pfkkdhi9sl3r4s00");

    let (parts, _) = Request::get("HTTP://Photos.Example.NET:80/photos?size=original&file=vacation.jpg")
        .body(())?
        .into_parts();
    let header = signer.build_authorization(&parts, &cred, &[])?;

    assert!(header.contains(r#"oauth_signature="tR3%2BTy81lMeYAr%2FFid0kMTYa%2FWM%3D""#));
    Ok(())
}

#[test]
fn test_sign_with_callback_and_rsa() -> Result<()> {
    init_signing_test();

    let private_key = rsa::RsaPrivateKey::new(&mut rand::thread_rng(), 1024)?;
    let nonce = generate_nonce(&mut StdRng::seed_from_u64(1));

    let signer = RequestSigner::new(SignatureMethod::RsaSha1)
        .with_rsa_private_key(private_key)
        .with_callback("oob")
        .with_realm("Photos")
        .with_nonce(nonce.clone());
    let cred = Credential::new("dpf43f3p2l4k3l03", "");

    let (mut parts, _) = Request::post("https://photos.example.net/initiate")
        .body(())?
        .into_parts();
    signer.sign_request(&mut parts, &cred, &[])?;

    let value = parts.headers[AUTHORIZATION].to_str()?.to_string();
    assert!(value.starts_with(r#"OAuth realm="Photos", oauth_callback="oob", oauth_consumer_key="dpf43f3p2l4k3l03", oauth_nonce=""#));
    assert!(value.contains(&format!(r#"oauth_nonce="{nonce}""#)));
    assert!(value.contains(r#"oauth_signature_method="RSA-SHA1""#));
    assert!(!value.contains("oauth_token"));
    Ok(())
}
