use super::*;
use anyhow::Result;
use oauthsign_core::hash::base64_decode;
use oauthsign_core::ErrorKind;
use oauthsign_oauth1::{AuthorizationBuilder, SignatureBuilder, SignatureMethod, SigningKey};
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::signature::Verifier;
use rsa::RsaPrivateKey;
use sha1::Sha1;

fn generate_private_key() -> RsaPrivateKey {
    let mut rng = rand::thread_rng();
    RsaPrivateKey::new(&mut rng, 1024).expect("generate rsa key must succeed")
}

#[test]
fn test_rsa_sha1_signature_verifies() -> Result<()> {
    init_signing_test();

    let private_key = generate_private_key();
    let verifying_key = VerifyingKey::<Sha1>::new(private_key.to_public_key());

    let signature_builder = SignatureBuilder::new(SigningKey::rsa_sha1(private_key))
        .with_base_string_builder(photos_base_string_builder());
    assert_eq!(signature_builder.method(), SignatureMethod::RsaSha1);

    let base_string = signature_builder.base_string()?;
    assert_eq!(
        base_string,
        PHOTOS_BASE_STRING.replace("HMAC-SHA1", "RSA-SHA1")
    );

    let signature = signature_builder.build()?;
    let signature = Signature::try_from(base64_decode(&signature)?.as_slice())?;
    verifying_key.verify(base_string.as_bytes(), &signature)?;

    // Any change to the base string must break verification.
    assert!(verifying_key
        .verify(PHOTOS_BASE_STRING.as_bytes(), &signature)
        .is_err());
    Ok(())
}

#[test]
fn test_rsa_sha1_literal_base_string() -> Result<()> {
    init_signing_test();

    let private_key = generate_private_key();
    let verifying_key = VerifyingKey::<Sha1>::new(private_key.to_public_key());

    let signature = SignatureBuilder::new(SigningKey::rsa_sha1(private_key))
        .with_base_string(PHOTOS_BASE_STRING)
        .build()?;

    let signature = Signature::try_from(base64_decode(&signature)?.as_slice())?;
    verifying_key.verify(PHOTOS_BASE_STRING.as_bytes(), &signature)?;
    Ok(())
}

#[test]
fn test_rsa_sha1_authorization() -> Result<()> {
    init_signing_test();

    let header = AuthorizationBuilder::new()
        .with_signature_builder(
            SignatureBuilder::new(SigningKey::rsa_sha1(generate_private_key()))
                .with_base_string_builder(photos_base_string_builder()),
        )
        .build()?;

    assert!(header.starts_with(r#"OAuth oauth_consumer_key="dpf43f3p2l4k3l03", oauth_nonce="kllo9940pd9333jh", oauth_signature=""#));
    assert!(header.contains(r#"oauth_signature_method="RSA-SHA1""#));
    Ok(())
}

#[test]
fn test_rsa_sha1_without_private_key() {
    init_signing_test();

    let err = SignatureBuilder::new(SigningKey::RsaSha1 { private_key: None })
        .with_base_string_builder(photos_base_string_builder())
        .build()
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
}
