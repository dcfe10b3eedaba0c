use rand::distributions::Alphanumeric;
use rand::CryptoRng;
use rand::Rng;
use rand::RngCore;

/// Length of generated nonces.
pub const NONCE_LENGTH: usize = 32;

/// Generate a fresh `oauth_nonce` from the given generator.
///
/// The generator must be cryptographically secure. Every nonce is meant for
/// exactly one signed request.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let nonce = oauthsign_oauth1::generate_nonce(&mut rng);
/// assert_eq!(nonce.len(), 32);
/// ```
pub fn generate_nonce<R: RngCore + CryptoRng>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}
