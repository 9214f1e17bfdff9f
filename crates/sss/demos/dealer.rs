use rand::thread_rng;
use sss::{SecretSharer, ShamirSecretSharing};

fn main() -> Result<(), sss::Error> {
    let secret = 1234;

    let scheme = ShamirSecretSharing::new(5, 2)?;
    let shares = scheme.generate_shares(secret, &mut thread_rng())?;

    for share in &shares {
        println!("share {}: {}", share.x, share.y);
    }

    let recovered = scheme.reconstruct(&shares[..2])?;
    println!("recovered secret: {recovered}");

    Ok(())
}
