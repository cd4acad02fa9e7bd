#![no_main]
use ciborium::de;
use libfuzzer_sys::fuzz_target;
use primegroup::{NistP256, PrimeCurve};
use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};

type Point = primegroup::Point<NistP256>;
type Scalar = primegroup::Scalar<NistP256>;

fn check_group(p1: &Point, p2: &Point, s: &Scalar) {
    assert!(p1.is_valid() && p2.is_valid());

    let sum = p1 + p2;
    let scalar_mul = p1 * s;

    // Doubling by addition agrees with multiplication by two
    assert!(p1 + p1 == p1 * &Scalar::from_u64(2));

    assert!(&sum + &(-&sum) == Point::identity());
    assert!(&scalar_mul + &scalar_mul == p1 * &(s + s));
    assert!(sum.is_valid() && scalar_mul.is_valid());
}

fuzz_target!(|data: &[u8]| {
    let len = Point::encoded_len();
    if data.len() < 32 + 2 * len {
        return;
    }

    let mut rng = ChaCha20Rng::from_seed(data[0..32].try_into().unwrap());

    let p1 = Point::from_bytes(&data[32..32 + len]).unwrap_or_else(|_| Point::pick(&mut rng));
    if let Ok(p) = Point::from_bytes(&data[32..32 + len]) {
        assert_eq!(Point::from_bytes(&p.to_bytes()), Ok(p));
    }

    let p2 = de::from_reader(&data[32 + len..]).unwrap_or_else(|_| Point::generator());

    // Extraction never panics, whatever the point
    let _ = p1.data();
    let _ = p2.data();

    let payload = &data[32 + len..];
    let embedded = Point::embed(payload, &mut rng);
    let expected = &payload[..payload.len().min(Point::embed_len())];
    if !expected.is_empty() {
        assert_eq!(embedded.data().as_deref(), Ok(expected));
    }

    let y2 = NistP256::params().rhs(&p1.coordinates().0);
    let _ = NistP256::sqrt(&y2);

    let s = Scalar::from_bytes_reduced(&data[32..64]);
    check_group(&p1, &p2, &s);
});
