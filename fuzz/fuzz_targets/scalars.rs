#![no_main]
use ciborium::de;
use libfuzzer_sys::fuzz_target;
use primegroup::NistP256;

type Scalar = primegroup::Scalar<NistP256>;

fn check_field(a: &Scalar, b: &Scalar) {
    assert!(a + b == b + a);
    assert!(a * b == b * a);
    assert!(&(a - b) + b == *a);
    assert!(a + &(-a) == Scalar::zero());

    if let Some(inv) = a.invert() {
        assert!(a * &inv == Scalar::one());
    } else {
        assert!(a.is_zero());
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 64 {
        return;
    }

    let a = Scalar::from_bytes(&data[0..32]).unwrap();
    let b: Scalar =
        de::from_reader(&data[32..]).unwrap_or_else(|_| Scalar::from_bytes_reduced(&data[32..64]));

    assert_eq!(Scalar::from_bytes(&a.to_bytes()), Ok(a.clone()));
    check_field(&a, &b);
});
