use agora_ecc::{BigInt, BigUint, Curve, FieldElement, Point};
use criterion::{criterion_group, criterion_main, Criterion};

use rand::rngs::OsRng;
use rand::Rng;

fn hex(digits: &[u8]) -> BigUint {
    BigUint::parse_bytes(digits, 16).unwrap()
}

fn secp256k1_modulus() -> BigUint {
    hex(b"fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f")
}

fn secp256k1_generator() -> Point {
    let p = secp256k1_modulus();
    let curve = Curve::new(
        FieldElement::new(BigUint::from(0_u32), p.clone()).unwrap(),
        FieldElement::new(BigUint::from(7_u32), p.clone()).unwrap(),
    )
    .unwrap();
    curve
        .point(
            FieldElement::new(
                hex(b"79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
                p.clone(),
            )
            .unwrap(),
            FieldElement::new(
                hex(b"483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
                p,
            )
            .unwrap(),
        )
        .unwrap()
}

fn random_element(rng: &mut OsRng, modulus: &BigUint) -> FieldElement {
    let bytes: [u8; 32] = rng.gen();
    FieldElement::new(BigUint::from_bytes_be(&bytes) % modulus, modulus.clone()).unwrap()
}

fn bench_field_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_ops");

    let mut rng = OsRng;
    let modulus = secp256k1_modulus();
    let a = random_element(&mut rng, &modulus);
    let b = random_element(&mut rng, &modulus);
    let exponent = BigInt::from(65537);

    group.bench_function("multiply", |bch| bch.iter(|| a.multiply(&b)));
    group.bench_function("power", |bch| bch.iter(|| a.power(&exponent)));
    group.bench_function("inverse", |bch| bch.iter(|| a.inverse()));

    group.finish();
}

fn bench_point_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_ops");

    let g = secp256k1_generator();
    let g2 = g.double().unwrap();

    group.bench_function("add", |bch| bch.iter(|| g.add(&g2)));
    group.bench_function("double", |bch| bch.iter(|| g.double()));

    group.finish();
}

criterion_group!(benches, bench_field_ops, bench_point_ops);
criterion_main!(benches);
