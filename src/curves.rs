//! Registry of well-known curves:
//!
//! * SEC 2 v.2 curves (http://www.secg.org/sec2-v2.pdf)
//! * SEC 2 v.1 curves removed from v.2 as insecure
//!   (http://www.secg.org/SEC2-Ver-1.0.pdf)
//! * FIPS 186-4 (NIST) curves
//! * Brainpool standard curves (RFC 5639)
//!
//! Every entry is validated by the `Curve` constructor on first access,
//! including the n G = INF order check, so a corrupted constant cannot
//! reach callers.

use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::Num;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::curve::Curve;
use crate::group::Point;

fn hx(s: &str) -> BigUint {
    BigUint::from_str_radix(s, 16).expect("malformed curve constant")
}

fn named(
    p: &str,
    a: &str,
    b: &str,
    gx: &str,
    gy: &str,
    n: &str,
    h: u32,
    weakness_check: bool,
) -> Curve {
    Curve::new(
        hx(p),
        hx(a),
        hx(b),
        Point::new(hx(gx), hx(gy)),
        hx(n),
        h,
        weakness_check,
    )
    .expect("invalid registry curve")
}

/// The named curves, keyed by canonical name.
pub static CURVES: Lazy<HashMap<&'static str, Curve>> = Lazy::new(|| {
    debug!("validating the named-curve registry");
    let mut curves = HashMap::new();

    // SEC 2 v.1 only, removed from v.2 as insecure
    curves.insert(
        "secp112r1",
        named(
            "db7c2abf62e35e668076bead208b",
            "db7c2abf62e35e668076bead2088",
            "659ef8ba043916eede8911702b22",
            "09487239995a5ee76b55f9c2f098",
            "a89ce5af8724c0a23e0e0ff77500",
            "db7c2abf62e35e7628dfac6561c5",
            1,
            true,
        ),
    );
    curves.insert(
        "secp112r2",
        named(
            "db7c2abf62e35e668076bead208b",
            "6127c24c05f38a0aaaf65c0ef02c",
            "51def1815db5ed74fcc34c85d709",
            "4ba30ab5e892b4e1649dd0928643",
            "adcd46f5882e3747def36e956e97",
            "36df0aafd8b8d7597ca10520d04b",
            4,
            false,
        ),
    );
    curves.insert(
        "secp128r1",
        named(
            "fffffffdffffffffffffffffffffffff",
            "fffffffdfffffffffffffffffffffffc",
            "e87579c11079f43dd824993c2cee5ed3",
            "161ff7528b899b2d0c28607ca52c5b86",
            "cf5ac8395bafeb13c02da292dded7a83",
            "fffffffe0000000075a30d1b9038a115",
            1,
            true,
        ),
    );
    curves.insert(
        "secp128r2",
        named(
            "fffffffdffffffffffffffffffffffff",
            "d6031998d1b3bbfebf59cc9bbff9aee1",
            "5eeefca380d02919dc2c6558bb6d8a5d",
            "7b6aa5d85e572983e6fb32a7cdebc140",
            "27b6916a894d3aee7106fe805fc34b44",
            "3fffffff7fffffffbe0024720613b5a3",
            4,
            false,
        ),
    );
    curves.insert(
        "secp160k1",
        named(
            "fffffffffffffffffffffffffffffffeffffac73",
            "0000000000000000000000000000000000000000",
            "0000000000000000000000000000000000000007",
            "3b4c382ce37aa192a4019e763036f4f5dd4d7ebb",
            "938cf935318fdced6bc28286531733c3f03c4fee",
            "0100000000000000000001b8fa16dfab9aca16b6b3",
            1,
            true,
        ),
    );
    curves.insert(
        "secp160r1",
        named(
            "ffffffffffffffffffffffffffffffff7fffffff",
            "ffffffffffffffffffffffffffffffff7ffffffc",
            "1c97befc54bd7a8b65acf89f81d4d4adc565fa45",
            "4a96b5688ef573284664698968c38bb913cbfc82",
            "23a628553168947d59dcc912042351377ac5fb32",
            "0100000000000000000001f4c8f927aed3ca752257",
            1,
            true,
        ),
    );
    curves.insert(
        "secp160r2",
        named(
            "fffffffffffffffffffffffffffffffeffffac73",
            "fffffffffffffffffffffffffffffffeffffac70",
            "b4e134d3fb59eb8bab57274904664d5af50388ba",
            "52dcb034293a117e1f4ff11b30f7199d3144ce6d",
            "feaffef2e331f296e071fa0df9982cfea7d43f2e",
            "0100000000000000000000351ee786a818f3a1a16b",
            1,
            true,
        ),
    );

    // curves included in both SEC 2 v.1 and v.2
    curves.insert(
        "secp192k1",
        named(
            "fffffffffffffffffffffffffffffffffffffffeffffee37",
            "000000000000000000000000000000000000000000000000",
            "000000000000000000000000000000000000000000000003",
            "db4ff10ec057e9ae26b07d0280b7f4341da5d1b1eae06c7d",
            "9b2f2f6d9c5628a7844163d015be86344082aa88d95e2f9d",
            "fffffffffffffffffffffffe26f2fc170f69466a74defd8d",
            1,
            true,
        ),
    );
    curves.insert(
        "secp192r1",
        named(
            "fffffffffffffffffffffffffffffffeffffffffffffffff",
            "fffffffffffffffffffffffffffffffefffffffffffffffc",
            "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
            "188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
            "07192b95ffc8da78631011ed6b24cdd573f977a11e794811",
            "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
            1,
            true,
        ),
    );
    curves.insert(
        "secp224k1",
        named(
            "fffffffffffffffffffffffffffffffffffffffffffffffeffffe56d",
            "00000000000000000000000000000000000000000000000000000000",
            "00000000000000000000000000000000000000000000000000000005",
            "a1455b334df099df30fc28a169a467e9e47075a90f7e650eb6b7a45c",
            "7e089fed7fba344282cafbd6f7e319f7c0b0bd59e2ca4bdb556d61a5",
            "010000000000000000000000000001dce8d2ec6184caf0a971769fb1f7",
            1,
            true,
        ),
    );
    curves.insert(
        "secp224r1",
        named(
            "ffffffffffffffffffffffffffffffff000000000000000000000001",
            "fffffffffffffffffffffffffffffffefffffffffffffffffffffffe",
            "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
            "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
            "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
            "ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
            1,
            true,
        ),
    );
    // the bitcoin curve
    curves.insert(
        "secp256k1",
        named(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
            "0000000000000000000000000000000000000000000000000000000000000000",
            "0000000000000000000000000000000000000000000000000000000000000007",
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
            "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
            1,
            true,
        ),
    );
    curves.insert(
        "secp256r1",
        named(
            "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
            "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
            "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
            "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
            "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
            "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
            1,
            true,
        ),
    );
    curves.insert(
        "secp384r1",
        named(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc",
            "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
            "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
            "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f",
            "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
            1,
            true,
        ),
    );
    curves.insert(
        "secp521r1",
        named(
            "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffc",
            "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
            "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
            "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
            "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409",
            1,
            true,
        ),
    );

    // FIPS 186-4: the NIST primes restate the SEC r1 curves, a = p - 3
    curves.insert("nistp192", curves["secp192r1"].clone());
    curves.insert("nistp224", curves["secp224r1"].clone());
    curves.insert("nistp256", curves["secp256r1"].clone());
    curves.insert("nistp384", curves["secp384r1"].clone());
    curves.insert("nistp521", curves["secp521r1"].clone());

    // Brainpool standard curves, RFC 5639
    curves.insert(
        "bpp160r1",
        named(
            "e95e4a5f737059dc60dfc7ad95b3d8139515620f",
            "340e7be2a280eb74e2be61bada745d97e8f7c300",
            "1e589a8595423412134faa2dbdec95c8d8675e58",
            "bed5af16ea3f6a4f62938c4631eb5af7bdbcdbc3",
            "1667cb477a1a8ec338f94741669c976316da6321",
            "e95e4a5f737059dc60df5991d45029409e60fc09",
            1,
            true,
        ),
    );
    curves.insert(
        "bpp192r1",
        named(
            "c302f41d932a36cda7a3463093d18db78fce476de1a86297",
            "6a91174076b1e0e19c39c031fe8685c1cae040e5c69a28ef",
            "469a28ef7c28cca3dc721d044f4496bcca7ef4146fbf25c9",
            "c0a0647eaab6a48753b033c56cb0f0900a2f5c4853375fd6",
            "14b690866abd5bb88b5f4828c1490002e6773fa2fa299b8f",
            "c302f41d932a36cda7a3462f9e9e916b5be8f1029ac4acc1",
            1,
            true,
        ),
    );
    curves.insert(
        "bpp224r1",
        named(
            "d7c134aa264366862a18302575d1d787b09f075797da89f57ec8c0ff",
            "68a5e62ca9ce6c1c299803a6c1530b514e182ad8b0042a59cad29f43",
            "2580f63ccfe44138870713b1a92369e33e2135d266dbb372386c400b",
            "0d9029ad2c7e5cf4340823b2a87dc68c9e4ce3174c1e6efdee12c07d",
            "58aa56f772c0726f24c6b89e4ecdac24354b9e99caa3f6d3761402cd",
            "d7c134aa264366862a18302575d0fb98d116bc4b6ddebca3a5a7939f",
            1,
            true,
        ),
    );
    curves.insert(
        "bpp256r1",
        named(
            "a9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377",
            "7d5a0975fc2c3057eef67530417affe7fb8055c126dc5c6ce94a4b44f330b5d9",
            "26dc5c6ce94a4b44f330b5d9bbd77cbf958416295cf7e1ce6bccdc18ff8c07b6",
            "8bd2aeb9cb7e57cb2c4b482ffc81b7afb9de27e1e3bd23c23a4453bd9ace3262",
            "547ef835c3dac4fd97f8461a14611dc9c27745132ded8e545c1d54c72f046997",
            "a9fb57dba1eea9bc3e660a909d838d718c397aa3b561a6f7901e0e82974856a7",
            1,
            true,
        ),
    );
    curves.insert(
        "bpp320r1",
        named(
            "d35e472036bc4fb7e13c785ed201e065f98fcfa6f6f40def4f92b9ec7893ec28fcd412b1f1b32e27",
            "3ee30b568fbab0f883ccebd46d3f3bb8a2a73513f5eb79da66190eb085ffa9f492f375a97d860eb4",
            "520883949dfdbc42d3ad198640688a6fe13f41349554b49acc31dccd884539816f5eb4ac8fb1f1a6",
            "43bd7e9afb53d8b85289bcc48ee5bfe6f20137d10a087eb6e7871e2a10a599c710af8d0d39e20611",
            "14fdd05545ec1cc8ab4093247f77275e0743ffed117182eaa9c77877aaac6ac7d35245d1692e8ee1",
            "d35e472036bc4fb7e13c785ed201e065f98fcfa5b68f12a32d482ec7ee8658e98691555b44c59311",
            1,
            true,
        ),
    );
    curves.insert(
        "bpp384r1",
        named(
            "8cb91e82a3386d280f5d6f7e50e641df152f7109ed5456b412b1da197fb71123acd3a729901d1a71874700133107ec53",
            "7bc382c63d8c150c3c72080ace05afa0c2bea28e4fb22787139165efba91f90f8aa5814a503ad4eb04a8c7dd22ce2826",
            "04a8c7dd22ce28268b39b55416f0447c2fb77de107dcd2a62e880ea53eeb62d57cb4390295dbc9943ab78696fa504c11",
            "1d1c64f068cf45ffa2a63a81b7c13f6b8847a3e77ef14fe3db7fcafe0cbd10e8e826e03436d646aaef87b2e247d4af1e",
            "8abe1d7520f9c2a45cb1eb8e95cfd55262b70b29feec5864e19c054ff99129280e4646217791811142820341263c5315",
            "8cb91e82a3386d280f5d6f7e50e641df152f7109ed5456b31f166e6cac0425a7cf3ab6af6b7fc3103b883202e9046565",
            1,
            true,
        ),
    );
    curves.insert(
        "bpp512r1",
        named(
            "aadd9db8dbe9c48b3fd4e6ae33c9fc07cb308db3b3c9d20ed6639cca703308717d4d9b009bc66842aecda12ae6a380e62881ff2f2d82c68528aa6056583a48f3",
            "7830a3318b603b89e2327145ac234cc594cbdd8d3df91610a83441caea9863bc2ded5d5aa8253aa10a2ef1c98b9ac8b57f1117a72bf2c7b9e7c1ac4d77fc94ca",
            "3df91610a83441caea9863bc2ded5d5aa8253aa10a2ef1c98b9ac8b57f1117a72bf2c7b9e7c1ac4d77fc94cadc083e67984050b75ebae5dd2809bd638016f723",
            "81aee4bdd82ed9645a21322e9c4c6a9385ed9f70b5d916c1b43b62eef4d0098eff3b1f78e2d0d48d50d1687b93b97d5f7c6d5047406a5e688b352209bcb9f822",
            "7dde385d566332ecc0eabfa9cf7822fdf209f70024a57b1aa000c55b881f8111b2dcde494a5f485e5bca4bd88a2763aed1ca2b2fa8f0540678cd1e0f3ad80892",
            "aadd9db8dbe9c48b3fd4e6ae33c9fc07cb308db3b3c9d20ed6639cca70330870553e5c414ca92619418661197fac10471db1d381085ddaddb58796829ca90069",
            1,
            true,
        ),
    );

    curves
});

/// Look up a well-known curve by its canonical name.
pub fn curve_by_name(name: &str) -> Option<&'static Curve> {
    CURVES.get(name)
}

/// The bitcoin curve.
pub fn secp256k1() -> &'static Curve {
    &CURVES["secp256k1"]
}

/*---- TESTS ----*/

#[cfg(test)]
mod curves_test {

    use num_bigint::{BigInt, BigUint, RandBigInt};
    use num_traits::Num;

    use crate::curve::{double_mult, mult, multi_mult};
    use crate::curves::{curve_by_name, secp256k1, CURVES};
    use crate::group::jacobian_coords::jac_from_aff;
    use crate::group::Point;
    use crate::numbertheory::legendre_symbol;
    use crate::testutil::second_generator;

    fn hex(s: &str) -> BigUint {
        BigUint::from_str_radix(s, 16).unwrap()
    }

    #[test]
    fn registry_is_complete() {
        assert_eq!(CURVES.len(), 27);

        for name in &[
            "secp112r1", "secp112r2", "secp128r1", "secp128r2", "secp160k1",
            "secp160r1", "secp160r2", "secp192k1", "secp192r1", "secp224k1",
            "secp224r1", "secp256k1", "secp256r1", "secp384r1", "secp521r1",
            "nistp192", "nistp224", "nistp256", "nistp384", "nistp521",
            "bpp160r1", "bpp192r1", "bpp224r1", "bpp256r1", "bpp320r1",
            "bpp384r1", "bpp512r1",
        ] {
            assert!(curve_by_name(name).is_some(), "{} missing", name);
        }

        assert!(curve_by_name("secp666r1").is_none());
    }

    #[test]
    fn nist_names_alias_the_sec_r1_curves() {
        assert_eq!(CURVES["nistp192"], CURVES["secp192r1"]);
        assert_eq!(CURVES["nistp256"], CURVES["secp256r1"]);
        assert_eq!(CURVES["nistp521"], CURVES["secp521r1"]);
    }

    #[test]
    fn secp256k1_known_doubling() {
        let ec = secp256k1();
        let g2 = mult(&BigInt::from(2), &ec.g, ec).unwrap();

        assert_eq!(
            g2.x,
            hex("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5")
        );
        assert_eq!(
            g2.y,
            hex("1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a")
        );
    }

    #[test]
    fn nistp192_quadratic_residue_recovery() {
        let ec = curve_by_name("nistp192").unwrap();
        assert!(ec.p_is_three_mod_four);

        let x = hex("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012");
        let root = ec.y_quadratic_residue(&x, true).unwrap();

        assert_eq!(legendre_symbol(&root, &ec.p), 1);
        let gy = hex("07192b95ffc8da78631011ed6b24cdd573f977a11e794811");
        assert!(root == gy || root == (&ec.p - &gy));
    }

    #[test]
    fn random_points_satisfy_the_group_axioms() {
        let mut rng = rand::thread_rng();

        for name in &["secp112r1", "secp160r1", "secp256k1", "bpp160r1"] {
            let ec = curve_by_name(name).unwrap();
            let k = rng.gen_biguint_below(&ec.n);
            let point = mult(&BigInt::from(k), &ec.g, ec).unwrap();

            assert!(ec.is_on_curve(&point).unwrap(), "{}", name);
            assert_eq!(ec.negate(&ec.negate(&point)), point, "{}", name);
            assert_eq!(
                ec.add(&point, &ec.negate(&point)).unwrap(),
                Point::infinity(),
                "{}",
                name
            );
            assert_eq!(
                ec.add(&point, &Point::infinity()).unwrap(),
                point,
                "{}",
                name
            );

            let round_trip = ec.aff_from_jac(&jac_from_aff(&point)).unwrap();
            assert_eq!(round_trip, point, "{}", name);
        }
    }

    #[test]
    fn multiplication_distributes_over_scalar_addition() {
        let mut rng = rand::thread_rng();

        for name in &["secp112r1", "secp256k1"] {
            let ec = curve_by_name(name).unwrap();
            let h = second_generator(ec);

            let u = BigInt::from(rng.gen_biguint_below(&ec.n));
            let v = BigInt::from(rng.gen_biguint_below(&ec.n));
            let w = BigInt::from(rng.gen_biguint_below(&ec.n));

            let sum_first = mult(&(&u + &v), &ec.g, ec).unwrap();
            let mult_first = ec
                .add(
                    &mult(&u, &ec.g, ec).unwrap(),
                    &mult(&v, &ec.g, ec).unwrap(),
                )
                .unwrap();
            assert_eq!(sum_first, mult_first, "{}", name);

            let shamir = double_mult(&u, &h, &v, &ec.g, ec).unwrap();
            let separate = ec
                .add(&mult(&u, &h, ec).unwrap(), &mult(&v, &ec.g, ec).unwrap())
                .unwrap();
            assert_eq!(shamir, separate, "{}", name);

            let boscoster = multi_mult(
                &[u.clone(), v.clone(), w.clone()],
                &[ec.g.clone(), h.clone(), ec.g.clone()],
                ec,
            )
            .unwrap();
            let plain = ec
                .add(
                    &ec.add(
                        &mult(&u, &ec.g, ec).unwrap(),
                        &mult(&v, &h, ec).unwrap(),
                    )
                    .unwrap(),
                    &mult(&w, &ec.g, ec).unwrap(),
                )
                .unwrap();
            assert_eq!(boscoster, plain, "{}", name);
        }
    }
}
