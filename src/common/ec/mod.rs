mod galois;

pub use galois::{multiply, GF};

use super::metadata::{ECLevel, Version};

// Generator polynomial
//------------------------------------------------------------------------------

/// Product of (x - α^i) for i in 0..ecc_len. Coefficients are ordered from the
/// highest degree down, so index 0 is always the monic leading 1.
pub fn generator_polynomial(ecc_len: usize) -> Vec<GF> {
    let mut poly = Vec::with_capacity(ecc_len + 1);
    poly.push(GF::ONE);
    for i in 0..ecc_len {
        let root = GF::exp(i);
        poly.push(GF::ZERO);
        for j in (1..poly.len()).rev() {
            let shifted = poly[j - 1] * root;
            poly[j] += shifted;
        }
    }
    poly
}

// ECC: Error Correction Codeword generator
//------------------------------------------------------------------------------

/// Remainder of data(x)·x^ecc_len divided by the generator polynomial. The
/// register holds the running remainder and shifts one codeword per input.
pub fn ecc(data: &[u8], ecc_len: usize) -> Vec<u8> {
    if ecc_len == 0 {
        return Vec::new();
    }

    let gen_poly = generator_polynomial(ecc_len);
    let mut rem = vec![GF::ZERO; ecc_len];
    for &b in data {
        let factor = GF(b) + rem[0];
        rem.rotate_left(1);
        rem[ecc_len - 1] = GF::ZERO;
        if factor == GF::ZERO {
            continue;
        }
        for (r, g) in rem.iter_mut().zip(&gen_poly[1..]) {
            *r += *g * factor;
        }
    }
    rem.into_iter().map(|GF(b)| b).collect()
}

/// Data codewords followed by their error correction codewords. Version 1 has
/// a single block per level, so no interleaving takes place.
pub fn append_ecc(data: &[u8], ver: Version, ecl: ECLevel) -> Vec<u8> {
    debug_assert_eq!(
        data.len(),
        ver.data_codewords(ecl),
        "Data len doesn't match data codeword capacity: Data len {}, Capacity {}",
        data.len(),
        ver.data_codewords(ecl)
    );

    let mut codewords = Vec::with_capacity(ver.total_codewords());
    codewords.extend_from_slice(data);
    codewords.extend(ecc(data, ver.ecc_codewords(ecl)));
    codewords
}
