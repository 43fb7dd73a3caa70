mod qr;

pub use qr::{Module, QR};

use log::{debug, trace};

use crate::common::{
    codec::{encode, strip_non_digits},
    ec::append_ecc,
    error::QRResult,
    mask::MaskPattern,
    metadata::{ECLevel, Version},
    BitStream,
};

/// Configuration for a numeric version 1 symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QRBuilder<'a> {
    data: &'a str,
    ec_level: ECLevel,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a str) -> Self {
        Self { data, ec_level: ECLevel::default() }
    }

    pub fn data(&mut self, data: &'a str) -> &mut Self {
        self.data = data;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Version: {}, Ec level: {:?}, Mask: {:?} }}",
            VERSION.number(),
            self.ec_level,
            *MASK
        )
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        debug!("Generating QR {}", self.metadata());

        let digits = strip_non_digits(self.data);
        let mut qr = QR::new(VERSION, self.ec_level);
        if digits.is_empty() {
            debug!("No digits in input, returning blank symbol");
            return Ok(qr);
        }

        debug!("Encoding {} digits...", digits.len());
        let encoded_data = encode(&digits, VERSION, self.ec_level)?;
        trace!("Data codewords: {:02x?}", encoded_data.data());

        debug!("Computing error correction codewords...");
        let codewords = append_ecc(encoded_data.data(), VERSION, self.ec_level);
        trace!("Error correction codewords: {:02x?}", &codewords[encoded_data.data().len()..]);

        let mut payload = BitStream::new(VERSION.total_codewords() << 3);
        payload.extend(&codewords);

        debug!("Drawing functional patterns...");
        qr.draw_all_function_patterns();

        debug!("Drawing encoding region with mask {:?}...", *MASK);
        qr.draw_encoding_region(payload, MASK);

        debug!("Drawing format info...");
        qr.draw_format_region();

        debug!("QR generated: {} dark modules of {}", qr.count_dark_modules(), qr.size().pow(2));
        Ok(qr)
    }
}

#[cfg(test)]
mod builder_tests {
    use test_case::test_case;

    use super::{Module, QRBuilder, QR};
    use crate::common::{
        codec::{encode, strip_non_digits},
        ec::append_ecc,
        error::QRError,
        iter::EncRegionIter,
        mask::MaskPattern,
        metadata::{Color, ECLevel, Version},
    };

    fn build(data: &str, ecl: ECLevel) -> QR {
        QRBuilder::new(data).ec_level(ecl).build().unwrap()
    }

    #[test]
    fn test_build_1234567_l() {
        let qr = build("1234567", ECLevel::L);
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffFMDdDdFfffffff\n\
             fFFFFFfFMDDDdFfFFFFFf\n\
             fFfffFfFmDdDDFfFfffFf\n\
             fFfffFfFMDDDdFfFfffFf\n\
             fFfffFfFMdDddFfFfffFf\n\
             fFFFFFfFMdddDFfFFFFFf\n\
             fffffffFfFfFfFfffffff\n\
             FFFFFFFFmDdDDFFFFFFFF\n\
             mmmMmmfmmDdDdmmMMMmMM\n\
             dDddddFdddDdDdDdDDDDd\n\
             dDdDdDfDddddDdddDdDDD\n\
             DddDDDFddDddddDdddDDd\n\
             dDdddDfDdDDdDdddDDDdd\n\
             FFFFFFFFmdDDDDdDDdDdD\n\
             fffffffFmDDDdDDDddddD\n\
             fFFFFFfFmdDDDDdDDDdDD\n\
             fFfffFfFmDdDdDdDdDdDd\n\
             fFfffFfFMDddDdDdDdDdD\n\
             fFfffFfFmdddDdddDDdDd\n\
             fFFFFFfFmdDdddDdddDDD\n\
             fffffffFmDddDdddDDdDd\n"
        );
    }

    #[test]
    fn test_build_1234_m() {
        let qr = build("1234", ECLevel::M);
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffFMdDDdFfffffff\n\
             fFFFFFfFmDdDDFfFFFFFf\n\
             fFfffFfFMDDDdFfFfffFf\n\
             fFfffFfFMdDDdFfFfffFf\n\
             fFfffFfFmdDddFfFfffFf\n\
             fFFFFFfFMDDdDFfFFFFFf\n\
             fffffffFfFfFfFfffffff\n\
             FFFFFFFFMdDDDFFFFFFFF\n\
             mMmMmMfMMdDDdMMMmMMmM\n\
             dddDdDFDdDddDdDdDDDDd\n\
             dDDddDfdDdDdDdddDDdDD\n\
             DDDdddFddDddddDdddDDd\n\
             dDDdDdfdddddDdddDDddd\n\
             FFFFFFFFmddDDDdDDDddD\n\
             fffffffFMDDDdDDDdDDDd\n\
             fFFFFFfFMdDDDDdDDDdDD\n\
             fFfffFfFmddDdDdDdDdDd\n\
             fFfffFfFMdddDdDdDdDdD\n\
             fFfffFfFmDDdDdddDddDd\n\
             fFFFFFfFMDDdddDdddDDD\n\
             fffffffFmdDdDdddDddDd\n"
        );
        assert_eq!(qr.mask(), Some(MaskPattern::CHECKERBOARD));
    }

    #[test_case(""; "empty")]
    #[test_case("abc"; "letters")]
    #[test_case("--/--"; "punctuation")]
    fn test_build_without_digits_is_blank(data: &str) {
        for ecl in [ECLevel::L, ECLevel::M] {
            let qr = build(data, ecl);
            assert_eq!(qr.size(), 21);
            assert_eq!(qr.count_dark_modules(), 0);
            assert_eq!(qr.mask(), None);
        }
    }

    #[test]
    fn test_build_ignores_separators() {
        assert_eq!(build("12-34", ECLevel::M), build("1234", ECLevel::M));
        assert_eq!(build("1 2 3 4 5", ECLevel::L), build("12345", ECLevel::L));
    }

    #[test]
    fn test_build_rejects_overflow() {
        let err = QRBuilder::new(&"7".repeat(35)).build().unwrap_err();
        assert_eq!(err, QRError::DataTooLong { len: 35, capacity: 34 });
        let err = QRBuilder::new(&"7".repeat(42)).ec_level(ECLevel::L).build().unwrap_err();
        assert_eq!(err, QRError::DataTooLong { len: 42, capacity: 41 });
    }

    #[test]
    fn test_build_at_capacity() {
        assert!(QRBuilder::new(&"7".repeat(34)).build().is_ok());
        assert!(QRBuilder::new(&"7".repeat(41)).ec_level(ECLevel::L).build().is_ok());
    }

    // Unmasks the data modules in placement order back into codewords
    fn read_codewords(qr: &QR) -> Vec<u8> {
        let mask_fn = MaskPattern::CHECKERBOARD.mask_function();
        let bits = EncRegionIter::new(Version::V1)
            .filter_map(|(r, c)| match qr.get(r, c) {
                Module::Data(clr) => Some((clr == Color::Dark) != mask_fn(r, c)),
                _ => None,
            })
            .collect::<Vec<_>>();
        bits.chunks(8).map(|b| b.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8)).collect()
    }

    #[test_case("01234567", ECLevel::M, &[16, 32, 12, 86, 97, 128, 236, 17]; "iso example m")]
    #[test_case("1234567", ECLevel::L, &[16, 28, 123, 114, 28, 0, 236, 17]; "seven digits l")]
    fn test_read_back_codewords(data: &str, ecl: ECLevel, head: &[u8]) {
        let qr = build(data, ecl);
        let codewords = read_codewords(&qr);
        assert_eq!(codewords.len(), 26);
        assert_eq!(&codewords[..head.len()], head);

        let digits = strip_non_digits(data);
        let bs = encode(&digits, Version::V1, ecl).unwrap();
        assert_eq!(codewords, append_ecc(bs.data(), Version::V1, ecl));
    }

    #[test]
    fn test_ec_level_changes_data_region() {
        let l = build("123", ECLevel::L);
        let m = build("123", ECLevel::M);
        assert_eq!(l.size(), m.size());
        let differs = (9..21).any(|r| (9..21).any(|c| l.get_bit(r, c) != m.get_bit(r, c)));
        assert!(differs);
    }
}

// Global constants
//------------------------------------------------------------------------------

const VERSION: Version = Version::V1;

const MASK: MaskPattern = MaskPattern::CHECKERBOARD;
