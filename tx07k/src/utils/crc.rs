//! CRC validation for sensor frames.
//!
//! Provides the CRC-4 implementation covering the 40-bit frame, with its
//! recovered parameters.
//!
//! Note: the CRC calculation used here is specific to the TX07K-THC
//! protocol and is not a standard CRC implementation. Each message nibble
//! is folded into the remainder after the four shift steps of its round,
//! not before them. With an all-zero initial value this makes the checksum
//! of a single-nibble message the nibble itself.

/// CRC algorithm specification with polynomial and initial value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Algorithm {
    pub poly: u8,
    pub init: u8,
}

/// CRC-4 algorithm validating sensor frames.
pub const CRC_FRAME_ALG: Algorithm = Algorithm {
    poly: 0x3,
    init: 0x0,
};

/// Advances a 4-bit remainder by `len` shift steps of the polynomial.
#[inline(always)]
pub const fn crc4(poly: u8, mut value: u8, len: usize) -> u8 {
    let mut i = 0;
    while i < len {
        value = ((value << 1) ^ (((value >> 3) & 1) * poly)) & 0xF;
        i += 1;
    }

    value
}

#[inline(always)]
const fn crc4_table(poly: u8) -> [u8; 16] {
    let mut table = [0u8; 16];
    let mut i = 0;
    while i < table.len() {
        table[i] = crc4(poly, i as u8, 4);
        i += 1;
    }

    table
}

#[derive(Debug)]
pub struct Crc4 {
    pub poly: u8,
    pub init: u8,
    table: [u8; 16],
}

impl Crc4 {
    pub const fn new(algorithm: &Algorithm) -> Self {
        Self {
            poly: algorithm.poly,
            init: algorithm.init,
            table: crc4_table(algorithm.poly),
        }
    }

    const fn table_entry(&self, index: u8) -> u8 {
        self.table[(index & 0xF) as usize]
    }

    /// Folds `nibbles` into a running remainder.
    ///
    /// The remainder is advanced four steps first, then the nibble is
    /// XORed in; a standard CRC-4 does it the other way around.
    #[inline(always)]
    pub const fn update(&self, mut crc: u8, nibbles: &[u8]) -> u8 {
        let mut i = 0;

        while i < nibbles.len() {
            crc = self.table_entry(crc) ^ nibbles[i];
            i += 1;
        }

        crc & 0xF
    }

    /// Computes the checksum of a complete message.
    #[inline(always)]
    pub const fn checksum(&self, nibbles: &[u8]) -> u8 {
        self.update(self.init, nibbles)
    }
}

#[test]
fn single_step() {
    // Carry out of bit 3 pulls in the polynomial.
    assert_eq!(crc4(0x3, 0x8, 1), 0x3);
    assert_eq!(crc4(0x3, 0x1, 1), 0x2);
    assert_eq!(crc4(0x3, 0xC, 1), 0xB);
}

#[test]
fn empty_message_is_init() {
    let crc = Crc4::new(&Algorithm { poly: 0x3, init: 0x9 });

    assert_eq!(crc.checksum(&[]), 0x9);
}

#[test]
fn single_nibble_is_identity_with_zero_init() {
    let crc = Crc4::new(&CRC_FRAME_ALG);

    for nibble in 0x0..=0xF {
        assert_eq!(crc.checksum(&[nibble]), nibble);
    }
}

#[test]
fn known_frame_messages() {
    let crc = Crc4::new(&CRC_FRAME_ALG);

    // Permuted nibble messages of recorded frames with their checksums.
    assert_eq!(crc.checksum(&[5, 0, 1, 4, 6, 4, 7, 4, 8]), 0xF);
    assert_eq!(crc.checksum(&[1, 2, 0, 4, 5, 6, 7, 8, 9]), 0x2);
    assert_eq!(crc.checksum(&[0; 9]), 0x0);
    assert_eq!(crc.checksum(&[0xF; 9]), 0xA);
}

#[test]
fn update_is_incremental() {
    let crc = Crc4::new(&CRC_FRAME_ALG);
    let message = [5, 0, 1, 4, 6, 4, 7, 4, 8];

    let head = crc.update(crc.init, &message[..4]);
    assert_eq!(crc.update(head, &message[4..]), crc.checksum(&message));
}
