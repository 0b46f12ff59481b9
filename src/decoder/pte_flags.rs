//! Named view over a raw PTE flag bitmask.
//!
//! Only the low attribute bits (0-11) and NX (63) are decoded. The physical
//! frame number and protection-key bits in between are not represented, so
//! `DecodedFlags::reconstruct` is lossy for any bitmask with bits outside
//! `DECODED_MASK`.

/// One decoded PTE attribute bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PteFlag {
    Present,
    ReadWrite,
    UserSupervisor,
    PageWriteThrough,
    PageCacheDisable,
    Accessed,
    Dirty,
    /// PAT on 4 KiB pages, PS on higher levels
    Pat,
    Global,
    Soft1,
    Soft2,
    Soft3,
    NoExecute,
}

impl PteFlag {
    /// Every decoded field, in column order
    pub const ALL: [PteFlag; 13] = [
        PteFlag::Present,
        PteFlag::ReadWrite,
        PteFlag::UserSupervisor,
        PteFlag::PageWriteThrough,
        PteFlag::PageCacheDisable,
        PteFlag::Accessed,
        PteFlag::Dirty,
        PteFlag::Pat,
        PteFlag::Global,
        PteFlag::Soft1,
        PteFlag::Soft2,
        PteFlag::Soft3,
        PteFlag::NoExecute,
    ];

    /// Bit position within the PTE
    pub const fn bit(self) -> u32 {
        match self {
            PteFlag::Present => 0,
            PteFlag::ReadWrite => 1,
            PteFlag::UserSupervisor => 2,
            PteFlag::PageWriteThrough => 3,
            PteFlag::PageCacheDisable => 4,
            PteFlag::Accessed => 5,
            PteFlag::Dirty => 6,
            PteFlag::Pat => 7,
            PteFlag::Global => 8,
            PteFlag::Soft1 => 9,
            PteFlag::Soft2 => 10,
            PteFlag::Soft3 => 11,
            PteFlag::NoExecute => 63,
        }
    }

    /// Short column label used in reports
    pub const fn label(self) -> &'static str {
        match self {
            PteFlag::Present => "P",
            PteFlag::ReadWrite => "R/W",
            PteFlag::UserSupervisor => "U/S",
            PteFlag::PageWriteThrough => "PWT",
            PteFlag::PageCacheDisable => "PCD",
            PteFlag::Accessed => "A",
            PteFlag::Dirty => "D",
            PteFlag::Pat => "PAT",
            PteFlag::Global => "G",
            PteFlag::Soft1 => "Soft1",
            PteFlag::Soft2 => "Soft2",
            PteFlag::Soft3 => "Soft3",
            PteFlag::NoExecute => "NX",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PteFlag::Present => "Present",
            PteFlag::ReadWrite => "ReadWrite",
            PteFlag::UserSupervisor => "UserSupervisor",
            PteFlag::PageWriteThrough => "PageWriteThrough",
            PteFlag::PageCacheDisable => "PageCacheDisable",
            PteFlag::Accessed => "Accessed",
            PteFlag::Dirty => "Dirty",
            PteFlag::Pat => "PAT",
            PteFlag::Global => "Global",
            PteFlag::Soft1 => "Soft1",
            PteFlag::Soft2 => "Soft2",
            PteFlag::Soft3 => "Soft3",
            PteFlag::NoExecute => "NoExecute",
        }
    }

    pub const fn mask(self) -> u64 {
        1u64 << self.bit()
    }
}

/// Bits that survive a decode/reconstruct round trip
pub const DECODED_MASK: u64 = {
    let mut mask = 0u64;
    let mut i = 0;
    while i < PteFlag::ALL.len() {
        mask |= PteFlag::ALL[i].mask();
        i += 1;
    }
    mask
};

/// Read-only projection of a bitmask onto the named PTE fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedFlags {
    raw: u64,
}

/// Decode a bitmask. Total over `u64`; never fails.
pub fn decode(raw: u64) -> DecodedFlags {
    DecodedFlags { raw }
}

impl DecodedFlags {
    /// The source bitmask
    pub fn raw(&self) -> u64 {
        self.raw
    }

    /// Value of one field, 0 or 1
    pub fn get(&self, flag: PteFlag) -> u8 {
        ((self.raw >> flag.bit()) & 1) as u8
    }

    pub fn is_set(&self, flag: PteFlag) -> bool {
        self.get(flag) == 1
    }

    /// All fields in column order
    pub fn fields(&self) -> impl Iterator<Item = (PteFlag, u8)> + '_ {
        PteFlag::ALL.iter().map(move |&f| (f, self.get(f)))
    }

    /// OR each decoded field back to its bit position.
    ///
    /// Equals `raw() & DECODED_MASK`.
    pub fn reconstruct(&self) -> u64 {
        self.fields()
            .fold(0u64, |acc, (f, v)| acc | (u64::from(v) << f.bit()))
    }

    /// Bits present in the source but not covered by any field
    pub fn undecoded_bits(&self) -> u64 {
        self.raw & !DECODED_MASK
    }

    /// Lowercase `0x`-prefixed hex of the source bitmask
    pub fn hex(&self) -> String {
        format!("0x{:x}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_and_nx() {
        let d = decode(0x8000_0000_0000_0001);
        for (flag, value) in d.fields() {
            let expected = matches!(flag, PteFlag::Present | PteFlag::NoExecute) as u8;
            assert_eq!(value, expected, "{}", flag.name());
        }
    }

    #[test]
    fn test_each_bit_maps_to_one_field() {
        for flag in PteFlag::ALL {
            let d = decode(flag.mask());
            assert_eq!(d.fields().filter(|&(_, v)| v == 1).count(), 1);
            assert!(d.is_set(flag));
        }
    }

    #[test]
    fn test_decoded_mask() {
        assert_eq!(DECODED_MASK, 0x8000_0000_0000_0fff);
    }

    #[test]
    fn test_reconstruct_is_lossy_outside_mask() {
        let raw = 0x8000_0001_2345_6867;
        let d = decode(raw);
        assert_eq!(d.reconstruct(), raw & DECODED_MASK);
        assert_eq!(d.undecoded_bits(), 0x0000_0001_2345_6000);
        assert_eq!(d.reconstruct() | d.undecoded_bits(), raw);
    }

    #[test]
    fn test_hex() {
        assert_eq!(decode(0x8000_0000_0000_0001).hex(), "0x8000000000000001");
        assert_eq!(decode(0).hex(), "0x0");
    }
}
