//! The ledger entry that carries encoded token metadata.

use crate::error::{DecodeError, ValidationError};
use crate::model::MPTokenMetadata;
use crate::{codec, validate};

/// Issuance flag bits stored in [`MPTokenIssuance::flags`].
pub mod flags {
    pub const LSF_MPT_LOCKED: u32 = 0x0000_0001;
    pub const LSF_MPT_CAN_LOCK: u32 = 0x0000_0002;
    pub const LSF_MPT_REQUIRE_AUTH: u32 = 0x0000_0004;
    pub const LSF_MPT_CAN_ESCROW: u32 = 0x0000_0008;
    pub const LSF_MPT_CAN_TRADE: u32 = 0x0000_0010;
    pub const LSF_MPT_CAN_TRANSFER: u32 = 0x0000_0020;
    pub const LSF_MPT_CAN_CLAWBACK: u32 = 0x0000_0040;
}

/// A multi-purpose token issuance ledger entry.
///
/// Only `mptoken_metadata` is interpreted by this crate; it holds the hex
/// produced by [`codec::encode_metadata`] verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MPTokenIssuance {
    /// Classic address of the issuing account.
    pub issuer: String,
    pub sequence: u32,
    pub flags: u32,
    pub asset_scale: Option<u8>,
    /// Decimal string, as amounts are carried on the ledger.
    pub maximum_amount: Option<String>,
    pub outstanding_amount: String,
    /// Fee in units of 1/100,000; at most 50,000.
    pub transfer_fee: Option<u16>,
    pub mptoken_metadata: Option<String>,
}

impl MPTokenIssuance {
    fn has_flag(&self, flag: u32) -> bool {
        self.flags & flag != 0
    }

    pub fn is_locked(&self) -> bool {
        self.has_flag(flags::LSF_MPT_LOCKED)
    }

    pub fn can_lock(&self) -> bool {
        self.has_flag(flags::LSF_MPT_CAN_LOCK)
    }

    pub fn requires_auth(&self) -> bool {
        self.has_flag(flags::LSF_MPT_REQUIRE_AUTH)
    }

    pub fn can_escrow(&self) -> bool {
        self.has_flag(flags::LSF_MPT_CAN_ESCROW)
    }

    pub fn can_trade(&self) -> bool {
        self.has_flag(flags::LSF_MPT_CAN_TRADE)
    }

    pub fn can_transfer(&self) -> bool {
        self.has_flag(flags::LSF_MPT_CAN_TRANSFER)
    }

    pub fn can_clawback(&self) -> bool {
        self.has_flag(flags::LSF_MPT_CAN_CLAWBACK)
    }

    /// Decodes the stored metadata, if any.
    pub fn metadata(&self) -> Option<Result<MPTokenMetadata, DecodeError>> {
        self.mptoken_metadata
            .as_deref()
            .map(codec::decode_metadata)
    }

    /// Validates the stored metadata. An entry without metadata has nothing to
    /// report.
    pub fn validate_metadata(&self) -> Vec<ValidationError> {
        self.mptoken_metadata
            .as_deref()
            .map(validate::validate_metadata)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AssetClass, MetadataBuilder};

    #[test]
    fn test_flag_accessors() {
        let issuance = MPTokenIssuance {
            flags: flags::LSF_MPT_CAN_LOCK | flags::LSF_MPT_CAN_TRANSFER,
            ..Default::default()
        };

        assert!(issuance.can_lock());
        assert!(issuance.can_transfer());
        assert!(!issuance.is_locked());
        assert!(!issuance.requires_auth());
        assert!(!issuance.can_escrow());
        assert!(!issuance.can_trade());
        assert!(!issuance.can_clawback());
    }

    #[test]
    fn test_metadata_passthrough() {
        let md = MetadataBuilder::new("TBILL", "T-Bill", "icon.png", AssetClass::Defi, "Org").build();
        let issuance = MPTokenIssuance {
            mptoken_metadata: Some(md.to_hex().unwrap()),
            ..Default::default()
        };

        assert_eq!(issuance.metadata(), Some(Ok(md)));
        assert!(issuance.validate_metadata().is_empty());
    }

    #[test]
    fn test_no_metadata() {
        let issuance = MPTokenIssuance::default();
        assert!(issuance.metadata().is_none());
        assert!(issuance.validate_metadata().is_empty());
    }

    #[test]
    fn test_invalid_stored_metadata() {
        let issuance = MPTokenIssuance {
            mptoken_metadata: Some("ZZ".into()),
            ..Default::default()
        };
        assert_eq!(issuance.metadata(), Some(Err(DecodeError::InvalidHex)));
        assert_eq!(issuance.validate_metadata(), vec![ValidationError::InvalidHex]);
    }
}
