//! Key serialization
//!
//! A [`ProvingKey`] encodes as its basis followed by the sigma-scaled basis,
//! each a length-prefixed sequence of G1 elements; a [`VerifyingKey`] as its
//! two fixed-size G2 elements. Point encoding is delegated bit-for-bit to
//! the group layer's codec: compressed for `write_to`/`read_from`,
//! uncompressed for the raw variants. Default decoding validates every
//! point (on-curve and subgroup); [`VerifyingKey::read_from_unchecked`]
//! skips validation and must only be used on trusted bytes, e.g. re-reading
//! one's own prior output.

use crate::errors::{PedersenError, Result};
use crate::setup::{ProvingKey, VerifyingKey};
use ark_ec::pairing::Pairing;
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, Read, SerializationError, Valid, Validate,
    Write,
};

impl<E: Pairing> Valid for ProvingKey<E> {
    fn check(&self) -> core::result::Result<(), SerializationError> {
        self.basis.check()?;
        self.basis_exp_sigma.check()?;
        if self.basis.len() != self.basis_exp_sigma.len() {
            return Err(SerializationError::InvalidData);
        }
        Ok(())
    }
}

impl<E: Pairing> CanonicalSerialize for ProvingKey<E> {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> core::result::Result<(), SerializationError> {
        self.basis.serialize_with_mode(&mut writer, compress)?;
        self.basis_exp_sigma.serialize_with_mode(&mut writer, compress)
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        self.basis.serialized_size(compress) + self.basis_exp_sigma.serialized_size(compress)
    }
}

impl<E: Pairing> CanonicalDeserialize for ProvingKey<E> {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> core::result::Result<Self, SerializationError> {
        let basis = Vec::<E::G1Affine>::deserialize_with_mode(&mut reader, compress, validate)?;
        let basis_exp_sigma =
            Vec::<E::G1Affine>::deserialize_with_mode(&mut reader, compress, validate)?;
        if basis.len() != basis_exp_sigma.len() {
            return Err(SerializationError::InvalidData);
        }
        Ok(Self {
            basis,
            basis_exp_sigma,
        })
    }
}

impl<E: Pairing> ProvingKey<E> {
    /// Write the key in compressed point encoding.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        Ok(self.serialize_with_mode(writer, Compress::Yes)?)
    }

    /// Write the key in raw (uncompressed) point encoding.
    pub fn write_raw_to<W: Write>(&self, writer: W) -> Result<()> {
        Ok(self.serialize_with_mode(writer, Compress::No)?)
    }

    /// Read a compressed key, validating every point.
    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        Self::read_with_mode(reader, Compress::Yes)
    }

    /// Read a raw (uncompressed) key, validating every point.
    pub fn read_raw_from<R: Read>(reader: R) -> Result<Self> {
        Self::read_with_mode(reader, Compress::No)
    }

    fn read_with_mode<R: Read>(mut reader: R, compress: Compress) -> Result<Self> {
        let basis =
            Vec::<E::G1Affine>::deserialize_with_mode(&mut reader, compress, Validate::Yes)?;
        let basis_exp_sigma =
            Vec::<E::G1Affine>::deserialize_with_mode(&mut reader, compress, Validate::Yes)?;
        if basis.len() != basis_exp_sigma.len() {
            return Err(PedersenError::LengthMismatch(
                "decoded basis and scaled basis differ in length",
            ));
        }
        Ok(Self {
            basis,
            basis_exp_sigma,
        })
    }
}

impl<E: Pairing> Valid for VerifyingKey<E> {
    fn check(&self) -> core::result::Result<(), SerializationError> {
        self.g.check()?;
        self.g_sigma_neg.check()
    }
}

impl<E: Pairing> CanonicalSerialize for VerifyingKey<E> {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> core::result::Result<(), SerializationError> {
        self.g.serialize_with_mode(&mut writer, compress)?;
        self.g_sigma_neg.serialize_with_mode(&mut writer, compress)
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        self.g.serialized_size(compress) + self.g_sigma_neg.serialized_size(compress)
    }
}

impl<E: Pairing> CanonicalDeserialize for VerifyingKey<E> {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> core::result::Result<Self, SerializationError> {
        let g = E::G2Affine::deserialize_with_mode(&mut reader, compress, validate)?;
        let g_sigma_neg = E::G2Affine::deserialize_with_mode(&mut reader, compress, validate)?;
        Ok(Self { g, g_sigma_neg })
    }
}

impl<E: Pairing> VerifyingKey<E> {
    /// Write the key in compressed point encoding.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        Ok(self.serialize_with_mode(writer, Compress::Yes)?)
    }

    /// Write the key in raw (uncompressed) point encoding.
    pub fn write_raw_to<W: Write>(&self, writer: W) -> Result<()> {
        Ok(self.serialize_with_mode(writer, Compress::No)?)
    }

    /// Read a compressed key, validating both points.
    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::deserialize_with_mode(reader, Compress::Yes, Validate::Yes)?)
    }

    /// Read a raw (uncompressed) key, validating both points.
    pub fn read_raw_from<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::deserialize_with_mode(reader, Compress::No, Validate::Yes)?)
    }

    /// Read a compressed key without subgroup checks.
    ///
    /// Skipping validation reopens the attack the verifier's subgroup check
    /// exists to prevent; only use this on bytes from a trusted source.
    pub fn read_from_unchecked<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::deserialize_with_mode(reader, Compress::Yes, Validate::No)?)
    }
}
