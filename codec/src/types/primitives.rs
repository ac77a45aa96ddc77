//! Codec implementations for Rust primitive types.
//!
//! Every primitive has a compile-time constant [`FixedSize::SIZE`] and is
//! encoded/decoded without configuration.
//!
//! ## Portability
//! * All fixed-size integers and floats are written big-endian to avoid host-
//!   endian ambiguity.
//! * `bool` is a single byte that must be `0` or `1`.
//! * `usize` is deliberately not supported; lengths go through the `u32`
//!   count prefix helpers in [`crate::util`].

use crate::{util::at_least, Error, FixedSize, Read, ReadExt, Write};
use bytes::{Buf, BufMut};

// Numeric types implementation
macro_rules! impl_numeric {
    ($type:ty, $read_method:ident, $write_method:ident) => {
        impl Write for $type {
            #[inline]
            fn write(&self, buf: &mut impl BufMut) {
                buf.$write_method(*self);
            }
        }

        impl Read for $type {
            type Cfg = ();
            #[inline]
            fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
                at_least(buf, std::mem::size_of::<$type>())?;
                Ok(buf.$read_method())
            }
        }

        impl FixedSize for $type {
            const SIZE: usize = std::mem::size_of::<$type>();
        }
    };
}

impl_numeric!(u8, get_u8, put_u8);
impl_numeric!(u16, get_u16, put_u16);
impl_numeric!(u32, get_u32, put_u32);
impl_numeric!(u64, get_u64, put_u64);
impl_numeric!(u128, get_u128, put_u128);
impl_numeric!(i8, get_i8, put_i8);
impl_numeric!(i16, get_i16, put_i16);
impl_numeric!(i32, get_i32, put_i32);
impl_numeric!(i64, get_i64, put_i64);
impl_numeric!(i128, get_i128, put_i128);
impl_numeric!(f32, get_f32, put_f32);
impl_numeric!(f64, get_f64, put_f64);

// Bool implementation
impl Write for bool {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(u8::from(*self));
    }
}

impl Read for bool {
    type Cfg = ();
    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        match u8::read(buf)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::InvalidBool),
        }
    }
}

impl FixedSize for bool {
    const SIZE: usize = 1;
}

// Constant-size array implementation (no length prefix, the length is part of the type)
impl<const N: usize> Write for [u8; N] {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_slice(&self[..]);
    }
}

impl<const N: usize> Read for [u8; N] {
    type Cfg = ();
    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        at_least(buf, N)?;
        let mut dst = [0; N];
        buf.copy_to_slice(&mut dst);
        Ok(dst)
    }
}

impl<const N: usize> FixedSize for [u8; N] {
    const SIZE: usize = N;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeExt, Encode, EncodeSize};
    use bytes::Bytes;
    use paste::paste;

    macro_rules! impl_num_test {
        ($type:ty) => {
            paste! {
                #[test]
                fn [<test_ $type>]() {
                    let expected_len = std::mem::size_of::<$type>();
                    let values: [$type; 5] =
                        [0 as $type, 1 as $type, 42 as $type, <$type>::MAX, <$type>::MIN];
                    for value in values.iter() {
                        let encoded = value.encode();
                        assert_eq!(encoded.len(), expected_len);
                        assert_eq!(value.encode_size(), expected_len);
                        let decoded = <$type>::decode(encoded).unwrap();
                        assert_eq!(value.to_be_bytes(), decoded.to_be_bytes());
                    }
                }
            }
        };
    }
    impl_num_test!(u8);
    impl_num_test!(u16);
    impl_num_test!(u32);
    impl_num_test!(u64);
    impl_num_test!(u128);
    impl_num_test!(i8);
    impl_num_test!(i16);
    impl_num_test!(i32);
    impl_num_test!(i64);
    impl_num_test!(i128);
    impl_num_test!(f32);
    impl_num_test!(f64);

    #[test]
    fn test_endianness() {
        assert_eq!(0x0102u16.encode(), Bytes::from_static(&[0x01, 0x02]));
        assert_eq!(
            0x01020304u32.encode(),
            Bytes::from_static(&[0x01, 0x02, 0x03, 0x04])
        );
        assert_eq!(
            (-2i32).encode(),
            Bytes::from_static(&[0xFF, 0xFF, 0xFF, 0xFE])
        );
        assert_eq!(1.0f32.encode(), Bytes::from_static(&[0x3F, 0x80, 0x00, 0x00]));
        assert_eq!(
            (-1.0f64).encode(),
            &[0xBF, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00][..]
        );
    }

    #[test]
    fn test_float_bits_preserved() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.0, 3.14159] {
            let decoded = f64::decode(value.encode()).unwrap();
            assert_eq!(value.to_bits(), decoded.to_bits());
        }
    }

    #[test]
    fn test_bool() {
        assert_eq!(true.encode(), &[0x01][..]);
        assert_eq!(false.encode(), &[0x00][..]);
        assert!(bool::decode(&[0x01][..]).unwrap());
        assert!(!bool::decode(&[0x00][..]).unwrap());
        assert!(matches!(bool::decode(&[0x02][..]), Err(Error::InvalidBool)));
    }

    #[test]
    fn test_array() {
        let values = [1u8, 2, 3];
        let encoded = values.encode();
        assert_eq!(encoded, &[1, 2, 3][..]);
        assert_eq!(<[u8; 3]>::decode(encoded).unwrap(), values);

        let zero = [0u8; 20];
        assert_eq!(zero.encode().len(), 20);
        assert_eq!(<[u8; 20]>::decode(zero.encode()).unwrap(), zero);
        assert!(matches!(
            <[u8; 20]>::decode(&[0u8; 19][..]),
            Err(Error::EndOfBuffer)
        ));
    }
}
