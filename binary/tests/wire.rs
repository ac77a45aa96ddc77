//! Round trips and pinned byte layouts.

mod common;

use common::{registry, Aborted, MemoryRange, Observation};
use objwire_binary::{
    any::{Float64, Float64Slice, IdSlice, ObjectSlice, Text, Uint8},
    read_objects, stream, Config, Error, Id, Object, Registry, Value,
};
use bytes::{Buf, BufMut};
use objwire_codec::{Encode, EncodeSize, Error as CodecError, FixedSize, ReadExt, Write};
use objwire_schema::{
    id::{from_hex, hex},
    Entity, Method, Type,
};
use std::sync::LazyLock;

fn id_of<T: Value>() -> String {
    T::entity().id().to_string()
}

#[test]
fn test_golden_ids() {
    assert_eq!(id_of::<Float64>(), "e1a2184dfdabdcbedf299632499fed70eb1bbf8c");
    assert_eq!(id_of::<Float64Slice>(), "bf5d3210c50c19c3c5346a84effd37e59a9198d7");
    assert_eq!(id_of::<ObjectSlice>(), "9b69964511d7bb45bafb36e0eb937fcc3619f976");
    assert_eq!(id_of::<MemoryRange>(), "7d510f10d96b2b2d04c9161fb171293b68b98beb");
    assert_eq!(id_of::<Aborted>(), "c64d356ea5992a36ce09f0ed3e9626a7ef147bb1");
}

#[test]
fn test_golden_range() {
    let range = MemoryRange {
        base: 0x1000,
        size: 0x20,
    };
    assert_eq!(
        hex(&stream::encode(&range)),
        concat!(
            "7d510f10d96b2b2d04c9161fb171293b68b98beb",
            "0000000000001000",
            "0000000000000020",
        )
    );
}

#[test]
fn test_golden_aborted() {
    let aborted = Aborted {
        is_assert: true,
        reason: "oops".into(),
    };
    assert_eq!(
        hex(&aborted.encode()),
        concat!("01", "00000004", "6f6f7073")
    );
}

#[test]
fn test_boxed_float_bit_exact() {
    let registry = registry();
    let encoded = stream::encode(&Float64(3.14159));
    assert_eq!(
        hex(&encoded),
        "e1a2184dfdabdcbedf299632499fed70eb1bbf8c400921f9f01b866e"
    );

    let decoded = stream::decode(encoded, &registry).unwrap();
    let value = decoded.downcast::<Float64>().unwrap();
    assert_eq!(value.0.to_bits(), 3.14159f64.to_bits());
}

#[test]
fn test_empty_float_sequence() {
    let empty: Vec<f64> = Vec::new();
    assert_eq!(empty.encode().as_ref(), &[0, 0, 0, 0]);

    let boxed = Float64Slice(empty);
    let encoded = stream::encode(&boxed);
    assert_eq!(&encoded[Id::SIZE..], &[0, 0, 0, 0]);

    let registry = registry();
    let decoded = stream::decode(encoded, &registry).unwrap();
    assert_eq!(decoded.downcast_ref::<Float64Slice>(), Some(&boxed));
}

/// A second float box under its own entity name.
#[derive(Clone, Debug, Default, PartialEq)]
struct Celsius(f64);

impl Write for Celsius {
    fn write(&self, buf: &mut impl BufMut) {
        self.0.write(buf);
    }
}

impl EncodeSize for Celsius {
    fn encode_size(&self) -> usize {
        self.0.encode_size()
    }
}

impl Value for Celsius {
    fn entity() -> &'static Entity {
        static ENTITY: LazyLock<Entity> = LazyLock::new(|| {
            Entity::new("weather", "celsius").with_field("Value", Type::method(Method::Float64))
        });
        &ENTITY
    }

    fn read_value(buf: &mut impl Buf, _: &Registry) -> Result<Self, Error> {
        Ok(Self(f64::read(buf)?))
    }
}

#[test]
fn test_heterogeneous_floats() {
    let registry = registry();
    registry.register::<Celsius>().unwrap();

    let objects: Vec<Box<dyn Object>> = vec![Box::new(Float64(1.0)), Box::new(Celsius(2.0))];
    let encoded = objects.encode();

    // count, then id + body per element
    let mut expected = String::from("00000002");
    expected.push_str(&id_of::<Float64>());
    expected.push_str("3ff0000000000000");
    expected.push_str(&id_of::<Celsius>());
    expected.push_str("4000000000000000");
    assert_eq!(hex(&encoded), expected);

    let decoded = read_objects(&mut encoded.freeze(), &registry).unwrap();
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded[0].downcast_ref::<Float64>(), Some(&Float64(1.0)));
    assert!(!decoded[0].is::<Celsius>());
    assert_eq!(decoded[1].downcast_ref::<Celsius>(), Some(&Celsius(2.0)));
    assert_eq!(decoded, objects);
}

#[test]
fn test_heterogeneous_round_trip() {
    let registry = registry();
    let objects = ObjectSlice(vec![
        Box::new(MemoryRange { base: 1, size: 2 }),
        Box::new(Aborted {
            is_assert: false,
            reason: String::new(),
        }),
        Box::new(Text("ok".into())),
        Box::new(IdSlice(vec![Id::ZERO, MemoryRange::entity().id()])),
        Box::new(ObjectSlice(vec![])),
    ]);
    let decoded = stream::decode(stream::encode(&objects), &registry).unwrap();
    assert_eq!(decoded.downcast_ref::<ObjectSlice>(), Some(&objects));
}

#[test]
fn test_nested_record() {
    let registry = registry();
    let observations = [
        Observation::default(),
        Observation {
            range: MemoryRange {
                base: u64::MAX,
                size: 0,
            },
            data: vec![0, 255, 7],
            extra: Some(Box::new(Aborted {
                is_assert: true,
                reason: "assert".into(),
            })),
        },
    ];
    for observation in observations {
        let encoded = stream::encode(&observation);
        // id, inline range (no id), data, extra slot
        let extra = observation.extra.as_ref().map_or(Id::SIZE, |extra| {
            Id::SIZE + extra.fields_size()
        });
        assert_eq!(
            encoded.len(),
            Id::SIZE + 16 + 4 + observation.data.len() + extra
        );
        let decoded = stream::decode(encoded, &registry).unwrap();
        assert_eq!(decoded.downcast_ref::<Observation>(), Some(&observation));
    }
}

#[test]
fn test_unknown_type_aborts_sequence() {
    let registry = Registry::default();
    registry.register::<Float64>().unwrap();

    let objects: Vec<Box<dyn Object>> = vec![
        Box::new(Float64(1.0)),
        Box::new(Uint8(1)),
        Box::new(Float64(2.0)),
    ];
    let encoded = objects.encode();
    assert!(matches!(
        read_objects(&mut encoded.freeze(), &registry),
        Err(Error::UnknownType(id)) if id == Uint8::entity().id()
    ));
}

#[test]
fn test_hostile_count() {
    let registry = registry();
    let mut encoded = from_hex(&id_of::<ObjectSlice>()).unwrap();
    encoded.extend_from_slice(&[0xff, 0xff, 0xff, 0xff]);
    assert!(matches!(
        stream::decode(encoded.as_slice(), &registry),
        Err(Error::Codec(CodecError::EndOfBuffer))
    ));

    let bounded = Registry::new(Config {
        max_length: 16,
        ..Default::default()
    });
    objwire_binary::any::register(&bounded).unwrap();
    assert!(matches!(
        stream::decode(encoded.as_slice(), &bounded),
        Err(Error::Codec(CodecError::InvalidLength(0xffff_ffff)))
    ));
}

#[test]
fn test_invalid_payloads() {
    let registry = registry();

    // bool must be 0 or 1
    let mut bad_bool = from_hex(&id_of::<Aborted>()).unwrap();
    bad_bool.extend_from_slice(&[2, 0, 0, 0, 0]);
    assert!(matches!(
        stream::decode(bad_bool.as_slice(), &registry),
        Err(Error::Codec(CodecError::InvalidBool))
    ));

    // text must be utf-8
    let mut bad_text = from_hex(&id_of::<Text>()).unwrap();
    bad_text.extend_from_slice(&[0, 0, 0, 1, 0xff]);
    assert!(matches!(
        stream::decode(bad_text.as_slice(), &registry),
        Err(Error::Codec(CodecError::Invalid(_, _)))
    ));
}

/// `levels` object slices, each holding the next, the innermost empty.
fn nested_slices(levels: usize) -> Vec<u8> {
    let id = from_hex(&id_of::<ObjectSlice>()).unwrap();
    let mut encoded = id.clone();
    for _ in 1..levels {
        encoded.extend_from_slice(&[0, 0, 0, 1]);
        encoded.extend_from_slice(&id);
    }
    encoded.extend_from_slice(&[0, 0, 0, 0]);
    encoded
}

#[test]
fn test_nesting_limit() {
    let registry = registry();
    let max_depth = registry.config().max_depth;

    let decoded = stream::decode(nested_slices(max_depth).as_slice(), &registry).unwrap();
    assert!(decoded.is::<ObjectSlice>());

    for levels in [max_depth + 1, 2_000, 30_000] {
        assert!(matches!(
            stream::decode(nested_slices(levels).as_slice(), &registry),
            Err(Error::Codec(CodecError::Invalid("object", "nesting too deep")))
        ));
    }
}

#[test]
fn test_nesting_limit_configurable() {
    let registry = Registry::new(Config {
        max_depth: 3,
        ..Default::default()
    });
    objwire_binary::any::register(&registry).unwrap();
    assert!(stream::decode(nested_slices(3).as_slice(), &registry).is_ok());
    assert!(stream::decode(nested_slices(4).as_slice(), &registry).is_err());
}
