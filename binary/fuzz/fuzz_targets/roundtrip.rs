#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use objwire_binary::{any::*, stream, verify, Object, Registry};
use objwire_schema::Id;
use std::sync::LazyLock;

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    let registry = Registry::default();
    register(&registry).expect("failed to register built-in types");
    registry.seal();
    registry
});

#[derive(Arbitrary, Debug)]
enum Input {
    Bool(bool),
    Int64(i64),
    Uint16(u16),
    Float32(f32),
    Float64(f64),
    Text(String),
    Bytes(Vec<u8>),
    Floats(Vec<f64>),
    Texts(Vec<String>),
    Ids(Vec<[u8; 20]>),
    Mixed(Vec<(u64, String)>),
}

fn object(input: Input) -> Box<dyn Object> {
    match input {
        Input::Bool(v) => Box::new(Bool(v)),
        Input::Int64(v) => Box::new(Int64(v)),
        Input::Uint16(v) => Box::new(Uint16(v)),
        Input::Float32(v) => Box::new(Float32(v)),
        Input::Float64(v) => Box::new(Float64(v)),
        Input::Text(v) => Box::new(Text(v)),
        Input::Bytes(v) => Box::new(Uint8Slice(v)),
        Input::Floats(v) => Box::new(Float64Slice(v)),
        Input::Texts(v) => Box::new(TextSlice(v)),
        Input::Ids(v) => Box::new(IdSlice(v.into_iter().map(Id::from).collect())),
        Input::Mixed(v) => Box::new(ObjectSlice(
            v.into_iter()
                .flat_map(|(n, s)| -> [Box<dyn Object>; 2] { [Box::new(Uint64(n)), Box::new(Text(s))] })
                .collect(),
        )),
    }
}

fuzz_target!(|input: Input| {
    let object = object(input);
    verify::layout(object.as_ref(), &REGISTRY).expect("layout mismatch");

    let encoded = stream::encode(object.as_ref());
    let decoded = stream::decode(encoded.clone(), &REGISTRY).expect("failed to decode");

    // Compare bytes rather than values so NaN payloads round trip too.
    assert_eq!(stream::encode(decoded.as_ref()), encoded);
});
