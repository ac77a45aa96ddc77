#![no_main]

use libfuzzer_sys::fuzz_target;
use objwire_binary::{any, stream, Config, Registry};
use std::sync::LazyLock;

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    let registry = Registry::new(Config {
        max_length: 1024,
        ..Default::default()
    });
    any::register(&registry).expect("failed to register built-in types");
    registry.seal();
    registry
});

fuzz_target!(|data: &[u8]| {
    // Any input that decodes must re-encode to the same bytes.
    if let Ok(object) = stream::decode(data, &REGISTRY) {
        assert_eq!(&stream::encode(object.as_ref())[..], data);
    }
});
