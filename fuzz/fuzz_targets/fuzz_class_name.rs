#![no_main]

use jwriter_types::ClassName;
use libfuzzer_sys::fuzz_target;

mod utils;

fuzz_target!(|data: &[u8]| {
    let Some(text) = utils::truncate_utf8(data) else {
        return;
    };

    if let Ok(name) = ClassName::parse(text) {
        let canonical = name.canonical_name();
        assert_eq!(ClassName::parse(&canonical).as_ref(), Ok(&name));
        // `$` is legal inside a simple name but reads as a nesting separator in binary names.
        if !canonical.contains('$') {
            assert_eq!(ClassName::from_binary_name(&name.binary_name()).as_ref(), Ok(&name));
        }
    }

    if let Ok(name) = ClassName::from_binary_name(text) {
        assert_eq!(name.binary_name(), text);
    }
});
