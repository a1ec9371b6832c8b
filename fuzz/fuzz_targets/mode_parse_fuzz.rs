#![no_main]
use chardiff::Mode;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(selector) = std::str::from_utf8(data) else {
        return;
    };
    // Anything that parses must print back to a selector that parses the same.
    if let Ok(mode) = selector.parse::<Mode>() {
        assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
    }
    let _ = chardiff::diff(Some("abc"), Some("abd"), Some(selector));
});
