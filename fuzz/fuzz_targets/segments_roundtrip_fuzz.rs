#![no_main]
use chardiff::{SegmentKind, diff_segments};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the split point; the rest is two lossy-UTF-8 texts.
    let payload = &data[1..];
    let split = (data[0] as usize).min(payload.len());
    let old = String::from_utf8_lossy(&payload[..split]);
    let new = String::from_utf8_lossy(&payload[split..]);

    let segs = diff_segments(Some(&*old), Some(&*new));
    assert_eq!(segs.old_text(), old);
    assert_eq!(segs.new_text(), new);

    for pair in segs.as_slice().windows(2) {
        assert_ne!(pair[0].kind(), pair[1].kind());
        assert!(
            !(pair[0].kind() == SegmentKind::Inserted && pair[1].kind() == SegmentKind::Deleted)
        );
    }
});
