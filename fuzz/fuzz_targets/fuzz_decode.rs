#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp::{AlphaMode, DecodeRequest, ImageInfo, Limits};

fuzz_target!(|data: &[u8]| {
    // Keep allocations bounded; the decoder checks the body length first,
    // but a valid header plus a huge body would still be slow.
    let limits = Limits {
        max_memory_bytes: Some(256 * 1024 * 1024),
        ..Default::default()
    };

    // Must never panic
    let probed = ImageInfo::from_bytes(data);
    let decoded = DecodeRequest::new(data)
        .with_limits(&limits)
        .with_alpha_mode(AlphaMode::Auto)
        .decode();

    if let Ok(image) = decoded {
        let info = probed.expect("decode succeeded but probe failed");
        assert_eq!((info.width, info.height), (image.width, image.height));
        assert_eq!(
            image.pixels().len(),
            image.width as usize * image.height as usize * 4
        );
        // All-or-nothing and deterministic
        let again = DecodeRequest::new(data).with_limits(&limits).decode();
        assert_eq!(again.as_ref(), Ok(&image));
    }
});
