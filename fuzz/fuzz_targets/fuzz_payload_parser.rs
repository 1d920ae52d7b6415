#![no_main]

use libfuzzer_sys::fuzz_target;
use parcel_capture::{CaptureSession, ParcelPayload};

fuzz_target!(|data: &[u8]| {
    let Ok(payload) = serde_json::from_slice::<ParcelPayload>(data) else {
        return;
    };

    // Beliebige gespeicherte Datensätze dürfen das Laden nie zum Absturz bringen
    let mut session = CaptureSession::new();
    let loaded = session.load_existing(
        payload.geometry.clone(),
        payload.area,
        Some(payload.center()),
        payload.capture_mode,
    );

    if loaded.is_ok() {
        assert!(session.is_ready_to_persist());
    }
});
