mod common;

use embassy_time::Instant;
use numpad::colors::{BLACK, RED, WHITE};
use numpad::config::LightConfig;
use numpad::light::encoder::{BITS_PER_LED, ONE_CODE, RESET_SLOTS, TRANSFER_LEN, ZERO_CODE};
use numpad::light::{Backlight, BusyFlag, LightError, UpdateStatus};
use numpad::{LED_COUNT, LightMode, RGB8};

use crate::common::RecordingDriver;

#[test]
fn test_power_up_frame() {
    let busy = BusyFlag::new();
    let mut backlight = Backlight::new(RecordingDriver::default(), &busy, LightConfig::default());
    assert_eq!(backlight.mode(), LightMode::Static);
    assert_eq!(backlight.brightness(), 50);

    assert_eq!(backlight.request_update(), UpdateStatus::Started);
    assert!(backlight.is_busy());

    let frames = &backlight.transfer().driver().frames;
    assert_eq!(frames.len(), 1);
    let frame = &frames[0];
    assert_eq!(frame.len(), TRANSFER_LEN);
    // White at 50% is 127 = 0b0111_1111 on every channel
    let expected_byte = [ZERO_CODE, ONE_CODE, ONE_CODE, ONE_CODE, ONE_CODE, ONE_CODE, ONE_CODE, ONE_CODE];
    for byte in frame[..LED_COUNT * BITS_PER_LED].chunks(8) {
        assert_eq!(byte, expected_byte);
    }
    assert_eq!(frame[LED_COUNT * BITS_PER_LED..], [0; RESET_SLOTS]);
}

#[test]
fn test_update_while_busy_is_skipped() {
    let busy = BusyFlag::new();
    let mut backlight = Backlight::new(RecordingDriver::default(), &busy, LightConfig::default());

    assert_eq!(backlight.request_update(), UpdateStatus::Started);
    let in_flight = backlight.transfer().frame().clone();

    backlight.set_mode(LightMode::Off);
    assert_eq!(backlight.request_update(), UpdateStatus::Busy);
    assert_eq!(backlight.transfer().frame(), &in_flight);
    assert_eq!(backlight.transfer().driver().frames.len(), 1);

    backlight.on_transfer_complete();
    assert!(!busy.is_busy());
    assert_eq!(backlight.transfer().driver().stopped, 1);

    assert_eq!(backlight.request_update(), UpdateStatus::Started);
    let frames = &backlight.transfer().driver().frames;
    assert_eq!(frames.len(), 2);
    assert!(frames[1][..LED_COUNT * BITS_PER_LED].iter().all(|&code| code == ZERO_CODE));
}

#[test]
fn test_rejected_operations_keep_state() {
    let busy = BusyFlag::new();
    let mut backlight = Backlight::new(RecordingDriver::default(), &busy, LightConfig::default());

    assert_eq!(backlight.set_brightness(150), Err(LightError::BrightnessOutOfRange));
    assert_eq!(backlight.brightness(), 50);

    assert_eq!(backlight.set_mode_index(9), Err(LightError::UnknownMode));
    assert_eq!(backlight.mode(), LightMode::Static);

    assert_eq!(backlight.set_color(LED_COUNT, 1, 2, 3), Err(LightError::IndexOutOfRange));
    assert_eq!(backlight.set_brightness(100), Ok(()));
    assert_eq!(backlight.set_color(3, 255, 0, 0), Ok(()));
    assert_eq!(backlight.color(3), Some(RED));
}

#[test]
fn test_next_mode_cycles_through_all_modes() {
    let busy = BusyFlag::new();
    let mut backlight = Backlight::new(RecordingDriver::default(), &busy, LightConfig::default());

    let expected = [
        LightMode::Breathing,
        LightMode::Rainbow,
        LightMode::KeyReactive,
        LightMode::Wave,
        LightMode::Off,
        LightMode::Static,
    ];
    for mode in expected {
        backlight.next_mode();
        assert_eq!(backlight.mode(), mode);
    }
}

#[test]
fn test_init_restores_power_up_state() {
    let busy = BusyFlag::new();
    let config = LightConfig {
        default_brightness: 100,
        ..Default::default()
    };
    let mut backlight = Backlight::new(RecordingDriver::default(), &busy, config);
    backlight.set_mode(LightMode::Off);
    backlight.set_brightness(10).unwrap();
    assert_eq!(backlight.color(0), Some(BLACK));

    backlight.init();
    assert_eq!(backlight.mode(), LightMode::Static);
    assert_eq!(backlight.brightness(), 100);
    assert_eq!(backlight.color(0), Some(WHITE));
}

#[test]
fn test_effects_and_updates_on_tick() {
    let busy = BusyFlag::new();
    let mut backlight = Backlight::new(RecordingDriver::default(), &busy, LightConfig::default());
    backlight.set_brightness(100).unwrap();
    backlight.set_mode(LightMode::Wave);

    let mut sent = 0;
    for ms in 0..=300 {
        if backlight.process_effects(Instant::from_millis(ms)) && backlight.request_update() == UpdateStatus::Started {
            sent += 1;
            // DMA finishes well within a tick
            backlight.on_transfer_complete();
        }
    }
    // Frames at 100, 200 and 300
    assert_eq!(sent, 3);
    assert_eq!(backlight.effect().step(), 3);
    // The third frame is rendered with step 2, LED 0 at phase 6
    assert_eq!(backlight.color(0), Some(RGB8::new(0, 198, 198)));
}
