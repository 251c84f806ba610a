use pca9634_rs::registers::{
    blink_period_ms_to_code, code_to_blink_period_ms, code_to_duty_percent, duty_percent_to_code, ledout,
    ledout_shift, pack_led_mode, pwm, unpack_led_mode, BLINK_PERIOD_MAX_MS, BLINK_PERIOD_MIN_MS,
};

#[test]
fn channel_register_mapping() {
    assert_eq!(pwm(0), 0x02);
    assert_eq!(pwm(7), 0x09);
    assert_eq!(ledout(0), 0x0C);
    assert_eq!(ledout(3), 0x0C);
    assert_eq!(ledout(4), 0x0D);
    assert_eq!(ledout(7), 0x0D);
    // unchecked channels wrap instead of overflowing
    assert_eq!(pwm(255), 0x01);
    let shifts: Vec<u8> = (0..8).map(ledout_shift).collect();
    assert_eq!(shifts, [0, 2, 4, 6, 0, 2, 4, 6]);
}

#[test]
fn pack_then_unpack_every_field() {
    for channel in 0..4u8 {
        for mode in 0..4u8 {
            let packed = pack_led_mode(0b1010_1010, channel, mode);
            assert_eq!(unpack_led_mode(packed, channel), mode);
            for other in (0..4u8).filter(|&c| c != channel) {
                assert_eq!(unpack_led_mode(packed, other), 0b10);
            }
        }
    }
}

#[test]
fn pack_ignores_bits_above_the_field() {
    assert_eq!(pack_led_mode(0x00, 1, 0b111), 0b0000_1100);
}

#[test]
fn blink_period_mid_range() {
    // 1 s -> 24 steps -> code 23
    assert_eq!(blink_period_ms_to_code(1_000), 23);
    assert_eq!(code_to_blink_period_ms(23), 1_000);
    let code = blink_period_ms_to_code(2_500);
    let back = code_to_blink_period_ms(code);
    assert!((back as i32 - 2_500).abs() <= 21);
}

#[test]
fn blink_period_clamps_low_high() {
    assert_eq!(blink_period_ms_to_code(0), 0);
    assert_eq!(code_to_blink_period_ms(0), BLINK_PERIOD_MIN_MS);
    assert_eq!(blink_period_ms_to_code(60_000), 0xFF);
    assert_eq!(code_to_blink_period_ms(0xFF), BLINK_PERIOD_MAX_MS);
}

#[test]
fn duty_percent_edges() {
    assert_eq!(duty_percent_to_code(0), 0);
    assert_eq!(duty_percent_to_code(50), 128);
    assert_eq!(duty_percent_to_code(100), 255);
    assert_eq!(duty_percent_to_code(250), 255);
    assert_eq!(code_to_duty_percent(0), 0);
    assert_eq!(code_to_duty_percent(128), 50);
    assert_eq!(code_to_duty_percent(255), 100);
}
