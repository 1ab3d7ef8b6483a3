// src/console/tests.rs

#![cfg(test)]

use super::kd;
use super::mock::{Call, MockConsole, ModernReply};
use super::{FontConsole, FontOpParams};
use nix::errno::Errno;

#[test]
fn it_should_answer_enosys_when_nothing_is_scripted() {
    let mut con = MockConsole::new();
    let mut params = FontOpParams {
        width: 32,
        height: 32,
        count: 0,
    };
    assert_eq!(con.modern_get(&mut params, None), Err(Errno::ENOSYS));
    assert_eq!(con.raw_set(&[0u8; 32]), Err(Errno::ENOSYS));
    assert_eq!(con.reset(), Err(Errno::ENOSYS));
}

#[test]
fn it_should_replay_scripted_replies_and_fill_geometry() {
    let mut con = MockConsole::new();
    con.on_modern_get(Ok(ModernReply {
        count: 512,
        width: 10,
        height: 20,
    }));
    let mut params = FontOpParams {
        width: 32,
        height: 32,
        count: 0,
    };
    assert_eq!(con.modern_get(&mut params, None), Ok(()));
    assert_eq!(params.count, 512);
    assert_eq!(params.width, 10);
    assert_eq!(params.height, 20);

    let mut count = 77u16;
    let mut height = 0u16;
    con.on_fontx_get(Ok((256, 16)));
    assert_eq!(con.fontx_get(&mut count, &mut height, None), Ok(()));
    assert_eq!((count, height), (256, 16));
}

#[test]
fn it_should_record_calls_in_order_with_their_parameters() {
    let mut con = MockConsole::new();
    con.on_modern_set(Err(Errno::EINVAL));
    con.on_raw_set(Ok(()));

    let params = FontOpParams {
        width: 8,
        height: 16,
        count: 256,
    };
    let data = vec![0xAAu8; 64];
    let _ = con.modern_set(&params, &data);
    let _ = con.raw_set(&data);

    assert_eq!(
        con.calls(),
        &[
            Call::ModernSet {
                count: 256,
                width: 8,
                height: 16,
                data: data.clone(),
            },
            Call::RawSet { data },
        ]
    );
}

#[test]
fn it_should_expose_the_kd_request_numbers() {
    // Values from linux/kd.h; the legacy pair sits below the extended pair,
    // the modern op last.
    assert_eq!(kd::GIO_FONT, 0x4B60);
    assert_eq!(kd::PIO_FONT, 0x4B61);
    assert_eq!(kd::GIO_FONTX, 0x4B6B);
    assert_eq!(kd::PIO_FONTX, 0x4B6C);
    assert_eq!(kd::PIO_FONTRESET, 0x4B6D);
    assert_eq!(kd::KDFONTOP, 0x4B72);
    assert_eq!(kd::KdFontFlags::DONT_RECALC.bits(), 1);
}
