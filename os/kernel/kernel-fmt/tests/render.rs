use kernel_fmt::{Arg, BoundedWriter, RenderedMessage, render, render_into};

#[test]
fn most_negative_i32() {
    let mut buf = [0xFFu8; 16];
    let n = render(&mut buf, b"%d", &[i32::MIN.into()]);
    assert_eq!(n, 11);
    assert_eq!(&buf[..n], b"-2147483648");
    assert_eq!(buf[n], 0);
}

#[test]
fn small_buffer_truncates_without_overrun() {
    let mut backing = [0xEEu8; 8];
    let n = render(&mut backing[..4], b"%s", &["hello".into()]);
    assert_eq!(n, 3);
    assert_eq!(&backing[..4], b"hel\0");
    assert_eq!(backing[4], 0xEE);
}

#[test]
fn zero_capacity_renders_nothing() {
    let mut backing = [0xEEu8; 2];
    let n = render(&mut backing[..0], b"anything %d", &[1i32.into()]);
    assert_eq!(n, 0);
    assert_eq!(backing, [0xEE, 0xEE]);
}

#[test]
fn truncation_can_cut_a_number() {
    let m = RenderedMessage::<6>::render(b"n=%u", &[123_456u32.into()]);
    assert_eq!(m.as_bytes(), b"n=123");
    assert!(m.is_truncated());
}

#[test]
fn render_into_appends_to_existing_content() {
    let mut buf = [0u8; 32];
    let mut out = BoundedWriter::new(&mut buf);
    out.push_bytes(b"[INFO] ");
    render_into(&mut out, b"cpu %u of %u", &[Arg::from(1u32), Arg::from(4u32)]);
    assert_eq!(out.as_bytes(), b"[INFO] cpu 1 of 4");
    assert!(!out.is_truncated());
}

#[test]
fn pointer_arguments() {
    let value = 7u32;
    let p: *const u32 = &raw const value;
    let m = RenderedMessage::<32>::render(b"%p", &[p.into()]);
    let expected = format!("0x{:X}", p.addr());
    assert_eq!(m.as_bytes(), expected.as_bytes());
}

#[test]
fn mixed_line() {
    let m = RenderedMessage::<64>::render(
        b"%s: %c%c %x/%X %%done",
        &["tag".into(), 'o'.into(), 'k'.into(), 255u32.into(), 255u32.into()],
    );
    assert_eq!(m.as_bytes(), b"tag: ok ff/FF %done");
}
