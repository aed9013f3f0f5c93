use crate::screen::Position;
use crate::{CRTC_DATA, CRTC_INDEX, PortIo};

/// CRT controller register holding the high byte of the cursor location.
const CURSOR_LOCATION_HIGH: u8 = 14;
/// CRT controller register holding the low byte of the cursor location.
const CURSOR_LOCATION_LOW: u8 = 15;

/// The blinking hardware cursor of a VGA text screen.
#[derive(Debug, Clone)]
pub struct VgaCursor<P> {
    ports: P,
    width: usize,
}

impl<P: PortIo> VgaCursor<P> {
    pub const fn new(ports: P, width: usize) -> Self {
        Self { ports, width }
    }

    /// Move the cursor to `position`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn move_to(&mut self, position: Position) {
        let location = position.index(self.width) as u16;
        let [low, high] = location.to_le_bytes();
        self.ports.outb(CRTC_INDEX, CURSOR_LOCATION_HIGH);
        self.ports.outb(CRTC_DATA, high);
        self.ports.outb(CRTC_INDEX, CURSOR_LOCATION_LOW);
        self.ports.outb(CRTC_DATA, low);
    }
}
