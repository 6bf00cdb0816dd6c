/// Opaque 8-bit color handed to the rendering host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);
    pub const PURPLE: Self = Self::new(0x80, 0x00, 0x80);
    pub const ORCHID: Self = Self::new(0xda, 0x70, 0xd6);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Rounds and clamps each channel into `[0, 255]`; NaN maps to 0.
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        fn channel(v: f64) -> u8 {
            if v.is_nan() {
                0
            } else {
                v.round().clamp(0., u8::MAX as f64) as u8
            }
        }
        Self::new(channel(r), channel(g), channel(b))
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
