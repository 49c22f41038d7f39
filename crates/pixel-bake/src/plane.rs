//! Channel planes of a decoded image.

use image::RgbImage;

/// One color channel of an RGB image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// The three channels in the order the generated header declares them.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Index of this channel inside an interleaved RGB pixel.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// One de-interleaved channel plane.
#[derive(Clone, Debug)]
pub struct ChannelPlane {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>, // row-major, len = width * height
}

impl ChannelPlane {
    /// Extract a single channel from an RGB image in row-major order.
    pub fn from_rgb(img: &RgbImage, channel: Channel) -> Self {
        let (width, height) = img.dimensions();
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for pixel in img.pixels() {
            data.push(pixel[channel.index()]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Number of samples in the plane (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
