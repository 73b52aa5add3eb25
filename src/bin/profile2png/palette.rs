// palette.rs - Cell codes to chart colours

use image::{Rgb, RgbImage};

use landscape_engine::Encoder;
use landscape_engine::render::{CAPACITY, GROUND, WATER};

const SKY_RGB: Rgb<u8> = Rgb([255, 255, 255]);
const GROUND_RGB: Rgb<u8> = Rgb([0x4f, 0x25, 0x09]);
const WATER_RGB: Rgb<u8> = Rgb([0x41, 0x69, 0xe1]);
const CAPACITY_RGB: Rgb<u8> = Rgb([0xc6, 0xd4, 0xf7]);

#[inline]
fn colour(code: u8) -> Rgb<u8> {
    match code {
        GROUND => GROUND_RGB,
        WATER => WATER_RGB,
        CAPACITY => CAPACITY_RGB,
        _ => SKY_RGB,
    }
}

pub fn to_image(encoder: &Encoder) -> RgbImage {
    RgbImage::from_fn(encoder.width(), encoder.height(), |x, y| colour(encoder.cell(x, y)))
}
