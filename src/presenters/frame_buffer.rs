use crate::controllers::session::ports::{DirtyRegion, PixelSink};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use log::error;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// In-memory display surface shared between the render workers and whatever
/// shows the frame.
///
/// Each pixel is one packed `0x00RRGGBB` word, so row tasks can write
/// without taking a lock.
pub struct FrameBuffer {
    size: u32,
    pixels: Vec<AtomicU32>,
    dirty_rows: Mutex<BTreeSet<u32>>,
    full_refreshes: AtomicU64,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(size: u32) -> Self {
        let len = size as usize * size as usize;

        Self {
            size,
            pixels: (0..len).map(|_| AtomicU32::new(0)).collect(),
            dirty_rows: Mutex::new(BTreeSet::new()),
            full_refreshes: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        pixel
            .is_within_square(self.size)
            .then(|| pixel.y as usize * self.size as usize + pixel.x as usize)
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        self.index_of(pixel)
            .map(|index| Colour::from_rgb_u32(self.pixels[index].load(Ordering::Relaxed)))
    }

    /// Paints the whole surface black and requests a full refresh.
    pub fn clear(&self) {
        for pixel in &self.pixels {
            pixel.store(Colour::BLACK.to_rgb_u32(), Ordering::Relaxed);
        }

        self.dirty_rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.mark_dirty(DirtyRegion::Full);
    }

    /// Rows repainted since the last call, top to bottom.
    pub fn take_dirty_rows(&self) -> Vec<u32> {
        let mut rows = self
            .dirty_rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        std::mem::take(&mut *rows).into_iter().collect()
    }

    #[must_use]
    pub fn full_refreshes(&self) -> u64 {
        self.full_refreshes.load(Ordering::Acquire)
    }
}

impl PixelSink for FrameBuffer {
    fn set_pixel(&self, pixel: Point, colour: Colour) {
        match self.index_of(pixel) {
            Some(index) => self.pixels[index].store(colour.to_rgb_u32(), Ordering::Relaxed),
            None => error!(
                "Dropping write to pixel ({}, {}) outside {}x{} frame",
                pixel.x, pixel.y, self.size, self.size
            ),
        }
    }

    fn mark_dirty(&self, region: DirtyRegion) {
        match region {
            DirtyRegion::Row(y) => {
                self.dirty_rows
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(y);
            }
            DirtyRegion::Full => {
                self.full_refreshes.fetch_add(1, Ordering::AcqRel);
            }
        }
    }

    fn export_image(&self) -> PixelBuffer {
        let mut image = PixelBuffer::new(self.size);

        for (rgb, pixel) in image.buffer_mut().chunks_exact_mut(3).zip(&self.pixels) {
            let Colour { r, g, b } = Colour::from_rgb_u32(pixel.load(Ordering::Relaxed));
            rgb.copy_from_slice(&[r, g, b]);
        }

        image
    }
}
