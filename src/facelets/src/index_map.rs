use crate::{CUBIE_COUNT, FACELET_COUNT, FACELETS_PER_FACE, Face};

/// Cubie positions supplying each facelet, face by face in raster order.
/// A cubie appears once for every face it touches.
const POSITIONS: [u8; FACELET_COUNT] = [
    0, 9, 18, 1, 10, 19, 2, 11, 20, // U
    0, 1, 2, 3, 4, 5, 6, 7, 8, // F
    2, 11, 20, 5, 14, 23, 8, 17, 26, // R
    20, 19, 18, 23, 22, 21, 26, 25, 24, // B
    18, 9, 0, 21, 12, 3, 24, 15, 6, // L
    8, 17, 26, 7, 16, 25, 6, 15, 24, // D
];

static CUBE3: FaceletIndexMap = FaceletIndexMap::new(&POSITIONS);

/// Where the value of one facelet comes from: a cubie position and the
/// orientation slot (face group) read from that cubie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceletSource {
    pub position: u8,
    pub face: Face,
}

impl FaceletSource {
    pub fn position(self) -> usize {
        usize::from(self.position)
    }
}

/// The geometric correspondence between facelet slots and cubie orientation
/// slots.
#[derive(Debug)]
pub struct FaceletIndexMap {
    sources: [FaceletSource; FACELET_COUNT],
}

impl FaceletIndexMap {
    /// Validates `positions` while building the table. Used to initialise a
    /// `static`, so a bad table fails to compile.
    const fn new(positions: &[u8; FACELET_COUNT]) -> Self {
        let mut sources = [FaceletSource {
            position: 0,
            face: Face::U,
        }; FACELET_COUNT];

        let mut slot = 0;
        while slot < FACELET_COUNT {
            let face = Face::ALL[slot / FACELETS_PER_FACE];
            let position = positions[slot];

            assert!(
                (position as usize) < CUBIE_COUNT,
                "facelet maps to a cubie position out of range"
            );
            assert!(
                face.contains_position(position as usize),
                "facelet maps to a cubie outside of its face layer"
            );

            let mut other = slot - slot % FACELETS_PER_FACE;
            while other < slot {
                assert!(
                    positions[other] != position,
                    "cubie appears twice on the same face"
                );
                other += 1;
            }

            sources[slot] = FaceletSource { position, face };
            slot += 1;
        }

        FaceletIndexMap { sources }
    }

    /// The table for the standard 3x3x3 layout.
    pub fn cube3() -> &'static FaceletIndexMap {
        &CUBE3
    }

    pub fn get(&self, slot: usize) -> Option<FaceletSource> {
        self.sources.get(slot).copied()
    }

    /// The facelet slot that `face` of the cubie at `position` supplies, if
    /// that cubie is part of the face.
    pub fn slot_of(&self, position: usize, face: Face) -> Option<usize> {
        let start = face.index() * FACELETS_PER_FACE;

        (start..start + FACELETS_PER_FACE).find(|&slot| self.sources[slot].position() == position)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = FaceletSource> + '_ {
        self.sources.iter().copied()
    }
}
