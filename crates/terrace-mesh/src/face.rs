use terrace_geom::Vec3;

/// One of the six faces of a tile's cuboid.
///
/// North is +Z, East is +X, South is -Z, West is -X in world space, which is
/// `(0,+1)`, `(+1,0)`, `(0,-1)`, `(-1,0)` in grid coordinates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Top = 0,
    Bottom = 1,
    North = 2,
    East = 3,
    South = 4,
    West = 5,
}

impl Face {
    /// All faces in emission order.
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::North,
        Face::East,
        Face::South,
        Face::West,
    ];

    pub const SIDES: [Face; 4] = [Face::North, Face::East, Face::South, Face::West];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `Face` value.
    #[inline]
    pub fn from_index(i: usize) -> Option<Face> {
        Face::ALL.get(i).copied()
    }

    #[inline]
    pub fn is_side(self) -> bool {
        !matches!(self, Face::Top | Face::Bottom)
    }

    /// Grid step `(dx, dy)` toward the neighbor across this face; `(0,0)` for top and bottom.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Face::Top | Face::Bottom => (0, 0),
            Face::North => (0, 1),
            Face::East => (1, 0),
            Face::South => (0, -1),
            Face::West => (-1, 0),
        }
    }

    /// Returns the outward unit normal for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        match self {
            Face::Top => Vec3::UP,
            Face::Bottom => Vec3::DOWN,
            Face::North => Vec3::new(0.0, 0.0, 1.0),
            Face::East => Vec3::new(1.0, 0.0, 0.0),
            Face::South => Vec3::new(0.0, 0.0, -1.0),
            Face::West => Vec3::new(-1.0, 0.0, 0.0),
        }
    }
}

/// Bitmask over the six faces, bit `i` set for `Face::from_index(i)`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct FaceSet(u8);

impl FaceSet {
    pub const EMPTY: FaceSet = FaceSet(0);
    /// Top and bottom, which every tile emits.
    pub const CAPS: FaceSet = FaceSet(0b00_0011);
    pub const SIDES: FaceSet = FaceSet(0b11_1100);
    pub const ALL: FaceSet = FaceSet(0b11_1111);

    #[inline]
    pub fn insert(&mut self, face: Face) {
        self.0 |= 1 << face.index();
    }

    #[inline]
    pub fn contains(self, face: Face) -> bool {
        (self.0 >> face.index()) & 1 == 1
    }

    #[inline]
    pub fn union(self, other: FaceSet) -> FaceSet {
        FaceSet(self.0 | other.0)
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Faces in emission order (top, bottom, north, east, south, west).
    pub fn iter(self) -> impl Iterator<Item = Face> {
        Face::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}
